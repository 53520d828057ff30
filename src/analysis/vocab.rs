//! Curated skill vocabularies and stopword sets
//!
//! All data here is process-wide constant: loaded once by the components that
//! need it and never mutated afterwards, so shared references are safe under
//! concurrent reads.

use std::collections::HashSet;

/// Recognized technical skill phrases, lowercase canonical form.
/// Multi-word entries are matched as substrings of normalized text.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift", "kotlin",
    // Databases and data stores
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
    // Web technologies
    "html", "css", "react", "angular", "vue", "node.js", "django", "flask",
    // Cloud and infrastructure
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git",
    // AI/ML
    "machine learning", "deep learning", "nlp", "computer vision", "tensorflow",
    "pytorch", "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn",
    // Platforms and architecture
    "linux", "windows", "macos", "api", "rest", "graphql", "microservices",
];

/// Recognized soft skill phrases, lowercase canonical form.
pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "analytical",
    "project management", "time management", "creativity", "adaptability",
    "critical thinking", "collaboration", "mentoring", "presentation",
];

/// Common English stopwords used by statistics, keyword matching and the
/// TF-IDF vectorizer.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it",
    "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "that'll", "these", "those",
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and",
    "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during",
    "before", "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both",
    "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "don't", "should", "should've", "now", "d", "ll",
    "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
    "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't",
    "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn",
    "mustn't", "needn", "needn't", "shan", "shan't", "shouldn", "shouldn't",
    "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Extension to the stopword list for resume/job text, where modal verbs
/// carry no signal.
pub const CUSTOM_STOPWORDS: &[&str] = &[
    "also", "would", "could", "should", "may", "might", "must",
];

/// Related-skill lookup used when suggesting alternatives for a missing
/// skill. Keys and values are lowercase.
pub const SKILL_ALTERNATIVES: &[(&str, &[&str])] = &[
    ("python", &["java", "r", "scala", "julia"]),
    ("java", &["kotlin", "scala", "c#", "python"]),
    ("javascript", &["typescript", "coffeescript", "dart"]),
    ("sql", &["nosql", "mongodb", "postgresql", "mysql"]),
    ("aws", &["azure", "gcp", "heroku", "digitalocean"]),
    ("docker", &["kubernetes", "podman", "containerd"]),
    ("react", &["angular", "vue", "svelte", "ember"]),
    ("machine learning", &["data science", "ai", "deep learning", "statistics"]),
    ("tensorflow", &["pytorch", "keras", "scikit-learn", "xgboost"]),
    ("git", &["svn", "mercurial", "perforce"]),
];

/// Named technical skill categories for bucketed display.
pub const TECHNICAL_CATEGORIES: &[(&str, &[&str])] = &[
    ("Programming Languages", &[
        "python", "java", "javascript", "c++", "c#", "ruby", "php", "swift",
        "kotlin", "r", "scala",
    ]),
    ("Databases", &[
        "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
        "oracle",
    ]),
    ("Web Technologies", &[
        "html", "css", "react", "angular", "vue", "node.js", "django", "flask",
        "spring",
    ]),
    ("Cloud Platforms", &["aws", "azure", "gcp", "heroku", "digitalocean"]),
    ("DevOps & Tools", &["docker", "kubernetes", "jenkins", "git", "linux", "bash"]),
    ("AI/ML", &[
        "machine learning", "deep learning", "nlp", "computer vision",
        "tensorflow", "pytorch", "scikit-learn",
    ]),
];

/// Soft skills recognized by the categorizer (subset of [`SOFT_SKILLS`]).
pub const CATEGORIZED_SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "analytical",
    "project management",
];

/// Verbs indicating quantifiable achievements in resume prose.
pub const ACHIEVEMENT_VERBS: &[&str] = &[
    "increased", "improved", "reduced", "achieved", "delivered", "managed", "led",
];

/// Strong action verbs expected in accomplishment bullets.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "created", "implemented", "designed", "managed", "led", "optimized",
];

/// Certification programs keyed by the skill they address.
pub const CERTIFICATION_MAP: &[(&str, &[&str])] = &[
    ("python", &["Python Institute PCAP", "Google IT Automation with Python"]),
    ("aws", &["AWS Certified Solutions Architect", "AWS Certified Developer"]),
    ("azure", &["Microsoft Azure Fundamentals", "Microsoft Azure Administrator"]),
    ("machine learning", &["Google Machine Learning Crash Course", "Coursera ML Specialization"]),
    ("docker", &["Docker Certified Associate", "Kubernetes Certification"]),
    ("sql", &["Oracle SQL Certification", "Microsoft SQL Server Certification"]),
];

/// Full skill vocabulary (technical + soft) as owned lowercase strings.
pub fn skill_vocabulary() -> Vec<String> {
    TECHNICAL_SKILLS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Stopword set including the custom extension.
pub fn stopword_set() -> HashSet<String> {
    ENGLISH_STOPWORDS
        .iter()
        .chain(CUSTOM_STOPWORDS.iter())
        .map(|s| s.to_string())
        .collect()
}
