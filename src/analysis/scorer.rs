//! Hybrid similarity scoring between resume and job description
//!
//! The match score blends two signals: a corpus-statistical TF-IDF cosine
//! similarity over the two-document corpus, and a Jaccard overlap of the
//! curated skill sets. Skill overlap carries the larger weight; curated
//! vocabulary is the stronger signal for resume/job matching than raw
//! lexical similarity.

use crate::analysis::normalizer::{round1, TextNormalizer};
use crate::analysis::skills::SkillExtractor;
use crate::config::{ProcessingConfig, ScoringConfig};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-term breakdown of the statistical similarity.
///
/// The three lists are disjoint: terms whose weight clears the significance
/// threshold in both documents, in the resume only, or in the job only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityDetails {
    pub overall_score: f32,
    pub shared_terms: Vec<String>,
    pub resume_unique_terms: Vec<String>,
    pub job_unique_terms: Vec<String>,
}

/// Two-document TF-IDF vectorizer over unigrams and bigrams.
///
/// Term frequency is sublinear (1 + ln tf), document frequency is smoothed
/// (ln((1+n)/(1+df)) + 1), rows are L2-normalized and the vocabulary is
/// capped to the most frequent terms so pathological inputs stay bounded.
struct TfidfVectorizer {
    max_features: usize,
    stop_words: HashSet<String>,
}

struct TfidfMatrix {
    /// Sorted vocabulary surviving the feature cap.
    terms: Vec<String>,
    /// One L2-normalized weight row per input document.
    weights: Vec<Vec<f32>>,
}

impl TfidfVectorizer {
    fn new(max_features: usize, stop_words: HashSet<String>) -> Self {
        Self {
            max_features,
            stop_words,
        }
    }

    fn fit_transform(&self, documents: &[&str]) -> TfidfMatrix {
        let doc_counts: Vec<HashMap<String, usize>> =
            documents.iter().map(|d| self.count_terms(d)).collect();

        // Feature selection: keep the most frequent terms corpus-wide,
        // breaking ties alphabetically for determinism.
        let mut corpus_counts: HashMap<&String, usize> = HashMap::new();
        for counts in &doc_counts {
            for (term, count) in counts {
                *corpus_counts.entry(term).or_insert(0) += count;
            }
        }
        let mut ranked: Vec<(&String, usize)> = corpus_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut terms: Vec<String> = ranked.into_iter().map(|(t, _)| t.clone()).collect();
        terms.sort();

        let n = documents.len() as f32;
        let doc_freq: Vec<f32> = terms
            .iter()
            .map(|t| doc_counts.iter().filter(|c| c.contains_key(t)).count() as f32)
            .collect();

        let weights = doc_counts
            .iter()
            .map(|counts| {
                let mut row: Vec<f32> = terms
                    .iter()
                    .zip(&doc_freq)
                    .map(|(term, &df)| match counts.get(term) {
                        Some(&count) if count > 0 => {
                            let tf = 1.0 + (count as f32).ln();
                            let idf = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
                            tf * idf
                        }
                        _ => 0.0,
                    })
                    .collect();

                let norm = row.iter().map(|w| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for w in &mut row {
                        *w /= norm;
                    }
                }
                row
            })
            .collect();

        TfidfMatrix { terms, weights }
    }

    /// Unigram + bigram counts over stopword-filtered tokens of at least two
    /// word characters. Bigrams are formed after stopword removal.
    fn count_terms(&self, text: &str) -> HashMap<String, usize> {
        let tokens: Vec<String> = split_word_runs(text)
            .filter(|t| t.chars().count() > 1)
            .filter(|t| !self.stop_words.contains(t.as_str()))
            .collect();

        let mut counts = HashMap::new();
        for token in &tokens {
            *counts.entry(token.clone()).or_insert(0) += 1;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
        }
        counts
    }
}

fn split_word_runs(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Computes the hybrid match score and its breakdowns.
pub struct SimilarityScorer {
    normalizer: TextNormalizer,
    extractor: SkillExtractor,
    stat_weight: f32,
    skill_weight: f32,
    skill_boost: f32,
    skill_boost_min_overlap: usize,
    max_features: usize,
    term_threshold: f32,
    top_terms: usize,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self::with_config(&ScoringConfig::default(), &ProcessingConfig::default())
    }

    pub fn with_config(scoring: &ScoringConfig, processing: &ProcessingConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            extractor: SkillExtractor::new(),
            stat_weight: scoring.stat_weight,
            skill_weight: scoring.skill_weight,
            skill_boost: scoring.skill_boost,
            skill_boost_min_overlap: scoring.skill_boost_min_overlap,
            max_features: processing.max_features,
            term_threshold: processing.significant_term_threshold,
            top_terms: processing.top_terms,
        }
    }

    /// Hybrid match score in [0, 100], rounded to one decimal place.
    /// Either input empty yields 0.0, never a fault.
    pub fn score(&self, resume_text: &str, job_text: &str) -> f32 {
        if resume_text.trim().is_empty() || job_text.trim().is_empty() {
            return 0.0;
        }

        let stat_score = self.statistical_similarity(resume_text, job_text);
        let skill_score = self.skill_similarity(resume_text, job_text);

        let hybrid = stat_score * self.stat_weight + skill_score * self.skill_weight;
        round1(hybrid.clamp(0.0, 100.0))
    }

    /// TF-IDF cosine similarity scaled to [0, 100]. Falls back to Jaccard
    /// over token sets when the two-document corpus is too degenerate to
    /// vectorize (fewer than 2 surviving terms).
    pub fn statistical_similarity(&self, resume_text: &str, job_text: &str) -> f32 {
        let vectorizer = self.vectorizer();
        let matrix = vectorizer.fit_transform(&[resume_text, job_text]);

        if matrix.terms.len() < 2 {
            return self.jaccard_similarity(resume_text, job_text);
        }

        let similarity = cosine(&matrix.weights[0], &matrix.weights[1]).clamp(0.0, 1.0);
        similarity * 100.0
    }

    /// Jaccard similarity over stopword-filtered token sets, in [0, 100].
    pub fn jaccard_similarity(&self, resume_text: &str, job_text: &str) -> f32 {
        let resume_tokens = self.filtered_token_set(resume_text);
        let job_tokens = self.filtered_token_set(job_text);

        let union = resume_tokens.union(&job_tokens).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = resume_tokens.intersection(&job_tokens).count();

        round1(intersection as f32 / union as f32 * 100.0)
    }

    /// Skill-overlap similarity in [0, 100]. No partial credit when either
    /// document has no detected skills. Overlaps of `skill_boost_min_overlap`
    /// or more skills are boosted; three or more matching skills is a
    /// materially stronger signal than the raw ratio implies.
    pub fn skill_similarity(&self, resume_text: &str, job_text: &str) -> f32 {
        let resume_skills: HashSet<String> = self.extractor.extract(resume_text).into_iter().collect();
        let job_skills: HashSet<String> = self.extractor.extract(job_text).into_iter().collect();

        if resume_skills.is_empty() || job_skills.is_empty() {
            return 0.0;
        }

        let intersection = resume_skills.intersection(&job_skills).count();
        let union = resume_skills.union(&job_skills).count();
        let mut similarity = intersection as f32 / union as f32;

        if intersection >= self.skill_boost_min_overlap {
            similarity = (similarity * self.skill_boost).min(1.0);
        }

        similarity * 100.0
    }

    /// Per-term breakdown: significant terms shared by both documents,
    /// resume-only and job-only, each sorted by weight descending and capped
    /// to the configured top-N.
    pub fn details(&self, resume_text: &str, job_text: &str) -> SimilarityDetails {
        if resume_text.trim().is_empty() || job_text.trim().is_empty() {
            return SimilarityDetails::default();
        }

        let vectorizer = self.vectorizer();
        let matrix = vectorizer.fit_transform(&[resume_text, job_text]);

        let mut shared: Vec<(String, f32)> = Vec::new();
        let mut resume_unique: Vec<(String, f32)> = Vec::new();
        let mut job_unique: Vec<(String, f32)> = Vec::new();

        for (i, term) in matrix.terms.iter().enumerate() {
            let resume_weight = matrix.weights[0][i];
            let job_weight = matrix.weights[1][i];

            if resume_weight > self.term_threshold && job_weight > self.term_threshold {
                shared.push((term.clone(), (resume_weight + job_weight) / 2.0));
            } else if resume_weight > self.term_threshold {
                resume_unique.push((term.clone(), resume_weight));
            } else if job_weight > self.term_threshold {
                job_unique.push((term.clone(), job_weight));
            }
        }

        SimilarityDetails {
            overall_score: self.score(resume_text, job_text),
            shared_terms: top_terms(shared, self.top_terms),
            resume_unique_terms: top_terms(resume_unique, self.top_terms),
            job_unique_terms: top_terms(job_unique, self.top_terms),
        }
    }

    /// Fraction of the supplied keywords found in the resume, as a
    /// percentage. A keyword counts when it appears as a stopword-filtered
    /// token or as a raw substring. Empty keyword list yields 0.0.
    pub fn keyword_match_score(&self, resume_text: &str, keywords: &[String]) -> f32 {
        if resume_text.trim().is_empty() || keywords.is_empty() {
            return 0.0;
        }

        let resume_lower = resume_text.to_lowercase();
        let token_set = self.filtered_token_set(resume_text);

        let matched = keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| token_set.contains(k.as_str()) || resume_lower.contains(k.as_str()))
            .count();

        round1(matched as f32 / keywords.len() as f32 * 100.0)
    }

    fn vectorizer(&self) -> TfidfVectorizer {
        // Fresh vectorizer state per request; nothing carries across calls.
        TfidfVectorizer::new(self.max_features, crate::analysis::vocab::stopword_set())
    }

    fn filtered_token_set(&self, text: &str) -> HashSet<String> {
        let tokens = self.normalizer.tokenize(&text.to_lowercase());
        self.normalizer
            .remove_stopwords(&tokens)
            .into_iter()
            .collect()
    }
}

/// Sort term/weight pairs by weight descending (term ascending on ties) and
/// keep the top N terms.
fn top_terms(mut scored: Vec<(String, f32)>, limit: usize) -> Vec<String> {
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(limit);
    scored.into_iter().map(|(term, _)| term).collect()
}
