//! Skill extraction against the curated vocabularies

use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::vocab;
use aho_corasick::AhoCorasick;
use log::warn;
use std::collections::{BTreeSet, HashSet};

/// Extracts recognized skills from free text.
///
/// Two matching passes are combined: a whole-vocabulary-phrase substring scan
/// (required for multi-word skills like "machine learning") and a per-token
/// exact lookup (catches short forms a phrase scan can miss). Phrase matching
/// does not guard against a vocabulary entry occurring inside an unrelated
/// longer word; that imprecision is accepted.
pub struct SkillExtractor {
    normalizer: TextNormalizer,
    vocabulary: Vec<String>,
    vocabulary_set: HashSet<String>,
    phrase_matcher: Option<AhoCorasick>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        let vocabulary = vocab::skill_vocabulary();
        let vocabulary_set: HashSet<String> = vocabulary.iter().cloned().collect();

        let phrase_matcher = match AhoCorasick::new(&vocabulary) {
            Ok(matcher) => Some(matcher),
            Err(e) => {
                warn!("failed to build skill phrase matcher: {}", e);
                None
            }
        };

        Self {
            normalizer: TextNormalizer::new(),
            vocabulary,
            vocabulary_set,
            phrase_matcher,
        }
    }

    /// Extract the skill set of a document: title-cased, deduplicated,
    /// sorted. Empty input or an internal fault yields an empty set, never
    /// an error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let normalized = self.normalizer.normalize(text);
        let tokens = self.normalizer.tokenize(&normalized);

        let mut found: BTreeSet<String> = BTreeSet::new();

        match &self.phrase_matcher {
            Some(matcher) => {
                for m in matcher.find_iter(&normalized) {
                    found.insert(title_case(&self.vocabulary[m.pattern().as_usize()]));
                }
            }
            None => warn!("phrase matcher unavailable, skill extraction degraded to token matching"),
        }

        for token in &tokens {
            if self.vocabulary_set.contains(token.as_str()) {
                found.insert(title_case(token));
            }
        }

        found.into_iter().collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Title-case a phrase: uppercase every letter that follows a non-letter,
/// lowercase the rest ("machine learning" -> "Machine Learning", "aws" ->
/// "Aws").
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut prev_was_alpha = false;

    for c in phrase.chars() {
        if c.is_alphabetic() {
            if prev_was_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_was_alpha = true;
        } else {
            out.push(c);
            prev_was_alpha = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_input() {
        let extractor = SkillExtractor::new();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("   \n ").is_empty());
    }

    #[test]
    fn test_extract_single_and_multi_word_skills() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract(
            "I am proficient in Python, JavaScript, and machine learning using TensorFlow.",
        );

        assert!(skills.contains(&"Python".to_string()));
        assert!(skills.contains(&"Javascript".to_string()));
        assert!(skills.contains(&"Machine Learning".to_string()));
        assert!(skills.contains(&"Tensorflow".to_string()));
    }

    #[test]
    fn test_extract_has_no_duplicates_and_is_sorted() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Python python PYTHON docker Docker and leadership");

        let unique: std::collections::HashSet<&String> = skills.iter().collect();
        assert_eq!(unique.len(), skills.len());

        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn test_extract_soft_skills() {
        let extractor = SkillExtractor::new();
        let skills = extractor.extract("Strong communication and teamwork, experienced in project management.");

        assert!(skills.contains(&"Communication".to_string()));
        assert!(skills.contains(&"Teamwork".to_string()));
        assert!(skills.contains(&"Project Management".to_string()));
    }

    #[test]
    fn test_extract_unknown_terms_yield_nothing() {
        let extractor = SkillExtractor::new();
        assert!(extractor.extract("gardening and birdwatching").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("python"), "Python");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("scikit-learn"), "Scikit-Learn");
    }
}
