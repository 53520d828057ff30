//! Text normalization, tokenization and text statistics

use crate::analysis::vocab;
use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Basic counts over a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub sentence_count: usize,
    pub word_count: usize,
    pub unique_word_count: usize,
    pub filtered_word_count: usize,
    pub avg_words_per_sentence: f32,
}

/// Flesch Reading Ease summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f32,
    pub sentence_count: usize,
    pub word_count: usize,
    pub avg_words_per_sentence: f32,
}

/// One interchangeable implementation of the word-tokenize capability.
///
/// Tokenizers are probed in order at call time; the first available one that
/// succeeds wins. The chain degrades gracefully when a preferred
/// implementation cannot run, instead of failing the whole analysis.
trait WordTokenizer: Send + Sync {
    fn name(&self) -> &'static str;
    fn is_available(&self) -> bool;
    fn tokenize(&self, text: &str) -> Option<Vec<String>>;
}

/// Preferred tokenizer: Unicode word segmentation.
struct UnicodeWordTokenizer;

impl WordTokenizer for UnicodeWordTokenizer {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        Some(text.unicode_words().map(|w| w.to_lowercase()).collect())
    }
}

/// Simplified tokenizer: runs of word characters, dropping single-character
/// and pure-digit tokens.
struct RegexWordTokenizer {
    word_regex: Option<Regex>,
}

impl RegexWordTokenizer {
    fn new() -> Self {
        Self {
            word_regex: build_regex(r"\w+"),
        }
    }
}

impl WordTokenizer for RegexWordTokenizer {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn is_available(&self) -> bool {
        self.word_regex.is_some()
    }

    fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        let regex = self.word_regex.as_ref()?;
        let lowered = text.to_lowercase();
        Some(
            regex
                .find_iter(&lowered)
                .map(|m| m.as_str().to_string())
                .filter(|t| t.chars().count() > 1)
                .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
                .collect(),
        )
    }
}

/// Last-resort tokenizer: whitespace split with surrounding punctuation
/// trimmed from each token.
struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn tokenize(&self, text: &str) -> Option<Vec<String>> {
        Some(
            text.split_whitespace()
                .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }
}

fn build_regex(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            warn!("failed to compile pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Normalizes raw document text and derives token/statistics views of it.
///
/// Construction compiles the cleaning patterns once; the struct is then
/// read-only and safe to share across threads.
pub struct TextNormalizer {
    url_regex: Option<Regex>,
    email_regex: Option<Regex>,
    phone_regex: Option<Regex>,
    symbol_regex: Option<Regex>,
    stop_words: HashSet<String>,
    tokenizers: Vec<Box<dyn WordTokenizer>>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            // \S* rather than \S+ so a bare trailing "http" is removed too
            url_regex: build_regex(r"https?\S*|www\S*"),
            email_regex: build_regex(r"\S+@\S+"),
            phone_regex: build_regex(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b"),
            symbol_regex: build_regex(r"[^\w\s]"),
            stop_words: vocab::stopword_set(),
            tokenizers: vec![
                Box::new(UnicodeWordTokenizer),
                Box::new(RegexWordTokenizer::new()),
                Box::new(WhitespaceTokenizer),
            ],
        }
    }

    /// Lowercase the text, strip URLs, emails, phone numbers and punctuation,
    /// and collapse whitespace.
    ///
    /// URL/email/phone removal must run before punctuation stripping, which
    /// would otherwise destroy the patterns they match on. A cleaning fault
    /// returns the input unchanged with a warning; it never fails.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return String::new();
        }

        let lowered = raw.to_lowercase();
        match self.clean(&lowered) {
            Some(cleaned) => cleaned,
            None => {
                warn!("text cleaning unavailable, returning input unchanged");
                raw.to_string()
            }
        }
    }

    fn clean(&self, lowered: &str) -> Option<String> {
        let text = self.url_regex.as_ref()?.replace_all(lowered, "");
        let text = self.email_regex.as_ref()?.replace_all(&text, "");
        let text = self.phone_regex.as_ref()?.replace_all(&text, "");
        let text = self.symbol_regex.as_ref()?.replace_all(&text, " ");
        Some(text.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    /// Tokenize into lowercase words via the first available tokenizer in
    /// the fallback chain.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        for tokenizer in &self.tokenizers {
            if !tokenizer.is_available() {
                warn!("{} tokenizer unavailable, trying next", tokenizer.name());
                continue;
            }
            if let Some(tokens) = tokenizer.tokenize(text) {
                return tokens;
            }
            warn!("{} tokenizer failed, trying next", tokenizer.name());
        }

        Vec::new()
    }

    /// Split into trimmed, non-empty sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Remove stopwords from a token sequence, case-insensitively.
    pub fn remove_stopwords(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| !self.stop_words.contains(t.to_lowercase().as_str()))
            .cloned()
            .collect()
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stop_words.contains(token.to_lowercase().as_str())
    }

    /// Sentence/word counts over the text. Zero sentences yields an average
    /// of 0.0 rather than a division fault.
    pub fn text_statistics(&self, text: &str) -> TextStatistics {
        let sentences = self.split_sentences(text);
        let words = self.tokenize(text);
        let unique: HashSet<&String> = words.iter().collect();
        let filtered = self.remove_stopwords(&words);

        let avg_words_per_sentence = if sentences.is_empty() {
            0.0
        } else {
            words.len() as f32 / sentences.len() as f32
        };

        TextStatistics {
            sentence_count: sentences.len(),
            word_count: words.len(),
            unique_word_count: unique.len(),
            filtered_word_count: filtered.len(),
            avg_words_per_sentence,
        }
    }

    /// Flesch Reading Ease, clamped to [0, 100]; 0 when the text has no
    /// sentences or no words.
    pub fn readability(&self, text: &str) -> ReadabilityReport {
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();
        let words: Vec<&str> = text.split_whitespace().collect();
        let word_count = words.len();

        if sentence_count == 0 || word_count == 0 {
            return ReadabilityReport {
                flesch_reading_ease: 0.0,
                sentence_count,
                word_count,
                avg_words_per_sentence: 0.0,
            };
        }

        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();
        let words_per_sentence = word_count as f32 / sentence_count as f32;
        let syllables_per_word = syllable_count as f32 / word_count as f32;

        let flesch = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

        ReadabilityReport {
            flesch_reading_ease: round1(flesch.clamp(0.0, 100.0)),
            sentence_count,
            word_count,
            avg_words_per_sentence: round1(words_per_sentence),
        }
    }
}

/// Round to one decimal place.
pub(crate) fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Count syllables as vowel-group transitions: a leading vowel plus every
/// vowel preceded by a non-vowel, minus one for a trailing "e", floored at 1.
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}
