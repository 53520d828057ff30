//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the TF-IDF statistical similarity.
    pub stat_weight: f32,
    /// Weight of the curated skill-overlap similarity.
    pub skill_weight: f32,
    /// Multiplier applied when enough skills overlap.
    pub skill_boost: f32,
    /// Minimum overlapping skills before the boost applies.
    pub skill_boost_min_overlap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Vocabulary cap for the TF-IDF vectorizer.
    pub max_features: usize,
    /// Minimum per-document weight for a term to count as significant.
    pub significant_term_threshold: f32,
    /// Cap on each significant-term list in the similarity breakdown.
    pub top_terms: usize,
    /// Cap on the generated suggestion list.
    pub max_suggestions: usize,
    /// Input texts are truncated to this many characters at the boundary.
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Text,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            processing: ProcessingConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            stat_weight: 0.4,
            skill_weight: 0.6,
            skill_boost: 1.2,
            skill_boost_min_overlap: 3,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_features: 1000,
            significant_term_threshold: 0.1,
            top_terms: 10,
            max_suggestions: 10,
            max_input_chars: 100_000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }
}
