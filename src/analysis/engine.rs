//! Match analysis engine coordinating the full pipeline
//!
//! Pipeline order: normalize -> extract skills (both documents) -> score ->
//! gaps (prioritized by job text) -> suggestions. Each request builds its
//! own working data; only the curated vocabularies are shared, and those are
//! read-only.

use crate::analysis::gaps::{CategorizedSkills, SkillGapAnalyzer, SkillOverlap};
use crate::analysis::normalizer::{ReadabilityReport, TextNormalizer, TextStatistics};
use crate::analysis::scorer::{SimilarityDetails, SimilarityScorer};
use crate::analysis::skills::SkillExtractor;
use crate::analysis::suggest::{
    actionable_tips, certification_suggestions, interpret_score, SuggestionGenerator,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Complete result of one resume/job analysis. Every field is a plain
/// string or number, directly embeddable in a text report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    /// Hybrid match score in [0, 100].
    pub score: f32,
    pub interpretation: String,

    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,
    pub categorized_resume_skills: CategorizedSkills,

    /// Missing skills, most frequent in the job text first.
    pub skill_gaps: Vec<String>,
    pub gap_alternatives: Vec<GapAlternatives>,
    pub overlap: SkillOverlap,

    pub similarity: SimilarityDetails,
    pub resume_statistics: TextStatistics,
    pub resume_readability: ReadabilityReport,

    pub suggestions: Vec<String>,
    pub tips: Vec<String>,
    pub certifications: Vec<String>,

    pub processing_time_ms: u64,
}

/// Related skills offered for one missing skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAlternatives {
    pub skill: String,
    pub alternatives: Vec<String>,
}

/// Builds the analysis components once and runs the pipeline per request.
pub struct MatchEngine {
    normalizer: TextNormalizer,
    extractor: SkillExtractor,
    scorer: SimilarityScorer,
    gap_analyzer: SkillGapAnalyzer,
    suggester: SuggestionGenerator,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            extractor: SkillExtractor::new(),
            scorer: SimilarityScorer::new(),
            gap_analyzer: SkillGapAnalyzer::new(),
            suggester: SuggestionGenerator::new(),
        }
    }

    pub fn with_config(config: &crate::config::Config) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            extractor: SkillExtractor::new(),
            scorer: SimilarityScorer::with_config(&config.scoring, &config.processing),
            gap_analyzer: SkillGapAnalyzer::new(),
            suggester: SuggestionGenerator::with_limit(config.processing.max_suggestions),
        }
    }

    /// Run the full analysis. Degenerate input (either text empty) produces
    /// a zero-score analysis with empty collections, never an error.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> MatchAnalysis {
        let started = Instant::now();

        let cleaned_resume = self.normalizer.normalize(resume_text);
        let cleaned_job = self.normalizer.normalize(job_text);

        let resume_skills = self.extractor.extract(&cleaned_resume);
        let job_skills = self.extractor.extract(&cleaned_job);

        let score = self.scorer.score(&cleaned_resume, &cleaned_job);
        let similarity = self.scorer.details(&cleaned_resume, &cleaned_job);

        let gaps = self.gap_analyzer.gaps(&resume_skills, &job_skills);
        let skill_gaps = self.gap_analyzer.prioritize(&gaps, &cleaned_job);
        let overlap = self.gap_analyzer.overlap_analysis(&resume_skills, &job_skills);

        let gap_alternatives = skill_gaps
            .iter()
            .map(|skill| GapAlternatives {
                skill: skill.clone(),
                alternatives: self.gap_analyzer.alternatives(skill),
            })
            .filter(|g| !g.alternatives.is_empty())
            .collect();

        let suggestions = self
            .suggester
            .suggest(&cleaned_resume, &cleaned_job, &skill_gaps);

        MatchAnalysis {
            score,
            interpretation: interpret_score(score).to_string(),
            categorized_resume_skills: self.gap_analyzer.categorize(&resume_skills),
            resume_skills,
            job_skills,
            gap_alternatives,
            overlap,
            similarity,
            resume_statistics: self.normalizer.text_statistics(&cleaned_resume),
            resume_readability: self.normalizer.readability(&cleaned_resume),
            tips: actionable_tips(score, &skill_gaps),
            certifications: certification_suggestions(&skill_gaps),
            skill_gaps,
            suggestions,
            processing_time_ms: started.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe, Software Engineer. Developed Python services with Django \
and PostgreSQL. Improved deployment using Docker and Git. Strong communication and teamwork.";

    const JOB: &str = "We are hiring a Python engineer. Requirements: Python, Django, Docker, \
AWS and Kubernetes. Communication skills required. AWS experience is a strong plus.";

    #[test]
    fn test_analyze_full_pipeline() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze(RESUME, JOB);

        assert!(analysis.score > 0.0);
        assert!(analysis.score <= 100.0);
        assert!(analysis.resume_skills.contains(&"Python".to_string()));
        assert!(analysis.job_skills.contains(&"Kubernetes".to_string()));
        assert!(analysis.skill_gaps.contains(&"Aws".to_string()));
        assert!(analysis.skill_gaps.contains(&"Kubernetes".to_string()));
        assert!(!analysis.skill_gaps.contains(&"Python".to_string()));
        assert!(!analysis.suggestions.is_empty());
        assert!(analysis.suggestions.len() <= 10);
        assert!(!analysis.interpretation.is_empty());
    }

    #[test]
    fn test_analyze_gap_prioritization_uses_job_frequency() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze(RESUME, JOB);

        // "aws" appears twice in the job text, "kubernetes" once.
        let aws_pos = analysis.skill_gaps.iter().position(|s| s == "Aws");
        let k8s_pos = analysis.skill_gaps.iter().position(|s| s == "Kubernetes");
        assert!(aws_pos.unwrap() < k8s_pos.unwrap());
    }

    #[test]
    fn test_analyze_empty_resume() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze("", JOB);

        assert_eq!(analysis.score, 0.0);
        assert!(analysis.resume_skills.is_empty());
        assert!(!analysis.job_skills.is_empty());
        assert!(!analysis.skill_gaps.is_empty());
    }

    #[test]
    fn test_analyze_empty_both() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze("", "");

        assert_eq!(analysis.score, 0.0);
        assert!(analysis.resume_skills.is_empty());
        assert!(analysis.job_skills.is_empty());
        assert!(analysis.skill_gaps.is_empty());
    }

    #[test]
    fn test_analyze_offers_alternatives_for_known_gaps() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze(RESUME, JOB);

        let aws = analysis.gap_alternatives.iter().find(|g| g.skill == "Aws");
        assert!(aws.is_some());
        assert!(aws.unwrap().alternatives.contains(&"Azure".to_string()));
    }

    #[test]
    fn test_analysis_serializes_to_json() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze(RESUME, JOB);

        let json = serde_json::to_string(&analysis).unwrap();
        let parsed: MatchAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.score, analysis.score);
    }
}
