//! Improvement suggestion generation
//!
//! Four independent rule families (skills, content, structure, keywords)
//! each contribute zero or more suggestions; the combined list is
//! deduplicated and capped.

use crate::analysis::normalizer::{ReadabilityReport, TextNormalizer, TextStatistics};
use crate::analysis::scorer::{SimilarityDetails, SimilarityScorer};
use crate::analysis::vocab;
use std::collections::HashSet;

const FALLBACK_SUGGESTION: &str =
    "Review and update your resume with job-specific keywords and skills";

/// Generates ranked, deduplicated improvement suggestions from the outputs
/// of the other analysis components.
pub struct SuggestionGenerator {
    normalizer: TextNormalizer,
    scorer: SimilarityScorer,
    max_suggestions: usize,
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self::with_limit(10)
    }

    pub fn with_limit(max_suggestions: usize) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            scorer: SimilarityScorer::new(),
            max_suggestions,
        }
    }

    /// Combined suggestions across all rule families, deduplicated and
    /// capped. Degrades to a single generic suggestion when nothing can be
    /// analyzed.
    pub fn suggest(&self, resume_text: &str, job_text: &str, skill_gaps: &[String]) -> Vec<String> {
        if resume_text.trim().is_empty() && job_text.trim().is_empty() {
            return vec![FALLBACK_SUGGESTION.to_string()];
        }

        let details = self.scorer.details(resume_text, job_text);
        let stats = self.normalizer.text_statistics(resume_text);
        let readability = self.normalizer.readability(resume_text);

        let mut suggestions = Vec::new();
        suggestions.extend(self.skill_rules(skill_gaps, job_text));
        suggestions.extend(self.content_rules(resume_text, &details));
        suggestions.extend(self.structure_rules(&stats, &readability));
        suggestions.extend(self.keyword_rules(&details));

        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.clone()));
        suggestions.truncate(self.max_suggestions);

        suggestions
    }

    fn skill_rules(&self, skill_gaps: &[String], job_text: &str) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !skill_gaps.is_empty() {
            let top: Vec<&str> = skill_gaps.iter().take(3).map(|s| s.as_str()).collect();
            suggestions.push(format!(
                "Add these missing skills to your resume: {}",
                top.join(", ")
            ));

            let job_lower = job_text.to_lowercase();
            for skill in skill_gaps.iter().take(2) {
                if job_lower.contains(skill.to_lowercase().as_str()) {
                    suggestions.push(format!(
                        "Highlight your experience with {} more prominently",
                        skill
                    ));
                }
            }
        }

        if skill_gaps.len() > 5 {
            suggestions.push(
                "Consider gaining proficiency in some of the missing skills through online courses"
                    .to_string(),
            );
        }

        suggestions
    }

    fn content_rules(&self, resume_text: &str, details: &SimilarityDetails) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !details.job_unique_terms.is_empty() {
            let top: Vec<&str> = details
                .job_unique_terms
                .iter()
                .take(5)
                .map(|t| t.as_str())
                .collect();
            suggestions.push(format!(
                "Incorporate these job-specific keywords: {}",
                top.join(", ")
            ));
        }

        let word_count = resume_text.split_whitespace().count();
        if word_count < 200 {
            suggestions.push(
                "Your resume seems short. Consider adding more relevant experience and achievements"
                    .to_string(),
            );
        } else if word_count > 800 {
            suggestions.push(
                "Your resume is quite long. Consider condensing it to focus on the most relevant information"
                    .to_string(),
            );
        }

        let resume_lower = resume_text.to_lowercase();
        let has_achievements = vocab::ACHIEVEMENT_VERBS
            .iter()
            .any(|v| resume_lower.contains(v));
        if !has_achievements {
            suggestions.push(
                "Add quantifiable achievements and metrics to demonstrate your impact".to_string(),
            );
        }

        let has_action_verbs = vocab::ACTION_VERBS.iter().any(|v| resume_lower.contains(v));
        if !has_action_verbs {
            suggestions
                .push("Use strong action verbs to describe your accomplishments".to_string());
        }

        suggestions
    }

    fn structure_rules(&self, stats: &TextStatistics, readability: &ReadabilityReport) -> Vec<String> {
        let mut suggestions = Vec::new();

        if readability.avg_words_per_sentence > 25.0 {
            suggestions.push("Shorten complex sentences for better readability".to_string());
        }

        if readability.flesch_reading_ease < 40.0 {
            suggestions.push(
                "Simplify language and technical jargon for better readability".to_string(),
            );
        }

        if stats.word_count > 0 {
            let unique_ratio = stats.unique_word_count as f32 / stats.word_count as f32;
            if unique_ratio < 0.3 {
                suggestions.push(
                    "Use more varied vocabulary to make your resume more engaging".to_string(),
                );
            }
        }

        suggestions
    }

    fn keyword_rules(&self, details: &SimilarityDetails) -> Vec<String> {
        let mut suggestions = Vec::new();

        if details.shared_terms.len() < 5 {
            suggestions.push(
                "Increase keyword alignment by incorporating more job-relevant terms".to_string(),
            );
        }

        if !details.job_unique_terms.is_empty() {
            suggestions.push(
                "Consider adding these industry-specific terms that appear in the job description"
                    .to_string(),
            );
        }

        if !details.resume_unique_terms.is_empty()
            && details.resume_unique_terms.len() > details.shared_terms.len()
        {
            suggestions.push(
                "Some of your unique skills might not be relevant - focus on job requirements"
                    .to_string(),
            );
        }

        suggestions
    }
}

/// Five-band interpretation of a match score.
pub fn interpret_score(score: f32) -> &'static str {
    if score >= 80.0 {
        "Excellent match! Your resume is well-aligned with the job requirements."
    } else if score >= 70.0 {
        "Good match. Your resume covers most job requirements with minor gaps."
    } else if score >= 60.0 {
        "Fair match. Consider addressing skill gaps and adding relevant keywords."
    } else if score >= 40.0 {
        "Below average match. Significant improvements needed in skills and keywords."
    } else {
        "Poor match. Major revisions required to align with job requirements."
    }
}

/// Actionable next steps based on the score band and gap list, capped at 5.
pub fn actionable_tips(score: f32, skill_gaps: &[String]) -> Vec<String> {
    let mut tips = Vec::new();

    if score < 60.0 {
        tips.push("Take online courses to acquire missing skills".to_string());
        tips.push("Network with professionals in the target industry".to_string());
        tips.push("Update your resume with recent relevant projects".to_string());
    }

    if !skill_gaps.is_empty() {
        let top: Vec<&str> = skill_gaps.iter().take(3).map(|s| s.as_str()).collect();
        tips.push(format!("Focus on gaining experience in: {}", top.join(", ")));
    }

    if score >= 60.0 {
        tips.push("Customize your resume further for this specific job".to_string());
        tips.push("Prepare specific examples of your work for interviews".to_string());
        tips.push("Highlight transferable skills from related experience".to_string());
    }

    tips.truncate(5);
    tips
}

/// Certification programs addressing the top skill gaps: up to two per
/// skill for the first three gaps, capped at 4 overall.
pub fn certification_suggestions(skill_gaps: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();

    for skill in skill_gaps.iter().take(3) {
        let skill_lower = skill.to_lowercase();
        if let Some((_, certs)) = vocab::CERTIFICATION_MAP
            .iter()
            .find(|(key, _)| *key == skill_lower)
        {
            for cert in certs.iter().take(2) {
                suggestions.push(format!("Consider {} certification", cert));
            }
        }
    }

    suggestions.truncate(4);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suggest_capped_and_deduplicated() {
        let generator = SuggestionGenerator::new();
        let resume = "short resume";
        let job = "We need Python, Docker, AWS, Kubernetes, Terraform, SQL, Redis and Linux experience";
        let skill_gaps = gaps(&["Python", "Docker", "Aws", "Kubernetes", "Sql", "Redis"]);

        let suggestions = generator.suggest(resume, job, &skill_gaps);

        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 10);
        let unique: HashSet<&String> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_suggest_empty_inputs_fall_back() {
        let generator = SuggestionGenerator::new();
        let suggestions = generator.suggest("", "", &[]);
        assert_eq!(suggestions, vec![FALLBACK_SUGGESTION.to_string()]);
    }

    #[test]
    fn test_skill_rules_name_missing_skills() {
        let generator = SuggestionGenerator::new();
        let suggestions = generator.skill_rules(&gaps(&["Aws", "Docker"]), "AWS and Docker shop");

        assert!(suggestions[0].contains("Aws, Docker"));
        // Both gaps appear in the job text, so both get highlight suggestions.
        assert!(suggestions.iter().any(|s| s.contains("Aws") && s.contains("prominently")));
        assert!(suggestions.iter().any(|s| s.contains("Docker") && s.contains("prominently")));
    }

    #[test]
    fn test_skill_rules_course_suggestion_for_many_gaps() {
        let generator = SuggestionGenerator::new();
        let many = gaps(&["A", "B", "C", "D", "E", "F"]);
        let suggestions = generator.skill_rules(&many, "");
        assert!(suggestions.iter().any(|s| s.contains("online courses")));
    }

    #[test]
    fn test_content_rules_flag_short_resume_without_verbs() {
        let generator = SuggestionGenerator::new();
        let details = SimilarityDetails::default();
        let suggestions = generator.content_rules("Python coder", &details);

        assert!(suggestions.iter().any(|s| s.contains("seems short")));
        assert!(suggestions.iter().any(|s| s.contains("quantifiable achievements")));
        assert!(suggestions.iter().any(|s| s.contains("action verbs")));
    }

    #[test]
    fn test_content_rules_accept_strong_resume() {
        let generator = SuggestionGenerator::new();
        let details = SimilarityDetails::default();
        let body = "Developed and delivered services. Improved latency and increased throughput. ";
        let resume = body.repeat(30); // comfortably over 200 words
        let suggestions = generator.content_rules(&resume, &details);

        assert!(!suggestions.iter().any(|s| s.contains("seems short")));
        assert!(!suggestions.iter().any(|s| s.contains("quantifiable achievements")));
        assert!(!suggestions.iter().any(|s| s.contains("action verbs")));
    }

    #[test]
    fn test_structure_rules() {
        let generator = SuggestionGenerator::new();
        let stats = TextStatistics {
            sentence_count: 1,
            word_count: 100,
            unique_word_count: 10,
            filtered_word_count: 80,
            avg_words_per_sentence: 100.0,
        };
        let readability = ReadabilityReport {
            flesch_reading_ease: 20.0,
            sentence_count: 1,
            word_count: 100,
            avg_words_per_sentence: 100.0,
        };

        let suggestions = generator.structure_rules(&stats, &readability);
        assert!(suggestions.iter().any(|s| s.contains("Shorten complex sentences")));
        assert!(suggestions.iter().any(|s| s.contains("Simplify language")));
        assert!(suggestions.iter().any(|s| s.contains("varied vocabulary")));
    }

    #[test]
    fn test_keyword_rules() {
        let generator = SuggestionGenerator::new();
        let details = SimilarityDetails {
            overall_score: 10.0,
            shared_terms: vec!["python".to_string()],
            resume_unique_terms: vec!["gardening".to_string(), "pottery".to_string()],
            job_unique_terms: vec!["kubernetes".to_string()],
        };

        let suggestions = generator.keyword_rules(&details);
        assert!(suggestions.iter().any(|s| s.contains("keyword alignment")));
        assert!(suggestions.iter().any(|s| s.contains("industry-specific")));
        assert!(suggestions.iter().any(|s| s.contains("might not be relevant")));
    }

    #[test]
    fn test_interpret_score_bands() {
        assert!(interpret_score(85.0).starts_with("Excellent"));
        assert!(interpret_score(72.0).starts_with("Good"));
        assert!(interpret_score(63.0).starts_with("Fair"));
        assert!(interpret_score(45.0).starts_with("Below average"));
        assert!(interpret_score(10.0).starts_with("Poor"));
    }

    #[test]
    fn test_actionable_tips_capped() {
        let tips = actionable_tips(30.0, &gaps(&["Aws", "Docker"]));
        assert!(tips.len() <= 5);
        assert!(tips.iter().any(|t| t.contains("Aws, Docker")));
    }

    #[test]
    fn test_certification_suggestions() {
        let suggestions = certification_suggestions(&gaps(&["Python", "Aws", "Docker"]));
        assert!(suggestions.len() <= 4);
        assert!(suggestions.iter().any(|s| s.contains("AWS Certified")));
    }
}
