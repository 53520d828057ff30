//! Skill gap analysis between resume and job requirements

use crate::analysis::skills::title_case;
use crate::analysis::vocab;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Detailed overlap between two skill sets. All comparisons are
/// case-insensitive; output skills are title-cased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillOverlap {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extra_skills: Vec<String>,
    pub match_percentage: f32,
    pub total_job_skills: usize,
    pub total_resume_skills: usize,
}

/// Skills bucketed into named technical categories plus a flat soft-skill
/// list. Skills matching no bucket are dropped silently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub technical: Vec<SkillCategoryGroup>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Set operations over extracted skill sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillGapAnalyzer;

impl SkillGapAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Skills required by the job but absent from the resume: title-cased,
    /// sorted alphabetically. An empty job skill set yields an empty result.
    pub fn gaps(&self, resume_skills: &[String], job_skills: &[String]) -> Vec<String> {
        if job_skills.is_empty() {
            return Vec::new();
        }

        let resume_set = lowercase_set(resume_skills);

        job_skills
            .iter()
            .map(|s| s.to_lowercase())
            .filter(|s| !resume_set.contains(s.as_str()))
            .map(|s| title_case(&s))
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }

    /// Full overlap breakdown: matching, missing and extra skills plus the
    /// percentage of job skills covered (0 when the job set is empty).
    pub fn overlap_analysis(&self, resume_skills: &[String], job_skills: &[String]) -> SkillOverlap {
        let resume_set = lowercase_set(resume_skills);
        let job_set = lowercase_set(job_skills);

        let matching = sorted_title_cased(resume_set.intersection(&job_set));
        let missing = sorted_title_cased(job_set.difference(&resume_set));
        let extra = sorted_title_cased(resume_set.difference(&job_set));

        let match_percentage = if job_set.is_empty() {
            0.0
        } else {
            crate::analysis::normalizer::round1(matching.len() as f32 / job_set.len() as f32 * 100.0)
        };

        SkillOverlap {
            matching_skills: matching,
            missing_skills: missing,
            extra_skills: extra,
            match_percentage,
            total_job_skills: job_set.len(),
            total_resume_skills: resume_set.len(),
        }
    }

    /// Reorder missing skills by how often each phrase occurs in the job
    /// text, most frequent first. Ties keep their input order; empty inputs
    /// pass through unchanged.
    pub fn prioritize(&self, missing_skills: &[String], job_text: &str) -> Vec<String> {
        if missing_skills.is_empty() || job_text.trim().is_empty() {
            return missing_skills.to_vec();
        }

        let job_lower = job_text.to_lowercase();
        let mut counted: Vec<(String, usize)> = missing_skills
            .iter()
            .map(|skill| {
                let count = job_lower.matches(skill.to_lowercase().as_str()).count();
                (skill.clone(), count)
            })
            .collect();

        counted.sort_by(|a, b| b.1.cmp(&a.1));
        counted.into_iter().map(|(skill, _)| skill).collect()
    }

    /// Related skills for a missing skill, from the fixed alternatives
    /// table. Empty when the skill has no entry.
    pub fn alternatives(&self, skill: &str) -> Vec<String> {
        let skill_lower = skill.to_lowercase();

        vocab::SKILL_ALTERNATIVES
            .iter()
            .find(|(key, _)| *key == skill_lower)
            .map(|(_, alternatives)| alternatives.iter().map(|a| title_case(a)).collect())
            .unwrap_or_default()
    }

    /// Bucket skills into the fixed technical categories and the soft-skill
    /// list. Input order is preserved within each bucket.
    pub fn categorize(&self, skills: &[String]) -> CategorizedSkills {
        let mut technical = Vec::new();

        for (category, members) in vocab::TECHNICAL_CATEGORIES {
            let matched: Vec<String> = skills
                .iter()
                .filter(|s| members.contains(&s.to_lowercase().as_str()))
                .map(|s| title_case(&s.to_lowercase()))
                .collect();

            if !matched.is_empty() {
                technical.push(SkillCategoryGroup {
                    category: category.to_string(),
                    skills: matched,
                });
            }
        }

        let soft: Vec<String> = skills
            .iter()
            .filter(|s| vocab::CATEGORIZED_SOFT_SKILLS.contains(&s.to_lowercase().as_str()))
            .cloned()
            .collect();

        CategorizedSkills { technical, soft }
    }
}

fn lowercase_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn sorted_title_cased<'a>(skills: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = skills.map(|s| title_case(s)).collect();
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_gaps_case_insensitive_difference() {
        let analyzer = SkillGapAnalyzer::new();
        let resume = skills(&["Python", "Django", "SQL"]);
        let job = skills(&["Python", "Django", "SQL", "AWS", "Docker"]);

        let gaps = analyzer.gaps(&resume, &job);
        assert_eq!(gaps, vec!["Aws", "Docker"]);
        assert!(!gaps.contains(&"Python".to_string()));
    }

    #[test]
    fn test_gaps_empty_resume() {
        let analyzer = SkillGapAnalyzer::new();
        let gaps = analyzer.gaps(&[], &skills(&["python"]));
        assert_eq!(gaps, vec!["Python"]);
    }

    #[test]
    fn test_gaps_empty_job() {
        let analyzer = SkillGapAnalyzer::new();
        assert!(analyzer.gaps(&skills(&["Python"]), &[]).is_empty());
    }

    #[test]
    fn test_overlap_analysis() {
        let analyzer = SkillGapAnalyzer::new();
        let resume = skills(&["Python", "Django", "Git"]);
        let job = skills(&["Python", "AWS"]);

        let overlap = analyzer.overlap_analysis(&resume, &job);
        assert_eq!(overlap.matching_skills, vec!["Python"]);
        assert_eq!(overlap.missing_skills, vec!["Aws"]);
        assert_eq!(overlap.extra_skills, vec!["Django", "Git"]);
        assert_eq!(overlap.match_percentage, 50.0);
        assert_eq!(overlap.total_job_skills, 2);
        assert_eq!(overlap.total_resume_skills, 3);
    }

    #[test]
    fn test_overlap_intersection_is_symmetric() {
        let analyzer = SkillGapAnalyzer::new();
        let a = skills(&["Python", "Docker", "AWS"]);
        let b = skills(&["python", "aws", "Kubernetes"]);

        let ab = analyzer.overlap_analysis(&a, &b);
        let ba = analyzer.overlap_analysis(&b, &a);

        assert_eq!(ab.matching_skills, ba.matching_skills);
        assert_eq!(ab.missing_skills, ba.extra_skills);
        assert_eq!(ab.extra_skills, ba.missing_skills);
    }

    #[test]
    fn test_overlap_empty_job_set() {
        let analyzer = SkillGapAnalyzer::new();
        let overlap = analyzer.overlap_analysis(&skills(&["Python"]), &[]);
        assert_eq!(overlap.match_percentage, 0.0);
        assert_eq!(overlap.total_job_skills, 0);
    }

    #[test]
    fn test_prioritize_by_job_frequency() {
        let analyzer = SkillGapAnalyzer::new();
        let missing = skills(&["Aws", "Docker"]);
        let job_text = "Docker experience required. We ship everything in Docker. AWS is a plus.";

        let prioritized = analyzer.prioritize(&missing, job_text);
        assert_eq!(prioritized, vec!["Docker", "Aws"]);
    }

    #[test]
    fn test_prioritize_empty_inputs_unchanged() {
        let analyzer = SkillGapAnalyzer::new();
        let missing = skills(&["Aws"]);
        assert_eq!(analyzer.prioritize(&missing, ""), missing);
        assert!(analyzer.prioritize(&[], "docker").is_empty());
    }

    #[test]
    fn test_alternatives_known_and_unknown() {
        let analyzer = SkillGapAnalyzer::new();
        let alternatives = analyzer.alternatives("Python");
        assert_eq!(alternatives, vec!["Java", "R", "Scala", "Julia"]);

        assert!(analyzer.alternatives("basket weaving").is_empty());
    }

    #[test]
    fn test_categorize_buckets_and_drops_unknown() {
        let analyzer = SkillGapAnalyzer::new();
        let input = skills(&["Python", "Docker", "Leadership", "Underwater Basket Weaving"]);
        let categorized = analyzer.categorize(&input);

        let languages = categorized
            .technical
            .iter()
            .find(|g| g.category == "Programming Languages")
            .expect("languages bucket");
        assert_eq!(languages.skills, vec!["Python"]);

        let devops = categorized
            .technical
            .iter()
            .find(|g| g.category == "DevOps & Tools")
            .expect("devops bucket");
        assert_eq!(devops.skills, vec!["Docker"]);

        assert_eq!(categorized.soft, vec!["Leadership"]);

        let all_technical: Vec<&String> = categorized
            .technical
            .iter()
            .flat_map(|g| g.skills.iter())
            .collect();
        assert!(!all_technical.iter().any(|s| s.contains("Basket")));
    }
}
