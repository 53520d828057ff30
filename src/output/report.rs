//! Plain-text analysis report assembly

use crate::analysis::engine::MatchAnalysis;
use chrono::Local;

/// Renders a `MatchAnalysis` as a downloadable plain-text report.
pub struct MatchReport<'a> {
    analysis: &'a MatchAnalysis,
}

impl<'a> MatchReport<'a> {
    pub fn new(analysis: &'a MatchAnalysis) -> Self {
        Self { analysis }
    }

    /// Header, score, skill lists (first 10), gaps (first 5), suggestions
    /// (first 5) and a generation timestamp.
    pub fn render(&self) -> String {
        let analysis = self.analysis;
        let mut out = String::new();

        out.push_str("Resume Analysis Report\n");
        out.push_str("======================\n\n");

        out.push_str(&format!("Match Score: {:.1}%\n", analysis.score));
        out.push_str(&format!("{}\n\n", analysis.interpretation));

        out.push_str(&format!("Resume Skills ({}):\n", analysis.resume_skills.len()));
        out.push_str(&format!("{}\n\n", join_first(&analysis.resume_skills, 10)));

        out.push_str(&format!("Required Skills ({}):\n", analysis.job_skills.len()));
        out.push_str(&format!("{}\n\n", join_first(&analysis.job_skills, 10)));

        out.push_str(&format!("Skill Gaps ({}):\n", analysis.skill_gaps.len()));
        out.push_str(&format!("{}\n\n", join_first(&analysis.skill_gaps, 5)));

        out.push_str("Suggestions:\n");
        for (i, suggestion) in analysis.suggestions.iter().take(5).enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }
        out.push('\n');

        out.push_str(&format!(
            "Generated on: {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        out
    }
}

fn join_first(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::engine::MatchEngine;

    #[test]
    fn test_report_contains_all_sections() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze(
            "Python developer with Django and Docker experience",
            "Python engineer needed, must know Django, AWS and Kubernetes",
        );

        let report = MatchReport::new(&analysis).render();

        assert!(report.contains("Resume Analysis Report"));
        assert!(report.contains("Match Score:"));
        assert!(report.contains("Resume Skills"));
        assert!(report.contains("Required Skills"));
        assert!(report.contains("Skill Gaps"));
        assert!(report.contains("Generated on:"));
    }

    #[test]
    fn test_report_caps_listed_items() {
        let engine = MatchEngine::new();
        let analysis = engine.analyze("nothing in particular", "nothing relevant either");
        let report = MatchReport::new(&analysis).render();

        // No skills either side; the section headers must still render.
        assert!(report.contains("Resume Skills (0):"));
        assert!(report.contains("Skill Gaps (0):"));
    }
}
