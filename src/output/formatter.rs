//! Per-format rendering of analysis results

use crate::analysis::engine::MatchAnalysis;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::MatchReport;
use colored::Colorize;

/// Trait for rendering a match analysis into one output format.
pub trait OutputFormatter {
    fn format(&self, analysis: &MatchAnalysis) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with color-coded score bands.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn score_line(&self, score: f32) -> String {
        let line = format!("Match Score: {:.1}%", score);
        if !self.use_colors {
            return line;
        }

        if score >= 80.0 {
            line.green().bold().to_string()
        } else if score >= 60.0 {
            line.yellow().bold().to_string()
        } else if score >= 40.0 {
            line.truecolor(255, 165, 0).bold().to_string()
        } else {
            line.red().bold().to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, analysis: &MatchAnalysis) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.heading("Resume Match Analysis")));
        out.push_str(&format!("{}\n", self.score_line(analysis.score)));
        out.push_str(&format!("{}\n\n", analysis.interpretation));

        out.push_str(&format!("{}\n", self.heading("Resume Skills")));
        out.push_str(&format!("  {}\n\n", analysis.resume_skills.join(", ")));

        out.push_str(&format!("{}\n", self.heading("Required Skills")));
        out.push_str(&format!("  {}\n\n", analysis.job_skills.join(", ")));

        out.push_str(&format!("{}\n", self.heading("Skill Gaps")));
        if analysis.skill_gaps.is_empty() {
            out.push_str("  No major skill gaps detected\n\n");
        } else {
            for gap in analysis.skill_gaps.iter().take(5) {
                out.push_str(&format!("  - {}\n", gap));
            }
            out.push('\n');
        }

        out.push_str(&format!("{}\n", self.heading("Suggestions")));
        for (i, suggestion) in analysis.suggestions.iter().take(5).enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }

        if self.detailed {
            out.push_str(&format!("\n{}\n", self.heading("Skill Overlap")));
            out.push_str(&format!(
                "  Matching: {} | Missing: {} | Extra: {} ({:.1}% of job skills covered)\n",
                analysis.overlap.matching_skills.len(),
                analysis.overlap.missing_skills.len(),
                analysis.overlap.extra_skills.len(),
                analysis.overlap.match_percentage,
            ));

            if !analysis.categorized_resume_skills.technical.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading("Skill Categories")));
                for group in &analysis.categorized_resume_skills.technical {
                    out.push_str(&format!("  {}: {}\n", group.category, group.skills.join(", ")));
                }
                if !analysis.categorized_resume_skills.soft.is_empty() {
                    out.push_str(&format!(
                        "  Soft Skills: {}\n",
                        analysis.categorized_resume_skills.soft.join(", ")
                    ));
                }
            }

            if !analysis.gap_alternatives.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading("Alternatives for Missing Skills")));
                for gap in &analysis.gap_alternatives {
                    out.push_str(&format!("  {}: {}\n", gap.skill, gap.alternatives.join(", ")));
                }
            }

            if !analysis.similarity.job_unique_terms.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading("Job-Specific Terms Missing From Resume")));
                out.push_str(&format!("  {}\n", analysis.similarity.job_unique_terms.join(", ")));
            }

            if !analysis.tips.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading("Next Steps")));
                for tip in &analysis.tips {
                    out.push_str(&format!("  - {}\n", tip));
                }
            }

            if !analysis.certifications.is_empty() {
                out.push_str(&format!("\n{}\n", self.heading("Certifications")));
                for cert in &analysis.certifications {
                    out.push_str(&format!("  - {}\n", cert));
                }
            }

            out.push_str(&format!(
                "\nReadability: Flesch {:.1} | {} words | {:.1} words/sentence | analyzed in {} ms\n",
                analysis.resume_readability.flesch_reading_ease,
                analysis.resume_statistics.word_count,
                analysis.resume_statistics.avg_words_per_sentence,
                analysis.processing_time_ms,
            ));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for structured consumption.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, analysis: &MatchAnalysis) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(analysis)?
        } else {
            serde_json::to_string(analysis)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Markdown formatter for documentation-style reports.
pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, analysis: &MatchAnalysis) -> Result<String> {
        let mut out = String::new();

        out.push_str("# Resume Match Analysis\n\n");
        out.push_str(&format!("**Match Score:** {:.1}%\n\n", analysis.score));
        out.push_str(&format!("{}\n\n", analysis.interpretation));

        out.push_str("## Resume Skills\n\n");
        for skill in &analysis.resume_skills {
            out.push_str(&format!("- {}\n", skill));
        }

        out.push_str("\n## Required Skills\n\n");
        for skill in &analysis.job_skills {
            out.push_str(&format!("- {}\n", skill));
        }

        out.push_str("\n## Skill Gaps\n\n");
        if analysis.skill_gaps.is_empty() {
            out.push_str("No major skill gaps detected.\n");
        } else {
            for gap in &analysis.skill_gaps {
                out.push_str(&format!("- {}\n", gap));
            }
        }

        out.push_str("\n## Suggestions\n\n");
        for (i, suggestion) in analysis.suggestions.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, suggestion));
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Plain-text formatter wrapping the downloadable report.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, analysis: &MatchAnalysis) -> Result<String> {
        Ok(MatchReport::new(analysis).render())
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

/// Renders an analysis in the requested format.
pub struct ReportGenerator {
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn generate(&self, analysis: &MatchAnalysis, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format(analysis)
            }
            OutputFormat::Json => JsonFormatter::new(true).format(analysis),
            OutputFormat::Markdown => MarkdownFormatter.format(analysis),
            OutputFormat::Text => TextFormatter.format(analysis),
        }
    }
}
