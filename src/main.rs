//! Resume matcher: score a resume against a job description

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;

use analysis::engine::MatchEngine;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeMatcherError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            resume,
            job,
            detailed,
            output,
            save,
            no_color,
        } => {
            info!("Starting resume match analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| ResumeMatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(ResumeMatcherError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            info!("Extracting resume text from {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            info!("Extracting job description text from {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            // Input length is bounded here at the boundary, not inside the
            // analysis core.
            let max_chars = config.processing.max_input_chars;
            let resume_text = truncate_chars(&resume_text, max_chars);
            let job_text = truncate_chars(&job_text, max_chars);

            info!(
                "Analyzing {} resume chars against {} job description chars",
                resume_text.len(),
                job_text.len()
            );

            let engine = MatchEngine::with_config(&config);
            let analysis = engine.analyze(&resume_text, &job_text);

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::new(use_colors, detailed || config.output.detailed);
            let rendered = generator.generate(&analysis, &output_format)?;

            match save {
                Some(path) => save_output(&path, &rendered)?,
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeMatcherError::Configuration(format!("Failed to render config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    Config::reset()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn save_output(path: &PathBuf, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    println!("Report saved to {}", path.display());
    Ok(())
}
