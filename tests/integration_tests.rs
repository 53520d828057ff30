//! Integration tests for the resume matcher

use resume_matcher::analysis::engine::MatchEngine;
use resume_matcher::input::manager::InputManager;
use resume_matcher::output::report::MatchReport;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("Docker"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("Node.js"));
    // Markdown formatting must not leak through.
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_end_to_end_match_analysis() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = MatchEngine::new();
    let analysis = engine.analyze(&resume_text, &job_text);

    assert!(analysis.score > 0.0);
    assert!(analysis.score <= 100.0);

    assert!(analysis.resume_skills.contains(&"Python".to_string()));
    assert!(analysis.resume_skills.contains(&"Docker".to_string()));
    assert!(analysis.job_skills.contains(&"Kubernetes".to_string()));

    // The fixture resume lacks AWS and Kubernetes.
    assert!(analysis.skill_gaps.contains(&"Aws".to_string()));
    assert!(analysis.skill_gaps.contains(&"Kubernetes".to_string()));
    assert!(!analysis.skill_gaps.contains(&"Python".to_string()));

    assert!(!analysis.suggestions.is_empty());
    assert!(analysis.suggestions.len() <= 10);
}

#[tokio::test]
async fn test_report_rendering_end_to_end() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let engine = MatchEngine::new();
    let analysis = engine.analyze(&resume_text, &job_text);
    let report = MatchReport::new(&analysis).render();

    assert!(report.contains("Resume Analysis Report"));
    assert!(report.contains(&format!("Match Score: {:.1}%", analysis.score)));
    assert!(report.contains("Generated on:"));
}

#[test]
fn test_more_overlap_scores_higher() {
    let engine = MatchEngine::new();
    let job = "Python developer with Django and Flask experience";

    let close = engine.analyze("Python developer with Django experience", job);
    let far = engine.analyze("Java developer with Spring experience", job);

    assert!(close.score > far.score);
}

#[tokio::test]
async fn test_extraction_from_scratch_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pasted_job.txt");
    std::fs::write(&path, "Looking for a Python developer with Docker experience").unwrap();

    let mut manager = InputManager::new();
    let text = manager.extract_text(&path).await.unwrap();
    assert!(text.contains("Python"));

    let engine = MatchEngine::new();
    let analysis = engine.analyze("Python and Docker background", &text);
    assert!(analysis.score > 0.0);
}
