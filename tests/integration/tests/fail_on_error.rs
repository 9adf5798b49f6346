//! Fail-fast gate behavior over a whole pipeline run.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use htmlvet_linter::test_utils::StaticLinter;
use htmlvet_linter::{Issue, RuleSet, RuleSetting, Severity};
use htmlvet_pipeline::{FailFastGate, FileLintStage, FileRecord, Pipeline, PipelineError};

fn req_lang_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert("html-req-lang".into(), RuleSetting::Enabled(true));
    rules
}

#[tokio::test]
async fn fails_immediately_when_an_error_is_found() {
    let dir = tempdir().unwrap();
    let backend = StaticLinter::with_issues(vec![Issue::new("html-req-lang", "E038", 1, 1)]);
    let pipeline = Pipeline::new()
        .stage(FileLintStage::new_in(
            Arc::new(backend),
            req_lang_rules(),
            dir.path(),
        ))
        .stage(FailFastGate::new());

    let err = pipeline
        .run(vec![FileRecord::buffered("test.html", "<html></html>")])
        .await
        .unwrap_err();

    match err {
        PipelineError::LintFailure {
            file_name,
            message,
            line,
        } => {
            assert_eq!(file_name, "test.html");
            assert_eq!(
                message,
                "<HTML> tag should specify the language of the page using the \"lang\" attribute"
            );
            assert_eq!(line, 1);
        }
        other => panic!("expected LintFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn does_not_fail_for_warning_level_issues() {
    let dir = tempdir().unwrap();
    let warning = Issue::new("html-req-lang", "E038", 1, 1).with_severity(Severity::Warning);
    let backend = StaticLinter::with_issues(vec![warning.clone()]);
    let pipeline = Pipeline::new()
        .stage(FileLintStage::new_in(
            Arc::new(backend),
            req_lang_rules(),
            dir.path(),
        ))
        .stage(FailFastGate::new());

    let out = pipeline
        .run(vec![FileRecord::buffered("test.html", "<html></html>")])
        .await
        .unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].issues, Some(vec![warning]));
}

#[tokio::test]
async fn stops_processing_after_the_first_failure() {
    let dir = tempdir().unwrap();
    let backend = StaticLinter::with_issues(vec![Issue::new("html-req-lang", "E038", 1, 1)]);
    let pipeline = Pipeline::new()
        .stage(FileLintStage::new_in(
            Arc::new(backend.clone()),
            req_lang_rules(),
            dir.path(),
        ))
        .stage(FailFastGate::new());

    let records = vec![
        FileRecord::buffered("first.html", "<html></html>"),
        FileRecord::buffered("second.html", "<html></html>"),
    ];

    let err = pipeline.run(records).await.unwrap_err();

    match err {
        PipelineError::LintFailure { file_name, .. } => assert_eq!(file_name, "first.html"),
        other => panic!("expected LintFailure, got {:?}", other),
    }
    // The second record never reached the linter.
    assert_eq!(backend.call_count(), 1);
}
