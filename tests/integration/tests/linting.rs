//! End-to-end lint-stage behavior over a whole pipeline run.

use std::fs;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use htmlvet_linter::test_utils::StaticLinter;
use htmlvet_linter::{Issue, RuleSet, RuleSetting, messages};
use htmlvet_pipeline::{FileLintStage, FileRecord, LintOptions, Pipeline, PipelineError};

const CONTENT: &str = "<!DOCTYPE html>\n<html>\n  <head><title>Document</title></head>\n  <body></body>\n</html>\n";

fn req_lang_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert("html-req-lang".into(), RuleSetting::Enabled(true));
    rules
}

#[tokio::test]
async fn supports_a_sharable_config_file() {
    let dir = tempdir().unwrap();
    let fixtures = dir.path().join("fixtures");
    fs::create_dir(&fixtures).unwrap();
    fs::write(
        fixtures.join("config.json"),
        r#"{ "config": { "html-req-lang": true } }"#,
    )
    .unwrap();

    let backend = StaticLinter::with_issues(vec![Issue::new("html-req-lang", "E038", 1, 1)]);
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(backend),
        "fixtures/config.json",
        dir.path(),
    ));

    let out = pipeline
        .run(vec![FileRecord::buffered("fixtures/test.html", CONTENT)])
        .await
        .unwrap();

    let issues = out[0].issues.as_ref().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "html-req-lang");
    assert_eq!(issues[0].line, 1);
    assert_eq!(issues[0].column, 1);
}

#[tokio::test]
async fn produces_the_expected_message_via_buffer() {
    let dir = tempdir().unwrap();
    let backend = StaticLinter::with_issues(vec![Issue::new("html-req-lang", "E038", 1, 1)]);
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(backend),
        req_lang_rules(),
        dir.path(),
    ));

    let out = pipeline
        .run(vec![FileRecord::buffered("test.html", "<html></html>")])
        .await
        .unwrap();

    let issues = out[0].issues.as_ref().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, 1);
    assert_eq!(
        messages::render_issue(&issues[0]),
        "<HTML> tag should specify the language of the page using the \"lang\" attribute"
    );
}

#[tokio::test]
async fn ignores_records_with_no_content() {
    let dir = tempdir().unwrap();
    let backend = StaticLinter::with_issues(vec![Issue::new("html-req-lang", "E038", 1, 1)]);
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(backend.clone()),
        req_lang_rules(),
        dir.path(),
    ));

    let out = pipeline
        .run(vec![FileRecord::empty("fixtures")])
        .await
        .unwrap();

    assert_eq!(out.len(), 1);
    assert!(out[0].issues.is_none());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn rejects_records_with_stream_contents() {
    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(StaticLinter::clean()),
        LintOptions::default(),
        dir.path(),
    ));

    let err = pipeline
        .run(vec![FileRecord::streamed("test.html", tokio::io::empty())])
        .await
        .unwrap_err();

    assert_eq!(err.plugin(), "htmlvet");
    assert_eq!(
        err.to_string(),
        "htmlvet doesn't support files with stream contents"
    );
}

#[tokio::test]
async fn reports_a_missing_config_file_with_its_resolved_path() {
    let dir = tempdir().unwrap();
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(StaticLinter::clean()),
        "fixtures/config.js",
        dir.path(),
    ));

    let err = pipeline
        .run(vec![FileRecord::buffered("test.html", CONTENT)])
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Config(_)));
    assert_eq!(
        err.to_string(),
        format!(
            "cannot read config file \"{}\"",
            dir.path().join("fixtures/config.js").display()
        )
    );
}

#[tokio::test]
async fn preserves_input_order_across_many_records() {
    let dir = tempdir().unwrap();
    let backend = StaticLinter::clean();
    let pipeline = Pipeline::new().stage(FileLintStage::new_in(
        Arc::new(backend),
        req_lang_rules(),
        dir.path(),
    ));

    let records = (0..10)
        .map(|i| FileRecord::buffered(format!("page-{i}.html"), CONTENT))
        .collect::<Vec<_>>();

    let out = pipeline.run(records).await.unwrap();

    let names: Vec<String> = out.iter().map(|r| r.file_name()).collect();
    let expected: Vec<String> = (0..10).map(|i| format!("page-{i}.html")).collect();
    assert_eq!(names, expected);
}
