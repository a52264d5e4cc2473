// system-tests/tests/suites/reporting.rs
// ============================================================================
// Module: Reporting Tests
// Description: Offline checks of the per-test summary writer.
// Purpose: Ensure validation diagnostics reach summary.json and summary.md.
// Dependencies: investor-api-model, helpers, tempfile
// ============================================================================

//! ## Overview
//! These tests never touch the network; they feed hand-built outcomes to the
//! reporter and read back the files it writes.

use std::fs;

use investor_api_model::HttpOutcome;
use investor_api_model::ResponseExpectation;
use investor_api_model::SchemaNode;
use investor_api_model::validate_response;
use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

use crate::helpers::TestResult;
use crate::helpers::artifacts::TestArtifacts;
use crate::helpers::artifacts::SUMMARY_JSON;
use crate::helpers::artifacts::SUMMARY_MARKDOWN;
use crate::helpers::artifacts::TestReporter;
use crate::helpers::artifacts::Verdict;

fn symbol_mismatch() -> investor_api_model::ValidationOutcome {
    let outcome = HttpOutcome::new(200, Some(json!({"symbol": "ANZ"})));
    let model = SchemaNode::object([("symbol", SchemaNode::value("WBC"))]);
    validate_response(&outcome, &ResponseExpectation::with_model(200, model))
}

fn read_summary(artifacts: &TestArtifacts) -> TestResult<Value> {
    let bytes = fs::read(artifacts.root().join(SUMMARY_JSON))?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[test]
fn failed_step_diagnostics_reach_both_summaries() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("mismatch"))?;
    let mut reporter = TestReporter::with_artifacts("mismatch", artifacts.clone());
    if reporter.record("current_quotes", &symbol_mismatch()) {
        return Err("mismatching body was recorded as passing".into());
    }
    reporter.finish(Verdict::Fail, &[])?;

    let summary = read_summary(&artifacts)?;
    if summary["verdict"] != "fail" || summary["steps"][0]["passed"] != false {
        return Err(format!("unexpected summary: {summary}").into());
    }
    let diagnostic = &summary["steps"][0]["diagnostics"][0];
    if diagnostic["pointer"] != "/symbol" || diagnostic["mismatch"]["kind"] != "value" {
        return Err(format!("unexpected diagnostic: {diagnostic}").into());
    }

    let markdown = fs::read_to_string(artifacts.root().join(SUMMARY_MARKDOWN))?;
    let expected = "Expected value: [WBC]; Received value: [ANZ] instead (at /symbol)";
    if !markdown.contains("- current_quotes (HTTP 200): fail") || !markdown.contains(expected) {
        return Err(format!("markdown summary lacks the diagnostic:\n{markdown}").into());
    }
    Ok(())
}

#[test]
fn check_turns_failed_validation_into_error() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("check"))?;
    let mut reporter = TestReporter::with_artifacts("check", artifacts);
    let outcome = validate_response(&HttpOutcome::new(400, None), &ResponseExpectation::no_body(201));

    let Err(err) = reporter.check("register_user", &outcome) else {
        return Err("status mismatch passed the check".into());
    };
    let message = err.to_string();
    if !message.starts_with("register_user failed") || !message.contains("Expected HTTP 201; got HTTP 400") {
        return Err(format!("unexpected check error: {message}").into());
    }
    if reporter.steps().len() != 1 {
        return Err("failed check was not recorded".into());
    }
    reporter.finish(Verdict::Fail, &[])?;
    Ok(())
}

#[test]
fn unfinished_reporter_writes_fail_summary_on_drop() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("dropped"))?;
    {
        let mut reporter = TestReporter::with_artifacts("dropped", artifacts.clone());
        let outcome =
            validate_response(&HttpOutcome::new(204, None), &ResponseExpectation::no_body(204));
        reporter.record("delete_user", &outcome);
    }
    let summary = read_summary(&artifacts)?;
    if summary["verdict"] != "fail" || summary["steps"][0]["passed"] != true {
        return Err(format!("unexpected summary: {summary}").into());
    }
    Ok(())
}

#[test]
fn passing_summary_keeps_note() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("passing"))?;
    let reporter = TestReporter::with_artifacts("passing", artifacts.clone());
    reporter.pass("all good")?;

    let summary = read_summary(&artifacts)?;
    if summary["verdict"] != "pass" || summary["notes"] != json!(["all good"]) {
        return Err(format!("unexpected summary: {summary}").into());
    }
    let markdown = fs::read_to_string(artifacts.root().join(SUMMARY_MARKDOWN))?;
    if !markdown.starts_with("# passing\n") || !markdown.contains("No API calls were validated.") {
        return Err(format!("unexpected markdown summary:\n{markdown}").into());
    }
    Ok(())
}

#[test]
fn json_artifacts_are_canonical() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("canonical"))?;
    let path = artifacts.write_json("body.json", &json!({"b": 1, "a": {"d": 2, "c": 3}}))?;
    let written = fs::read_to_string(path)?;
    if written != r#"{"a":{"c":3,"d":2},"b":1}"# {
        return Err(format!("artifact is not canonical JSON: {written}").into());
    }
    Ok(())
}

#[test]
fn summary_timestamps_are_plain_json_numbers() -> TestResult {
    let dir = TempDir::new()?;
    let artifacts = TestArtifacts::at(dir.path().join("timestamps"))?;
    let mut reporter = TestReporter::with_artifacts("timestamps", artifacts.clone());
    reporter.finish(Verdict::Pass, &[])?;

    let summary = read_summary(&artifacts)?;
    let started = summary["started_at_ms"].as_u64().ok_or("started_at_ms is not a number")?;
    let finished = summary["finished_at_ms"].as_u64().ok_or("finished_at_ms is not a number")?;
    let elapsed = summary["elapsed_ms"].as_u64().ok_or("elapsed_ms is not a number")?;
    if started == 0 || finished < started || elapsed != finished - started {
        return Err(format!("inconsistent timestamps: {summary}").into());
    }
    Ok(())
}
