use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn bin() -> Command {
    let path = assert_cmd::cargo::cargo_bin!("faq-chat");
    Command::new(path)
}

fn ask_json(args: &[&str]) -> Value {
    let assert = bin().args(args).args(["--format", "json"]).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn answers_paraphrased_question_from_builtin_faqs() {
    let json = ask_json(&["ask", "what's mdf"]);
    assert_eq!(json["decision"], "hit");
    assert!(json["answer"]
        .as_str()
        .unwrap()
        .starts_with("Medium Density Fiberboard"));
    assert!((json["confidence"].as_f64().unwrap() - 0.85).abs() < 1e-9);
    assert_eq!(json["source"]["kind"], "faq");
    assert_eq!(json["source"]["index"], 0);
}

#[test]
fn unrelated_question_gets_support_message() {
    let json = ask_json(&["ask", "how do I bake a cake"]);
    assert_eq!(json["decision"], "miss");
    assert!(json["answer"].as_str().unwrap().contains("support@tesa.com"));
    assert!(json["confidence"].as_f64().unwrap() < 0.3);
}

#[test]
fn comparison_question_returns_definitions() {
    let json = ask_json(&["ask", "MDF vs HDHMR"]);
    assert_eq!(json["confidence"], 0.95);
    assert_eq!(json["source"]["kind"], "comparison");
    assert!(json["answer"].as_str().unwrap().contains("BOILO"));
}

#[test]
fn text_output_and_custom_faq_file() {
    let dir = tempdir().unwrap();
    let faqs = dir.path().join("faqs.jsonl");
    fs::write(
        &faqs,
        "{\"question\":\"How long is the warranty?\",\"answer\":\"Ten years.\"}\n",
    )
    .unwrap();

    bin()
        .args(["--faqs", faqs.to_str().unwrap(), "ask", "how long is the warranty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decision=Hit"))
        .stdout(predicate::str::contains("answer=Ten years."));
}

#[test]
fn threshold_flag_turns_hit_into_miss() {
    let json = ask_json(&["--threshold", "0.9", "ask", "what's mdf"]);
    assert_eq!(json["decision"], "miss");
}

#[test]
fn ask_appends_chat_log() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("chat.jsonl");

    for _ in 0..2 {
        bin()
            .args(["ask", "what's mdf", "--log", log.to_str().unwrap()])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    let entry: Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(entry["user_question"], "what's mdf");
    assert!(entry["timestamp"].is_string());
}

#[test]
fn eval_reports_pass_rate_and_exit_code() {
    let dir = tempdir().unwrap();
    let passing = dir.path().join("pass.json");
    fs::write(
        &passing,
        r#"[{"case_id":"mdf","question":"what's mdf","expected_decision":"hit"},
            {"case_id":"cake","question":"how do I bake a cake","expected_decision":"miss"}]"#,
    )
    .unwrap();

    bin()
        .args(["eval", "--cases", passing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("pass_rate=1.0000"));

    let failing = dir.path().join("fail.json");
    fs::write(
        &failing,
        r#"[{"case_id":"cake","question":"how do I bake a cake","expected_decision":"hit"}]"#,
    )
    .unwrap();

    bin()
        .args(["eval", "--cases", failing.to_str().unwrap()])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("meets_threshold=false"));
}

#[test]
fn eval_fails_on_missing_faq_file() {
    let dir = tempdir().unwrap();
    let cases = dir.path().join("cases.json");
    fs::write(&cases, "[]").unwrap();

    bin()
        .args([
            "--faqs",
            dir.path().join("missing.jsonl").to_str().unwrap(),
            "eval",
            "--cases",
            cases.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: load faqs"));
}

#[test]
fn rejects_invalid_threshold() {
    bin()
        .args(["--threshold", "2", "ask", "what's mdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("threshold must be within"));
}
