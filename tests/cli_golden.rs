// Copyright 2026 Staffsearch Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;
use jsonschema::JSONSchema;
use predicates::prelude::*;
use serde_json::Value;
use serde_json::json;
use tempfile::TempDir;

fn staffsearch_cmd(config_root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("staffsearch"));
    cmd.env("XDG_CONFIG_HOME", config_root);
    cmd.env("HOME", config_root);
    cmd.env("APPDATA", config_root);
    cmd.env_remove("STAFFSEARCH_LOG");
    cmd
}

fn global_config_path(config_root: &Path) -> PathBuf {
    let base = if cfg!(target_os = "macos") {
        config_root.join("Library").join("Application Support")
    } else {
        config_root.to_path_buf()
    };
    base.join("staffsearch").join("staffsearch.toml")
}

fn write_config(config_root: &Path, text: &str) {
    let path = global_config_path(config_root);
    fs::create_dir_all(path.parent().expect("config parent")).expect("config dir");
    fs::write(path, text).expect("write config");
}

fn load_schema() -> JSONSchema {
    let schema_text = include_str!("../schemas/response.schema.json");
    let schema_json: Value = serde_json::from_str(schema_text).expect("schema json");
    JSONSchema::options()
        .compile(&schema_json)
        .expect("compile schema")
}

fn assert_schema(schema: &JSONSchema, value: &Value) {
    if let Err(errors) = schema.validate(value) {
        let msgs: Vec<String> = errors.map(|e| e.to_string()).collect();
        panic!("schema validation failed:\n{}", msgs.join("\n"));
    }
}

fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("parse json")
}

fn result_ids(value: &Value) -> Vec<i64> {
    value["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["employee"]["id"].as_i64().expect("id"))
        .collect()
}

#[test]
fn search_json_python_developers() {
    let schema = load_schema();
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args([
        "search",
        "Find Python developers with 3+ years experience",
        "--explain",
        "--json",
    ]);
    let value = run_json(&mut cmd);
    assert_schema(&schema, &value);

    assert_eq!(value["ok"], json!(true));
    assert_eq!(value["query"]["style"], json!("verbose"));
    assert_eq!(value["stats"]["total_hits"], json!(16));
    assert_eq!(value["stats"]["roster_size"], json!(16));
    assert_eq!(&result_ids(&value)[..2], &[1, 6]);
    assert_eq!(value["results"][0]["score"], json!(65));
    assert_eq!(
        value["results"][0]["criteria"],
        json!(["Skills: python", "5 years experience", "Department: Engineering"])
    );
    assert_eq!(
        value["facets"],
        json!({
            "skills": ["python"],
            "min_experience": 3,
            "projects": [],
            "availability": null,
            "department": "engineering",
            "location": null
        })
    );
}

#[test]
fn search_json_healthcare_verbose() {
    let schema = load_schema();
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["search", "Who has worked on healthcare projects?", "--json"]);
    let value = run_json(&mut cmd);
    assert_schema(&schema, &value);

    assert_eq!(result_ids(&value), vec![1, 3]);
    assert!(value.get("facets").is_none());
    let response = value["response"].as_str().expect("response text");
    insta::assert_snapshot!("healthcare_verbose", response);
}

#[test]
fn search_json_terse_style_flag() {
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args([
        "search",
        "Find Python developers with 3+ years experience",
        "--style",
        "terse",
        "--json",
    ]);
    let value = run_json(&mut cmd);
    assert_eq!(value["query"]["style"], json!("terse"));
    let response = value["response"].as_str().expect("response text");
    insta::assert_snapshot!("python_terse", response);
}

#[test]
fn search_text_no_results() {
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["search", "zzzzz"]);
    let output = cmd.output().expect("run search");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    insta::assert_snapshot!("no_results", stdout.trim_end());
}

#[test]
fn search_text_renders_cards() {
    let config = TempDir::new().expect("config tempdir");
    staffsearch_cmd(config.path())
        .args(["search", "Show me available UX designers", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 9 employee(s)"))
        .stdout(predicate::str::contains(
            "[EB] Emily Brown, Senior UX Designer (Available)",
        ))
        .stdout(predicate::str::contains(
            "Why: Skills: design; Availability: available; Department: Design",
        ))
        .stdout(predicate::str::contains("And 7 more results..."));
}

#[test]
fn config_style_applies_and_flag_overrides() {
    let config = TempDir::new().expect("config tempdir");
    write_config(config.path(), "response_style = \"terse\"\nmax_cards = 1\n");

    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["search", "Show me available UX designers", "--json"]);
    let value = run_json(&mut cmd);
    assert_eq!(value["query"]["style"], json!("terse"));

    staffsearch_cmd(config.path())
        .args([
            "search",
            "Show me available UX designers",
            "--style",
            "verbose",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Based on your query"))
        .stdout(predicate::str::contains("And 8 more results..."));
}

#[test]
fn invalid_config_reports_error() {
    let config = TempDir::new().expect("config tempdir");
    write_config(config.path(), "response_style = \"chatty\"\n");

    staffsearch_cmd(config.path())
        .args(["search", "python"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: unsupported response_style 'chatty'",
        ));

    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["search", "python", "--json"]);
    let value = run_json(&mut cmd);
    assert_schema(&load_schema(), &value);
    assert_eq!(value["ok"], json!(false));
    assert_eq!(value["error"]["code"], json!("error"));
}

#[test]
fn roster_lists_everyone() {
    let schema = load_schema();
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["roster", "--json"]);
    let value = run_json(&mut cmd);
    assert_schema(&schema, &value);
    let employees = value["employees"].as_array().expect("employees");
    assert_eq!(employees.len(), 16);
    assert_eq!(employees[15]["name"], json!("Paul Young"));
    assert_eq!(employees[3]["availability"], json!("partially_available"));

    staffsearch_cmd(config.path())
        .args(["roster"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[PY] Paul Young, Senior .NET Developer (Available)"))
        .stdout(predicate::str::contains("Relevance score").not());
}

#[test]
fn samples_and_chat() {
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["samples", "--json"]);
    let value = run_json(&mut cmd);
    assert_eq!(value["samples"].as_array().expect("samples").len(), 6);

    staffsearch_cmd(config.path())
        .args(["chat", "--style", "terse"])
        .write_stdin("Who has worked on healthcare projects?\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello! I'm your HR assistant."))
        .stdout(predicate::str::contains("I found 2 employee(s) matching"))
        .stdout(predicate::str::contains("[CD] Carol Davis"));
}

#[test]
fn config_init_writes_defaults_once() {
    let config = TempDir::new().expect("config tempdir");
    let mut cmd = staffsearch_cmd(config.path());
    cmd.args(["config", "--init", "--json"]);
    let value = run_json(&mut cmd);
    assert_eq!(value["config"]["response_style"], json!("verbose"));
    assert_eq!(value["config"]["max_cards"], json!(6));
    assert!(global_config_path(config.path()).exists());

    staffsearch_cmd(config.path())
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn completions_for_bash() {
    let config = TempDir::new().expect("config tempdir");
    staffsearch_cmd(config.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staffsearch"));
}
