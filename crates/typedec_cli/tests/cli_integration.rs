#![allow(missing_docs)]

use std::process::{Command, Output};

use serde_json::Value;
use typedec_testkit::fixture_path;

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_typedec")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"typedec failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

#[test]
fn decode_book_json_output() {
	let json = run_json(&[
		"decode",
		&fixture("book.json"),
		"--schema",
		&fixture("book_schema.json"),
		"--type",
		"Book",
		"--json",
	]);

	assert_eq!(json["target"], "Book");
	assert_eq!(json["value"]["author"]["lastname"], "Kernighan");
	assert_eq!(json["value"]["edition"], 2);
	assert!(json["value"]["notes"].is_null(), "missing optional field decodes as null");
	assert_eq!(json["value"]["category"].as_array().map(Vec::len), Some(2));
}

#[test]
fn decode_text_output_lists_fields() {
	let output = run(&["decode", &fixture("book.json"), "--schema", &fixture("book_schema.json"), "--type", "Book"]);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("target: Book"), "{stdout}");
	assert!(stdout.contains("Book {"), "{stdout}");
	assert!(stdout.contains("firstname = \"Brian\""), "{stdout}");
}

#[test]
fn decode_failure_exits_nonzero_with_location() {
	let output = run(&["decode", &fixture("book_bad_author.json"), "--schema", &fixture("book_schema.json"), "--type", "Book"]);
	assert!(!output.status.success());

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("expected string, got int at $.author.lastname"), "{stderr}");
}

#[test]
fn check_json_reports_failure_without_failing() {
	let json = run_json(&[
		"check",
		&fixture("book_bad_author.json"),
		"--schema",
		&fixture("book_schema.json"),
		"--type",
		"Book",
		"--json",
	]);

	assert_eq!(json["ok"], false);
	assert_eq!(json["at"], "$.author.lastname");
}

#[test]
fn check_without_schema_uses_builtin_types() {
	let output = run(&["check", &fixture("book.json"), "--type", "any"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");

	let output = run(&["check", &fixture("book.json"), "--type", "list"]);
	assert!(!output.status.success());
}

#[test]
fn unresolved_target_is_reported() {
	let output = run(&["check", &fixture("book.json"), "--type", "Magazine"]);
	assert!(!output.status.success());

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unresolved type reference Magazine"), "{stderr}");
}

#[test]
fn schema_json_lists_records() {
	let json = run_json(&["schema", &fixture("book_schema.json"), "--json"]);
	let records = json.as_array().expect("records array");

	assert_eq!(records.len(), 2);
	assert_eq!(records[0]["name"], "Book");
	assert_eq!(records[0]["fields"][1]["type"], "Person");
	assert_eq!(records[0]["fields"][5]["type"], "int | null");
	assert_eq!(records[0]["fields"][6]["type"], "list<any> | null");
}
