// tests/cli_test.rs
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_roman-semver"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap().trim().to_string()
}

#[test]
fn test_help() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("roman-semver"));
}

#[test]
fn test_roman_parse() {
    let output = run_cli(&["roman", "parse", "MMMCMXCIX"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3999");
}

#[test]
fn test_roman_stringify() {
    let output = run_cli(&["roman", "stringify", "3999"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "MMMCMXCIX");
}

#[test]
fn test_roman_stringify_with_config() {
    let output = run_cli(&[
        "--config",
        "tests/fixtures/config_lowercase.toml",
        "roman",
        "stringify",
        "19",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "xix");
}

#[test]
fn test_roman_stringify_negative() {
    let output = run_cli(&["roman", "stringify", "-5"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot convert -5 to a roman number"));
}

#[test]
fn test_roman_valid_exit_codes() {
    let yes = run_cli(&["roman", "valid", "XIV"]);
    assert!(yes.status.success());
    assert_eq!(stdout(&yes), "true");

    let no = run_cli(&["roman", "valid", "IC"]);
    assert_eq!(no.status.code(), Some(1));
    assert_eq!(stdout(&no), "false");
    let stderr = String::from_utf8(no.stderr).unwrap();
    assert!(stderr.contains("\"IC\" at 0 is not a valid subtraction"));
}

#[test]
fn test_semver_valid_exit_codes() {
    let yes = run_cli(&["semver", "valid", "1.2.3-rc.1"]);
    assert!(yes.status.success());
    assert_eq!(stdout(&yes), "true");

    let no = run_cli(&["semver", "valid", "1.2"]);
    assert_eq!(no.status.code(), Some(1));
    assert_eq!(stdout(&no), "false");
    let stderr = String::from_utf8(no.stderr).unwrap();
    assert!(stderr.contains("\"1.2\" is not a valid semver string"));
}

#[test]
fn test_semver_compare() {
    let output = run_cli(&["semver", "compare", "2.0.0", "1.9.9"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1");
}

#[test]
fn test_semver_next() {
    let output = run_cli(&["semver", "next", "v1.2.3", "major"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2.0.0");
}

#[test]
fn test_semver_next_rejects_unknown_part() {
    let output = run_cli(&["semver", "next", "1.2.3", "build"]);
    assert!(!output.status.success());
}

#[test]
fn test_semver_parse_invalid() {
    let output = run_cli(&["semver", "parse", "1.3"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("\"1.3\" is not a valid semver string"));
}
