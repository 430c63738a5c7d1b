// tests/config_test.rs
use roman_semver::config::{load_config, Config, LOCAL_CONFIG_FILE};
use roman_semver::VersionBump;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[roman]
lowercase = true

[version]
default_bump = "major"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(config.roman.lowercase);
    assert_eq!(config.version.default_bump, VersionBump::Major);
    assert_eq!(config.version.prefixes, vec!["v", "V"]);
}

#[test]
#[serial]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/config_lowercase.toml"))
        .expect("Failed to load test config");
    assert!(config.roman.lowercase);
    assert_eq!(config.version.default_bump, VersionBump::Minor);
    assert_eq!(config.version.strip_prefix("release-2.0.0"), "2.0.0");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[roman\nlowercase = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_file_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[version]\ndefault_bump = \"minor\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().version.default_bump, VersionBump::Minor);
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert!(!config.roman.lowercase);
    assert_eq!(config.version.default_bump, VersionBump::Patch);
}
