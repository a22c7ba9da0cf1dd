// tests/config_test.rs
use commit_kit::config::{load_config, Config, CONFIG_FILE_NAME};
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_default_values() {
    let config = Config::default();
    assert_eq!(config.changelog.path, "CHANGELOG.md");
    assert_eq!(config.changelog.title, "# Changelog\n\n");
    assert_eq!(config.changelog.initial_version, "1.0.0");
    assert!(!config.changelog.write_version_log);
    assert_eq!(config.changelog.version_log_path, "versionLog");

    assert!(!config.tag.create);
    assert_eq!(config.tag.pattern, "v{version}");
    assert_eq!(config.tag.message, "Version {version}");

    assert_eq!(config.issues.api_base, "https://api.github.com");
    assert_eq!(config.issues.token_env, "GH_TOKEN");
    assert_eq!(config.issues.labels, vec!["task".to_string()]);
    assert_eq!(config.issues.base_branch, "development");
    assert_eq!(config.issues.remote, "origin");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[changelog]
path = "docs/CHANGES.md"
write_version_log = true

[tag]
create = true
pattern = "release-{version}"

[issues]
owner = "acme"
repo = "widgets"
labels = ["task", "triage"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.changelog.path, "docs/CHANGES.md");
    assert!(config.changelog.write_version_log);
    // Unset keys keep their defaults
    assert_eq!(config.changelog.initial_version, "1.0.0");
    assert!(config.tag.create);
    assert_eq!(config.tag.pattern, "release-{version}");
    assert_eq!(config.tag.message, "Version {version}");
    assert_eq!(
        config.issues.issues_url().unwrap(),
        "https://api.github.com/repos/acme/widgets/issues"
    );
    assert_eq!(config.issues.labels.len(), 2);
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[changelog\npath = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_missing_explicit_file() {
    let err = load_config(Some("/nonexistent/commitkit.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[issues]\nbase_branch = \"main\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(config.unwrap().issues.base_branch, "main");
}
