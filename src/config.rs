use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::changelog::CHANGELOG_TITLE;
use crate::error::{CommitKitError, Result};

/// Project-local configuration file name
pub const CONFIG_FILE_NAME: &str = "commitkit.toml";

/// Represents the complete configuration for commit-kit.
///
/// Contains changelog locations, tagging behavior and issue tracker settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub tag: TagConfig,

    #[serde(default)]
    pub issues: IssuesConfig,
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_changelog_title() -> String {
    CHANGELOG_TITLE.to_string()
}

fn default_version_log_path() -> String {
    "versionLog".to_string()
}

fn default_initial_version() -> String {
    "1.0.0".to_string()
}

/// Where release notes are written and how the current version is found.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: String,

    #[serde(default = "default_changelog_title")]
    pub title: String,

    /// Also append to the plain-text version log
    #[serde(default)]
    pub write_version_log: bool,

    #[serde(default = "default_version_log_path")]
    pub version_log_path: String,

    /// Version assumed when no entry records one yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            path: default_changelog_path(),
            title: default_changelog_title(),
            write_version_log: false,
            version_log_path: default_version_log_path(),
            initial_version: default_initial_version(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_tag_message() -> String {
    "Version {version}".to_string()
}

/// Annotated tag creation after the changelog is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagConfig {
    #[serde(default)]
    pub create: bool,

    #[serde(default = "default_tag_pattern")]
    pub pattern: String,

    #[serde(default = "default_tag_message")]
    pub message: String,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            create: false,
            pattern: default_tag_pattern(),
            message: default_tag_message(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_token_env() -> String {
    "GH_TOKEN".to_string()
}

fn default_labels() -> Vec<String> {
    vec!["task".to_string()]
}

fn default_base_branch() -> String {
    "development".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Issue tracker endpoint and the branch new work starts from.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IssuesConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default)]
    pub owner: String,

    #[serde(default)]
    pub repo: String,

    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    #[serde(default = "default_base_branch")]
    pub base_branch: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for IssuesConfig {
    fn default() -> Self {
        IssuesConfig {
            api_base: default_api_base(),
            owner: String::new(),
            repo: String::new(),
            token_env: default_token_env(),
            labels: default_labels(),
            base_branch: default_base_branch(),
            remote: default_remote(),
        }
    }
}

impl IssuesConfig {
    /// Create-issue endpoint for the configured repository
    pub fn issues_url(&self) -> Result<String> {
        if self.owner.is_empty() || self.repo.is_empty() {
            return Err(CommitKitError::config(
                "issues.owner and issues.repo must be set",
            ));
        }
        Ok(format!(
            "{}/repos/{}/{}/issues",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        ))
    }

    /// Read the API token from the configured environment variable
    pub fn token(&self) -> Result<String> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(CommitKitError::config(format!(
                "environment variable {} is not set",
                self.token_env
            ))),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `commitkit.toml` in current directory
/// 3. `.commitkit.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| CommitKitError::config(e.to_string()))?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_url() {
        let issues = IssuesConfig {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
            api_base: "https://api.github.com/".to_string(),
            ..IssuesConfig::default()
        };
        assert_eq!(
            issues.issues_url().unwrap(),
            "https://api.github.com/repos/acme/widgets/issues"
        );
    }

    #[test]
    fn test_issues_url_requires_repo() {
        let err = IssuesConfig::default().issues_url().unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_token_missing() {
        let issues = IssuesConfig {
            token_env: "COMMIT_KIT_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            ..IssuesConfig::default()
        };
        assert!(issues.token().is_err());
    }
}
