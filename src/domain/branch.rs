use regex::Regex;

use crate::error::{CommitKitError, Result};

/// Turn free text into a branch-safe fragment.
///
/// Lowercases and trims, replaces each run of characters other than word
/// characters and `-` with a single `-`, then strips `-` from both ends.
pub fn slugify(text: &str) -> Result<String> {
    let re = Regex::new(r"[^\w\-]+")?;
    let lowered = text.trim().to_lowercase();
    let replaced = re.replace_all(&lowered, "-");
    Ok(replaced.trim_matches('-').to_string())
}

/// Check that an issue type can lead a branch name and return it trimmed.
///
/// Accepts word characters, `-` and `.`, starting with a word character.
pub fn branch_kind(kind: &str) -> Result<String> {
    let re = Regex::new(r"^\w[\w.\-]*$")?;
    let kind = kind.trim();
    if !re.is_match(kind) || kind.ends_with('.') || kind.ends_with(".lock") || kind.contains("..")
    {
        return Err(CommitKitError::branch(format!(
            "'{}' cannot be used as a branch prefix",
            kind
        )));
    }
    Ok(kind.to_string())
}

/// Branch name for a freshly created issue: `{kind}/{slug}-{number}`
pub fn issue_branch_name(kind: &str, title: &str, number: u64) -> Result<String> {
    Ok(format!("{}/{}-{}", branch_kind(kind)?, slugify(title)?, number))
}

/// Trailing issue number of a branch created by [`issue_branch_name`]
pub fn issue_number_from_branch(branch: &str) -> Result<Option<u64>> {
    let re = Regex::new(r".*-(\d+)$")?;
    Ok(re
        .captures(branch)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok()))
}
