//! Changelog entry rendering and document merging.
//!
//! Pure string functions; reading and writing the file lives in
//! [`crate::changelog`].

use crate::domain::commit::CommitType;
use crate::domain::version::Version;
use crate::error::Result;
use regex::Regex;

/// Title written at the top of a freshly created changelog
pub const CHANGELOG_TITLE: &str = "# Changelog\n\n";

const VERSION_HEADER: &str = r"v(\d+\.\d+\.\d+)";

/// One release block of the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: Version,
    pub date: String,
    pub commit_type: CommitType,
    pub message: String,
    pub note: Option<String>,
    pub files: Vec<String>,
}

impl ChangelogEntry {
    /// Render the Markdown block for this entry
    pub fn render(&self) -> String {
        let mut entry = format!(
            "## v{} [{}]\n **{}**: {}",
            self.version, self.date, self.commit_type, self.message
        );

        if let Some(note) = self.note.as_deref() {
            entry.push_str(&format!("\n- {}", note));
        }

        if !self.files.is_empty() {
            entry.push_str("\n\nModified files:\n");
            for file in &self.files {
                entry.push_str(&format!("- `{}`\n", file));
            }
        }

        entry.push_str("\n\n");
        entry
    }

    /// Render the single-line form kept in the plain-text version log
    pub fn render_log_line(&self) -> String {
        let mut line = format!(
            "[{}] {}: {} | {} (v{})\n",
            self.date,
            self.commit_type,
            self.message,
            self.note.as_deref().unwrap_or(""),
            self.version
        );

        if !self.files.is_empty() {
            line.push_str("Modified files:\n");
            for file in &self.files {
                line.push_str(&format!("  - {}\n", file));
            }
            line.push('\n');
        }

        line
    }
}

/// Insert a rendered entry ahead of everything already in the document.
///
/// `None` means the document does not exist yet; it is created with `title`.
/// The title is only ever written on creation, so it appears once no matter
/// how many entries are added.
pub fn prepend_entry(existing: Option<&str>, title: &str, entry: &str) -> String {
    match existing {
        Some(existing) => format!("{}{}", entry, existing),
        None => format!("{}{}", title, entry),
    }
}

/// First `vX.Y.Z` found in the document, which is the newest entry
pub fn latest_version(document: &str) -> Result<Option<Version>> {
    let re = Regex::new(VERSION_HEADER)?;
    match re.captures(document).and_then(|c| c.get(1)) {
        Some(found) => Ok(Some(Version::parse(found.as_str())?)),
        None => Ok(None),
    }
}

/// Last `vX.Y.Z` found in an append-only log, which is the newest line
pub fn latest_logged_version(log: &str) -> Result<Option<Version>> {
    let re = Regex::new(VERSION_HEADER)?;
    for line in log.lines().rev() {
        if let Some(found) = re.captures(line).and_then(|c| c.get(1)) {
            return Ok(Some(Version::parse(found.as_str())?));
        }
    }
    Ok(None)
}
