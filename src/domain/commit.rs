use crate::domain::version::{Version, VersionBump};
use crate::error::{CommitKitError, Result};
use std::fmt;
use std::str::FromStr;

/// Commit categories offered by the commit helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
}

impl CommitType {
    pub const ALL: [CommitType; 5] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "New feature",
            CommitType::Fix => "Bug fix",
            CommitType::Docs => "Documentation only",
            CommitType::Style => "Formatting, semicolons, etc.",
            CommitType::Refactor => "Refactoring without functional change",
        }
    }

    /// Bump offered as the default answer to the version prompts
    pub fn suggested_bump(&self) -> VersionBump {
        match self {
            CommitType::Feat => VersionBump::minor(),
            _ => VersionBump::patch(),
        }
    }
}

impl FromStr for CommitType {
    type Err = CommitKitError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| CommitKitError::commit_type(wanted.to_string()))
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the user told us about the pending commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDetails {
    pub commit_type: CommitType,
    pub message: String,
    pub note: Option<String>,
    pub bump: VersionBump,
}

/// Render the commit message body.
///
/// Layout is `type: message`, then the note, the version and the staged
/// files, each separated by a blank line. Empty sections are left out.
pub fn render_commit_message(
    details: &CommitDetails,
    version: &Version,
    files: &[String],
    issue: Option<u64>,
) -> String {
    let mut sections = vec![format!("{}: {}", details.commit_type, details.message)];

    if let Some(note) = details.note.as_deref() {
        sections.push(note.to_string());
    }

    sections.push(format!("v{}", version));

    if !files.is_empty() {
        let list: Vec<String> = files.iter().map(|f| format!("- {}", f)).collect();
        sections.push(list.join("\n"));
    }

    if let Some(number) = issue {
        sections.push(format!("Refs #{}", number));
    }

    sections.join("\n\n")
}
