//! Changelog and version log files on disk.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::changelog::{latest_logged_version, latest_version, prepend_entry};
use crate::domain::{ChangelogEntry, Version};
use crate::error::Result;

/// Markdown changelog, newest entry first
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    path: PathBuf,
    title: String,
}

impl ChangelogFile {
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        ChangelogFile {
            path: path.into(),
            title: title.into(),
        }
    }

    /// Whole document, `None` when the file does not exist yet
    pub fn read(&self) -> Result<Option<String>> {
        read_optional(&self.path)
    }

    /// Version of the newest entry
    pub fn latest_version(&self) -> Result<Option<Version>> {
        match self.read()? {
            Some(document) => latest_version(&document),
            None => Ok(None),
        }
    }

    /// Rewrite the file with `entry` ahead of the existing content.
    pub fn prepend(&self, entry: &ChangelogEntry) -> Result<()> {
        let existing = self.read()?;
        let document = prepend_entry(existing.as_deref(), &self.title, &entry.render());

        let mut file = File::create(&self.path)?;
        file.write_all(document.as_bytes())?;
        tracing::info!(path = %self.path.display(), version = %entry.version, "changelog updated");
        Ok(())
    }
}

/// Append-only plain-text log, newest line last
#[derive(Debug, Clone)]
pub struct VersionLog {
    path: PathBuf,
}

impl VersionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionLog { path: path.into() }
    }

    pub fn latest_version(&self) -> Result<Option<Version>> {
        match read_optional(&self.path)? {
            Some(log) => latest_logged_version(&log),
            None => Ok(None),
        }
    }

    pub fn append(&self, entry: &ChangelogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.render_log_line().as_bytes())?;
        tracing::info!(path = %self.path.display(), "version log appended");
        Ok(())
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(Some(content))
}
