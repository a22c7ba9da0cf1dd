//! Main workflow orchestration logic
//!
//! Both helpers are a straight sequence of prompts, file writes and git calls.
//! The sequences live here so the binaries only parse arguments, wire the real
//! collaborators and report the outcome.

use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::boundary::BoundaryWarning;
use crate::changelog::{ChangelogFile, VersionLog};
use crate::config::{ChangelogConfig, Config, IssuesConfig};
use crate::domain::branch::{issue_branch_name, issue_number_from_branch};
use crate::domain::commit::render_commit_message;
use crate::domain::{ChangelogEntry, TagPattern, Version};
use crate::error::Result;
use crate::git::Repository;
use crate::tracker::{IssueTracker, Submission};
use crate::ui::Prompter;

/// Timestamp layout used in changelog headers and the version log
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Arguments for the commit workflow
///
/// Decoupled from the clap `Args` so the workflow can be driven from tests.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitWorkflowArgs {
    /// Directory the configured changelog paths are relative to
    pub work_dir: PathBuf,

    /// Create an annotated tag even when `tag.create` is off
    pub create_tag: bool,

    /// Moment recorded in the changelog entry
    pub timestamp: NaiveDateTime,
}

/// Result of a successful commit workflow
#[derive(Debug, Clone, PartialEq)]
pub struct CommitWorkflowResult {
    pub previous_version: Version,
    pub version: Version,

    /// Commit message, also written to the repository's COMMIT_EDITMSG
    pub message: String,

    /// Tag that was created, if any
    pub tag: Option<String>,

    pub warnings: Vec<BoundaryWarning>,
}

/// Version recorded by the newest changelog entry.
///
/// Falls back to the version log, then to `initial_version`.
pub fn current_version(
    config: &ChangelogConfig,
    changelog: &ChangelogFile,
    version_log: Option<&VersionLog>,
) -> Result<Version> {
    if let Some(version) = changelog.latest_version()? {
        return Ok(version);
    }
    if let Some(log) = version_log {
        if let Some(version) = log.latest_version()? {
            return Ok(version);
        }
    }
    Version::parse(&config.initial_version)
}

/// Commit workflow
///
/// 1. Ask for type, message, note and version change
/// 2. Recover the current version and bump it
/// 3. Prepend the changelog entry (and append the version log)
/// 4. Optionally tag HEAD
/// 5. Stage the changelog files
/// 6. Write the commit message
pub fn run_commit_workflow<R, I, W>(
    args: &CommitWorkflowArgs,
    config: &Config,
    repo: &R,
    prompter: &mut Prompter<I, W>,
) -> Result<CommitWorkflowResult>
where
    R: Repository + ?Sized,
    I: BufRead,
    W: Write,
{
    let details = prompter.ask_commit_details()?;

    let changelog = ChangelogFile::new(
        args.work_dir.join(&config.changelog.path),
        config.changelog.title.as_str(),
    );
    let version_log = config
        .changelog
        .write_version_log
        .then(|| VersionLog::new(args.work_dir.join(&config.changelog.version_log_path)));

    let previous_version = current_version(&config.changelog, &changelog, version_log.as_ref())?;
    let version = previous_version.bump(&details.bump)?;
    tracing::info!(from = %previous_version, to = %version, "version bumped");

    let files = repo.staged_paths()?;

    let entry = ChangelogEntry {
        version,
        date: args.timestamp.format(DATE_FORMAT).to_string(),
        commit_type: details.commit_type,
        message: details.message.clone(),
        note: details.note.clone(),
        files: files.clone(),
    };
    changelog.prepend(&entry)?;
    if let Some(log) = &version_log {
        log.append(&entry)?;
    }

    let mut warnings = Vec::new();
    let mut tag = None;
    if args.create_tag || config.tag.create {
        let name = TagPattern::new(config.tag.pattern.as_str()).format(&version);
        let message = TagPattern::new(config.tag.message.as_str()).format(&version);

        if !repo.has_commits()? {
            warnings.push(BoundaryWarning::NoCommitsToTag { tag: name });
        } else if let Err(e) = repo.create_annotated_tag(&name, &message) {
            warnings.push(BoundaryWarning::TagFailed {
                tag: name,
                reason: e.to_string(),
            });
        } else {
            tag = Some(name);
        }
    }

    let mut to_stage = vec![config.changelog.path.clone()];
    if version_log.is_some() {
        to_stage.push(config.changelog.version_log_path.clone());
    }
    repo.stage_paths(&to_stage)?;

    let issue = match repo.current_branch()? {
        Some(branch) => issue_number_from_branch(&branch)?,
        None => None,
    };

    let message = render_commit_message(&details, &version, &files, issue);
    fs::write(repo.commit_message_path(), &message)?;

    for warning in &warnings {
        tracing::warn!(%warning, "commit workflow");
    }

    Ok(CommitWorkflowResult {
        previous_version,
        version,
        message,
        tag,
        warnings,
    })
}

/// Result of the issue workflow
#[derive(Debug, Clone, PartialEq)]
pub enum IssueWorkflowResult {
    /// Issue accepted and the work branch checked out
    Created {
        number: u64,
        title: String,
        branch: String,
        warnings: Vec<BoundaryWarning>,
    },
    /// Tracker refused the issue; no branch was created
    Rejected { status: u16, body: String },
}

/// Issue workflow
///
/// 1. Ask for title, type, priority and description
/// 2. Submit the issue
/// 3. On success, update the base branch and branch off it
pub fn run_issue_workflow<T, R, I, W>(
    config: &IssuesConfig,
    tracker: &T,
    repo: &R,
    prompter: &mut Prompter<I, W>,
) -> Result<IssueWorkflowResult>
where
    T: IssueTracker + ?Sized,
    R: Repository + ?Sized,
    I: BufRead,
    W: Write,
{
    let draft = prompter.ask_issue_draft()?;
    let request = draft.to_request(&config.labels);

    let issue = match tracker.create_issue(&request)? {
        Submission::Created(issue) => issue,
        Submission::Rejected { status, body } => {
            return Ok(IssueWorkflowResult::Rejected { status, body });
        }
    };

    let branch = issue_branch_name(&draft.kind, &draft.title, issue.number)?;
    let mut warnings = Vec::new();

    if let Err(e) = repo.checkout_branch(&config.base_branch) {
        warnings.push(BoundaryWarning::CheckoutFailed {
            branch: config.base_branch.clone(),
            reason: e.to_string(),
        });
    } else if let Err(e) = repo.pull(&config.remote, &config.base_branch) {
        warnings.push(BoundaryWarning::PullFailed {
            remote: config.remote.clone(),
            branch: config.base_branch.clone(),
            reason: e.to_string(),
        });
    }

    repo.create_branch(&branch)?;
    tracing::info!(number = issue.number, %branch, "work branch created");

    Ok(IssueWorkflowResult::Created {
        number: issue.number,
        title: draft.title,
        branch,
        warnings,
    })
}
