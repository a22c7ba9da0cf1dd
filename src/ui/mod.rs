//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::domain::branch::branch_kind;
use crate::domain::{CommitDetails, CommitType, IssueDraft, VersionBump};
use crate::error::{CommitKitError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_branch_created, display_error, display_issue_created,
    display_issue_rejected, display_success, display_version_change,
};

const BUMP_HELP: [(&str, &str); 3] = [
    ("major", "(1).0.0 - Incompatible change that breaks backward compatibility."),
    ("minor", "1.(1).0 - New functionality, backward compatible."),
    ("patch", "1.1.(1) - Bug fix or small improvement."),
];

/// Line-oriented prompts over any reader/writer pair.
///
/// End of input on any prompt yields [`CommitKitError::InputAborted`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompts on the terminal
    pub fn stdio() -> Self {
        Prompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Give back the writer, mostly so tests can inspect what was shown
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label`, read one line and return it trimmed.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CommitKitError::InputAborted);
        }
        Ok(line.trim().to_string())
    }

    /// Like [`ask`](Self::ask), but an empty answer is `None`
    pub fn ask_optional(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    /// Non-negative integer, `default` on empty input
    pub fn ask_number(&mut self, label: &str, default: u32) -> Result<u32> {
        let answer = self.ask(&format!("{} [default: {}]: ", label, default))?;
        if answer.is_empty() {
            return Ok(default);
        }
        answer
            .parse::<u32>()
            .map_err(|_| CommitKitError::number(format!("{}: '{}'", label, answer)))
    }

    /// Show the commit types and read one of them
    pub fn select_commit_type(&mut self) -> Result<CommitType> {
        writeln!(self.output, "\nSelect the commit type:")?;
        for commit_type in CommitType::ALL {
            writeln!(
                self.output,
                "{} - {}",
                commit_type.as_str(),
                commit_type.description()
            )?;
        }
        self.ask("\nType: ")?.parse()
    }

    /// Full commit questionnaire: type, message, note and version change
    pub fn ask_commit_details(&mut self) -> Result<CommitDetails> {
        let commit_type = self.select_commit_type()?;
        let message = self.ask("\nCommit message: ")?;
        let note = self.ask_optional("Additional information (optional): ")?;

        writeln!(self.output, "\nEnter the version change:")?;
        for (name, help) in BUMP_HELP {
            writeln!(self.output, "{} - {}", name, help)?;
        }

        let suggested = commit_type.suggested_bump();
        let bump = VersionBump::new(
            self.ask_number("\nMAJOR", suggested.major)?,
            self.ask_number("MINOR", suggested.minor)?,
            self.ask_number("PATCH", suggested.patch)?,
        );

        Ok(CommitDetails {
            commit_type,
            message,
            note,
            bump,
        })
    }

    /// Issue questionnaire
    pub fn ask_issue_draft(&mut self) -> Result<IssueDraft> {
        writeln!(self.output, "Create a new issue for a task")?;
        let title = self.ask("Task title: ")?;
        let kind = branch_kind(&self.ask("Type (feat, fix, chore, improvement...): ")?)?;
        let priority = self.ask("Priority (High, Medium, Low): ")?;
        let description = self.ask("Short description: ")?;

        Ok(IssueDraft {
            title,
            kind,
            priority,
            description,
        })
    }
}
