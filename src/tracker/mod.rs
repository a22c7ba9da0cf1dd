//! Issue tracker abstraction
//!
//! [`IssueTracker`] is the seam between the issue workflow and the hosted
//! tracker. [`github::GithubTracker`] talks to a GitHub-compatible REST API;
//! [`mock::MockTracker`] answers from memory for tests.

pub mod github;
pub mod mock;

pub use github::GithubTracker;
pub use mock::MockTracker;

use crate::domain::{CreatedIssue, NewIssueRequest};
use crate::error::Result;

/// Tracker answer to a create-issue request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The tracker acknowledged the issue (HTTP 201)
    Created(CreatedIssue),
    /// Any other status, with the raw response body
    Rejected { status: u16, body: String },
}

pub trait IssueTracker {
    /// Submit a new issue. Transport failures are errors; a refusal by the
    /// tracker is a [`Submission::Rejected`].
    fn create_issue(&self, request: &NewIssueRequest) -> Result<Submission>;
}
