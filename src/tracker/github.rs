use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::config::IssuesConfig;
use crate::domain::{CreatedIssue, NewIssueRequest};
use crate::error::Result;
use crate::tracker::{IssueTracker, Submission};

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Blocking client for the GitHub issues endpoint.
#[derive(Debug, Clone)]
pub struct GithubTracker {
    issues_url: String,
    token: String,
    client: Client,
}

impl GithubTracker {
    /// Create with an explicit endpoint and token.
    pub fn new(issues_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("commit-kit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(GithubTracker {
            issues_url: issues_url.into(),
            token: token.into(),
            client,
        })
    }

    /// Endpoint from `[issues]`, token from the configured environment variable.
    pub fn from_config(issues: &IssuesConfig) -> Result<Self> {
        Self::new(issues.issues_url()?, issues.token()?)
    }
}

impl IssueTracker for GithubTracker {
    fn create_issue(&self, request: &NewIssueRequest) -> Result<Submission> {
        tracing::debug!(url = %self.issues_url, title = %request.title, "creating issue");
        let response = self
            .client
            .post(&self.issues_url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .json(request)
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if status == StatusCode::CREATED {
            let issue: CreatedIssue = serde_json::from_str(&body)?;
            tracing::info!(number = issue.number, "issue created");
            Ok(Submission::Created(issue))
        } else {
            tracing::warn!(status = status.as_u16(), "issue tracker rejected request");
            Ok(Submission::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
