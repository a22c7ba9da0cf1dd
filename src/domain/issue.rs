use serde::{Deserialize, Serialize};

/// Answers collected by the issue helper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub kind: String,
    pub priority: String,
    pub description: String,
}

impl IssueDraft {
    /// Markdown body posted to the tracker
    pub fn body(&self) -> String {
        format!(
            "### Task type\n{}\n\n### Priority\n{}\n\n### Description\n{}\n\n### Steps or acceptance criteria\n- [ ] Implement\n- [ ] Test\n- [ ] Commit\n",
            self.kind, self.priority, self.description
        )
    }

    /// JSON payload for the create-issue endpoint
    pub fn to_request(&self, labels: &[String]) -> NewIssueRequest {
        NewIssueRequest {
            title: self.title.clone(),
            body: self.body(),
            labels: labels.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Subset of the tracker's issue representation we rely on
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedIssue {
    pub number: u64,
}
