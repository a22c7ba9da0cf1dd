use std::sync::Mutex;

use crate::domain::{CreatedIssue, NewIssueRequest};
use crate::error::Result;
use crate::tracker::{IssueTracker, Submission};

/// Tracker that answers every request with a fixed submission
pub struct MockTracker {
    answer: Submission,
    requests: Mutex<Vec<NewIssueRequest>>,
}

impl MockTracker {
    /// Accept every issue and assign it `number`
    pub fn accepting(number: u64) -> Self {
        Self::answering(Submission::Created(CreatedIssue { number }))
    }

    /// Refuse every issue with `status` and `body`
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::answering(Submission::Rejected {
            status,
            body: body.into(),
        })
    }

    fn answering(answer: Submission) -> Self {
        MockTracker {
            answer,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<NewIssueRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl IssueTracker for MockTracker {
    fn create_issue(&self, request: &NewIssueRequest) -> Result<Submission> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(self.answer.clone())
    }
}
