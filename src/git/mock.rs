use crate::error::{CommitKitError, Result};
use crate::git::Repository;
use std::path::PathBuf;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Every mutating call is recorded as a short string in [`MockRepository::actions`].
pub struct MockRepository {
    git_dir: PathBuf,
    staged: Vec<String>,
    branch: Option<String>,
    has_commits: bool,
    failing: Vec<String>,
    actions: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a new mock repository whose git directory is `git_dir`
    pub fn new(git_dir: impl Into<PathBuf>) -> Self {
        MockRepository {
            git_dir: git_dir.into(),
            staged: Vec::new(),
            branch: Some("main".to_string()),
            has_commits: true,
            failing: Vec::new(),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Paths reported as staged
    pub fn with_staged(mut self, paths: &[&str]) -> Self {
        self.staged = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Branch reported as checked out
    pub fn with_branch(mut self, branch: Option<&str>) -> Self {
        self.branch = branch.map(str::to_string);
        self
    }

    pub fn with_commits(mut self, has_commits: bool) -> Self {
        self.has_commits = has_commits;
        self
    }

    /// Make the named operation (e.g. "pull", "checkout") fail
    pub fn failing(mut self, operation: &str) -> Self {
        self.failing.push(operation.to_string());
        self
    }

    /// Recorded mutating calls, in order
    pub fn actions(&self) -> Vec<String> {
        self.actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    fn record(&self, operation: &str, detail: String) -> Result<()> {
        if self.failing.iter().any(|f| f == operation) {
            return Err(CommitKitError::repository(format!("mock {} failed", operation)));
        }
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(detail);
        }
        Ok(())
    }
}

impl Repository for MockRepository {
    fn commit_message_path(&self) -> PathBuf {
        self.git_dir.join("COMMIT_EDITMSG")
    }

    fn staged_paths(&self) -> Result<Vec<String>> {
        Ok(self.staged.clone())
    }

    fn stage_paths(&self, paths: &[String]) -> Result<()> {
        self.record("stage", format!("stage {}", paths.join(" ")))
    }

    fn has_commits(&self) -> Result<bool> {
        Ok(self.has_commits)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        if !self.has_commits {
            return Err(CommitKitError::repository("HEAD has no commits"));
        }
        self.record("tag", format!("tag {} {}", name, message))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.branch.clone())
    }

    fn checkout_branch(&self, name: &str) -> Result<()> {
        self.record("checkout", format!("checkout {}", name))
    }

    fn pull(&self, remote: &str, branch: &str) -> Result<()> {
        self.record("pull", format!("pull {} {}", remote, branch))
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        self.record("branch", format!("branch {}", name))
    }
}
