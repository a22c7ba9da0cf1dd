use thiserror::Error;

/// Unified error type for commit-kit operations
#[derive(Error, Debug)]
pub enum CommitKitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Invalid commit type: {0}")]
    CommitType(String),

    #[error("Invalid number: {0}")]
    Number(String),

    #[error("Input aborted")]
    InputAborted,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in commit-kit
pub type Result<T> = std::result::Result<T, CommitKitError>;

impl CommitKitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CommitKitError::Config(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        CommitKitError::Branch(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        CommitKitError::Version(msg.into())
    }

    /// Create an invalid commit type error
    pub fn commit_type(msg: impl Into<String>) -> Self {
        CommitKitError::CommitType(msg.into())
    }

    /// Create an invalid number error
    pub fn number(msg: impl Into<String>) -> Self {
        CommitKitError::Number(msg.into())
    }

    /// Create a repository error for index and working tree problems
    pub fn repository(msg: impl Into<String>) -> Self {
        CommitKitError::Repository(msg.into())
    }

    /// True when the user closed stdin before answering a prompt.
    pub fn is_aborted(&self) -> bool {
        matches!(self, CommitKitError::InputAborted)
    }
}
