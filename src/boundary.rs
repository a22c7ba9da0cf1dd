use std::fmt;

/// Non-fatal problems hit while talking to the repository.
/// The workflow reports them and carries on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag requested on a repository without commits
    NoCommitsToTag { tag: String },
    /// Tag creation failed for another reason
    TagFailed { tag: String, reason: String },
    /// Base branch could not be checked out
    CheckoutFailed { branch: String, reason: String },
    /// Base branch could not be updated from its remote
    PullFailed {
        remote: String,
        branch: String,
        reason: String,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoCommitsToTag { tag } => {
                write!(f, "Repository has no commits yet, tag '{}' not created", tag)
            }
            BoundaryWarning::TagFailed { tag, reason } => {
                write!(f, "Could not create tag '{}': {}", tag, reason)
            }
            BoundaryWarning::CheckoutFailed { branch, reason } => {
                write!(f, "Could not check out '{}': {}", branch, reason)
            }
            BoundaryWarning::PullFailed {
                remote,
                branch,
                reason,
            } => write!(
                f,
                "Could not update '{}' from remote '{}': {}",
                branch, remote, reason
            ),
        }
    }
}
