//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations the helpers need, allowing the workflows to run against a real
//! repository or against a mock in tests.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A recording implementation for testing
//!
//! Workflow code depends on the [Repository] trait only.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::PathBuf;

/// Common git operation trait for abstraction
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// `git2::Error` into [crate::error::CommitKitError::Git] through `?`.
pub trait Repository {
    /// Path of the file git reads the pending commit message from
    fn commit_message_path(&self) -> PathBuf;

    /// Paths staged in the index relative to HEAD
    ///
    /// On a repository without commits every index entry counts as staged.
    fn staged_paths(&self) -> Result<Vec<String>>;

    /// Add files to the index
    ///
    /// # Arguments
    /// * `paths` - Paths relative to the current directory
    fn stage_paths(&self, paths: &[String]) -> Result<()>;

    /// Whether HEAD points at a commit
    fn has_commits(&self) -> Result<bool>;

    /// Create an annotated tag on HEAD
    ///
    /// # Arguments
    /// * `name` - Tag name (e.g., "v1.2.0")
    /// * `message` - Tag annotation
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Name of the checked out branch, `None` when HEAD is detached
    fn current_branch(&self) -> Result<Option<String>>;

    /// Check out an existing local branch
    fn checkout_branch(&self, name: &str) -> Result<()>;

    /// Fetch a branch from a remote and fast-forward the local branch
    ///
    /// Diverged branches are left untouched.
    fn pull(&self, remote: &str, branch: &str) -> Result<()>;

    /// Create a branch at HEAD and check it out
    fn create_branch(&self, name: &str) -> Result<()>;
}
