//! Domain logic - pure rules independent of git, files and HTTP

pub mod branch;
pub mod changelog;
pub mod commit;
pub mod issue;
pub mod tag;
pub mod version;

pub use changelog::ChangelogEntry;
pub use commit::{CommitDetails, CommitType};
pub use issue::{CreatedIssue, IssueDraft, NewIssueRequest};
pub use tag::TagPattern;
pub use version::{Version, VersionBump};
