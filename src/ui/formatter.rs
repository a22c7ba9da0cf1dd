//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.

use crate::boundary::BoundaryWarning;
use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Display the version change computed for this commit.
pub fn display_version_change(old: &Version, new: &Version) {
    println!("\n\x1b[1mVersion:\x1b[0m");
    println!("  From: \x1b[31mv{}\x1b[0m", old);
    println!("  To:   \x1b[32mv{}\x1b[0m", new);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

pub fn display_issue_created(number: u64, title: &str) {
    display_success(&format!("Issue created: #{} - {}", number, title));
}

/// Display the tracker's refusal with its status code and raw body.
pub fn display_issue_rejected(status: u16, body: &str) {
    display_error(&format!("Failed to create issue: {} {}", status, body));
}

pub fn display_branch_created(branch: &str) {
    println!("\x1b[32m🌿\x1b[0m Branch created: \x1b[36m{}\x1b[0m", branch);
}
