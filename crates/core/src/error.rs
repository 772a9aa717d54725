// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for arbor-core operations.

use thiserror::Error;

use crate::issue::IssueId;

/// All possible errors that can occur in arbor-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("issue #{0} appears more than once in the forest")]
    DuplicateIssue(IssueId),
}

/// A specialized Result type for arbor-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
