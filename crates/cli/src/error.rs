// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use arbor_core::IssueId;
use thiserror::Error;

/// All possible errors that can occur in the arborrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("GitHub CLI is not authenticated\n  hint: run 'gh auth login' first")]
    NotAuthenticated,

    #[error("GitHub CLI not found\n  hint: install gh from https://cli.github.com")]
    GhNotFound,

    #[error("'gh {command}' failed: {stderr}")]
    GhFailed { command: String, stderr: String },

    #[error("invalid issue data: {0}")]
    InvalidIssue(String),

    #[error("invalid issue state: '{0}'\n  hint: valid states are: open, closed")]
    InvalidState(String),

    #[error("issue #{0} appears more than once in the forest")]
    DuplicateIssue(IssueId),

    #[error("invalid repository '{0}'\n  hint: use the form owner/name")]
    InvalidRepo(String),

    #[error("export path cannot be empty")]
    ExportPathEmpty,

    #[error("no countdown target\n  hint: pass --target or set countdown.target in the config")]
    MissingTarget,

    #[error("invalid timestamp: {reason}")]
    InvalidTimestamp { reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for arborrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<arbor_core::Error> for Error {
    fn from(e: arbor_core::Error) -> Self {
        match e {
            arbor_core::Error::InvalidState(s) => Error::InvalidState(s),
            arbor_core::Error::DuplicateIssue(id) => Error::DuplicateIssue(id),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
