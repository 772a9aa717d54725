// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::ffi::OsString;
use std::io::ErrorKind;
use std::process::Command;

use arbor_core::IssueId;

use super::{CommentsEnvelope, GhComment, GhIssue, IssueSource};
use crate::error::{Error, Result};

/// Fields requested from `gh issue list`.
pub const LIST_FIELDS: &str = "number,title,state,author,labels,body,createdAt,updatedAt";

/// Issue source backed by the GitHub CLI.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: Vec<OsString>,
    repo: Option<String>,
    limit: u32,
}

impl GhCli {
    /// Uses `gh` from `PATH`, scoped to `repo` when given.
    pub fn new(repo: Option<String>, limit: u32) -> Self {
        Self::with_program(vec![OsString::from("gh")], repo, limit)
    }

    /// Runs `program` (a command and its leading arguments) in place of `gh`.
    pub(crate) fn with_program(program: Vec<OsString>, repo: Option<String>, limit: u32) -> Self {
        GhCli {
            program,
            repo,
            limit,
        }
    }

    /// Arguments for listing every issue.
    pub(crate) fn list_args(&self) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "list".to_string(),
            "--state".to_string(),
            "all".to_string(),
            "--json".to_string(),
            LIST_FIELDS.to_string(),
            "--limit".to_string(),
            self.limit.to_string(),
        ];
        self.push_repo(&mut args);
        args
    }

    /// Arguments for fetching one issue's comments.
    pub(crate) fn comment_args(&self, number: IssueId) -> Vec<String> {
        let mut args = vec![
            "issue".to_string(),
            "view".to_string(),
            number.to_string(),
            "--json".to_string(),
            "comments".to_string(),
        ];
        self.push_repo(&mut args);
        args
    }

    fn push_repo(&self, args: &mut Vec<String>) {
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
    }

    /// Runs gh with `args` and returns its stdout.
    fn gh(&self, args: &[String]) -> Result<Vec<u8>> {
        let Some((program, leading)) = self.program.split_first() else {
            return Err(Error::GhNotFound);
        };
        tracing::debug!("running gh {}", args.join(" "));
        let output = Command::new(program)
            .args(leading)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::GhNotFound,
                _ => Error::Io(e),
            })?;

        if !output.status.success() {
            return Err(Error::GhFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output.stdout)
    }
}

impl IssueSource for GhCli {
    fn check_auth(&self) -> Result<()> {
        match self.gh(&["auth".to_string(), "status".to_string()]) {
            Ok(_) => Ok(()),
            Err(Error::GhFailed { stderr, .. }) => {
                tracing::debug!("gh auth status: {}", stderr);
                Err(Error::NotAuthenticated)
            }
            Err(e) => Err(e),
        }
    }

    fn list_issues(&self) -> Result<Vec<GhIssue>> {
        let stdout = self.gh(&self.list_args())?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn fetch_comments(&self, number: IssueId) -> Result<Vec<GhComment>> {
        let stdout = self.gh(&self.comment_args(number))?;
        let envelope: CommentsEnvelope = serde_json::from_slice(&stdout)?;
        Ok(envelope.comments)
    }
}

#[cfg(test)]
#[path = "gh_tests.rs"]
mod tests;
