// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::path::Path;

use arbor_core::IssueId;
use serde::Deserialize;

use super::{GhComment, GhIssue, IssueSource};
use crate::error::{Error, Result};

/// One entry of a saved listing: a `gh issue list` record that may also
/// embed the `comments` array printed by `gh issue view`.
#[derive(Deserialize)]
struct FixtureIssue {
    #[serde(flatten)]
    issue: GhIssue,
    #[serde(default)]
    comments: Vec<GhComment>,
}

/// Issue source that replays a JSON file instead of calling GitHub.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    issues: Vec<GhIssue>,
    comments: HashMap<IssueId, Vec<GhComment>>,
}

impl FixtureSource {
    /// Reads a saved listing, keeping at most `limit` issues.
    pub fn open(path: &Path, limit: u32) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidIssue(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content, limit)
    }

    pub fn parse(content: &str, limit: u32) -> Result<Self> {
        let entries: Vec<FixtureIssue> = serde_json::from_str(content)?;
        let mut source = FixtureSource::default();
        for entry in entries.into_iter().take(limit as usize) {
            // A repeated number keeps the comments of its first occurrence,
            // the same occurrence the forest keeps.
            source
                .comments
                .entry(entry.issue.number)
                .or_insert(entry.comments);
            source.issues.push(entry.issue);
        }
        Ok(source)
    }
}

impl IssueSource for FixtureSource {
    fn check_auth(&self) -> Result<()> {
        Ok(())
    }

    fn list_issues(&self) -> Result<Vec<GhIssue>> {
        Ok(self.issues.clone())
    }

    fn fetch_comments(&self, number: IssueId) -> Result<Vec<GhComment>> {
        Ok(self.comments.get(&number).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
