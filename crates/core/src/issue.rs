// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for arbor.
//!
//! This module contains the snapshot of one tracked item as it flows through
//! an export run: [`Issue`], its [`Comment`]s and its [`IssueState`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Numeric issue identifier, unique within a fetch batch.
pub type IssueId = u64;

/// Label marking an issue as a parent-type container.
pub const EPIC_LABEL: &str = "epic";

/// Label marking an issue as a child-type unit of work.
pub const SUB_TASK_LABEL: &str = "sub-task";

/// Author recorded when the tracker reports no author (deleted accounts).
pub const GHOST_AUTHOR: &str = "ghost";

/// Whether an issue is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssueState {
    /// Returns the string representation used in the exported document.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

/// A comment attached to an issue, in creation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Opaque identifier assigned by the tracker.
    pub id: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Immutable snapshot of one tracked item.
///
/// `sub_issues` is empty on input and only populated by
/// [`forest::build`](crate::forest::build).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub state: IssueState,
    pub author: String,
    pub labels: Vec<String>,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub sub_issues: Vec<Issue>,
}

impl Issue {
    /// Creates an open issue with no labels, body or comments.
    pub fn new(id: IssueId, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            title: title.into(),
            state: IssueState::Open,
            author: GHOST_AUTHOR.to_string(),
            labels: Vec::new(),
            body: String::new(),
            created_at,
            comments: Vec::new(),
            sub_issues: Vec::new(),
        }
    }

    /// Returns true if the issue carries `label` (case-insensitive).
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l.eq_ignore_ascii_case(label))
    }

    pub fn is_epic(&self) -> bool {
        self.has_label(EPIC_LABEL)
    }

    pub fn is_sub_task(&self) -> bool {
        self.has_label(SUB_TASK_LABEL)
    }

    /// Body followed by every comment body, separated by blank lines.
    ///
    /// Blank-line separation keeps markdown headings in comments at the
    /// start of a line.
    pub fn combined_text(&self) -> String {
        let mut text = self.body.clone();
        for comment in &self.comments {
            text.push_str("\n\n");
            text.push_str(&comment.body);
        }
        text
    }

    /// Title, body and comment bodies; the text compared by topic matching.
    pub fn topic_text(&self) -> String {
        format!("{}\n{}", self.title, self.combined_text())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
