// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Where issues come from.
//!
//! [`IssueSource`] is the seam between the export pipeline and the remote
//! tracker. [`GhCli`] talks to GitHub through the `gh` command line tool;
//! [`FixtureSource`] replays a saved `gh issue list` document.
//!
//! Both produce the raw `gh` JSON shapes defined here, which are converted
//! into [`arbor_core::Issue`] snapshots by [`GhIssue::into_issue`].

mod fixture;
mod gh;

pub use fixture::FixtureSource;
pub use gh::GhCli;

use arbor_core::{Comment, Issue, IssueId, IssueState, GHOST_AUTHOR};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;

/// A provider of issues and their comments.
pub trait IssueSource {
    /// Fails fast when the source cannot be used at all.
    fn check_auth(&self) -> Result<()>;

    /// Lists every issue, open and closed, in tracker order.
    fn list_issues(&self) -> Result<Vec<GhIssue>>;

    /// Fetches the comments of one issue, oldest first.
    fn fetch_comments(&self, number: IssueId) -> Result<Vec<GhComment>>;
}

/// The account behind an issue or comment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GhUser {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GhLabel {
    pub name: String,
}

/// An issue as printed by `gh issue list --json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhIssue {
    pub number: IssueId,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub author: Option<GhUser>,
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    #[serde(default)]
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A comment as printed by `gh issue view --json comments`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GhComment {
    pub id: String,
    #[serde(default)]
    pub author: Option<GhUser>,
    #[serde(default)]
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Envelope printed by `gh issue view N --json comments`.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentsEnvelope {
    #[serde(default)]
    pub comments: Vec<GhComment>,
}

fn login(author: Option<GhUser>) -> String {
    author
        .map(|user| user.login)
        .filter(|login| !login.is_empty())
        .unwrap_or_else(|| GHOST_AUTHOR.to_string())
}

impl From<GhComment> for Comment {
    fn from(raw: GhComment) -> Self {
        Comment {
            id: raw.id,
            body: raw.body,
            author: login(raw.author),
            created_at: raw.created_at,
        }
    }
}

impl GhIssue {
    /// Converts into a core snapshot carrying `comments`.
    ///
    /// Fails on a state other than open or closed.
    pub fn into_issue(self, comments: Vec<GhComment>) -> Result<Issue> {
        let state: IssueState = self.state.parse()?;
        Ok(Issue {
            id: self.number,
            title: self.title,
            state,
            author: login(self.author),
            labels: self.labels.into_iter().map(|l| l.name).collect(),
            body: self.body.unwrap_or_default(),
            created_at: self.created_at,
            comments: comments.into_iter().map(Comment::from).collect(),
            sub_issues: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
