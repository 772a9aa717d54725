// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `arbor` binary with a clean, uncolored environment.
pub fn arbor() -> Command {
    let mut cmd = cargo_bin_cmd!("arbor");
    cmd.env_remove("ARBOR_CONFIG")
        .env_remove("ARBOR_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// A saved `gh issue list` document with embedded comments.
///
/// 123 declares 124 and 125 as sub-issues, 126 is a child of 124 and 127
/// stands alone.
pub const LISTING: &str = r##"[
  {
    "number": 123,
    "title": "Main feature implementation",
    "state": "OPEN",
    "author": {"login": "alice"},
    "labels": [{"name": "feature"}, {"name": "priority-high"}],
    "body": "This is the main issue for implementing the new feature.\n\nSub-issues: #124, #125",
    "createdAt": "2025-08-20T12:34:56Z",
    "updatedAt": "2025-08-21T10:15:30Z",
    "comments": [
      {"id": "456", "author": {"login": "alice"}, "body": "This looks good, let's proceed with the sub-tasks.", "createdAt": "2025-08-21T14:30:00Z"},
      {"id": "457", "author": {"login": "bob"}, "body": "I'll work on the frontend part #124", "createdAt": "2025-08-22T09:00:00Z"}
    ]
  },
  {
    "number": 124,
    "title": "Sub-task: Frontend implementation",
    "state": "OPEN",
    "author": {"login": "bob"},
    "labels": [{"name": "frontend"}, {"name": "feature"}],
    "body": "Sub-issue of #123\n\nImplement the frontend components.",
    "createdAt": "2025-08-22T12:34:56Z",
    "updatedAt": "2025-08-22T14:20:10Z",
    "comments": [
      {"id": "500", "author": {"login": "bob"}, "body": "Started working on this. Need to create sub-task #126 for the complex component.", "createdAt": "2025-08-25T11:00:00Z"}
    ]
  },
  {
    "number": 125,
    "title": "Sub-task: Backend API",
    "state": "CLOSED",
    "author": {"login": "charlie"},
    "labels": [{"name": "backend"}, {"name": "feature"}],
    "body": "Part of #123\n\nImplement the backend API endpoints.",
    "createdAt": "2025-08-22T13:45:20Z",
    "updatedAt": "2025-08-25T09:30:45Z"
  },
  {
    "number": 126,
    "title": "Nested sub-task",
    "state": "OPEN",
    "author": {"login": "alice"},
    "labels": [{"name": "subtask"}],
    "body": "Child of #124\n\nThis is a nested sub-task.",
    "createdAt": "2025-08-25T12:34:56Z",
    "updatedAt": "2025-08-25T12:34:56Z"
  },
  {
    "number": 127,
    "title": "Independent issue",
    "state": "OPEN",
    "author": null,
    "labels": [{"name": "bug"}],
    "body": "This is an independent issue with no relationships.",
    "createdAt": "2025-08-26T08:15:30Z",
    "updatedAt": "2025-08-26T08:15:30Z"
  }
]"##;

/// Writes `content` to `name` inside `temp` and returns the path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Parses an exported forest.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Ids of a JSON array of issues.
pub fn ids(nodes: &serde_json::Value) -> Vec<u64> {
    nodes
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_u64().unwrap())
        .collect()
}
