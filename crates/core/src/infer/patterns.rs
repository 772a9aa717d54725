// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Free-text relationship patterns.
//!
//! Each matcher scans an issue's combined text and returns the referenced
//! ids, skipping self-references and captures that are not valid ids.

use regex::Regex;
use std::sync::LazyLock;

use crate::issue::IssueId;

// Hard-coded patterns, verified by the tests in patterns_tests.rs.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
}

/// `Epic: #N`, with optional colon and emphasis markers.
static EPIC_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:^|[^a-z0-9])epic[*_]*\s*:?\s*[*_]*\s*#(\d+)"));

/// `<context> in #N`.
static CONTEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:^|[^a-z0-9])(?:research|installation|pipeline|task|subtask|work|part)\s+in\s+#(\d+)",
    )
});

/// Child-side phrases, in priority order.
static TEXT_PATTERN_RES: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    [
        compile(r"(?i)sub[- ]?issue\s+of\s+#(\d+)"),
        compile(r"(?i)child\s+of\s+#(\d+)"),
        compile(r"(?i)relates\s+to\s+#(\d+)"),
        compile(r"(?i)part\s+of\s+#(\d+)"),
        compile(r"(?i)sub-?task\s+of\s+#(\d+)"),
    ]
});

/// Parent-side declarations: `sub-issues: #1, #2 and #3`.
static DECLARED_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)(?:^|[^a-z0-9])(?:sub-issues?|children|subtasks?)\s*:?\s*(#\d+(?:\s*(?:,|and|&)\s*#\d+)*)",
    )
});

static ISSUE_REF_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"#(\d+)"));

/// Parses a captured id. Zero and values that overflow are not ids.
fn parse_id(digits: &str) -> Option<IssueId> {
    digits.parse::<IssueId>().ok().filter(|&id| id > 0)
}

/// Ids captured by group 1 of `re`, in text order.
fn captured_ids<'a>(re: &'a Regex, text: &'a str) -> impl Iterator<Item = IssueId> + 'a {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| parse_id(m.as_str())))
}

/// First captured id that is not `self_id`.
fn first_other(re: &Regex, text: &str, self_id: IssueId) -> Option<IssueId> {
    captured_ids(re, text).find(|&id| id != self_id)
}

/// Every `#N` token in `text`, in order.
pub fn issue_refs(text: &str) -> impl Iterator<Item = IssueId> + '_ {
    captured_ids(&ISSUE_REF_RE, text)
}

pub fn epic_reference(text: &str, self_id: IssueId) -> Option<IssueId> {
    first_other(&EPIC_RE, text, self_id)
}

pub fn context_phrase(text: &str, self_id: IssueId) -> Option<IssueId> {
    first_other(&CONTEXT_RE, text, self_id)
}

/// First hit of the first child-side phrase that matches.
pub fn text_pattern(text: &str, self_id: IssueId) -> Option<IssueId> {
    TEXT_PATTERN_RES
        .iter()
        .find_map(|re| first_other(re, text, self_id))
}

/// Ids this issue declares as its own children, deduplicated in order.
pub fn declared_children(text: &str, self_id: IssueId) -> Vec<IssueId> {
    let mut children = Vec::new();
    for caps in DECLARED_RE.captures_iter(text) {
        let Some(list) = caps.get(1) else {
            continue;
        };
        for id in issue_refs(list.as_str()) {
            if id != self_id && !children.contains(&id) {
                children.push(id);
            }
        }
    }
    children
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
