// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction of the "Related Issues" markdown section.

use regex::Regex;
use std::sync::LazyLock;

use super::patterns::issue_refs;
use crate::issue::IssueId;

const RELATED_ISSUES_HEADING: &str = "related issues";

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?m)^[ \t]{0,3}#{1,6}[ \t]+(.+)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[ \t]*(?:[-*+]|\d+[.)])[ \t]+") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Normalizes heading text: `**Related Issues:** ##` → `related issues`.
fn heading_title(raw: &str) -> String {
    raw.trim()
        .trim_end_matches('#')
        .trim()
        .trim_matches(|c| c == '*' || c == '_')
        .trim_end_matches(':')
        .trim_matches(|c| c == '*' || c == '_')
        .trim()
        .to_lowercase()
}

/// Text between the "Related Issues" heading and the next heading (or the
/// end of `text`). Only the first such section is considered.
pub fn related_issues(text: &str) -> Option<&str> {
    let mut headings = HEADING_RE.captures_iter(text);
    while let Some(caps) = headings.next() {
        let (Some(line), Some(title)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if heading_title(title.as_str()) != RELATED_ISSUES_HEADING {
            continue;
        }
        let start = line.end();
        let end = headings
            .next()
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        return text.get(start..end);
    }
    None
}

/// Every id referenced on a list-item line of `section`, in order.
pub fn list_item_refs(section: &str) -> Vec<IssueId> {
    section
        .lines()
        .filter(|line| LIST_ITEM_RE.is_match(line))
        .flat_map(issue_refs)
        .collect()
}

/// The section's parent candidate: the first list-item id, else the first
/// bare `#N` anywhere in the section.
pub fn parent_ref(section: &str, self_id: IssueId) -> Option<IssueId> {
    list_item_refs(section)
        .into_iter()
        .find(|&id| id != self_id)
        .or_else(|| issue_refs(section).find(|&id| id != self_id))
}

#[cfg(test)]
#[path = "section_tests.rs"]
mod tests;
