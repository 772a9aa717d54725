// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use similar_asserts::assert_eq;

const LISTED: &str = r#"{
    "number": 42,
    "title": "Add Docker support",
    "state": "OPEN",
    "author": {"id": "MDQ6", "is_bot": false, "login": "alice", "name": "Alice"},
    "labels": [{"id": "LA_1", "name": "epic", "description": "", "color": "ededed"}],
    "body": "Part of #7",
    "createdAt": "2025-08-20T12:00:00Z",
    "updatedAt": "2025-08-21T09:30:00Z"
}"#;

fn comment(id: &str, login: Option<&str>, body: &str) -> GhComment {
    GhComment {
        id: id.to_string(),
        author: login.map(|l| GhUser {
            login: l.to_string(),
        }),
        body: body.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 22, 8, 0, 0).unwrap(),
    }
}

#[test]
fn parses_gh_listing_and_ignores_extra_fields() {
    let raw: GhIssue = serde_json::from_str(LISTED).unwrap();
    assert_eq!(raw.number, 42);
    assert_eq!(raw.state, "OPEN");
    assert_eq!(raw.author.as_ref().map(|a| a.login.as_str()), Some("alice"));
    assert_eq!(raw.labels[0].name, "epic");
    assert_eq!(
        raw.updated_at,
        Some(Utc.with_ymd_and_hms(2025, 8, 21, 9, 30, 0).unwrap())
    );
}

#[test]
fn converts_to_core_issue() {
    let raw: GhIssue = serde_json::from_str(LISTED).unwrap();
    let issue = raw
        .into_issue(vec![comment("IC_1", Some("bob"), "Looks good")])
        .unwrap();

    assert_eq!(issue.id, 42);
    assert_eq!(issue.state, IssueState::Open);
    assert_eq!(issue.author, "alice");
    assert_eq!(issue.labels, vec!["epic".to_string()]);
    assert_eq!(issue.body, "Part of #7");
    assert_eq!(issue.comments.len(), 1);
    assert_eq!(issue.comments[0].author, "bob");
    assert_eq!(issue.comments[0].id, "IC_1");
    assert!(issue.sub_issues.is_empty());
}

#[test]
fn missing_author_and_body_are_filled_in() {
    let raw: GhIssue = serde_json::from_str(
        r#"{"number": 3, "title": "T", "state": "CLOSED", "author": null,
            "labels": [], "body": null, "createdAt": "2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    let issue = raw
        .into_issue(vec![comment("IC_9", None, "orphan")])
        .unwrap();

    assert_eq!(issue.state, IssueState::Closed);
    assert_eq!(issue.author, GHOST_AUTHOR);
    assert_eq!(issue.body, "");
    assert_eq!(issue.comments[0].author, GHOST_AUTHOR);
}

#[test]
fn unknown_state_is_rejected() {
    let mut raw: GhIssue = serde_json::from_str(LISTED).unwrap();
    raw.state = "MERGED".to_string();
    let err = raw.into_issue(Vec::new()).unwrap_err();
    assert!(err.to_string().contains("'MERGED'"));
}

#[test]
fn parses_comments_envelope() {
    let envelope: CommentsEnvelope = serde_json::from_str(
        r#"{"comments": [{
            "id": "IC_kwDO",
            "author": {"login": "carol"},
            "authorAssociation": "MEMBER",
            "body": "child of #1",
            "createdAt": "2025-08-23T10:00:00Z",
            "includesCreatedEdit": false,
            "reactionGroups": [],
            "url": "https://github.com/octo/widgets/issues/2#issuecomment-1",
            "viewerDidAuthor": false
        }]}"#,
    )
    .unwrap();
    assert_eq!(envelope.comments, vec![GhComment {
        id: "IC_kwDO".to_string(),
        author: Some(GhUser {
            login: "carol".to_string()
        }),
        body: "child of #1".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 23, 10, 0, 0).unwrap(),
    }]);
}

#[test]
fn empty_envelope_has_no_comments() {
    let envelope: CommentsEnvelope = serde_json::from_str("{}").unwrap();
    assert!(envelope.comments.is_empty());
}
