// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::Comment;
use chrono::{TimeZone, Utc};

fn issue(id: IssueId, body: &str) -> Issue {
    let mut issue = Issue::new(
        id,
        format!("Issue {}", id),
        Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap(),
    );
    issue.body = body.to_string();
    issue
}

fn labeled(id: IssueId, title: &str, body: &str, labels: &[&str]) -> Issue {
    let mut issue = issue(id, body);
    issue.title = title.to_string();
    issue.labels = labels.iter().map(|l| l.to_string()).collect();
    issue
}

fn with_comment(mut issue: Issue, body: &str) -> Issue {
    issue.comments.push(Comment {
        id: format!("IC_{}", issue.comments.len()),
        body: body.to_string(),
        author: "bob".to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 8, 21, 0, 0, 0).unwrap(),
    });
    issue
}

#[test]
fn sub_issue_of_yields_parent() {
    let inference = infer(&issue(123, "Sub-issue of #100"));
    assert_eq!(inference.parent, Some((100, Rule::TextPattern)));
    assert!(inference.children.is_empty());
}

#[test]
fn empty_issue_infers_nothing() {
    assert_eq!(infer(&issue(1, "")), Inference::default());
}

#[test]
fn self_reference_never_recorded() {
    let issue = issue(
        5,
        "Epic: #5\nwork in #5\n### Related Issues\n- #5\nchild of #5\nsub-issues: #5",
    );
    assert_eq!(infer(&issue), Inference::default());
    let map = InferenceEngine::default().infer_all(&[issue]);
    assert!(map.is_empty());
}

#[test]
fn epic_reference_outranks_everything() {
    let inference = infer(&issue(
        10,
        "child of #1\nwork in #2\n### Related Issues\n- #3\n\n**Epic:** #4",
    ));
    assert_eq!(inference.parent, Some((4, Rule::EpicReference)));
}

#[test]
fn context_phrase_outranks_section_and_text() {
    let inference = infer(&issue(10, "child of #1\nResearch in #2\n### Related Issues\n- #3"));
    assert_eq!(inference.parent, Some((2, Rule::ContextPhrase)));
}

#[test]
fn related_section_outranks_text_pattern() {
    let inference = infer(&issue(10, "child of #1\n\n### Related Issues\n- #3\n- #4"));
    assert_eq!(inference.parent, Some((3, Rule::RelatedIssues)));
}

#[test]
fn epic_related_section_declares_children() {
    let epic = labeled(50, "Epic", "### Related Issues\n- #5\n- #7\n", &["epic"]);
    let inference = infer(&epic);
    assert_eq!(inference.parent, None);
    assert_eq!(
        inference.children,
        vec![(5, Rule::RelatedIssues), (7, Rule::RelatedIssues)]
    );

    let map = InferenceEngine::default().infer_all(&[epic]);
    assert_eq!(map.parent_of(5), Some(50));
    assert_eq!(map.parent_of(7), Some(50));
    assert!(!map.has_parent(50));
}

#[test]
fn epic_can_still_have_text_parent() {
    let epic = labeled(
        50,
        "Epic",
        "Part of #1\n\n### Related Issues\n- #5\n",
        &["epic"],
    );
    let inference = infer(&epic);
    assert_eq!(inference.parent, Some((1, Rule::TextPattern)));
    assert_eq!(inference.children, vec![(5, Rule::RelatedIssues)]);
}

#[test]
fn comments_are_scanned() {
    let issue = with_comment(issue(8, "Nothing here"), "Turns out this is part of #2");
    assert_eq!(infer(&issue).parent, Some((2, Rule::TextPattern)));
}

#[test]
fn related_section_heading_in_comment() {
    let issue = with_comment(issue(8, "Body"), "### Related Issues\n- #6");
    assert_eq!(infer(&issue).parent, Some((6, Rule::RelatedIssues)));
}

#[test]
fn declared_children_follow_parent_rules() {
    let inference = infer(&issue(123, "Part of #1\n\nSub-issues: #124, #125"));
    assert_eq!(inference.parent, Some((1, Rule::TextPattern)));
    assert_eq!(
        inference.children,
        vec![(124, Rule::DeclaredChildren), (125, Rule::DeclaredChildren)]
    );
}

#[test]
fn earlier_assignment_is_never_overridden() {
    // 2 names 1 as parent first; the epic processed later cannot take 2
    let issues = vec![
        issue(2, "child of #1"),
        labeled(9, "Epic", "### Related Issues\n- #2\n- #3", &["epic"]),
    ];
    let map = InferenceEngine::default().infer_all(&issues);
    assert_eq!(map.parent_of(2), Some(1));
    assert_eq!(map.get(2).map(|r| r.rule), Some(Rule::TextPattern));
    assert_eq!(map.parent_of(3), Some(9));
}

#[test]
fn later_epic_assignment_is_visible() {
    let issues = vec![
        issue(3, "no relation text"),
        labeled(9, "Epic", "### Related Issues\n- #3", &["epic"]),
    ];
    let map = InferenceEngine::default().infer_all(&issues);
    assert_eq!(map.parent_of(3), Some(9));
}

#[test]
fn mutual_references_do_not_cycle() {
    let issues = vec![issue(1, "child of #2"), issue(2, "child of #1")];
    let map = InferenceEngine::default().infer_all(&issues);
    assert_eq!(map.parent_of(1), Some(2));
    assert_eq!(map.parent_of(2), None);
}

#[test]
fn label_pass_matches_first_related_epic() {
    let issues = vec![
        labeled(1, "Docker support", "Ship a container image", &["epic"]),
        labeled(2, "Theme overhaul", "Colors and fonts", &["epic"]),
        labeled(3, "Dark theme", "Pick a color palette", &["sub-task"]),
        labeled(4, "Slim down the image", "Multi-stage build", &["sub-task"]),
        labeled(5, "Write changelog", "", &["sub-task"]),
    ];
    let map = InferenceEngine::default().infer_all(&issues);
    assert_eq!(map.parent_of(3), Some(2));
    assert_eq!(map.parent_of(4), Some(1));
    assert_eq!(map.parent_of(5), None);
    assert_eq!(map.get(3).map(|r| r.rule), Some(Rule::LabelTopic));
}

#[test]
fn label_pass_skips_already_parented_sub_tasks() {
    let issues = vec![
        labeled(1, "Docker support", "container", &["epic"]),
        labeled(2, "Docker build", "child of #7", &["sub-task"]),
    ];
    let map = InferenceEngine::default().infer_all(&issues);
    assert_eq!(map.parent_of(2), Some(7));
}

#[test]
fn label_pass_without_epics_does_nothing() {
    let issues = vec![labeled(2, "Docker build", "", &["sub-task"])];
    let mut map = RelationshipMap::new();
    assert_eq!(InferenceEngine::default().match_labels(&issues, &mut map), 0);
    assert!(map.is_empty());
}

struct Always;

impl Relatedness for Always {
    fn related(&self, _sub_task: &Issue, _epic: &Issue) -> bool {
        true
    }
}

#[test]
fn relatedness_strategy_is_replaceable() {
    let issues = vec![
        labeled(1, "A", "", &["epic"]),
        labeled(2, "B", "", &["epic"]),
        labeled(3, "C", "", &["sub-task"]),
    ];
    let map = InferenceEngine::new(Always).infer_all(&issues);
    assert_eq!(map.parent_of(3), Some(1));
}

#[test]
fn sub_task_epic_never_adopts_itself() {
    let issues = vec![labeled(1, "Docker", "container", &["epic", "sub-task"])];
    let map = InferenceEngine::new(Always).infer_all(&issues);
    assert!(map.is_empty());
}

#[test]
fn observe_reports_new_entries() {
    let engine = InferenceEngine::default();
    let mut map = RelationshipMap::new();
    assert_eq!(engine.observe(&issue(1, "Sub-issues: #2, #3"), &mut map), 2);
    assert_eq!(engine.observe(&issue(2, "child of #1"), &mut map), 0);
    assert_eq!(map.len(), 2);
}
