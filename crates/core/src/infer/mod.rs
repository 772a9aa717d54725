// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relationship inference.
//!
//! Text rules are evaluated per issue, in priority order, as issues arrive:
//!
//! 1. `Epic: #N` reference
//! 2. `<context> in #N` phrase (research, installation, pipeline, task,
//!    subtask, work, part)
//! 3. "Related Issues" section: epics adopt every listed issue, other issues
//!    take the first listed (or first mentioned) issue as parent
//! 4. `sub-issue of`, `child of`, `relates to`, `part of`, `subtask of`
//!
//! The first rule that yields a parent wins. Declarations such as
//! `sub-issues: #A, #B` then record children of the current issue. Once
//! every issue has been seen, [`InferenceEngine::match_labels`] pairs
//! unparented sub-tasks with epics through a [`Relatedness`] strategy.
//!
//! No rule ever replaces a parent recorded earlier; see [`RelationshipMap`].

pub mod patterns;
pub mod section;

use crate::issue::{Issue, IssueId};
use crate::relation::{Assignment, RelationshipMap, Rule};
use crate::topics::{KeywordTopics, Relatedness};

/// Relationships stated by one issue's own text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inference {
    /// The parent this issue names for itself.
    pub parent: Option<(IssueId, Rule)>,
    /// Issues this issue names as its children.
    pub children: Vec<(IssueId, Rule)>,
}

/// Evaluates the text rules against a single issue.
pub fn infer(issue: &Issue) -> Inference {
    let id = issue.id;
    let text = issue.combined_text();
    let related = section::related_issues(&text);

    let parent = patterns::epic_reference(&text, id)
        .map(|p| (p, Rule::EpicReference))
        .or_else(|| patterns::context_phrase(&text, id).map(|p| (p, Rule::ContextPhrase)))
        .or_else(|| {
            related
                .filter(|_| !issue.is_epic())
                .and_then(|s| section::parent_ref(s, id))
                .map(|p| (p, Rule::RelatedIssues))
        })
        .or_else(|| patterns::text_pattern(&text, id).map(|p| (p, Rule::TextPattern)));

    let mut children: Vec<(IssueId, Rule)> = Vec::new();
    if issue.is_epic() {
        if let Some(section) = related {
            for child in section::list_item_refs(section) {
                if child != id && !children.iter().any(|(c, _)| *c == child) {
                    children.push((child, Rule::RelatedIssues));
                }
            }
        }
    }
    for child in patterns::declared_children(&text, id) {
        if !children.iter().any(|(c, _)| *c == child) {
            children.push((child, Rule::DeclaredChildren));
        }
    }

    Inference { parent, children }
}

/// Drives the rules over a batch of issues and owns the label strategy.
#[derive(Debug, Clone)]
pub struct InferenceEngine<R = KeywordTopics> {
    relatedness: R,
}

impl Default for InferenceEngine<KeywordTopics> {
    fn default() -> Self {
        Self::new(KeywordTopics::default())
    }
}

impl<R: Relatedness> InferenceEngine<R> {
    pub fn new(relatedness: R) -> Self {
        InferenceEngine { relatedness }
    }

    /// Records the relationships stated in `issue`'s text.
    ///
    /// Returns the number of new entries.
    pub fn observe(&self, issue: &Issue, map: &mut RelationshipMap) -> usize {
        let inference = infer(issue);
        let mut added = 0;
        if let Some((parent, rule)) = inference.parent {
            added += record(map, issue.id, parent, rule);
        }
        for (child, rule) in inference.children {
            added += record(map, child, issue.id, rule);
        }
        added
    }

    /// Second pass: gives each unparented sub-task the first related epic.
    ///
    /// Returns the number of new entries.
    pub fn match_labels(&self, issues: &[Issue], map: &mut RelationshipMap) -> usize {
        let epics: Vec<&Issue> = issues.iter().filter(|i| i.is_epic()).collect();
        if epics.is_empty() {
            return 0;
        }

        let mut added = 0;
        for sub_task in issues.iter().filter(|i| i.is_sub_task()) {
            if map.has_parent(sub_task.id) {
                continue;
            }
            for epic in &epics {
                if epic.id == sub_task.id || !self.relatedness.related(sub_task, epic) {
                    continue;
                }
                if record(map, sub_task.id, epic.id, Rule::LabelTopic) > 0 {
                    added += 1;
                    break;
                }
            }
        }
        added
    }

    /// Runs both passes over `issues` in order.
    pub fn infer_all(&self, issues: &[Issue]) -> RelationshipMap {
        let mut map = RelationshipMap::new();
        for issue in issues {
            self.observe(issue, &mut map);
        }
        self.match_labels(issues, &mut map);
        map
    }
}

fn record(map: &mut RelationshipMap, child: IssueId, parent: IssueId, rule: Rule) -> usize {
    match map.assign(child, parent, rule) {
        Assignment::Assigned => 1,
        Assignment::AlreadyAssigned(existing) if existing != parent => {
            tracing::debug!(
                "ignoring #{} -> #{} ({}): already child of #{}",
                child,
                parent,
                rule,
                existing
            );
            0
        }
        Assignment::WouldCycle => {
            tracing::debug!("ignoring #{} -> #{} ({}): would form a cycle", child, parent, rule);
            0
        }
        Assignment::AlreadyAssigned(_) | Assignment::SelfReference => 0,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
