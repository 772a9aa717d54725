// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The child → parent relationship map built by the inference engine.

use std::collections::HashMap;
use std::fmt;

use crate::issue::IssueId;

/// The inference rule that produced a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `Epic: #N` reference.
    EpicReference,
    /// `<context> in #N` phrase.
    ContextPhrase,
    /// List item in a "Related Issues" section.
    RelatedIssues,
    /// `sub-issue of #N`, `child of #N` and friends.
    TextPattern,
    /// `sub-issues: #A, #B` declared by the parent.
    DeclaredChildren,
    /// Shared topic keywords between a sub-task and an epic.
    LabelTopic,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rule::EpicReference => "epic reference",
            Rule::ContextPhrase => "context phrase",
            Rule::RelatedIssues => "related issues",
            Rule::TextPattern => "text pattern",
            Rule::DeclaredChildren => "declared children",
            Rule::LabelTopic => "label topic",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded child → parent edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relationship {
    pub child: IssueId,
    pub parent: IssueId,
    pub rule: Rule,
}

/// Outcome of [`RelationshipMap::assign`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The edge was recorded.
    Assigned,
    /// Child and parent are the same issue.
    SelfReference,
    /// The child already has a parent, which is kept.
    AlreadyAssigned(IssueId),
    /// The edge would make the child its own ancestor.
    WouldCycle,
}

/// Insertion-ordered mapping from child id to parent id.
///
/// A child has at most one parent and the first assignment wins. Entries that
/// would reference the child itself or close a cycle are refused, so the map
/// always describes a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipMap {
    entries: Vec<Relationship>,
    index: HashMap<IssueId, usize>,
}

impl RelationshipMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `child → parent` unless the child already has a parent.
    pub fn assign(&mut self, child: IssueId, parent: IssueId, rule: Rule) -> Assignment {
        if child == parent {
            return Assignment::SelfReference;
        }
        if let Some(existing) = self.parent_of(child) {
            return Assignment::AlreadyAssigned(existing);
        }
        if self.is_ancestor(child, parent) {
            return Assignment::WouldCycle;
        }
        self.index.insert(child, self.entries.len());
        self.entries.push(Relationship {
            child,
            parent,
            rule,
        });
        tracing::debug!("found relationship: #{} is child of #{} ({})", child, parent, rule);
        Assignment::Assigned
    }

    pub fn parent_of(&self, child: IssueId) -> Option<IssueId> {
        self.get(child).map(|r| r.parent)
    }

    pub fn get(&self, child: IssueId) -> Option<&Relationship> {
        self.index.get(&child).and_then(|&i| self.entries.get(i))
    }

    pub fn has_parent(&self, child: IssueId) -> bool {
        self.index.contains_key(&child)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `ancestor` is reachable by walking parents up from `id`
    /// (including `id` itself).
    fn is_ancestor(&self, ancestor: IssueId, id: IssueId) -> bool {
        let mut current = id;
        // The map is acyclic, so the walk ends within len() + 1 steps.
        for _ in 0..=self.entries.len() {
            if current == ancestor {
                return true;
            }
            match self.parent_of(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "relation_tests.rs"]
mod tests;
