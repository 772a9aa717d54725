// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Assembly and validation of the nested issue forest.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueId};
use crate::relation::RelationshipMap;

/// Nests issues under their parents.
///
/// Children are attached in relationship-map order and roots keep input
/// order. An entry whose child or parent is not among `issues` is ignored,
/// leaving the child a root. A repeated input id keeps its first occurrence.
/// Every remaining issue appears exactly once in the result.
pub fn build(issues: &[Issue], relationships: &RelationshipMap) -> Vec<Issue> {
    let mut by_id: HashMap<IssueId, &Issue> = HashMap::with_capacity(issues.len());
    let mut order: Vec<IssueId> = Vec::with_capacity(issues.len());
    for issue in issues {
        if by_id.contains_key(&issue.id) {
            tracing::warn!("issue #{} appears more than once, keeping the first", issue.id);
            continue;
        }
        by_id.insert(issue.id, issue);
        order.push(issue.id);
    }

    let mut children: HashMap<IssueId, Vec<IssueId>> = HashMap::new();
    let mut attached: HashSet<IssueId> = HashSet::new();
    for rel in relationships.iter() {
        if by_id.contains_key(&rel.child) && by_id.contains_key(&rel.parent) {
            children.entry(rel.parent).or_default().push(rel.child);
            attached.insert(rel.child);
        }
    }

    let mut visited: HashSet<IssueId> = HashSet::with_capacity(order.len());
    order
        .iter()
        .filter(|&&id| !attached.contains(&id))
        .filter_map(|&id| assemble(id, &by_id, &children, &mut visited))
        .collect()
}

fn assemble(
    id: IssueId,
    by_id: &HashMap<IssueId, &Issue>,
    children: &HashMap<IssueId, Vec<IssueId>>,
    visited: &mut HashSet<IssueId>,
) -> Option<Issue> {
    // Guards against revisiting a node, which bounds recursion by input size
    if !visited.insert(id) {
        return None;
    }
    let mut node = (*by_id.get(&id)?).clone();
    node.sub_issues = children
        .get(&id)
        .map(|kids| {
            kids.iter()
                .filter_map(|&kid| assemble(kid, by_id, children, visited))
                .collect()
        })
        .unwrap_or_default();
    Some(node)
}

/// Shape of a forest, as reported by [`validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestStats {
    /// Issues anywhere in the forest.
    pub issues: usize,
    pub roots: usize,
    /// Issues nested under a parent; one per relationship.
    pub nested: usize,
    /// Length of the longest root-to-leaf path (0 for an empty forest).
    pub max_depth: usize,
}

/// Checks that every issue appears exactly once and measures the forest.
pub fn validate(forest: &[Issue]) -> Result<ForestStats> {
    let mut stats = ForestStats {
        roots: forest.len(),
        ..ForestStats::default()
    };
    let mut seen: HashSet<IssueId> = HashSet::new();
    let mut stack: Vec<(&Issue, usize)> = forest.iter().rev().map(|root| (root, 1)).collect();

    while let Some((issue, depth)) = stack.pop() {
        if !seen.insert(issue.id) {
            return Err(Error::DuplicateIssue(issue.id));
        }
        stats.issues += 1;
        stats.max_depth = stats.max_depth.max(depth);
        stack.extend(issue.sub_issues.iter().rev().map(|child| (child, depth + 1)));
    }

    stats.nested = stats.issues - stats.roots;
    Ok(stats)
}

#[cfg(test)]
#[path = "forest_tests.rs"]
mod tests;
