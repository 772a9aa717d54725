// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Topic heuristics used to pair unparented sub-tasks with epics.

use std::collections::HashSet;

use crate::issue::Issue;

/// Decides whether a sub-task plausibly belongs to an epic.
pub trait Relatedness {
    fn related(&self, sub_task: &Issue, epic: &Issue) -> bool;
}

/// Default topic table: category name and its keywords.
pub const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
    (
        "ui customization",
        &["color", "font", "style", "css", "theme", "appearance", "display"],
    ),
    (
        "package management",
        &["npm", "yarn", "package", "install", "dependency", "node"],
    ),
    ("typescript", &["typescript", "type", "ts", "tsx", "interface"]),
    ("tailwind", &["tailwind", "css", "style", "utility", "classes"]),
    (
        "modernization",
        &["upgrade", "update", "modern", "latest", "version"],
    ),
    ("docker", &["docker", "container", "image", "build"]),
];

/// Keyword-table matcher: two issues are related when both mention a keyword
/// from the same category.
#[derive(Debug, Clone)]
pub struct KeywordTopics {
    topics: Vec<(String, Vec<String>)>,
}

impl Default for KeywordTopics {
    fn default() -> Self {
        Self::new(DEFAULT_TOPICS.iter().map(|(name, keywords)| {
            (
                name.to_string(),
                keywords.iter().map(|k| k.to_string()).collect(),
            )
        }))
    }
}

impl KeywordTopics {
    /// Builds a matcher from `(category, keywords)` pairs. Keywords are
    /// lowercased.
    pub fn new(topics: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        let topics = topics
            .into_iter()
            .map(|(name, keywords)| {
                (
                    name,
                    keywords.into_iter().map(|k| k.to_lowercase()).collect(),
                )
            })
            .collect();
        KeywordTopics { topics }
    }

    /// Names of the categories `text` touches, in table order.
    pub fn categories_of(&self, text: &str) -> Vec<&str> {
        let tokens = tokenize(text);
        self.topics
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| tokens.contains(k.as_str())))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl Relatedness for KeywordTopics {
    fn related(&self, sub_task: &Issue, epic: &Issue) -> bool {
        let sub_task_tokens = tokenize(&sub_task.topic_text());
        let epic_tokens = tokenize(&epic.topic_text());
        self.topics.iter().any(|(_, keywords)| {
            let mentions = |tokens: &HashSet<String>| {
                keywords.iter().any(|k| tokens.contains(k.as_str()))
            };
            mentions(&sub_task_tokens) && mentions(&epic_tokens)
        })
    }
}

/// Lowercased alphanumeric words of `text`.
fn tokenize(text: &str) -> HashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "topics_tests.rs"]
mod tests;
