// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use arbor_core::{build, validate, InferenceEngine, Issue, RelationshipMap};

use crate::cli::ExportArgs;
use crate::config::{validate_repo, Config};
use crate::error::Result;
use crate::source::{FixtureSource, GhCli, IssueSource};

use super::write_forest;

/// Export settings after applying command-line flags over the config.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub output: PathBuf,
    pub repo: Option<String>,
    pub limit: u32,
    pub input: Option<PathBuf>,
}

impl ExportSettings {
    pub fn resolve(config: &Config, args: ExportArgs) -> Result<Self> {
        let repo = args.repo.or_else(|| config.export.repo.clone());
        if let Some(repo) = &repo {
            validate_repo(repo)?;
        }
        Ok(ExportSettings {
            output: args.output.unwrap_or_else(|| config.export.output.clone()),
            repo,
            limit: args.limit.unwrap_or(config.export.limit),
            input: args.input,
        })
    }
}

/// Counts printed once the forest is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    pub issues: usize,
    pub roots: usize,
    pub relationships: usize,
}

pub fn run(config: &Config, args: ExportArgs) -> Result<()> {
    let settings = ExportSettings::resolve(config, args)?;
    let summary = match &settings.input {
        Some(path) => {
            let source = FixtureSource::open(path, settings.limit)?;
            run_impl(&source, &settings.output)?
        }
        None => {
            let source = GhCli::new(settings.repo.clone(), settings.limit);
            run_impl(&source, &settings.output)?
        }
    };

    println!("Total issues processed: {}", summary.issues);
    println!("Root issues: {}", summary.roots);
    println!("Relationships found: {}", summary.relationships);
    println!("Output file: {}", settings.output.display());
    Ok(())
}

/// Internal implementation that accepts any issue source for testing.
pub(crate) fn run_impl(source: &dyn IssueSource, output: &Path) -> Result<ExportSummary> {
    source.check_auth()?;

    let listed = source.list_issues()?;
    tracing::info!("fetched {} issues", listed.len());

    let engine = InferenceEngine::default();
    let mut relationships = RelationshipMap::new();
    let mut issues: Vec<Issue> = Vec::with_capacity(listed.len());

    for raw in listed {
        tracing::info!("processing issue #{}: {}", raw.number, raw.title);
        let comments = match source.fetch_comments(raw.number) {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!("failed to fetch comments for issue #{}: {}", raw.number, e);
                Vec::new()
            }
        };
        let issue = raw.into_issue(comments)?;
        engine.observe(&issue, &mut relationships);
        issues.push(issue);
    }

    let matched = engine.match_labels(&issues, &mut relationships);
    tracing::debug!("label topics matched {} sub-tasks", matched);

    let forest = build(&issues, &relationships);
    let stats = validate(&forest)?;
    write_forest(output, &forest)?;

    Ok(ExportSummary {
        issues: stats.issues,
        roots: stats.roots,
        relationships: stats.nested,
    })
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
