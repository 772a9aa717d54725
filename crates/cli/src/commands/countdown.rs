// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use arbor_core::{describe, Remaining};
use chrono::{DateTime, Utc};

use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};

pub fn run(config: &Config, target: Option<&str>, title: Option<String>) -> Result<()> {
    let target = match target {
        Some(value) => parse_target(value)?,
        None => config.countdown.target.ok_or(Error::MissingTarget)?,
    };
    let title = title.or_else(|| config.countdown.title.clone());
    let remaining = describe(Utc::now(), target);
    if remaining.is_elapsed() {
        tracing::debug!("countdown target {} has passed", target.to_rfc3339());
    }
    println!(
        "{}",
        render(title.as_deref(), &remaining, colors::should_colorize())
    );
    Ok(())
}

/// Parses an RFC 3339 instant and normalizes it to UTC.
pub(crate) fn parse_target(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp {
            reason: format!("'{}' is not RFC 3339 ({})", value, e),
        })
}

pub(crate) fn render(title: Option<&str>, remaining: &Remaining, color: bool) -> String {
    let mut text = String::new();
    if let Some(title) = title.filter(|t| !t.is_empty()) {
        text.push_str(&if color {
            colors::header(title)
        } else {
            title.to_string()
        });
        text.push('\n');
    }
    if !color {
        text.push_str(&remaining.to_string());
        return text;
    }
    let parts: Vec<String> = remaining
        .units()
        .into_iter()
        .map(|(unit, value)| {
            format!(
                "{} {}",
                colors::literal(&format!("{:02}", value)),
                colors::context(&unit.label(value))
            )
        })
        .collect();
    text.push_str(&parts.join("  "));
    text
}

#[cfg(test)]
#[path = "countdown_tests.rs"]
mod tests;
