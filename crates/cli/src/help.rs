// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    render_commands(colors::should_colorize())
}

fn render_commands(color: bool) -> String {
    let paint_header = |text: &str| {
        if color {
            colors::header(text)
        } else {
            text.to_string()
        }
    };
    let paint_literal = |text: &str| {
        if color {
            colors::literal(text)
        } else {
            text.to_string()
        }
    };

    let rows = [
        ("export    ", "Export issues as a nested forest (default)"),
        ("validate  ", "Check an exported forest"),
        ("countdown ", "Show time left until a target instant"),
        ("completion", "Generate shell completions"),
    ];

    let mut text = paint_header("Commands:");
    for (name, about) in rows {
        text.push_str("\n  ");
        text.push_str(&paint_literal(name));
        text.push_str("  ");
        text.push_str(about);
    }
    text.push('\n');
    text
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> &'static str {
    "\
Get started:
  arbor                          Export issues to issues.json
  arbor export --repo o/r        Export another repository
  arbor validate issues.json     Check an exported forest
  arbor countdown --target <T>   Count down to an RFC 3339 instant"
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
