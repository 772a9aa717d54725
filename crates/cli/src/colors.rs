// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities.
//!
//! Respects environment variables:
//! - `NO_COLOR` (non-empty): disables colors
//! - `COLOR=1`: forces colors even without a TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes shared by help output and command output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Context values: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Decides whether a stream attached to a terminal (or not) gets colors.
fn enabled(is_terminal: bool) -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    is_terminal
}

/// Check if stdout output should be colored.
pub fn should_colorize() -> bool {
    enabled(std::io::stdout().is_terminal())
}

/// Check if diagnostics on stderr should be colored.
pub fn should_colorize_stderr() -> bool {
    enabled(std::io::stderr().is_terminal())
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}\x1b[0m")
}

/// Apply header color to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
