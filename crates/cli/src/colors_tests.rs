// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    header_color = { header("Countdown"), codes::HEADER },
    literal_color = { literal("arbor export"), codes::LITERAL },
    context_color = { context("issues.json"), codes::CONTEXT },
)]
fn test_paint_wraps_text(painted: String, code: u8) {
    let prefix = format!("\x1b[38;5;{}m", code);
    assert!(painted.starts_with(&prefix), "{:?}", painted);
    assert!(painted.ends_with("\x1b[0m"));
}

#[test]
fn test_paint_keeps_text() {
    assert_eq!(header("Launch"), "\x1b[38;5;74mLaunch\x1b[0m");
}
