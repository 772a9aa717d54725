// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use arbor_core::ForestStats;

use crate::error::Result;

use super::read_forest;

pub fn run(file: &Path) -> Result<()> {
    let stats = run_impl(file)?;
    println!(
        "{}: {} issues, {} roots, {} nested, depth {}",
        file.display(),
        stats.issues,
        stats.roots,
        stats.nested,
        stats.max_depth
    );
    Ok(())
}

pub(crate) fn run_impl(file: &Path) -> Result<ForestStats> {
    let forest = read_forest(file)?;
    Ok(arbor_core::validate(&forest)?)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
