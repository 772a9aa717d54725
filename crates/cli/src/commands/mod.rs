// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod countdown;
pub mod export;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
pub mod validate;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use arbor_core::Issue;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Writes `forest` to `path` as pretty-printed JSON, creating parent
/// directories as needed.
pub(crate) fn write_forest(path: &Path, forest: &[Issue]) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::ExportPathEmpty);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, forest)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Reads a forest previously written by [`write_forest`].
///
/// Each level of nesting costs two JSON levels, so serde_json's recursion
/// limit is lifted and deep trees grow the stack on demand instead.
pub(crate) fn read_forest(path: &Path) -> Result<Vec<Issue>> {
    let content = fs::read_to_string(path)?;
    let mut de = serde_json::Deserializer::from_str(&content);
    de.disable_recursion_limit();
    let forest = Vec::<Issue>::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(forest)
}
