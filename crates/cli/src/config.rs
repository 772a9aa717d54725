// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration management.
//!
//! Configuration is read from a TOML file by the commands that use it
//! (`export` and `countdown`) and passed to them by reference. The file is
//! found, in order, at:
//! - the path given with `--config`
//! - the path in `ARBOR_CONFIG`
//! - `arbor.toml` in the current directory (optional)
//!
//! Every setting has a default, so no file is required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "arbor.toml";
const DEFAULT_OUTPUT: &str = "issues.json";
const DEFAULT_LIMIT: u32 = 1000;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export: ExportConfig,
    pub countdown: CountdownConfig,
}

/// Settings for `arbor export`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Where the forest is written (default: `issues.json`).
    pub output: PathBuf,
    /// Maximum number of issues requested from the tracker (default: 1000).
    pub limit: u32,
    /// `owner/name` of the repository; the current repository when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            output: PathBuf::from(DEFAULT_OUTPUT),
            limit: DEFAULT_LIMIT,
            repo: None,
        }
    }
}

/// Settings for `arbor countdown`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountdownConfig {
    /// RFC 3339 instant to count down to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DateTime<Utc>>,
    /// Heading printed above the countdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Loads the configuration for this process, or defaults when no file
    /// is found.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        match locate(explicit, env::config_path(), &cwd) {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.export.limit == 0 {
            return Err(Error::Config("export.limit must be at least 1".to_string()));
        }
        if self.export.output.as_os_str().is_empty() {
            return Err(Error::ExportPathEmpty);
        }
        if let Some(repo) = &self.export.repo {
            validate_repo(repo)?;
        }
        Ok(())
    }
}

/// Checks that `repo` looks like `owner/name`.
pub fn validate_repo(repo: &str) -> Result<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(Error::InvalidRepo(repo.to_string())),
    }
}

/// Resolves which config file applies. An explicit path is returned even if
/// it does not exist, so that loading reports it; the default file only
/// when present.
pub(crate) fn locate(flag: Option<&Path>, env_path: Option<PathBuf>, cwd: &Path) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or(env_path).or_else(|| {
        let default = cwd.join(CONFIG_FILE_NAME);
        default.is_file().then_some(default)
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
