// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::help;

const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

#[derive(Parser)]
#[command(name = "arbor", version)]
#[command(about = "Export GitHub issues as a nested forest of sub-issues")]
#[command(
    long_about = "Export GitHub issues as a nested forest of sub-issues.\n\n\
    Parent/child relationships are inferred from issue text, comments and labels. \
    Run without a command to export with the configured defaults."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Path to a config file (default: ARBOR_CONFIG, then ./arbor.toml)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export issues as a nested forest
    #[command(after_help = "Examples:\n  \
        arbor export                          Export the current repository\n  \
        arbor export --repo octo/widgets      Export another repository\n  \
        arbor export -o tree.json --limit 50  Custom output and limit\n  \
        arbor export --input issues-raw.json  Export from a saved gh listing")]
    Export(ExportArgs),

    /// Check that an exported forest lists every issue exactly once
    #[command(arg_required_else_help = true)]
    Validate {
        /// Exported forest to check
        file: PathBuf,
    },

    /// Show the days, hours, minutes and seconds left until a target instant
    #[command(after_help = "Examples:\n  \
        arbor countdown --target 2026-12-31T00:00:00Z\n  \
        arbor countdown --target 2026-12-31T00:00:00+01:00 --title \"New Year\"")]
    Countdown {
        /// RFC 3339 instant to count down to (default: countdown.target)
        #[arg(long, short, value_name = "RFC3339")]
        target: Option<String>,

        /// Heading printed above the countdown
        #[arg(long)]
        title: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
        arbor completion bash > ~/.local/share/bash-completion/completions/arbor\n  \
        arbor completion zsh > ~/.zfunc/_arbor\n  \
        arbor completion fish > ~/.config/fish/completions/arbor.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags for `arbor export`; each overrides the matching config value.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ExportArgs {
    /// Output file path (default: export.output)
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Repository as owner/name (default: export.repo, else the current one)
    #[arg(long, short)]
    pub repo: Option<String>,

    /// Maximum number of issues to fetch (default: export.limit)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Read issues from a saved `gh issue list` JSON file instead of GitHub
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
