// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use arborrs::Cli;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    arborrs::logging::init(cli.verbose);

    if let Err(e) = arborrs::run(cli.command, cli.config.as_deref()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
