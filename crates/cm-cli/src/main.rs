// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CM compiler command-line interface.
//!
//! This is the main entry point for the `cmc` command.

use camino::Utf8PathBuf;
use clap::Parser;
use miette::Result;

use cm_cli::commands;

/// CM compiler front end: scans and parses `input.txt`, writing the token
/// stream, error reports, symbol table, and parse tree alongside it.
#[derive(Debug, Parser)]
#[command(name = "cmc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Working directory holding `input.txt`; artifacts are written here
    #[arg(default_value = ".")]
    dir: Utf8PathBuf,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber only if RUST_LOG is explicitly set,
    // so normal runs keep stderr clean for diagnostics
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .try_init();
    }

    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match commands::compile::compile(&cli.dir) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
