// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Run the CM front end over a working directory.
//!
//! Reads `input.txt` from the directory, drives the scanner and parser, and
//! writes the five artifacts back into the same directory, overwriting. All
//! artifacts are written even when the source contains errors, so partial
//! progress is always inspectable; only a missing input file aborts before
//! anything is written.

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};
use std::fs;
use tracing::{debug, info, instrument};

use cm_core::output::{self, TokenLines};
use cm_core::source_analysis::{parse, Scanner};

/// Compile `input.txt` in the given directory into the five artifacts.
#[instrument(skip_all, fields(dir = %dir))]
pub fn compile(dir: &Utf8Path) -> Result<()> {
    let input_path = dir.join("input.txt");
    if !input_path.exists() {
        miette::bail!("input.txt not found in '{dir}'");
    }
    let source = fs::read(&input_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{input_path}'"))?;
    info!(bytes = source.len(), "Read source");

    let mut scanner = Scanner::new(&source);
    let (lines, eof) = TokenLines::from_scanner(&mut scanner);
    debug!(lexical_errors = scanner.errors().len(), "Scanning complete");

    let mut tokens = lines.flattened();
    tokens.push(eof);
    let (tree, syntax_errors) = parse(tokens);
    debug!(syntax_errors = syntax_errors.len(), "Parsing complete");

    let artifacts = [
        ("tokens.txt", output::render_tokens(&lines)),
        (
            "lexical_errors.txt",
            output::render_lexical_errors(scanner.errors()),
        ),
        (
            "symbol_table.txt",
            output::render_symbol_table(scanner.symbols()),
        ),
        ("parse_tree.txt", output::render_parse_tree(&tree)),
        (
            "syntax_errors.txt",
            output::render_syntax_errors(&syntax_errors),
        ),
    ];
    for (name, contents) in &artifacts {
        let path = dir.join(name);
        fs::write(&path, contents)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{path}'"))?;
    }
    info!("Wrote artifacts");
    Ok(())
}
