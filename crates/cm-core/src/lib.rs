// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CM compiler front end.
//!
//! This crate contains the core functionality of the CM compiler:
//! - Lexical analysis (tokenization, symbol table, lexical errors)
//! - Parsing (concrete parse tree construction, syntax errors)
//! - Artifact rendering (the five output files)
//!
//! The front end never aborts on bad input: both the scanner and the parser
//! accumulate diagnostics and run to completion, so every artifact can be
//! written even for broken sources.

pub mod output;
pub mod parse_tree;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::output::TokenLines;
    pub use crate::parse_tree::{NonTerminal, ParseNode};
    pub use crate::source_analysis::{
        parse, LexicalError, Scanner, Span, SymbolTable, SyntaxError, Token, TokenKind,
    };
}
