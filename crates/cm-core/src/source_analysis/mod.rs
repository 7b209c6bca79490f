// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Scanning and parsing infrastructure for CM source code.
//!
//! This module contains the byte classifier, the scanner, the symbol table,
//! and the predictive recursive-descent parser.
//!
//! # Lexical Analysis
//!
//! The [`Scanner`] converts source bytes into a stream of [`Token`]s,
//! maintaining the [`SymbolTable`] and the lexical-error list as side
//! effects. Each token carries its [`Span`] and 1-based line/column.
//!
//! ```
//! use cm_core::source_analysis::{Scanner, TokenKind};
//!
//! let tokens: Vec<_> = Scanner::new(b"x = x + 1;").collect();
//! assert_eq!(tokens.len(), 6); // x, =, x, +, 1, ; (EOF excluded)
//! assert_eq!(tokens[0].kind(), TokenKind::Id);
//! ```
//!
//! # Error Handling
//!
//! The scanner uses panic-mode recovery: malformed input is recorded as a
//! [`LexicalError`] and scanning resumes at the next plausible token
//! boundary; no anomaly ever surfaces as a token. An identifier that turns
//! out to be the prefix of an illegal construct is retracted after the fact
//! via a latched [`Retraction`] signal (see the scanner module docs).
//!
//! # Parsing
//!
//! The [`parse`] function converts the token sequence into a concrete
//! [`ParseNode`](crate::parse_tree::ParseNode) tree, accumulating
//! [`SyntaxError`]s with local panic recovery rather than stopping.

pub mod chars;
mod error;
mod parser;
mod scanner;
mod span;
mod symbol_table;
mod token;


pub use error::{LexicalError, LexicalErrorKind, SyntaxError};
pub use parser::parse;
pub use scanner::{scan, scan_with_eof, Retraction, Scanner};
pub use span::Span;
pub use symbol_table::{SymbolClass, SymbolEntry, SymbolTable};
pub use token::{is_keyword, Token, TokenKind, KEYWORDS};
