// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the CM front end.
//!
//! Two taxonomies coexist. Lexical errors are a closed message set recorded
//! as structured `(line, text, kind)` triples and serialized verbatim into
//! `lexical_errors.txt`. Syntax errors are free-form strings tagged with the
//! line and column of the offending token. Both accumulate; neither aborts
//! the pipeline. The types integrate with [`miette`] so the shell can render
//! them as diagnostics.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

/// A lexical error recorded by the scanner.
///
/// `text` is the exact contiguous source substring considered bad, including
/// any identifier-shaped prefix absorbed by the illegal-character protocol
/// and any suffix absorbed by panic recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct LexicalError {
    /// The closed-set message for this error.
    #[source]
    pub kind: LexicalErrorKind,
    /// The thrown text.
    pub text: EcoString,
    /// The 1-based line the error was detected on.
    pub line: u32,
}

impl LexicalError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: LexicalErrorKind, text: impl Into<EcoString>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Creates an "Illegal character" error.
    #[must_use]
    pub fn illegal_character(text: impl Into<EcoString>, line: u32) -> Self {
        Self::new(LexicalErrorKind::IllegalCharacter, text, line)
    }

    /// Creates a "Malformed number" error.
    #[must_use]
    pub fn malformed_number(text: impl Into<EcoString>, line: u32) -> Self {
        Self::new(LexicalErrorKind::MalformedNumber, text, line)
    }

    /// Creates a "Stray closing comment" error for a `*/` outside any comment.
    #[must_use]
    pub fn unmatched_comment(line: u32) -> Self {
        Self::new(LexicalErrorKind::UnmatchedComment, "*/", line)
    }

    /// Creates an "Open comment at EOF" error for an unclosed `/*`.
    #[must_use]
    pub fn unclosed_comment(line: u32) -> Self {
        Self::new(LexicalErrorKind::UnclosedComment, "/* Unclosed ...", line)
    }

    /// Appends bytes skipped by panic recovery to the thrown text.
    pub fn absorb(&mut self, skipped: &str) {
        self.text.push_str(skipped);
    }
}

/// The closed set of lexical-error messages.
///
/// `Display` produces the exact strings serialized into
/// `lexical_errors.txt`. `InvalidInput` belongs to the closed alphabet but
/// is never produced by the primary scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexicalErrorKind {
    /// A byte outside every recognized class.
    #[error("Illegal character")]
    IllegalCharacter,

    /// A digit run with a leading zero or an identifier-shaped tail.
    #[error("Malformed number")]
    MalformedNumber,

    /// Reserved message, not produced by the primary scanner.
    #[error("Invalid input")]
    InvalidInput,

    /// A `*/` with no open block comment.
    #[error("Stray closing comment")]
    UnmatchedComment,

    /// A `/*` still open when the source ends.
    #[error("Open comment at EOF")]
    UnclosedComment,
}

/// A syntax error recorded by the parser at the site of detection.
///
/// The message is free-form (`Expected X but found 'lexeme'`-shaped);
/// `Display` appends the line and column of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} at line {line} col {column}")]
#[diagnostic()]
pub struct SyntaxError {
    /// Human-readable description of the mismatch.
    pub message: EcoString,
    /// The 1-based line of the offending token.
    pub line: u32,
    /// The 1-based column of the offending token.
    pub column: u32,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<EcoString>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}
