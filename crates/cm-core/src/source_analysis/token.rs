// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for CM lexical analysis.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] drawn from the closed alphabet `KEYWORD`, `ID`, `NUM`,
//!   `SYMBOL`, `EOF`, `ERROR`
//! - The exact lexeme text (tokens are cheap to clone via [`EcoString`])
//! - A [`Span`] of byte offsets plus the 1-based line and column of the
//!   lexeme's first byte
//!
//! The rendered form of a token is `(KIND, lexeme)`, which is the shape used
//! both in `tokens.txt` and for terminal leaves of the parse tree.

use ecow::EcoString;

use super::Span;

/// The seven CM keywords.
pub const KEYWORDS: &[&str] = &["if", "else", "void", "int", "for", "break", "return"];

/// Returns `true` if the lexeme is a member of the closed keyword set.
#[must_use]
pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains(&lexeme)
}

/// The kind of token, not including lexeme text or source location.
///
/// `Error` completes the closed alphabet but is never produced by the
/// scanner: anomalies become lexical-error records instead of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word: `if`, `else`, `void`, `int`, `for`, `break`, `return`.
    Keyword,
    /// An identifier: letter or underscore followed by `[A-Za-z0-9_]*`.
    Id,
    /// An unsigned integer literal with no leading zero (the lone `0` is valid).
    Num,
    /// A recognized symbol: `; : , [ ] ( ) { } + - * / = <` or `==`.
    Symbol,
    /// End of file, with the fixed lexeme `EOF`.
    Eof,
    /// Reserved error kind.
    Error,
}

impl TokenKind {
    /// Returns the serialized name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Id => "ID",
            Self::Num => "NUM",
            Self::Symbol => "SYMBOL",
            Self::Eof => "EOF",
            Self::Error => "ERROR",
        }
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this token enters the symbol table.
    #[must_use]
    pub const fn is_word(self) -> bool {
        matches!(self, Self::Keyword | Self::Id)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its lexeme and source location.
///
/// # Examples
///
/// ```
/// use cm_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Id, "foo", Span::new(0, 3), 1, 1);
/// assert_eq!(token.to_string(), "(ID, foo)");
/// assert_eq!(token.span().end(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: EcoString,
    span: Span,
    line: u32,
    column: u32,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<EcoString>,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            line,
            column,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the exact lexeme text.
    #[must_use]
    pub fn lexeme(&self) -> &EcoString {
        &self.lexeme
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the 1-based line of the lexeme's first byte.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column of the lexeme's first byte.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the scanner position immediately after the lexeme.
    ///
    /// The illegal-character protocol compares this against the offset of an
    /// offending byte to detect an adjacent identifier prefix.
    #[must_use]
    pub const fn end_offset(&self) -> u32 {
        self.span.end()
    }

    /// Returns `true` if this token matches the given symbol lexeme.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.lexeme == symbol
    }

    /// Returns `true` if this token matches the given keyword lexeme.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == keyword
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.kind, self.lexeme)
    }
}
