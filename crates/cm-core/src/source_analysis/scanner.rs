// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for CM source code.
//!
//! This module converts a source buffer into a stream of [`Token`]s. The
//! scanner is a hand-written DFA over raw bytes for maximum control over
//! error recovery and diagnostics.
//!
//! # Design Principles
//!
//! - **Error recovery**: never panic on malformed input; every anomaly
//!   becomes a [`LexicalError`] record and scanning resumes at the next
//!   plausible token boundary (panic mode)
//! - **Line-accurate diagnostics**: every token and error carries its
//!   1-based source line; tokens also carry a column for parser messages
//! - **Retroactive invalidation**: an identifier that turns out to be the
//!   prefix of an illegal construct is withdrawn from the symbol table, and
//!   a latched [`Retraction`] signal tells the token accumulator to drop the
//!   already-emitted token
//!
//! # Example
//!
//! ```
//! use cm_core::source_analysis::{scan, TokenKind};
//!
//! let tokens = scan(b"int x;");
//! assert_eq!(tokens.len(), 3); // int, x, ; (EOF excluded from iterator)
//! assert_eq!(tokens[0].kind(), TokenKind::Keyword);
//! ```

use ecow::EcoString;

use super::chars::{self, CharClass, classify};
use super::error::LexicalError;
use super::symbol_table::SymbolTable;
use super::token::{is_keyword, Token, TokenKind};
use super::Span;

/// A latched instruction to retract the most recently emitted ID token.
///
/// Produced by the illegal-character protocol when the previous ID was in
/// fact the prefix of a malformed construct. The consumer deletes the most
/// recent `(ID, lexeme)` entry from the given line of its grouped-token
/// accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retraction {
    /// Lexeme of the token to withdraw.
    pub lexeme: EcoString,
    /// Line the token was emitted on.
    pub line: u32,
}

/// Memo of the last emitted token, kept for the adjacency check.
#[derive(Debug, Clone)]
struct PreviousToken {
    kind: TokenKind,
    lexeme: EcoString,
    end: u32,
    line: u32,
}

/// A scanner that tokenizes CM source bytes.
///
/// The scanner maintains the symbol table and the lexical-error list as
/// side effects of [`next_token`](Scanner::next_token). It implements
/// [`Iterator`] for easy consumption (the iterator stops before EOF).
///
/// # Error Recovery
///
/// The scanner never fails. Malformed numbers and illegal characters are
/// recorded and skipped; a stray `*/` is recorded and consumed; an unclosed
/// block comment records an error and curtails the stream at EOF. After the
/// first EOF every further call returns EOF on the same line.
pub struct Scanner<'src> {
    /// The source buffer, treated as ASCII bytes.
    source: &'src [u8],
    /// Current byte position.
    position: usize,
    /// Current 1-based line.
    line: u32,
    /// Current 1-based column.
    column: u32,
    /// Lexical errors observed so far.
    errors: Vec<LexicalError>,
    /// The symbol table, pre-populated with keywords.
    symbols: SymbolTable,
    /// Memo of the last emitted token; cleared by comments, errors, and EOF.
    previous: Option<PreviousToken>,
    /// Latched retraction signal, cleared on read.
    retraction: Option<Retraction>,
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("line", &self.line)
            .field("errors", &self.errors.len())
            .finish()
    }
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner over the given source bytes.
    #[must_use]
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            errors: Vec::new(),
            symbols: SymbolTable::new(),
            previous: None,
            retraction: None,
        }
    }

    /// Peeks `n` bytes ahead without consuming (`n = 0` is the next byte).
    fn peek(&self, n: usize) -> Option<u8> {
        self.source.get(self.position + n).copied()
    }

    /// Consumes the next byte, maintaining the line and column counters.
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek(0)?;
        self.position += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Extracts source text for a byte range.
    fn text_for(&self, start: usize, end: usize) -> EcoString {
        EcoString::from(String::from_utf8_lossy(&self.source[start..end]).as_ref())
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn span_from(&self, start: usize) -> Span {
        Span::new(start as u32, self.position as u32)
    }

    /// Returns the ordered list of lexical errors observed so far.
    #[must_use]
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    /// Returns the current symbol table.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Reads and clears the latched retraction signal.
    pub fn take_retraction(&mut self) -> Option<Retraction> {
        self.retraction.take()
    }

    /// Consumes the scanner, yielding its error list and symbol table.
    #[must_use]
    pub fn into_parts(self) -> (Vec<LexicalError>, SymbolTable) {
        (self.errors, self.symbols)
    }

    /// Drains the scanner to EOF, returning every token including the final
    /// EOF token.
    ///
    /// Retraction signals are consumed and applied to the returned sequence.
    pub fn consume_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            if let Some(retraction) = self.take_retraction() {
                retract_last(&mut tokens, &retraction);
            }
            let done = token.kind().is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Scans the next token.
    ///
    /// Whitespace and comments are skipped silently; anomalies are recorded
    /// into the error list and scanning restarts, so the returned token is
    /// always a real token or EOF.
    pub fn next_token(&mut self) -> Token {
        loop {
            while self.peek(0).is_some_and(|b| classify(b) == CharClass::Whitespace) {
                self.advance();
            }

            let Some(byte) = self.peek(0) else {
                return self.eof_token();
            };

            // A closing delimiter with no open comment.
            if byte == b'*' && self.peek(1) == Some(b'/') {
                let line = self.line;
                self.advance();
                self.advance();
                self.errors.push(LexicalError::unmatched_comment(line));
                self.previous = None;
                continue;
            }

            match classify(byte) {
                CharClass::Slash => match self.peek(1) {
                    Some(b'/') => {
                        self.skip_line_comment();
                        continue;
                    }
                    Some(b'*') => {
                        if self.skip_block_comment() {
                            continue;
                        }
                        return self.eof_token();
                    }
                    _ => return self.symbol_token(1),
                },
                CharClass::Letter | CharClass::Underscore => return self.lex_word(),
                CharClass::Digit => match self.lex_number() {
                    Some(token) => return token,
                    None => continue,
                },
                CharClass::Symbol if byte == b'=' => {
                    let len = if self.peek(1) == Some(b'=') { 2 } else { 1 };
                    return self.symbol_token(len);
                }
                CharClass::Symbol | CharClass::Star => return self.symbol_token(1),
                CharClass::Whitespace => continue,
                CharClass::Other => {
                    self.illegal_character();
                    continue;
                }
            }
        }
    }

    /// Builds the EOF token at the current line and clears the memo.
    fn eof_token(&mut self) -> Token {
        self.previous = None;
        let span = self.span_from(self.position);
        Token::new(TokenKind::Eof, "EOF", span, self.line, self.column)
    }

    /// Emits a symbol token of the given byte length.
    fn symbol_token(&mut self, len: usize) -> Token {
        let start = self.position;
        let (line, column) = (self.line, self.column);
        for _ in 0..len {
            self.advance();
        }
        let span = self.span_from(start);
        let lexeme = self.text_for(start, self.position);
        self.remember(TokenKind::Symbol, &lexeme, span, line);
        Token::new(TokenKind::Symbol, lexeme, span, line, column)
    }

    /// Lexes an identifier or keyword.
    fn lex_word(&mut self) -> Token {
        let start = self.position;
        let (line, column) = (self.line, self.column);
        while self.peek(0).is_some_and(chars::is_ident_continue) {
            self.advance();
        }
        let span = self.span_from(start);
        let lexeme = self.text_for(start, self.position);
        let kind = if is_keyword(&lexeme) {
            TokenKind::Keyword
        } else {
            self.symbols.insert_id(&lexeme, line);
            TokenKind::Id
        };
        self.remember(kind, &lexeme, span, line);
        Token::new(kind, lexeme, span, line, column)
    }

    /// Lexes a number, or records a malformed-number error and returns
    /// `None` so the caller restarts.
    ///
    /// Both error sub-cases (leading zero, letter after digits) absorb the
    /// whole identifier-shaped tail into the thrown text before panic
    /// recovery, so the diagnostic captures the full malformed token.
    fn lex_number(&mut self) -> Option<Token> {
        let start = self.position;
        let (line, column) = (self.line, self.column);
        let leading_zero = self.peek(0) == Some(b'0');
        self.advance();

        if leading_zero && self.peek(0).is_some_and(|b| b.is_ascii_digit()) {
            self.consume_ident_tail();
            let text = self.text_for(start, self.position);
            self.errors.push(LexicalError::malformed_number(text, line));
            self.recover();
            self.previous = None;
            return None;
        }

        while self.peek(0).is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }

        if self.peek(0).is_some_and(chars::is_ident_start) {
            self.consume_ident_tail();
            let text = self.text_for(start, self.position);
            self.errors.push(LexicalError::malformed_number(text, line));
            self.recover();
            self.previous = None;
            return None;
        }

        let span = self.span_from(start);
        let lexeme = self.text_for(start, self.position);
        self.remember(TokenKind::Num, &lexeme, span, line);
        Some(Token::new(TokenKind::Num, lexeme, span, line, column))
    }

    /// Consumes the maximal `[A-Za-z0-9_]*` run.
    fn consume_ident_tail(&mut self) {
        while self.peek(0).is_some_and(chars::is_ident_continue) {
            self.advance();
        }
    }

    /// The illegal-character protocol.
    ///
    /// Looks backward over identifier bytes to absorb the prefix, consumes
    /// the offending byte and the identifier-shaped suffix, and records the
    /// whole construct as one error. If the absorbed prefix is exactly the
    /// previously emitted ID (ending flush against the offending byte), that
    /// ID was never a real token: it is removed from the symbol table and a
    /// retraction is latched for the token accumulator.
    fn illegal_character(&mut self) {
        let line = self.line;
        let offending = self.position;

        let mut left = offending;
        while left > 0 && chars::is_ident_continue(self.source[left - 1]) {
            left -= 1;
        }

        self.advance();
        self.consume_ident_tail();
        let text = self.text_for(left, self.position);

        if let Some(prev) = &self.previous {
            let adjacent = prev.kind == TokenKind::Id
                && prev.end as usize == offending
                && left < offending
                && prev.lexeme.as_bytes() == &self.source[left..offending];
            if adjacent {
                self.retraction = Some(Retraction {
                    lexeme: prev.lexeme.clone(),
                    line: prev.line,
                });
                let lexeme = prev.lexeme.clone();
                self.symbols.remove_id(&lexeme);
            }
        }

        self.errors.push(LexicalError::illegal_character(text, line));
        self.recover();
        self.previous = None;
    }

    /// Panic recovery: consumes input until a byte that could begin a new
    /// token, appending the skipped bytes to the last recorded error.
    fn recover(&mut self) {
        let start = self.position;
        while self.peek(0).is_some_and(|b| !chars::starts_token(b)) {
            self.advance();
        }
        if self.position > start {
            let skipped = self.text_for(start, self.position);
            if let Some(last) = self.errors.last_mut() {
                last.absorb(&skipped);
            }
        }
    }

    /// Skips a `//` comment up to (not including) the terminating newline or
    /// form feed.
    fn skip_line_comment(&mut self) {
        self.advance();
        self.advance();
        while self.peek(0).is_some_and(|b| b != b'\n' && b != 0x0c) {
            self.advance();
        }
        self.previous = None;
    }

    /// Skips a `/* ... */` comment. Returns `false` when the comment is
    /// still open at EOF, after recording the error against the line where
    /// the comment body begins.
    fn skip_block_comment(&mut self) -> bool {
        self.advance();
        self.advance();
        let start_line = self.line;
        loop {
            match self.peek(0) {
                Some(b'*') if self.peek(1) == Some(b'/') => {
                    self.advance();
                    self.advance();
                    self.previous = None;
                    return true;
                }
                Some(_) => {
                    self.advance();
                }
                None => {
                    self.errors.push(LexicalError::unclosed_comment(start_line));
                    self.previous = None;
                    return false;
                }
            }
        }
    }

    /// Records the last emitted token for the adjacency check.
    fn remember(&mut self, kind: TokenKind, lexeme: &EcoString, span: Span, line: u32) {
        self.previous = Some(PreviousToken {
            kind,
            lexeme: lexeme.clone(),
            end: span.end(),
            line,
        });
    }
}

/// Deletes the most recent occurrence of the retracted ID from a flat token
/// sequence.
fn retract_last(tokens: &mut Vec<Token>, retraction: &Retraction) {
    let found = tokens.iter().rposition(|t| {
        t.kind() == TokenKind::Id && t.line() == retraction.line && t.lexeme() == &retraction.lexeme
    });
    if let Some(index) = found {
        tokens.remove(index);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// Convenience function to scan source into a vector of tokens (excluding
/// EOF).
///
/// Retraction signals are not applied; use [`Scanner::consume_all`] or the
/// token-line accumulator when sources may contain illegal characters.
#[must_use]
pub fn scan(source: &[u8]) -> Vec<Token> {
    Scanner::new(source).collect()
}

/// Convenience function to scan source into a vector of tokens including
/// EOF, with retractions applied.
#[must_use]
pub fn scan_with_eof(source: &[u8]) -> Vec<Token> {
    Scanner::new(source).consume_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::error::LexicalErrorKind;

    /// Helper to scan and extract `(kind, lexeme)` pairs, excluding EOF.
    fn scan_pairs(source: &str) -> Vec<(TokenKind, String)> {
        scan(source.as_bytes())
            .into_iter()
            .map(|t| (t.kind(), t.lexeme().to_string()))
            .collect()
    }

    #[test]
    fn scan_empty() {
        assert!(scan(b"").is_empty());
        assert!(scan(b" \t\r\n\x0b\x0c").is_empty());
        assert!(scan(b"// only a comment").is_empty());
        assert!(scan(b"/* only a comment */").is_empty());
    }

    #[test]
    fn scan_keywords_and_identifiers() {
        assert_eq!(
            scan_pairs("int x _tmp returns"),
            vec![
                (TokenKind::Keyword, "int".to_string()),
                (TokenKind::Id, "x".to_string()),
                (TokenKind::Id, "_tmp".to_string()),
                (TokenKind::Id, "returns".to_string()),
            ]
        );
    }

    #[test]
    fn scan_numbers() {
        assert_eq!(
            scan_pairs("0 42 100"),
            vec![
                (TokenKind::Num, "0".to_string()),
                (TokenKind::Num, "42".to_string()),
                (TokenKind::Num, "100".to_string()),
            ]
        );
    }

    #[test]
    fn scan_symbols_and_equality_lookahead() {
        assert_eq!(
            scan_pairs("a == b = c < d"),
            vec![
                (TokenKind::Id, "a".to_string()),
                (TokenKind::Symbol, "==".to_string()),
                (TokenKind::Id, "b".to_string()),
                (TokenKind::Symbol, "=".to_string()),
                (TokenKind::Id, "c".to_string()),
                (TokenKind::Symbol, "<".to_string()),
                (TokenKind::Id, "d".to_string()),
            ]
        );
        // `=` flush against EOF stays a single symbol
        assert_eq!(scan_pairs("="), vec![(TokenKind::Symbol, "=".to_string())]);
    }

    #[test]
    fn slash_is_a_symbol_when_not_a_comment() {
        assert_eq!(
            scan_pairs("a / b"),
            vec![
                (TokenKind::Id, "a".to_string()),
                (TokenKind::Symbol, "/".to_string()),
                (TokenKind::Id, "b".to_string()),
            ]
        );
    }

    #[test]
    fn star_is_a_symbol_when_not_closing() {
        assert_eq!(
            scan_pairs("a * b"),
            vec![
                (TokenKind::Id, "a".to_string()),
                (TokenKind::Symbol, "*".to_string()),
                (TokenKind::Id, "b".to_string()),
            ]
        );
    }

    #[test]
    fn line_numbers_follow_newlines() {
        let tokens = scan(b"int\nx\n\n;");
        assert_eq!(tokens[0].line(), 1);
        assert_eq!(tokens[1].line(), 2);
        assert_eq!(tokens[2].line(), 4);
    }

    #[test]
    fn columns_reset_per_line() {
        let tokens = scan(b"int x;\n  y = 1;");
        assert_eq!((tokens[0].line(), tokens[0].column()), (1, 1));
        assert_eq!((tokens[1].line(), tokens[1].column()), (1, 5));
        assert_eq!((tokens[3].line(), tokens[3].column()), (2, 3));
    }

    #[test]
    fn line_comment_runs_to_newline() {
        assert_eq!(
            scan_pairs("a // b c d\ne"),
            vec![
                (TokenKind::Id, "a".to_string()),
                (TokenKind::Id, "e".to_string()),
            ]
        );
        // form feed also terminates a line comment
        assert_eq!(
            scan_pairs("a // b\x0cc"),
            vec![
                (TokenKind::Id, "a".to_string()),
                (TokenKind::Id, "c".to_string()),
            ]
        );
    }

    #[test]
    fn block_comment_spans_lines() {
        let mut scanner = Scanner::new(b"a /* line\nline\nline */ b");
        let tokens = scanner.consume_all();
        assert_eq!(tokens[0].lexeme(), "a");
        assert_eq!(tokens[1].lexeme(), "b");
        assert_eq!(tokens[1].line(), 3);
        assert!(scanner.errors().is_empty());
    }

    #[test]
    fn stray_closing_comment() {
        let mut scanner = Scanner::new(b"*/ int");
        let tokens = scanner.consume_all();
        assert_eq!(tokens[0].lexeme(), "int");
        let errors = scanner.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexicalErrorKind::UnmatchedComment);
        assert_eq!(errors[0].text, "*/");
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn unclosed_comment_curtails_stream() {
        let mut scanner = Scanner::new(b"int x;\n/* never ends\nmore");
        let tokens = scanner.consume_all();
        assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
        assert_eq!(tokens.len(), 4); // int, x, ;, EOF
        let errors = scanner.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexicalErrorKind::UnclosedComment);
        assert_eq!(errors[0].text, "/* Unclosed ...");
        assert_eq!(errors[0].line, 2);
    }

    #[test]
    fn eof_repeats_on_the_same_line() {
        let mut scanner = Scanner::new(b"x\n\n");
        let _ = scanner.next_token();
        let first = scanner.next_token();
        let second = scanner.next_token();
        assert!(first.kind().is_eof());
        assert_eq!(first.lexeme(), "EOF");
        assert_eq!(first.line(), second.line());
        assert!(second.kind().is_eof());
    }

    #[test]
    fn malformed_number_leading_zero() {
        let mut scanner = Scanner::new(b"a = 007;");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["a", "=", ";", "EOF"]);
        let errors = scanner.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexicalErrorKind::MalformedNumber);
        assert_eq!(errors[0].text, "007");
    }

    #[test]
    fn lone_zero_is_valid() {
        assert_eq!(scan_pairs("0;"), vec![
            (TokenKind::Num, "0".to_string()),
            (TokenKind::Symbol, ";".to_string()),
        ]);
    }

    #[test]
    fn malformed_number_letter_tail() {
        let mut scanner = Scanner::new(b"b = 12abc;");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["b", "=", ";", "EOF"]);
        let errors = scanner.errors();
        assert_eq!(errors[0].kind, LexicalErrorKind::MalformedNumber);
        assert_eq!(errors[0].text, "12abc");
    }

    #[test]
    fn malformed_number_underscore_tail() {
        let mut scanner = Scanner::new(b"0x 1_y");
        let _ = scanner.consume_all();
        let errors = scanner.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].text, "0x");
        assert_eq!(errors[1].text, "1_y");
    }

    #[test]
    fn illegal_character_absorbs_both_sides() {
        let mut scanner = Scanner::new(b"int invalid@x;");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["int", ";", "EOF"]);

        let errors = scanner.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, LexicalErrorKind::IllegalCharacter);
        assert_eq!(errors[0].text, "invalid@x");
        assert_eq!(errors[0].line, 1);

        // the retracted identifier is gone from the symbol table too
        assert!(!scanner.symbols().contains("invalid"));
    }

    #[test]
    fn retraction_latch_is_cleared_on_read() {
        let mut scanner = Scanner::new(b"abc@ ;");
        let _abc = scanner.next_token();
        let semi = scanner.next_token();
        assert_eq!(semi.lexeme(), ";");
        let retraction = scanner.take_retraction().unwrap();
        assert_eq!(retraction.lexeme, "abc");
        assert_eq!(retraction.line, 1);
        assert!(scanner.take_retraction().is_none());
    }

    #[test]
    fn no_retraction_across_whitespace() {
        // `abc` ends before the space, so it is a real token
        let mut scanner = Scanner::new(b"abc @x;");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["abc", ";", "EOF"]);
        assert!(scanner.symbols().contains("abc"));
        assert_eq!(scanner.errors()[0].text, "@x");
    }

    #[test]
    fn no_retraction_for_keywords() {
        let mut scanner = Scanner::new(b"if@ ;");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        // keyword is not retracted; the error still absorbs the prefix
        assert_eq!(lexemes, ["if", ";", "EOF"]);
        assert_eq!(scanner.errors()[0].text, "if@");
        assert!(scanner.symbols().contains("if"));
    }

    #[test]
    fn panic_recovery_absorbs_junk_run() {
        let mut scanner = Scanner::new(b"x@#$ y");
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["y", "EOF"]);
        let errors = scanner.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "x@#$");
    }

    #[test]
    fn symbol_table_tracks_first_lines() {
        let mut scanner = Scanner::new(b"int x;\nx = 2;\nint y;");
        let _ = scanner.consume_all();
        let symbols = scanner.symbols();
        assert_eq!(symbols.get("x").unwrap().first_line(), Some(1));
        assert_eq!(symbols.get("y").unwrap().first_line(), Some(3));
        assert_eq!(symbols.len(), 9); // 7 keywords + x + y
    }

    #[test]
    fn consume_all_applies_retraction() {
        let tokens = scan_with_eof(b"int invalid@x;");
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["int", ";", "EOF"]);
    }

    #[test]
    fn hello_variable_arithmetic() {
        let pairs = scan_pairs("int x; x = 2 + 3;");
        let rendered: Vec<String> = scan(b"int x; x = 2 + 3;")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(pairs.len(), 9);
        assert_eq!(
            rendered.join(" "),
            "(KEYWORD, int) (ID, x) (SYMBOL, ;) (ID, x) (SYMBOL, =) (NUM, 2) (SYMBOL, +) (NUM, 3) (SYMBOL, ;)"
        );
    }

    #[test]
    fn high_bytes_are_illegal_characters() {
        let mut scanner = Scanner::new(&[b'x', b' ', 0xf7, b';']);
        let tokens = scanner.consume_all();
        let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme().as_str()).collect();
        assert_eq!(lexemes, ["x", ";", "EOF"]);
        assert_eq!(scanner.errors()[0].kind, LexicalErrorKind::IllegalCharacter);
    }
}
