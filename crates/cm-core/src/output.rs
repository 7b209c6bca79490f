// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Artifact rendering.
//!
//! The compiler shell writes five artifacts; this module renders each of
//! them to a `String` so the rendering stays separate from file I/O:
//!
//! - `tokens.txt` — emitted tokens grouped by source line
//! - `lexical_errors.txt` — the scanner's error list, or a sentinel
//! - `symbol_table.txt` — table lexemes sorted alphabetically
//! - `parse_tree.txt` — the rendered concrete parse tree
//! - `syntax_errors.txt` — the parser's error list, or a sentinel
//!
//! [`TokenLines`] is the grouped-token accumulator and the consumer half of
//! the scanner's retroactive-invalidation protocol: after every scanner call
//! it applies any latched [`Retraction`](crate::source_analysis::Retraction)
//! by deleting the most recent `(ID, lexeme)` entry from the signalled line,
//! dropping the line if it empties.

use std::collections::BTreeMap;

use crate::parse_tree::ParseNode;
use crate::source_analysis::{
    LexicalError, Scanner, SymbolTable, SyntaxError, Token, TokenKind,
};

/// Tokens grouped by source line, in emission order within each line.
#[derive(Debug, Clone, Default)]
pub struct TokenLines {
    lines: BTreeMap<u32, Vec<Token>>,
}

impl TokenLines {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains a scanner into an accumulator, applying retractions as they
    /// are latched. Returns the accumulator and the final EOF token.
    pub fn from_scanner(scanner: &mut Scanner<'_>) -> (Self, Token) {
        let mut lines = Self::new();
        loop {
            let token = scanner.next_token();
            if let Some(retraction) = scanner.take_retraction() {
                lines.retract(&retraction.lexeme, retraction.line);
            }
            if token.kind().is_eof() {
                return (lines, token);
            }
            lines.push(token);
        }
    }

    /// Appends an emitted token to its line group. EOF is not accumulated.
    pub fn push(&mut self, token: Token) {
        if token.kind().is_eof() {
            return;
        }
        self.lines.entry(token.line()).or_default().push(token);
    }

    /// Deletes the most recent `(ID, lexeme)` entry on the given line,
    /// dropping the line group if it becomes empty.
    pub fn retract(&mut self, lexeme: &str, line: u32) {
        if let Some(tokens) = self.lines.get_mut(&line) {
            let found = tokens
                .iter()
                .rposition(|t| t.kind() == TokenKind::Id && t.lexeme() == lexeme);
            if let Some(index) = found {
                tokens.remove(index);
                if tokens.is_empty() {
                    self.lines.remove(&line);
                }
            }
        }
    }

    /// Returns the accumulated tokens flattened back into emission order,
    /// the sequence handed to the parser.
    #[must_use]
    pub fn flattened(&self) -> Vec<Token> {
        self.lines.values().flatten().cloned().collect()
    }

    /// Returns `true` if no line produced a token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Renders `tokens.txt`: one line per source line that produced tokens,
/// ascending, `<L>. (K1, lex1) (K2, lex2) ...`.
#[must_use]
pub fn render_tokens(lines: &TokenLines) -> String {
    let mut out = String::new();
    for (line, tokens) in &lines.lines {
        let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
        out.push_str(&format!("{line}. {}\n", rendered.join(" ")));
    }
    out
}

/// Renders `lexical_errors.txt`: `<L>. (<thrown>, <message>)` per error, or
/// the affirmative sentinel.
#[must_use]
pub fn render_lexical_errors(errors: &[LexicalError]) -> String {
    if errors.is_empty() {
        return "No lexical errors found.\n".to_string();
    }
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!("{}. ({}, {})\n", error.line, error.text, error.kind));
    }
    out
}

/// Renders `symbol_table.txt`: lexemes sorted alphabetically with a 1-based
/// index after sorting.
#[must_use]
pub fn render_symbol_table(table: &SymbolTable) -> String {
    let mut out = String::new();
    for (index, lexeme) in table.sorted_lexemes().iter().enumerate() {
        out.push_str(&format!("{}.\t{lexeme}\n", index + 1));
    }
    out
}

/// Renders `parse_tree.txt`.
#[must_use]
pub fn render_parse_tree(root: &ParseNode) -> String {
    root.render()
}

/// Renders `syntax_errors.txt`: one error per line in detection order, or
/// the affirmative sentinel.
#[must_use]
pub fn render_syntax_errors(errors: &[SyntaxError]) -> String {
    if errors.is_empty() {
        return "No syntax errors.\n".to_string();
    }
    let mut out = String::new();
    for error in errors {
        out.push_str(&format!("{error}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::parse;

    fn artifacts(source: &[u8]) -> (String, String, String) {
        let mut scanner = Scanner::new(source);
        let (lines, _eof) = TokenLines::from_scanner(&mut scanner);
        let tokens = render_tokens(&lines);
        let errors = render_lexical_errors(scanner.errors());
        let symbols = render_symbol_table(scanner.symbols());
        (tokens, errors, symbols)
    }

    #[test]
    fn hello_variable_arithmetic() {
        let (tokens, errors, symbols) = artifacts(b"int x; x = 2 + 3;");
        assert_eq!(
            tokens,
            "1. (KEYWORD, int) (ID, x) (SYMBOL, ;) (ID, x) (SYMBOL, =) (NUM, 2) (SYMBOL, +) (NUM, 3) (SYMBOL, ;)\n"
        );
        assert_eq!(errors, "No lexical errors found.\n");
        // keywords plus x, alphabetical
        assert_eq!(
            symbols,
            "1.\tbreak\n2.\telse\n3.\tfor\n4.\tif\n5.\tint\n6.\treturn\n7.\tvoid\n8.\tx\n"
        );
    }

    #[test]
    fn malformed_numbers_report_and_resume() {
        let (tokens, errors, _) = artifacts(b"int a; a = 007; b = 12abc;");
        assert_eq!(
            errors,
            "1. (007, Malformed number)\n1. (12abc, Malformed number)\n"
        );
        // scanning resumed after each error
        assert!(tokens.contains("(ID, b)"));
        assert!(tokens.ends_with("(SYMBOL, ;)\n"));
    }

    #[test]
    fn illegal_character_with_adjacency() {
        let (tokens, errors, symbols) = artifacts(b"int invalid@x;");
        assert_eq!(errors, "1. (invalid@x, Illegal character)\n");
        assert_eq!(tokens, "1. (KEYWORD, int) (SYMBOL, ;)\n");
        assert!(!symbols.contains("invalid"));
    }

    #[test]
    fn stray_and_unclosed_comments() {
        let (tokens, errors, _) = artifacts(b"*/ /* never ends");
        assert_eq!(
            errors,
            "1. (*/, Stray closing comment)\n1. (/* Unclosed ..., Open comment at EOF)\n"
        );
        assert_eq!(tokens, "");
    }

    #[test]
    fn retraction_drops_emptied_lines() {
        let mut scanner = Scanner::new(b"abc@\n;");
        let (lines, _) = TokenLines::from_scanner(&mut scanner);
        // line 1 held only the retracted ID, so it vanishes entirely
        assert_eq!(render_tokens(&lines), "2. (SYMBOL, ;)\n");
    }

    #[test]
    fn retraction_removes_most_recent_occurrence() {
        let mut lines = TokenLines::new();
        let mut scanner = Scanner::new(b"x ; x");
        loop {
            let token = scanner.next_token();
            if token.kind().is_eof() {
                break;
            }
            lines.push(token);
        }
        lines.retract("x", 1);
        assert_eq!(render_tokens(&lines), "1. (ID, x) (SYMBOL, ;)\n");
    }

    #[test]
    fn flattened_preserves_emission_order() {
        let mut scanner = Scanner::new(b"int x;\nx = 2;");
        let (lines, _) = TokenLines::from_scanner(&mut scanner);
        let lexemes: Vec<_> = lines
            .flattened()
            .iter()
            .map(|t| t.lexeme().to_string())
            .collect();
        assert_eq!(lexemes, ["int", "x", ";", "x", "=", "2", ";"]);
    }

    #[test]
    fn syntax_error_rendering() {
        assert_eq!(render_syntax_errors(&[]), "No syntax errors.\n");
        let errors = vec![SyntaxError::new("Expected ';' but found '}'", 1, 25)];
        assert_eq!(
            render_syntax_errors(&errors),
            "Expected ';' but found '}' at line 1 col 25\n"
        );
    }

    #[test]
    fn parse_tree_rendering_matches_node_render() {
        let mut scanner = Scanner::new(b"int x;");
        let (lines, eof) = TokenLines::from_scanner(&mut scanner);
        let mut tokens = lines.flattened();
        tokens.push(eof);
        let (tree, errors) = parse(tokens);
        assert!(errors.is_empty());
        let rendered = render_parse_tree(&tree);
        assert!(rendered.starts_with("Program\n"));
        assert!(rendered.contains("(KEYWORD, int)"));
        assert!(rendered.contains("epsilon"));
    }
}
