// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Predictive recursive-descent parser for CM source code.
//!
//! The parser consumes the materialised token sequence (terminated by EOF)
//! and builds a concrete parse tree from the start symbol `Program`. It is
//! designed around comprehensive error recovery:
//!
//! - **Error recovery is mandatory** — the parser always produces a tree
//! - **Multiple errors** — every mismatch is recorded, parsing continues
//! - **Local panic** — a mismatched terminal is reported and one lookahead
//!   token is skipped; the array-declaration production additionally scans
//!   forward to a synchronising `;`
//!
//! Each non-terminal has a method choosing its production from the one-token
//! lookahead. Matched terminals attach as token leaves; a chosen empty
//! production attaches an explicit `epsilon` leaf, so the tree is fully
//! concrete. The left-recursive operator constructs of the surface grammar
//! are expressed through the right-recursive helpers `D` (additive) and `G`
//! (multiplicative), and the *prime*/*zegond* non-terminal families encode
//! the LL(1) factoring for contexts where an identifier has or has not
//! already been consumed.
//!
//! # Usage
//!
//! ```
//! use cm_core::source_analysis::{parse, scan_with_eof};
//!
//! let tokens = scan_with_eof(b"void main(void) { return; }");
//! let (tree, errors) = parse(tokens);
//!
//! assert!(errors.is_empty());
//! assert_eq!(tree.render().lines().next(), Some("Program"));
//! ```

use crate::parse_tree::{NonTerminal, ParseNode};
use crate::source_analysis::{Span, SyntaxError, Token, TokenKind};

// Submodules with additional impl blocks for Parser
mod declarations;
mod expressions;


/// Parses a token sequence into a concrete parse tree.
///
/// This is the main entry point for parsing. It always returns a tree, even
/// if there are syntax errors; check the returned error list.
///
/// # Examples
///
/// ```
/// use cm_core::source_analysis::{parse, scan_with_eof};
///
/// let (tree, errors) = parse(scan_with_eof(b"int x;"));
/// assert!(errors.is_empty());
/// assert!(!tree.leaf_tokens().is_empty());
/// ```
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (ParseNode, Vec<SyntaxError>) {
    let mut parser = Parser::new(tokens);
    let tree = parser.parse_program();
    (tree, parser.errors)
}

/// The parser state: a one-token-lookahead cursor over the token sequence.
pub(crate) struct Parser {
    /// The tokens being parsed, always ending with EOF.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Accumulated syntax errors in detection order.
    errors: Vec<SyntaxError>,
}

impl Parser {
    /// Creates a new parser, appending a synthetic EOF if the sequence
    /// lacks one.
    fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.kind().is_eof()) {
            let (span, line, column) = tokens.last().map_or((Span::default(), 1, 1), |t| {
                (Span::new(t.span().end(), t.span().end()), t.line(), t.column())
            });
            tokens.push(Token::new(TokenKind::Eof, "EOF", span, line, column));
        }
        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current lookahead token.
    fn current_token(&self) -> &Token {
        let index = self.current.min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Checks if the lookahead is EOF.
    fn at_end(&self) -> bool {
        self.current_token().kind().is_eof()
    }

    /// Advances past the current token. Never advances past EOF.
    fn advance(&mut self) {
        if !self.at_end() {
            self.current += 1;
        }
    }

    /// Checks the lookahead kind.
    fn at_kind(&self, kind: TokenKind) -> bool {
        self.current_token().kind() == kind
    }

    /// Checks the lookahead for a specific symbol lexeme.
    fn at_symbol(&self, symbol: &str) -> bool {
        self.current_token().is_symbol(symbol)
    }

    /// Checks the lookahead for a specific keyword lexeme.
    fn at_keyword(&self, keyword: &str) -> bool {
        self.current_token().is_keyword(keyword)
    }

    /// Consumes the lookahead into a terminal leaf.
    fn take_leaf(&mut self) -> ParseNode {
        let token = self.current_token().clone();
        self.advance();
        ParseNode::Terminal(token)
    }

    // ========================================================================
    // Error Recovery
    // ========================================================================

    /// Records a mismatch at the lookahead and skips one token.
    ///
    /// `expected` is the human description of what the production wanted,
    /// e.g. `';'` or `ID` or `'int' or 'void'`.
    fn error_and_skip(&mut self, expected: &str) {
        let token = self.current_token();
        self.errors.push(SyntaxError::new(
            format!("Expected {expected} but found '{}'", token.lexeme()),
            token.line(),
            token.column(),
        ));
        self.advance();
    }

    /// Attaches the expected symbol as a leaf, or reports it missing.
    fn expect_symbol(&mut self, node: &mut ParseNode, symbol: &str) {
        if self.at_symbol(symbol) {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip(&format!("'{symbol}'"));
        }
    }

    // ========================================================================
    // Program and Statements
    // ========================================================================

    /// `Program → Declaration-list` followed by the EOF leaf.
    fn parse_program(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Program);
        node.push(self.declaration_list());
        if !self.at_end() {
            self.error_and_skip("EOF");
            while !self.at_end() {
                self.advance();
            }
        }
        node.push(ParseNode::Terminal(self.current_token().clone()));
        node
    }

    /// `Compound-stmt → '{' Declaration-list Statement-list '}'`
    pub(super) fn compound_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::CompoundStmt);
        self.expect_symbol(&mut node, "{");
        node.push(self.declaration_list());
        node.push(self.statement_list());
        self.expect_symbol(&mut node, "}");
        node
    }

    /// Predict set of `Statement`.
    fn at_statement_start(&self) -> bool {
        let token = self.current_token();
        match token.kind() {
            TokenKind::Id | TokenKind::Num => true,
            TokenKind::Keyword => {
                matches!(token.lexeme().as_str(), "if" | "for" | "return" | "break")
            }
            TokenKind::Symbol => matches!(token.lexeme().as_str(), "{" | ";" | "(" | "+" | "-"),
            TokenKind::Eof | TokenKind::Error => false,
        }
    }

    /// `Statement-list → Statement Statement-list | ε`
    fn statement_list(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::StatementList);
        if self.at_statement_start() {
            node.push(self.statement());
            node.push(self.statement_list());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Statement → Expression-stmt | Compound-stmt | Selection-stmt
    /// | Iteration-stmt | Return-stmt`
    fn statement(&mut self) -> ParseNode {
        if self.at_symbol("{") {
            return self.compound_stmt();
        }
        if self.at_keyword("if") {
            return self.selection_stmt();
        }
        if self.at_keyword("for") {
            return self.iteration_stmt();
        }
        if self.at_keyword("return") {
            return self.return_stmt();
        }
        self.expression_stmt()
    }

    /// `Expression-stmt → Expression ';' | 'break' ';' | ';'`
    fn expression_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ExpressionStmt);
        if self.at_keyword("break") {
            node.push(self.take_leaf());
            self.expect_symbol(&mut node, ";");
        } else if self.at_symbol(";") {
            node.push(self.take_leaf());
        } else {
            node.push(self.expression());
            self.expect_symbol(&mut node, ";");
        }
        node
    }

    /// `Selection-stmt → 'if' '(' Expression ')' Statement
    /// ('else' Statement | ε)`
    ///
    /// A dangling `else` binds to the nearest `if`: the branch is consumed
    /// greedily whenever `else` is the immediate next token.
    fn selection_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::SelectionStmt);
        if self.at_keyword("if") {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'if'");
        }
        self.expect_symbol(&mut node, "(");
        node.push(self.expression());
        self.expect_symbol(&mut node, ")");
        node.push(self.statement());
        if self.at_keyword("else") {
            node.push(self.take_leaf());
            node.push(self.statement());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Iteration-stmt → 'for' '(' Expression ';' Expression ';'
    /// Expression ')' Compound-stmt`
    fn iteration_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::IterationStmt);
        if self.at_keyword("for") {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'for'");
        }
        self.expect_symbol(&mut node, "(");
        node.push(self.expression());
        self.expect_symbol(&mut node, ";");
        node.push(self.expression());
        self.expect_symbol(&mut node, ";");
        node.push(self.expression());
        self.expect_symbol(&mut node, ")");
        node.push(self.compound_stmt());
        node
    }

    /// `Return-stmt → 'return' (';' | Expression ';')`
    fn return_stmt(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ReturnStmt);
        if self.at_keyword("return") {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'return'");
        }
        if self.at_symbol(";") {
            node.push(self.take_leaf());
        } else {
            node.push(self.expression());
            self.expect_symbol(&mut node, ";");
        }
        node
    }
}
