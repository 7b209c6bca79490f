// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Declaration parsing for CM.
//!
//! This module handles the declaration half of the grammar: global and
//! local variable/array declarations, function declarations, and parameter
//! lists. `Declaration-prime` disambiguates variable from function forms on
//! the single `(` lookahead.

use crate::parse_tree::{NonTerminal, ParseNode};
use crate::source_analysis::TokenKind;

use super::Parser;

impl Parser {
    /// `Declaration-list → Declaration Declaration-list | ε`
    ///
    /// Predicts a declaration on `int`/`void` (the FIRST set of
    /// `Declaration-initial`); anything else takes the empty production.
    pub(super) fn declaration_list(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::DeclarationList);
        if self.at_keyword("int") || self.at_keyword("void") {
            node.push(self.declaration());
            node.push(self.declaration_list());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Declaration → Declaration-initial Declaration-prime`
    fn declaration(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Declaration);
        node.push(self.declaration_initial());
        node.push(self.declaration_prime());
        node
    }

    /// `Declaration-initial → Type-specifier ID`
    pub(super) fn declaration_initial(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::DeclarationInitial);
        node.push(self.type_specifier());
        if self.at_kind(TokenKind::Id) {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("ID");
        }
        node
    }

    /// `Declaration-prime → Fun-declaration-prime | Var-declaration-prime`
    fn declaration_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::DeclarationPrime);
        if self.at_symbol("(") {
            node.push(self.fun_declaration_prime());
        } else {
            node.push(self.var_declaration_prime());
        }
        node
    }

    /// `Var-declaration-prime → ';' | '[' NUM ']' ';'`
    ///
    /// On a mismatched lookahead this production synchronises: after the
    /// usual skip-one recovery it scans forward to the next `;` and attaches
    /// it when found, so a broken declaration does not poison the rest of
    /// the unit.
    fn var_declaration_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::VarDeclarationPrime);
        if self.at_symbol("[") {
            node.push(self.take_leaf());
            if self.at_kind(TokenKind::Num) {
                node.push(self.take_leaf());
            } else {
                self.error_and_skip("NUM");
            }
            self.expect_symbol(&mut node, "]");
            self.expect_symbol(&mut node, ";");
        } else if self.at_symbol(";") {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("';' or '['");
            while !self.at_end() && !self.at_symbol(";") {
                self.advance();
            }
            if self.at_symbol(";") {
                node.push(self.take_leaf());
            }
        }
        node
    }

    /// `Fun-declaration-prime → '(' Params ')' Compound-stmt`
    fn fun_declaration_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::FunDeclarationPrime);
        self.expect_symbol(&mut node, "(");
        node.push(self.params());
        self.expect_symbol(&mut node, ")");
        node.push(self.compound_stmt());
        node
    }

    /// `Type-specifier → 'int' | 'void'`
    fn type_specifier(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::TypeSpecifier);
        if self.at_keyword("int") || self.at_keyword("void") {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'int' or 'void'");
        }
        node
    }

    /// `Params → 'void' | 'int' ID Param-prime Param-list`
    fn params(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Params);
        if self.at_keyword("void") {
            node.push(self.take_leaf());
        } else if self.at_keyword("int") {
            node.push(self.take_leaf());
            if self.at_kind(TokenKind::Id) {
                node.push(self.take_leaf());
            } else {
                self.error_and_skip("ID");
            }
            node.push(self.param_prime());
            node.push(self.param_list());
        } else {
            self.error_and_skip("'void' or 'int'");
        }
        node
    }

    /// `Param-list → ',' Param Param-list | ε`
    fn param_list(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ParamList);
        if self.at_symbol(",") {
            node.push(self.take_leaf());
            node.push(self.param());
            node.push(self.param_list());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Param → Declaration-initial Param-prime`
    fn param(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Param);
        node.push(self.declaration_initial());
        node.push(self.param_prime());
        node
    }

    /// `Param-prime → '[' ']' | ε`
    fn param_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ParamPrime);
        if self.at_symbol("[") {
            node.push(self.take_leaf());
            self.expect_symbol(&mut node, "]");
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use crate::parse_tree::{NonTerminal, ParseNode};
    use crate::source_analysis::{scan_with_eof, SyntaxError};

    fn parse_source(source: &str) -> (ParseNode, Vec<SyntaxError>) {
        parse(scan_with_eof(source.as_bytes()))
    }

    fn find_all(node: &ParseNode, label: NonTerminal) -> Vec<&ParseNode> {
        let mut found = Vec::new();
        if node.label() == Some(label) {
            found.push(node);
        }
        for child in node.children() {
            found.extend(find_all(child, label));
        }
        found
    }

    #[test]
    fn variable_declaration() {
        let (tree, errors) = parse_source("int x;");
        assert!(errors.is_empty());
        let vars = find_all(&tree, NonTerminal::VarDeclarationPrime);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].children().len(), 1); // just the semicolon
    }

    #[test]
    fn array_declaration_carries_size() {
        let (tree, errors) = parse_source("int vec[10];");
        assert!(errors.is_empty());
        let vars = find_all(&tree, NonTerminal::VarDeclarationPrime);
        assert_eq!(vars[0].children().len(), 4); // [ NUM ] ;
    }

    #[test]
    fn function_with_parameter_list() {
        let (tree, errors) = parse_source("int add(int a, int b) { return a + b; }");
        assert!(errors.is_empty());
        let params = find_all(&tree, NonTerminal::Params);
        assert_eq!(params.len(), 1);
        // int ID Param-prime Param-list
        assert_eq!(params[0].children().len(), 4);
        let lists = find_all(&tree, NonTerminal::ParamList);
        assert_eq!(lists.len(), 2); // one comma production, one epsilon tail
        assert!(lists[1].children()[0].is_epsilon());
    }

    #[test]
    fn array_parameter_uses_param_prime() {
        let (tree, errors) = parse_source("void f(int buf[]) { }");
        assert!(errors.is_empty());
        let primes = find_all(&tree, NonTerminal::ParamPrime);
        assert_eq!(primes.len(), 1);
        assert_eq!(primes[0].children().len(), 2); // [ ]
    }

    #[test]
    fn void_parameter_list() {
        let (tree, errors) = parse_source("void main(void) { }");
        assert!(errors.is_empty());
        let params = find_all(&tree, NonTerminal::Params);
        assert_eq!(params[0].children().len(), 1);
    }

    #[test]
    fn missing_id_after_type_is_reported() {
        let (_, errors) = parse_source("int ;");
        assert!(!errors.is_empty());
        assert!(errors[0].message.starts_with("Expected ID"));
    }

    #[test]
    fn array_size_must_be_num() {
        let (_, errors) = parse_source("int vec[x];");
        assert!(!errors.is_empty());
        assert!(errors[0].message.starts_with("Expected NUM"));
    }

    #[test]
    fn broken_declaration_synchronises_on_semicolon() {
        let (tree, errors) = parse_source("int x + 3; int y;");
        assert!(!errors.is_empty());
        assert!(errors[0].message.starts_with("Expected ';' or '['"));
        // the second declaration still parses
        let decls = find_all(&tree, NonTerminal::Declaration);
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn declaration_lists_nest_right_recursively() {
        let (tree, errors) = parse_source("int x; int y;");
        assert!(errors.is_empty());
        let lists = find_all(&tree, NonTerminal::DeclarationList);
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].children().len(), 2);
        assert!(lists[2].children()[0].is_epsilon());
    }
}
