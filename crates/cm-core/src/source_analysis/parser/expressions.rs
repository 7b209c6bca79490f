// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for CM.
//!
//! The expression grammar is LL(1)-factored. When an `ID` has already been
//! consumed, parsing continues in the *prime* family (`B`, `H`,
//! `Simple-expression-prime`, `Factor-prime`); contexts where no identifier
//! may begin the sub-expression use the *zegond* family. The helpers `D` and
//! `G` carry the additive and multiplicative operator tails right-recursively
//! and terminate with ε, which leaves the tree right-leaning but complete.

use crate::parse_tree::{NonTerminal, ParseNode};
use crate::source_analysis::TokenKind;

use super::Parser;

impl Parser {
    /// `Expression → ID B | Simple-expression-zegond`
    pub(super) fn expression(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Expression);
        if self.at_kind(TokenKind::Id) {
            node.push(self.take_leaf());
            node.push(self.b());
        } else {
            node.push(self.simple_expression_zegond());
        }
        node
    }

    /// `B → '=' Expression | '[' Expression ']' H | Simple-expression-prime`
    fn b(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::B);
        if self.at_symbol("=") {
            node.push(self.take_leaf());
            node.push(self.expression());
        } else if self.at_symbol("[") {
            node.push(self.take_leaf());
            node.push(self.expression());
            self.expect_symbol(&mut node, "]");
            node.push(self.h());
        } else {
            node.push(self.simple_expression_prime());
        }
        node
    }

    /// `H → '=' Expression | G D C`
    fn h(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::H);
        if self.at_symbol("=") {
            node.push(self.take_leaf());
            node.push(self.expression());
        } else {
            node.push(self.g());
            node.push(self.d());
            node.push(self.c());
        }
        node
    }

    /// `Simple-expression-zegond → Additive-expression-zegond C`
    fn simple_expression_zegond(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::SimpleExpressionZegond);
        node.push(self.additive_expression_zegond());
        node.push(self.c());
        node
    }

    /// `Simple-expression-prime → Additive-expression-prime C`
    fn simple_expression_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::SimpleExpressionPrime);
        node.push(self.additive_expression_prime());
        node.push(self.c());
        node
    }

    /// `C → ('==' | '<') Additive-expression | ε`
    fn c(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::C);
        if self.at_symbol("==") || self.at_symbol("<") {
            node.push(self.take_leaf());
            node.push(self.additive_expression());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Additive-expression → Term D`
    fn additive_expression(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::AdditiveExpression);
        node.push(self.term());
        node.push(self.d());
        node
    }

    /// `Additive-expression-prime → Term-prime D`
    fn additive_expression_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::AdditiveExpressionPrime);
        node.push(self.term_prime());
        node.push(self.d());
        node
    }

    /// `Additive-expression-zegond → Term-zegond D`
    fn additive_expression_zegond(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::AdditiveExpressionZegond);
        node.push(self.term_zegond());
        node.push(self.d());
        node
    }

    /// `D → ('+' | '-') Term D | ε`
    fn d(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::D);
        if self.at_symbol("+") || self.at_symbol("-") {
            node.push(self.take_leaf());
            node.push(self.term());
            node.push(self.d());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Term → Signed-factor G`
    fn term(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Term);
        node.push(self.signed_factor());
        node.push(self.g());
        node
    }

    /// `Term-prime → Factor-prime G`
    fn term_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::TermPrime);
        node.push(self.factor_prime());
        node.push(self.g());
        node
    }

    /// `Term-zegond → Signed-factor-zegond G`
    fn term_zegond(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::TermZegond);
        node.push(self.signed_factor_zegond());
        node.push(self.g());
        node
    }

    /// `G → ('*' | '/') Signed-factor G | ε`
    fn g(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::G);
        if self.at_symbol("*") || self.at_symbol("/") {
            node.push(self.take_leaf());
            node.push(self.signed_factor());
            node.push(self.g());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Signed-factor → ('+' | '-') Factor | Factor`
    fn signed_factor(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::SignedFactor);
        if self.at_symbol("+") || self.at_symbol("-") {
            node.push(self.take_leaf());
        }
        node.push(self.factor());
        node
    }

    /// `Signed-factor-zegond → ('+' | '-') Factor | Factor-zegond`
    fn signed_factor_zegond(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::SignedFactorZegond);
        if self.at_symbol("+") || self.at_symbol("-") {
            node.push(self.take_leaf());
            node.push(self.factor());
        } else {
            node.push(self.factor_zegond());
        }
        node
    }

    /// `Factor → '(' Expression ')' | ID Var-call-prime | NUM`
    fn factor(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Factor);
        if self.at_symbol("(") {
            node.push(self.take_leaf());
            node.push(self.expression());
            self.expect_symbol(&mut node, ")");
        } else if self.at_kind(TokenKind::Id) {
            node.push(self.take_leaf());
            node.push(self.var_call_prime());
        } else if self.at_kind(TokenKind::Num) {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'(' or ID or NUM");
        }
        node
    }

    /// `Var-call-prime → '(' Args ')' | Var-prime`
    fn var_call_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::VarCallPrime);
        if self.at_symbol("(") {
            node.push(self.take_leaf());
            node.push(self.args());
            self.expect_symbol(&mut node, ")");
        } else {
            node.push(self.var_prime());
        }
        node
    }

    /// `Var-prime → '[' Expression ']' | ε`
    fn var_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::VarPrime);
        if self.at_symbol("[") {
            node.push(self.take_leaf());
            node.push(self.expression());
            self.expect_symbol(&mut node, "]");
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Factor-prime → '(' Args ')' | ε`
    fn factor_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::FactorPrime);
        if self.at_symbol("(") {
            node.push(self.take_leaf());
            node.push(self.args());
            self.expect_symbol(&mut node, ")");
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }

    /// `Factor-zegond → '(' Expression ')' | NUM`
    fn factor_zegond(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::FactorZegond);
        if self.at_symbol("(") {
            node.push(self.take_leaf());
            node.push(self.expression());
            self.expect_symbol(&mut node, ")");
        } else if self.at_kind(TokenKind::Num) {
            node.push(self.take_leaf());
        } else {
            self.error_and_skip("'(' or NUM");
        }
        node
    }

    /// `Args → Arg-list | ε`
    ///
    /// The empty production is predicted on the closing `)`.
    fn args(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::Args);
        if self.at_symbol(")") {
            node.push(ParseNode::Epsilon);
        } else {
            node.push(self.arg_list());
        }
        node
    }

    /// `Arg-list → Expression Arg-list-prime`
    fn arg_list(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ArgList);
        node.push(self.expression());
        node.push(self.arg_list_prime());
        node
    }

    /// `Arg-list-prime → ',' Expression Arg-list-prime | ε`
    fn arg_list_prime(&mut self) -> ParseNode {
        let mut node = ParseNode::internal(NonTerminal::ArgListPrime);
        if self.at_symbol(",") {
            node.push(self.take_leaf());
            node.push(self.expression());
            node.push(self.arg_list_prime());
        } else {
            node.push(ParseNode::Epsilon);
        }
        node
    }
}
