// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The concrete parse tree.
//!
//! A node is either an internal node labelled with a grammar [`NonTerminal`]
//! and carrying an ordered child list, a terminal leaf carrying a [`Token`],
//! or an `epsilon` leaf marking an empty production. Nodes are uniquely
//! owned by their parent; construction is append-only during parsing.
//!
//! The tree is *concrete*: every matched terminal and every chosen ε of the
//! derivation is present, nothing is elided.
//!
//! # Rendering
//!
//! [`ParseNode::render`] produces the `parse_tree.txt` form, one node per
//! line. The root carries no connector; each child line is prefixed with the
//! parent's prefix plus `├── ` (non-last child) or `└── ` (last child), and
//! deeper prefixes extend with `│   ` after a non-last child and four spaces
//! after a last one. Terminal leaves render as `(KIND, lexeme)` and ε leaves
//! as the literal word `epsilon`.

use crate::source_analysis::Token;

/// The closed set of grammar non-terminal labels.
///
/// `as_str` spells each label exactly as it appears in the grammar (and in
/// `parse_tree.txt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Program,
    DeclarationList,
    Declaration,
    DeclarationInitial,
    DeclarationPrime,
    VarDeclarationPrime,
    FunDeclarationPrime,
    TypeSpecifier,
    Params,
    ParamList,
    Param,
    ParamPrime,
    CompoundStmt,
    StatementList,
    ExpressionStmt,
    SelectionStmt,
    IterationStmt,
    ReturnStmt,
    Expression,
    B,
    H,
    SimpleExpressionZegond,
    SimpleExpressionPrime,
    C,
    AdditiveExpression,
    AdditiveExpressionPrime,
    AdditiveExpressionZegond,
    D,
    Term,
    TermPrime,
    TermZegond,
    G,
    SignedFactor,
    SignedFactorZegond,
    Factor,
    VarCallPrime,
    VarPrime,
    FactorPrime,
    FactorZegond,
    Args,
    ArgList,
    ArgListPrime,
}

impl NonTerminal {
    /// Returns the grammar spelling of this label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::DeclarationList => "Declaration-list",
            Self::Declaration => "Declaration",
            Self::DeclarationInitial => "Declaration-initial",
            Self::DeclarationPrime => "Declaration-prime",
            Self::VarDeclarationPrime => "Var-declaration-prime",
            Self::FunDeclarationPrime => "Fun-declaration-prime",
            Self::TypeSpecifier => "Type-specifier",
            Self::Params => "Params",
            Self::ParamList => "Param-list",
            Self::Param => "Param",
            Self::ParamPrime => "Param-prime",
            Self::CompoundStmt => "Compound-stmt",
            Self::StatementList => "Statement-list",
            Self::ExpressionStmt => "Expression-stmt",
            Self::SelectionStmt => "Selection-stmt",
            Self::IterationStmt => "Iteration-stmt",
            Self::ReturnStmt => "Return-stmt",
            Self::Expression => "Expression",
            Self::B => "B",
            Self::H => "H",
            Self::SimpleExpressionZegond => "Simple-expression-zegond",
            Self::SimpleExpressionPrime => "Simple-expression-prime",
            Self::C => "C",
            Self::AdditiveExpression => "Additive-expression",
            Self::AdditiveExpressionPrime => "Additive-expression-prime",
            Self::AdditiveExpressionZegond => "Additive-expression-zegond",
            Self::D => "D",
            Self::Term => "Term",
            Self::TermPrime => "Term-prime",
            Self::TermZegond => "Term-zegond",
            Self::G => "G",
            Self::SignedFactor => "Signed-factor",
            Self::SignedFactorZegond => "Signed-factor-zegond",
            Self::Factor => "Factor",
            Self::VarCallPrime => "Var-call-prime",
            Self::VarPrime => "Var-prime",
            Self::FactorPrime => "Factor-prime",
            Self::FactorZegond => "Factor-zegond",
            Self::Args => "Args",
            Self::ArgList => "Arg-list",
            Self::ArgListPrime => "Arg-list-prime",
        }
    }
}

impl std::fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the concrete parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// An internal node with an ordered child list.
    NonTerminal {
        /// The grammar non-terminal this node derives.
        label: NonTerminal,
        /// Children in derivation order.
        children: Vec<ParseNode>,
    },
    /// A matched terminal.
    Terminal(Token),
    /// An explicit empty production.
    Epsilon,
}

impl ParseNode {
    /// Creates an internal node with no children yet.
    #[must_use]
    pub const fn internal(label: NonTerminal) -> Self {
        Self::NonTerminal {
            label,
            children: Vec::new(),
        }
    }

    /// Appends a child to an internal node.
    ///
    /// Leaves have no children; pushing onto one is a programming error and
    /// is ignored outside debug builds.
    pub fn push(&mut self, child: ParseNode) {
        match self {
            Self::NonTerminal { children, .. } => children.push(child),
            Self::Terminal(_) | Self::Epsilon => debug_assert!(false, "push onto a leaf"),
        }
    }

    /// Returns the label of an internal node.
    #[must_use]
    pub fn label(&self) -> Option<NonTerminal> {
        match self {
            Self::NonTerminal { label, .. } => Some(*label),
            Self::Terminal(_) | Self::Epsilon => None,
        }
    }

    /// Returns the children of an internal node (empty for leaves).
    #[must_use]
    pub fn children(&self) -> &[ParseNode] {
        match self {
            Self::NonTerminal { children, .. } => children,
            Self::Terminal(_) | Self::Epsilon => &[],
        }
    }

    /// Returns `true` for an ε leaf.
    #[must_use]
    pub const fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }

    /// Collects the terminal leaves in left-to-right order, skipping ε.
    #[must_use]
    pub fn leaf_tokens(&self) -> Vec<&Token> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a Token>) {
        match self {
            Self::NonTerminal { children, .. } => {
                for child in children {
                    child.collect_leaves(leaves);
                }
            }
            Self::Terminal(token) => leaves.push(token),
            Self::Epsilon => {}
        }
    }

    /// The label text of this node alone.
    fn display_label(&self) -> String {
        match self {
            Self::NonTerminal { label, .. } => label.as_str().to_string(),
            Self::Terminal(token) => token.to_string(),
            Self::Epsilon => "epsilon".to_string(),
        }
    }

    /// Renders the subtree in the `parse_tree.txt` form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.display_label());
        out.push('\n');
        self.render_children(&mut out, "");
        out
    }

    fn render_children(&self, out: &mut String, prefix: &str) {
        let children = self.children();
        for (index, child) in children.iter().enumerate() {
            let is_last = index + 1 == children.len();
            out.push_str(prefix);
            out.push_str(if is_last { "└── " } else { "├── " });
            out.push_str(&child.display_label());
            out.push('\n');
            let deeper = if is_last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            child.render_children(out, &deeper);
        }
    }
}
