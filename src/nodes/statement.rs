// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Module and statement nodes.

use serde::Serialize;

use super::expression::{Expression, Name};
use super::traits::NodeKind;

/// The tree root: a module body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module<'a> {
    pub body: Vec<Statement<'a>>,
}

impl<'a> Module<'a> {
    /// Create a module from its body.
    pub fn new(body: Vec<Statement<'a>>) -> Self {
        Self { body }
    }
}

/// Any statement.
///
/// Statements always appear inside a sequence-valued `body` (or `orelse`)
/// field, so the transformer callback for this enum runs in list context and
/// may remove the statement or splice in several.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Statement<'a> {
    FunctionDef(FunctionDef<'a>),
    ClassDef(ClassDef<'a>),
    If(If<'a>),
    While(While<'a>),
    For(For<'a>),
    Return(Return<'a>),
    Assign(Assign<'a>),
    Expr(Expr<'a>),
    Pass(Pass),
    Break(Break),
    Continue(Continue),
}

impl<'a> Statement<'a> {
    /// The type tag of the active variant.
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::FunctionDef(_) => NodeKind::FunctionDef,
            Statement::ClassDef(_) => NodeKind::ClassDef,
            Statement::If(_) => NodeKind::If,
            Statement::While(_) => NodeKind::While,
            Statement::For(_) => NodeKind::For,
            Statement::Return(_) => NodeKind::Return,
            Statement::Assign(_) => NodeKind::Assign,
            Statement::Expr(_) => NodeKind::Expr,
            Statement::Pass(_) => NodeKind::Pass,
            Statement::Break(_) => NodeKind::Break,
            Statement::Continue(_) => NodeKind::Continue,
        }
    }
}

/// A function definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDef<'a> {
    pub name: Name<'a>,
    pub params: Parameters<'a>,
    pub body: Vec<Statement<'a>>,
    /// The return annotation, if any.
    pub returns: Option<Expression<'a>>,
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDef<'a> {
    pub name: Name<'a>,
    pub bases: Vec<Expression<'a>>,
    pub body: Vec<Statement<'a>>,
}

/// An `if` statement. `elif` chains are modeled as a nested `If` inside
/// `orelse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct If<'a> {
    pub test: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub orelse: Vec<Statement<'a>>,
}

/// A `while` loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct While<'a> {
    pub test: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub orelse: Vec<Statement<'a>>,
}

/// A `for` loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct For<'a> {
    pub target: Expression<'a>,
    pub iter: Expression<'a>,
    pub body: Vec<Statement<'a>>,
    pub orelse: Vec<Statement<'a>>,
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Return<'a> {
    pub value: Option<Expression<'a>>,
}

/// An assignment, e.g. `a = b = value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assign<'a> {
    pub targets: Vec<Expression<'a>>,
    pub value: Expression<'a>,
}

/// An expression used as a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expr<'a> {
    pub value: Expression<'a>,
}

/// The `pass` statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pass;

/// The `break` statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Break;

/// The `continue` statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Continue;

/// A function's parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameters<'a> {
    pub params: Vec<Param<'a>>,
}

/// One function parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param<'a> {
    pub name: Name<'a>,
    pub default: Option<Expression<'a>>,
}

impl<'a> Param<'a> {
    /// Create a parameter with no default.
    pub fn new(name: &'a str) -> Self {
        Self {
            name: Name::new(name),
            default: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::Constant;

    #[test]
    fn statement_kind_reports_variant() {
        let stmt = Statement::Assign(Assign {
            targets: vec![Expression::Name(Name::new("x"))],
            value: Expression::Constant(Constant::integer("1")),
        });
        assert_eq!(stmt.kind(), NodeKind::Assign);
        assert_eq!(Statement::Pass(Pass).kind(), NodeKind::Pass);
    }
}
