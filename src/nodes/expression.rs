// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Expression nodes.
//!
//! Identifier and literal text is borrowed from the caller for the lifetime
//! of the tree; trees are constructed programmatically since parsing is out
//! of scope for this crate.

use serde::Serialize;

use super::traits::NodeKind;

/// Any expression.
///
/// Traversal dispatches through this enum: the `visit_expression` /
/// `transform_expression` callbacks fire for the enum itself, then the
/// variant's own callback fires for the same tree position (with the same
/// path).
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expression<'a> {
    Name(Name<'a>),
    Attribute(Attribute<'a>),
    Call(Call<'a>),
    BinaryOperation(BinaryOperation<'a>),
    UnaryOperation(UnaryOperation<'a>),
    Comparison(Comparison<'a>),
    Tuple(Tuple<'a>),
    List(List<'a>),
    Constant(Constant<'a>),
}

impl<'a> Expression<'a> {
    /// The type tag of the active variant.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Name(_) => NodeKind::Name,
            Expression::Attribute(_) => NodeKind::Attribute,
            Expression::Call(_) => NodeKind::Call,
            Expression::BinaryOperation(_) => NodeKind::BinaryOperation,
            Expression::UnaryOperation(_) => NodeKind::UnaryOperation,
            Expression::Comparison(_) => NodeKind::Comparison,
            Expression::Tuple(_) => NodeKind::Tuple,
            Expression::List(_) => NodeKind::List,
            Expression::Constant(_) => NodeKind::Constant,
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Name<'a> {
    /// The identifier text.
    pub value: &'a str,
}

impl<'a> Name<'a> {
    /// Create a name from identifier text.
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }
}

/// An attribute access, e.g. `value.attr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute<'a> {
    /// The expression the attribute is read from.
    pub value: Box<Expression<'a>>,
    /// The attribute name.
    pub attr: Name<'a>,
}

/// A call, e.g. `func(args...)`. Keyword arguments are not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Call<'a> {
    pub func: Box<Expression<'a>>,
    pub args: Vec<Expression<'a>>,
}

/// A binary arithmetic operation, e.g. `left + right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryOperation<'a> {
    pub left: Box<Expression<'a>>,
    pub operator: BinaryOp,
    pub right: Box<Expression<'a>>,
}

/// A unary operation, e.g. `not expression`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnaryOperation<'a> {
    pub operator: UnaryOp,
    pub expression: Box<Expression<'a>>,
}

/// A single comparison, e.g. `left < comparator`.
///
/// Chained comparisons are modeled as nested `Comparison` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison<'a> {
    pub left: Box<Expression<'a>>,
    pub operator: CompOp,
    pub comparator: Box<Expression<'a>>,
}

/// A tuple display, e.g. `(a, b)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tuple<'a> {
    pub elements: Vec<Expression<'a>>,
}

/// A list display, e.g. `[a, b]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List<'a> {
    pub elements: Vec<Expression<'a>>,
}

/// A literal constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Constant<'a> {
    pub value: ConstantValue<'a>,
}

impl<'a> Constant<'a> {
    /// An integer literal; the text is kept verbatim.
    pub fn integer(text: &'a str) -> Self {
        Self {
            value: ConstantValue::Integer(text),
        }
    }

    /// A string literal.
    pub fn string(text: &'a str) -> Self {
        Self {
            value: ConstantValue::String(text),
        }
    }

    /// A boolean literal.
    pub fn bool(value: bool) -> Self {
        Self {
            value: ConstantValue::Bool(value),
        }
    }

    /// The `None` literal.
    pub fn none() -> Self {
        Self {
            value: ConstantValue::None,
        }
    }
}

/// The value of a [`Constant`]. Numeric literals keep their source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConstantValue<'a> {
    Integer(&'a str),
    String(&'a str),
    Bool(bool),
    None,
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitInvert,
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    In,
    NotIn,
    Is,
    IsNot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_kind_reports_variant() {
        let expr = Expression::BinaryOperation(BinaryOperation {
            left: Box::new(Expression::Name(Name::new("x"))),
            operator: BinaryOp::Add,
            right: Box::new(Expression::Constant(Constant::integer("1"))),
        });
        assert_eq!(expr.kind(), NodeKind::BinaryOperation);
        assert_eq!(Expression::Constant(Constant::none()).kind(), NodeKind::Constant);
    }
}
