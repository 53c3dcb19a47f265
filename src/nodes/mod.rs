// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! AST node definitions.
//!
//! The node taxonomy follows the shape of Python's `ast` module: every node
//! is a struct whose child-node-valued fields are either singular, optional,
//! or sequence-valued, and whose scalar fields (operators, literal text) are
//! ignored by traversal. Trees are built programmatically; parsing source
//! text and generating source text back are owned by external tooling.

mod expression;
mod statement;
mod traits;

pub use expression::{
    Attribute, BinaryOp, BinaryOperation, Call, CompOp, Comparison, Constant, ConstantValue,
    Expression, List, Name, Tuple, UnaryOp, UnaryOperation,
};
pub use statement::{
    Assign, Break, ClassDef, Continue, Expr, For, FunctionDef, If, Module, Param, Parameters,
    Pass, Return, Statement, While,
};
pub use traits::{NodeId, NodeIdGenerator, NodeKind, PathRecord, PathTable};
