// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Path-aware AST traversal.
//!
//! This crate wraps the classic visitor and transformer patterns with one
//! addition: every callback receives the **ancestor path** from the tree root
//! down to the visited node's parent, so handlers can make location-sensitive
//! decisions (is this `Name` an assignment target? is it inside a class
//! body?) without threading their own parent stacks.
//!
//! The path is root-inclusive and excludes the visited node: the root
//! `Module` sees an empty path, and a node at depth *n* sees *n* segments,
//! each naming an ancestor's kind and the edge taken out of it.
//!
//! # Visiting
//!
//! ```
//! use astpath::{walk, Assign, Constant, Expression, Module, Name, Path, Statement,
//!     VisitResult, Visitor};
//!
//! // x = 1
//! let module = Module::new(vec![Statement::Assign(Assign {
//!     targets: vec![Expression::Name(Name::new("x"))],
//!     value: Expression::Constant(Constant::integer("1")),
//! })]);
//!
//! struct NamePaths {
//!     seen: Vec<String>,
//! }
//!
//! impl<'a> Visitor<'a> for NamePaths {
//!     fn visit_name(&mut self, node: &Name<'a>, path: &Path) -> VisitResult {
//!         self.seen.push(format!("{} at {}", node.value, path));
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut visitor = NamePaths { seen: vec![] };
//! walk(&mut visitor, &module);
//! assert_eq!(visitor.seen, vec!["x at Module.body[0] > Assign.targets[0]"]);
//! ```
//!
//! # Transforming
//!
//! Transformers rebuild the tree bottom-up; statement handlers run in list
//! context and can drop a statement or splice in several:
//!
//! ```
//! use astpath::{transform, Break, Module, Pass, Path, Statement, Transform, Transformer};
//!
//! struct StripPass;
//!
//! impl<'a> Transformer<'a> for StripPass {
//!     fn transform_statement(
//!         &mut self,
//!         node: Statement<'a>,
//!         _path: &Path,
//!     ) -> Transform<Statement<'a>> {
//!         match node {
//!             Statement::Pass(_) => Transform::Remove,
//!             other => Transform::Keep(other),
//!         }
//!     }
//! }
//!
//! let module = Module::new(vec![Statement::Pass(Pass), Statement::Break(Break)]);
//! let module = transform(&mut StripPass, module);
//! assert_eq!(module.body, vec![Statement::Break(Break)]);
//! ```
//!
//! # Built-in Analyses
//!
//! [`PathCollector`] records every node's path in a [`PathTable`] keyed by
//! pre-order [`NodeId`]s; [`BindingCollector`] classifies bound names by
//! their location; [`RenameTransformer`] renames an identifier while leaving
//! attribute names alone.

pub mod nodes;
pub mod path;
pub mod visitor;

pub use nodes::{
    Assign, Attribute, BinaryOp, BinaryOperation, Break, Call, ClassDef, CompOp, Comparison,
    Constant, ConstantValue, Continue, Expr, Expression, For, FunctionDef, If, List, Module,
    Name, NodeId, NodeIdGenerator, NodeKind, Param, Parameters, Pass, PathRecord, PathTable,
    Return, Statement, Tuple, UnaryOp, UnaryOperation, While,
};
pub use path::{Edge, Path, PathSegment};
pub use visitor::{
    transform, walk, BindingCollector, BindingInfo, BindingKind, PathCollector, RenameError,
    RenameResult, RenameTransformer, Transform, Transformer, VisitResult, Visitor,
};
