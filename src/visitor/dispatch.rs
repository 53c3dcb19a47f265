// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Walk and transform functions for path-aware traversal.
//!
//! This module contains the functions that traverse AST nodes and call
//! visitor or transformer methods, maintaining the ancestor [`Path`] as they
//! descend.
//!
//! # Traversal Order
//!
//! - **Visitor**: `visit_*` pre-order, `leave_*` post-order, children in
//!   declared field order, sequence fields element by element.
//! - **Transformer**: children are transformed before the node's own handler
//!   runs (bottom-up); `transform_statement` results are spliced into the
//!   enclosing statement list.
//!
//! # Path Bookkeeping
//!
//! Before recursing into a child, the engine pushes one [`PathSegment`]
//! naming the current node and the edge to that child; the segment is popped
//! as soon as the child's subtree is done, before any sibling is visited.
//! All pushes and pops go through [`with_segment`], so the stack discipline
//! holds on every control-flow path, including early `Stop` returns.
//!
//! # Control Flow
//!
//! - `VisitResult::Continue` - traverse into children
//! - `VisitResult::SkipChildren` - skip children but still call `leave_*`
//! - `VisitResult::Stop` - halt traversal immediately (no `leave_*` called)

use super::traits::{Transform, Transformer, VisitResult, Visitor};
use crate::nodes::{
    // Module
    Module,
    // Statements
    Statement, FunctionDef, ClassDef, If, While, For, Return, Assign, Expr, Pass, Break,
    Continue, Parameters, Param, NodeKind,
    // Expressions
    Expression, Name, Attribute, Call, BinaryOperation, UnaryOperation, Comparison, Tuple, List,
    Constant,
};
use crate::path::{Path, PathSegment};

/// Run `f` with `path` extended by `segment`, restoring the path afterwards.
///
/// Sole mutation point for the path during traversal; the pop happens on
/// every return path, so sibling subtrees never observe each other's
/// segments.
fn with_segment<R>(path: &mut Path, segment: PathSegment, f: impl FnOnce(&mut Path) -> R) -> R {
    path.push(segment);
    let result = f(path);
    path.pop();
    result
}

// ============================================================================
// Visitor entry point
// ============================================================================

/// Walk a tree from its root with a fresh, empty path.
///
/// The root `Module`'s own callbacks see an empty path. Returns the final
/// [`VisitResult`]: `Stop` if a handler halted the walk, `Continue`
/// otherwise.
pub fn walk<'a, V: Visitor<'a>>(visitor: &mut V, module: &Module<'a>) -> VisitResult {
    tracing::trace!(statements = module.body.len(), "walking module");
    let mut path = Path::new();
    walk_module(visitor, module, &mut path)
}

// ============================================================================
// Statement walks
// ============================================================================

/// Walk a [`Module`] node and its children.
///
/// Traversal order:
/// 1. `visit_module`
/// 2. Walk each statement in `body` (in order)
/// 3. `leave_module`
pub fn walk_module<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Module<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_module(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_body(visitor, NodeKind::Module, "body", &node.body, path) == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_module(node, path);
    VisitResult::Continue
}

/// Walk each statement of a sequence-valued field, one path segment per
/// element.
fn walk_body<'a, V: Visitor<'a>>(
    visitor: &mut V,
    kind: NodeKind,
    field: &'static str,
    body: &[Statement<'a>],
    path: &mut Path,
) -> VisitResult {
    for (index, stmt) in body.iter().enumerate() {
        let result = with_segment(path, PathSegment::item(kind, field, index), |path| {
            walk_statement(visitor, stmt, path)
        });
        if result == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    VisitResult::Continue
}

/// Walk each expression of a sequence-valued field.
fn walk_expr_list<'a, V: Visitor<'a>>(
    visitor: &mut V,
    kind: NodeKind,
    field: &'static str,
    elements: &[Expression<'a>],
    path: &mut Path,
) -> VisitResult {
    for (index, element) in elements.iter().enumerate() {
        let result = with_segment(path, PathSegment::item(kind, field, index), |path| {
            walk_expression(visitor, element, path)
        });
        if result == VisitResult::Stop {
            return VisitResult::Stop;
        }
    }
    VisitResult::Continue
}

/// Walk a [`Statement`] node.
///
/// Dispatches to the walk for the active variant; the variant's callbacks
/// receive the same path as `visit_statement`, since both describe one tree
/// position.
pub fn walk_statement<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Statement<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_statement(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner_result = match node {
                Statement::FunctionDef(f) => walk_function_def(visitor, f, path),
                Statement::ClassDef(c) => walk_class_def(visitor, c, path),
                Statement::If(i) => walk_if(visitor, i, path),
                Statement::While(w) => walk_while(visitor, w, path),
                Statement::For(f) => walk_for(visitor, f, path),
                Statement::Return(r) => walk_return(visitor, r, path),
                Statement::Assign(a) => walk_assign(visitor, a, path),
                Statement::Expr(e) => walk_expr_stmt(visitor, e, path),
                Statement::Pass(p) => walk_pass(visitor, p, path),
                Statement::Break(b) => walk_break(visitor, b, path),
                Statement::Continue(c) => walk_continue(visitor, c, path),
            };
            if inner_result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_statement(node, path);
    VisitResult::Continue
}

/// Walk a [`FunctionDef`] node: name, params, body, returns.
pub fn walk_function_def<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &FunctionDef<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_function_def(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::FunctionDef, "name"),
                |path| walk_name(visitor, &node.name, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::FunctionDef, "params"),
                |path| walk_parameters(visitor, &node.params, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::FunctionDef, "body", &node.body, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
            if let Some(returns) = &node.returns {
                let result = with_segment(
                    path,
                    PathSegment::field(NodeKind::FunctionDef, "returns"),
                    |path| walk_expression(visitor, returns, path),
                );
                if result == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_function_def(node, path);
    VisitResult::Continue
}

/// Walk a [`ClassDef`] node: name, bases, body.
pub fn walk_class_def<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &ClassDef<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_class_def(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::ClassDef, "name"),
                |path| walk_name(visitor, &node.name, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expr_list(visitor, NodeKind::ClassDef, "bases", &node.bases, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::ClassDef, "body", &node.body, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_class_def(node, path);
    VisitResult::Continue
}

/// Walk an [`If`] node: test, body, orelse.
pub fn walk_if<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &If<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_if_stmt(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(path, PathSegment::field(NodeKind::If, "test"), |path| {
                walk_expression(visitor, &node.test, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::If, "body", &node.body, path) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::If, "orelse", &node.orelse, path) == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_if_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`While`] node: test, body, orelse.
pub fn walk_while<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &While<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_while_stmt(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(path, PathSegment::field(NodeKind::While, "test"), |path| {
                walk_expression(visitor, &node.test, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::While, "body", &node.body, path) == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::While, "orelse", &node.orelse, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_while_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`For`] node: target, iter, body, orelse.
pub fn walk_for<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &For<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_for_stmt(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(path, PathSegment::field(NodeKind::For, "target"), |path| {
                walk_expression(visitor, &node.target, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            let result = with_segment(path, PathSegment::field(NodeKind::For, "iter"), |path| {
                walk_expression(visitor, &node.iter, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::For, "body", &node.body, path) == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_body(visitor, NodeKind::For, "orelse", &node.orelse, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_for_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`Return`] node.
pub fn walk_return<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Return<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_return_stmt(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if let Some(value) = &node.value {
                let result =
                    with_segment(path, PathSegment::field(NodeKind::Return, "value"), |path| {
                        walk_expression(visitor, value, path)
                    });
                if result == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_return_stmt(node, path);
    VisitResult::Continue
}

/// Walk an [`Assign`] node: targets, then value.
pub fn walk_assign<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Assign<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_assign(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expr_list(visitor, NodeKind::Assign, "targets", &node.targets, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
            let result =
                with_segment(path, PathSegment::field(NodeKind::Assign, "value"), |path| {
                    walk_expression(visitor, &node.value, path)
                });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_assign(node, path);
    VisitResult::Continue
}

/// Walk an [`Expr`] statement node.
pub fn walk_expr_stmt<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Expr<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_expr(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result =
                with_segment(path, PathSegment::field(NodeKind::Expr, "value"), |path| {
                    walk_expression(visitor, &node.value, path)
                });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_expr(node, path);
    VisitResult::Continue
}

/// Walk a [`Pass`] node.
pub fn walk_pass<'a, V: Visitor<'a>>(visitor: &mut V, node: &Pass, path: &mut Path) -> VisitResult {
    if visitor.visit_pass_stmt(node, path) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_pass_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`Break`] node.
pub fn walk_break<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Break,
    path: &mut Path,
) -> VisitResult {
    if visitor.visit_break_stmt(node, path) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_break_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`Continue`] node.
pub fn walk_continue<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Continue,
    path: &mut Path,
) -> VisitResult {
    if visitor.visit_continue_stmt(node, path) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_continue_stmt(node, path);
    VisitResult::Continue
}

/// Walk a [`Parameters`] node.
pub fn walk_parameters<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Parameters<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_parameters(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            for (index, param) in node.params.iter().enumerate() {
                let result = with_segment(
                    path,
                    PathSegment::item(NodeKind::Parameters, "params", index),
                    |path| walk_param(visitor, param, path),
                );
                if result == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_parameters(node, path);
    VisitResult::Continue
}

/// Walk a [`Param`] node: name, then default.
pub fn walk_param<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Param<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_param(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(path, PathSegment::field(NodeKind::Param, "name"), |path| {
                walk_name(visitor, &node.name, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if let Some(default) = &node.default {
                let result =
                    with_segment(path, PathSegment::field(NodeKind::Param, "default"), |path| {
                        walk_expression(visitor, default, path)
                    });
                if result == VisitResult::Stop {
                    return VisitResult::Stop;
                }
            }
        }
    }
    visitor.leave_param(node, path);
    VisitResult::Continue
}

// ============================================================================
// Expression walks
// ============================================================================

/// Walk an [`Expression`] node.
///
/// Dispatches to the walk for the active variant with the same path.
pub fn walk_expression<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Expression<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_expression(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let inner_result = match node {
                Expression::Name(n) => walk_name(visitor, n, path),
                Expression::Attribute(a) => walk_attribute(visitor, a, path),
                Expression::Call(c) => walk_call(visitor, c, path),
                Expression::BinaryOperation(b) => walk_binary_operation(visitor, b, path),
                Expression::UnaryOperation(u) => walk_unary_operation(visitor, u, path),
                Expression::Comparison(c) => walk_comparison(visitor, c, path),
                Expression::Tuple(t) => walk_tuple(visitor, t, path),
                Expression::List(l) => walk_list(visitor, l, path),
                Expression::Constant(c) => walk_constant(visitor, c, path),
            };
            if inner_result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_expression(node, path);
    VisitResult::Continue
}

/// Walk a [`Name`] node.
pub fn walk_name<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Name<'a>,
    path: &mut Path,
) -> VisitResult {
    if visitor.visit_name(node, path) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_name(node, path);
    VisitResult::Continue
}

/// Walk an [`Attribute`] node: value, then attr.
pub fn walk_attribute<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Attribute<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_attribute(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result =
                with_segment(path, PathSegment::field(NodeKind::Attribute, "value"), |path| {
                    walk_expression(visitor, &node.value, path)
                });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            let result =
                with_segment(path, PathSegment::field(NodeKind::Attribute, "attr"), |path| {
                    walk_name(visitor, &node.attr, path)
                });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_attribute(node, path);
    VisitResult::Continue
}

/// Walk a [`Call`] node: func, then args.
pub fn walk_call<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Call<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_call(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(path, PathSegment::field(NodeKind::Call, "func"), |path| {
                walk_expression(visitor, &node.func, path)
            });
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            if walk_expr_list(visitor, NodeKind::Call, "args", &node.args, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_call(node, path);
    VisitResult::Continue
}

/// Walk a [`BinaryOperation`] node: left, then right.
pub fn walk_binary_operation<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &BinaryOperation<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_binary_operation(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::BinaryOperation, "left"),
                |path| walk_expression(visitor, &node.left, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::BinaryOperation, "right"),
                |path| walk_expression(visitor, &node.right, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_binary_operation(node, path);
    VisitResult::Continue
}

/// Walk a [`UnaryOperation`] node.
pub fn walk_unary_operation<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &UnaryOperation<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_unary_operation(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::UnaryOperation, "expression"),
                |path| walk_expression(visitor, &node.expression, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_unary_operation(node, path);
    VisitResult::Continue
}

/// Walk a [`Comparison`] node: left, then comparator.
pub fn walk_comparison<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Comparison<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_comparison(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::Comparison, "left"),
                |path| walk_expression(visitor, &node.left, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
            let result = with_segment(
                path,
                PathSegment::field(NodeKind::Comparison, "comparator"),
                |path| walk_expression(visitor, &node.comparator, path),
            );
            if result == VisitResult::Stop {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_comparison(node, path);
    VisitResult::Continue
}

/// Walk a [`Tuple`] node.
pub fn walk_tuple<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Tuple<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_tuple(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expr_list(visitor, NodeKind::Tuple, "elements", &node.elements, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_tuple(node, path);
    VisitResult::Continue
}

/// Walk a [`List`] node.
pub fn walk_list<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &List<'a>,
    path: &mut Path,
) -> VisitResult {
    match visitor.visit_list(node, path) {
        VisitResult::Stop => return VisitResult::Stop,
        VisitResult::SkipChildren => {}
        VisitResult::Continue => {
            if walk_expr_list(visitor, NodeKind::List, "elements", &node.elements, path)
                == VisitResult::Stop
            {
                return VisitResult::Stop;
            }
        }
    }
    visitor.leave_list(node, path);
    VisitResult::Continue
}

/// Walk a [`Constant`] node.
pub fn walk_constant<'a, V: Visitor<'a>>(
    visitor: &mut V,
    node: &Constant<'a>,
    path: &mut Path,
) -> VisitResult {
    if visitor.visit_constant(node, path) == VisitResult::Stop {
        return VisitResult::Stop;
    }
    visitor.leave_constant(node, path);
    VisitResult::Continue
}

// ============================================================================
// Transformer entry point
// ============================================================================

/// Transform a tree from its root with a fresh, empty path.
///
/// Children are transformed before each node's own handler runs, so the
/// handler always sees already-transformed children, and the (possibly new)
/// root is returned to the caller.
pub fn transform<'a, T: Transformer<'a>>(transformer: &mut T, module: Module<'a>) -> Module<'a> {
    tracing::trace!(statements = module.body.len(), "transforming module");
    let mut path = Path::new();
    transform_module(transformer, module, &mut path)
}

// ============================================================================
// Statement transforms
// ============================================================================

/// Transform a [`Module`] node: body first, then `transform_module`.
pub fn transform_module<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Module<'a>,
    path: &mut Path,
) -> Module<'a> {
    let body = transform_body(transformer, NodeKind::Module, "body", node.body, path);
    transformer.transform_module(Module { body }, path)
}

/// Transform each statement of a sequence-valued field and splice the
/// results: `Keep` passes through, `Remove` omits the element with no gap,
/// `Flatten` inserts every replacement in place, preserving the relative
/// order of all other elements.
///
/// Path segments use the element's position in the original sequence.
fn transform_body<'a, T: Transformer<'a>>(
    transformer: &mut T,
    kind: NodeKind,
    field: &'static str,
    body: Vec<Statement<'a>>,
    path: &mut Path,
) -> Vec<Statement<'a>> {
    let mut out = Vec::with_capacity(body.len());
    for (index, stmt) in body.into_iter().enumerate() {
        let result = with_segment(path, PathSegment::item(kind, field, index), |path| {
            transform_statement(transformer, stmt, path)
        });
        match result {
            Transform::Keep(stmt) => out.push(stmt),
            Transform::Remove => {}
            Transform::Flatten(stmts) => out.extend(stmts),
        }
    }
    out
}

/// Transform each expression of a sequence-valued field in place.
fn transform_expr_list<'a, T: Transformer<'a>>(
    transformer: &mut T,
    kind: NodeKind,
    field: &'static str,
    elements: Vec<Expression<'a>>,
    path: &mut Path,
) -> Vec<Expression<'a>> {
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            with_segment(path, PathSegment::item(kind, field, index), |path| {
                transform_expression(transformer, element, path)
            })
        })
        .collect()
}

/// Transform a [`Statement`] node.
///
/// The active variant's handler runs first (after its children), then
/// `transform_statement` runs in list context and its result is spliced into
/// the enclosing statement list.
pub fn transform_statement<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Statement<'a>,
    path: &mut Path,
) -> Transform<Statement<'a>> {
    let node = match node {
        Statement::FunctionDef(f) => {
            Statement::FunctionDef(transform_function_def(transformer, f, path))
        }
        Statement::ClassDef(c) => Statement::ClassDef(transform_class_def(transformer, c, path)),
        Statement::If(i) => Statement::If(transform_if(transformer, i, path)),
        Statement::While(w) => Statement::While(transform_while(transformer, w, path)),
        Statement::For(f) => Statement::For(transform_for(transformer, f, path)),
        Statement::Return(r) => Statement::Return(transform_return(transformer, r, path)),
        Statement::Assign(a) => Statement::Assign(transform_assign(transformer, a, path)),
        Statement::Expr(e) => Statement::Expr(transform_expr_stmt(transformer, e, path)),
        Statement::Pass(p) => Statement::Pass(transformer.transform_pass_stmt(p, path)),
        Statement::Break(b) => Statement::Break(transformer.transform_break_stmt(b, path)),
        Statement::Continue(c) => Statement::Continue(transformer.transform_continue_stmt(c, path)),
    };
    transformer.transform_statement(node, path)
}

/// Transform a [`FunctionDef`] node.
pub fn transform_function_def<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: FunctionDef<'a>,
    path: &mut Path,
) -> FunctionDef<'a> {
    let FunctionDef {
        name,
        params,
        body,
        returns,
    } = node;
    let name = with_segment(
        path,
        PathSegment::field(NodeKind::FunctionDef, "name"),
        |path| transformer.transform_name(name, path),
    );
    let params = with_segment(
        path,
        PathSegment::field(NodeKind::FunctionDef, "params"),
        |path| transform_parameters(transformer, params, path),
    );
    let body = transform_body(transformer, NodeKind::FunctionDef, "body", body, path);
    let returns = returns.map(|returns| {
        with_segment(
            path,
            PathSegment::field(NodeKind::FunctionDef, "returns"),
            |path| transform_expression(transformer, returns, path),
        )
    });
    transformer.transform_function_def(
        FunctionDef {
            name,
            params,
            body,
            returns,
        },
        path,
    )
}

/// Transform a [`ClassDef`] node.
pub fn transform_class_def<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: ClassDef<'a>,
    path: &mut Path,
) -> ClassDef<'a> {
    let ClassDef { name, bases, body } = node;
    let name = with_segment(
        path,
        PathSegment::field(NodeKind::ClassDef, "name"),
        |path| transformer.transform_name(name, path),
    );
    let bases = transform_expr_list(transformer, NodeKind::ClassDef, "bases", bases, path);
    let body = transform_body(transformer, NodeKind::ClassDef, "body", body, path);
    transformer.transform_class_def(ClassDef { name, bases, body }, path)
}

/// Transform an [`If`] node.
pub fn transform_if<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: If<'a>,
    path: &mut Path,
) -> If<'a> {
    let If { test, body, orelse } = node;
    let test = with_segment(path, PathSegment::field(NodeKind::If, "test"), |path| {
        transform_expression(transformer, test, path)
    });
    let body = transform_body(transformer, NodeKind::If, "body", body, path);
    let orelse = transform_body(transformer, NodeKind::If, "orelse", orelse, path);
    transformer.transform_if_stmt(If { test, body, orelse }, path)
}

/// Transform a [`While`] node.
pub fn transform_while<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: While<'a>,
    path: &mut Path,
) -> While<'a> {
    let While { test, body, orelse } = node;
    let test = with_segment(path, PathSegment::field(NodeKind::While, "test"), |path| {
        transform_expression(transformer, test, path)
    });
    let body = transform_body(transformer, NodeKind::While, "body", body, path);
    let orelse = transform_body(transformer, NodeKind::While, "orelse", orelse, path);
    transformer.transform_while_stmt(While { test, body, orelse }, path)
}

/// Transform a [`For`] node.
pub fn transform_for<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: For<'a>,
    path: &mut Path,
) -> For<'a> {
    let For {
        target,
        iter,
        body,
        orelse,
    } = node;
    let target = with_segment(path, PathSegment::field(NodeKind::For, "target"), |path| {
        transform_expression(transformer, target, path)
    });
    let iter = with_segment(path, PathSegment::field(NodeKind::For, "iter"), |path| {
        transform_expression(transformer, iter, path)
    });
    let body = transform_body(transformer, NodeKind::For, "body", body, path);
    let orelse = transform_body(transformer, NodeKind::For, "orelse", orelse, path);
    transformer.transform_for_stmt(
        For {
            target,
            iter,
            body,
            orelse,
        },
        path,
    )
}

/// Transform a [`Return`] node.
pub fn transform_return<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Return<'a>,
    path: &mut Path,
) -> Return<'a> {
    let value = node.value.map(|value| {
        with_segment(path, PathSegment::field(NodeKind::Return, "value"), |path| {
            transform_expression(transformer, value, path)
        })
    });
    transformer.transform_return_stmt(Return { value }, path)
}

/// Transform an [`Assign`] node.
pub fn transform_assign<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Assign<'a>,
    path: &mut Path,
) -> Assign<'a> {
    let Assign { targets, value } = node;
    let targets = transform_expr_list(transformer, NodeKind::Assign, "targets", targets, path);
    let value = with_segment(path, PathSegment::field(NodeKind::Assign, "value"), |path| {
        transform_expression(transformer, value, path)
    });
    transformer.transform_assign(Assign { targets, value }, path)
}

/// Transform an [`Expr`] statement node.
pub fn transform_expr_stmt<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Expr<'a>,
    path: &mut Path,
) -> Expr<'a> {
    let value = with_segment(path, PathSegment::field(NodeKind::Expr, "value"), |path| {
        transform_expression(transformer, node.value, path)
    });
    transformer.transform_expr(Expr { value }, path)
}

/// Transform a [`Parameters`] node.
pub fn transform_parameters<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Parameters<'a>,
    path: &mut Path,
) -> Parameters<'a> {
    let params = node
        .params
        .into_iter()
        .enumerate()
        .map(|(index, param)| {
            with_segment(
                path,
                PathSegment::item(NodeKind::Parameters, "params", index),
                |path| transform_param(transformer, param, path),
            )
        })
        .collect();
    transformer.transform_parameters(Parameters { params }, path)
}

/// Transform a [`Param`] node.
pub fn transform_param<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Param<'a>,
    path: &mut Path,
) -> Param<'a> {
    let Param { name, default } = node;
    let name = with_segment(path, PathSegment::field(NodeKind::Param, "name"), |path| {
        transformer.transform_name(name, path)
    });
    let default = default.map(|default| {
        with_segment(path, PathSegment::field(NodeKind::Param, "default"), |path| {
            transform_expression(transformer, default, path)
        })
    });
    transformer.transform_param(Param { name, default }, path)
}

// ============================================================================
// Expression transforms
// ============================================================================

/// Transform an [`Expression`] node.
///
/// The active variant's handler runs first (after its children), then
/// `transform_expression` runs for the same tree position.
pub fn transform_expression<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Expression<'a>,
    path: &mut Path,
) -> Expression<'a> {
    let node = match node {
        Expression::Name(n) => Expression::Name(transformer.transform_name(n, path)),
        Expression::Attribute(a) => {
            Expression::Attribute(transform_attribute(transformer, a, path))
        }
        Expression::Call(c) => Expression::Call(transform_call(transformer, c, path)),
        Expression::BinaryOperation(b) => {
            Expression::BinaryOperation(transform_binary_operation(transformer, b, path))
        }
        Expression::UnaryOperation(u) => {
            Expression::UnaryOperation(transform_unary_operation(transformer, u, path))
        }
        Expression::Comparison(c) => {
            Expression::Comparison(transform_comparison(transformer, c, path))
        }
        Expression::Tuple(t) => Expression::Tuple(transform_tuple(transformer, t, path)),
        Expression::List(l) => Expression::List(transform_list(transformer, l, path)),
        Expression::Constant(c) => Expression::Constant(transformer.transform_constant(c, path)),
    };
    transformer.transform_expression(node, path)
}

/// Transform an [`Attribute`] node.
pub fn transform_attribute<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Attribute<'a>,
    path: &mut Path,
) -> Attribute<'a> {
    let Attribute { value, attr } = node;
    let value = with_segment(
        path,
        PathSegment::field(NodeKind::Attribute, "value"),
        |path| transform_expression(transformer, *value, path),
    );
    let attr = with_segment(
        path,
        PathSegment::field(NodeKind::Attribute, "attr"),
        |path| transformer.transform_name(attr, path),
    );
    transformer.transform_attribute(
        Attribute {
            value: Box::new(value),
            attr,
        },
        path,
    )
}

/// Transform a [`Call`] node.
pub fn transform_call<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Call<'a>,
    path: &mut Path,
) -> Call<'a> {
    let Call { func, args } = node;
    let func = with_segment(path, PathSegment::field(NodeKind::Call, "func"), |path| {
        transform_expression(transformer, *func, path)
    });
    let args = transform_expr_list(transformer, NodeKind::Call, "args", args, path);
    transformer.transform_call(
        Call {
            func: Box::new(func),
            args,
        },
        path,
    )
}

/// Transform a [`BinaryOperation`] node.
pub fn transform_binary_operation<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: BinaryOperation<'a>,
    path: &mut Path,
) -> BinaryOperation<'a> {
    let BinaryOperation {
        left,
        operator,
        right,
    } = node;
    let left = with_segment(
        path,
        PathSegment::field(NodeKind::BinaryOperation, "left"),
        |path| transform_expression(transformer, *left, path),
    );
    let right = with_segment(
        path,
        PathSegment::field(NodeKind::BinaryOperation, "right"),
        |path| transform_expression(transformer, *right, path),
    );
    transformer.transform_binary_operation(
        BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        },
        path,
    )
}

/// Transform a [`UnaryOperation`] node.
pub fn transform_unary_operation<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: UnaryOperation<'a>,
    path: &mut Path,
) -> UnaryOperation<'a> {
    let UnaryOperation {
        operator,
        expression,
    } = node;
    let expression = with_segment(
        path,
        PathSegment::field(NodeKind::UnaryOperation, "expression"),
        |path| transform_expression(transformer, *expression, path),
    );
    transformer.transform_unary_operation(
        UnaryOperation {
            operator,
            expression: Box::new(expression),
        },
        path,
    )
}

/// Transform a [`Comparison`] node.
pub fn transform_comparison<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Comparison<'a>,
    path: &mut Path,
) -> Comparison<'a> {
    let Comparison {
        left,
        operator,
        comparator,
    } = node;
    let left = with_segment(
        path,
        PathSegment::field(NodeKind::Comparison, "left"),
        |path| transform_expression(transformer, *left, path),
    );
    let comparator = with_segment(
        path,
        PathSegment::field(NodeKind::Comparison, "comparator"),
        |path| transform_expression(transformer, *comparator, path),
    );
    transformer.transform_comparison(
        Comparison {
            left: Box::new(left),
            operator,
            comparator: Box::new(comparator),
        },
        path,
    )
}

/// Transform a [`Tuple`] node.
pub fn transform_tuple<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: Tuple<'a>,
    path: &mut Path,
) -> Tuple<'a> {
    let elements =
        transform_expr_list(transformer, NodeKind::Tuple, "elements", node.elements, path);
    transformer.transform_tuple(Tuple { elements }, path)
}

/// Transform a [`List`] node.
pub fn transform_list<'a, T: Transformer<'a>>(
    transformer: &mut T,
    node: List<'a>,
    path: &mut Path,
) -> List<'a> {
    let elements =
        transform_expr_list(transformer, NodeKind::List, "elements", node.elements, path);
    transformer.transform_list(List { elements }, path)
}
