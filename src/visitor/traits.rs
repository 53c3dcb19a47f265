// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Visitor and transformer trait definitions for path-aware traversal.

use crate::nodes::{
    // Module
    Module,
    // Statements
    Statement, FunctionDef, ClassDef, If, While, For, Return, Assign, Expr, Pass, Break,
    Continue, Parameters, Param,
    // Expressions
    Expression, Name, Attribute, Call, BinaryOperation, UnaryOperation, Comparison, Tuple, List,
    Constant,
};
use crate::path::Path;

/// Result of visiting a node - controls traversal behavior.
///
/// When a visitor method returns a `VisitResult`, it controls how the walker
/// proceeds with traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitResult {
    /// Continue traversal into children.
    ///
    /// After visiting children, `leave_*` will be called for this node.
    Continue,

    /// Skip children, continue with siblings.
    ///
    /// The walker will not descend into this node's children, but `leave_*`
    /// will still be called for this node.
    SkipChildren,

    /// Stop traversal entirely.
    ///
    /// No further `visit_*` or `leave_*` methods will be called. The walk
    /// function will return immediately. A handler that hits an error can
    /// record it in its own state and return `Stop` to abandon the walk.
    Stop,
}

impl Default for VisitResult {
    fn default() -> Self {
        Self::Continue
    }
}

/// Generic transform result for list-like contexts.
///
/// When transforming nodes that appear in lists (statements in a `body`),
/// this enum allows removing nodes or splicing in several replacements.
#[derive(Debug, Clone)]
pub enum Transform<T> {
    /// Keep the transformed node.
    Keep(T),
    /// Remove the node from the list.
    Remove,
    /// Replace the node with multiple nodes.
    Flatten(Vec<T>),
}

impl<T> Transform<T> {
    /// Returns true if this is a `Keep` variant.
    pub fn is_keep(&self) -> bool {
        matches!(self, Self::Keep(_))
    }

    /// Returns true if this is a `Remove` variant.
    pub fn is_remove(&self) -> bool {
        matches!(self, Self::Remove)
    }

    /// Returns true if this is a `Flatten` variant.
    pub fn is_flatten(&self) -> bool {
        matches!(self, Self::Flatten(_))
    }

    /// Maps the inner value using the provided function.
    ///
    /// - For `Keep(t)`, applies `f` to `t` and returns `Keep(f(t))`
    /// - For `Remove`, returns `Remove`
    /// - For `Flatten(v)`, applies `f` to each element and returns `Flatten`
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Transform<U> {
        match self {
            Transform::Keep(t) => Transform::Keep(f(t)),
            Transform::Remove => Transform::Remove,
            Transform::Flatten(v) => Transform::Flatten(v.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<T> for Transform<T> {
    fn from(value: T) -> Self {
        Transform::Keep(value)
    }
}

/// Macro to generate visitor trait method signatures.
///
/// This macro generates pairs of `visit_*` and `leave_*` methods with default
/// implementations that return `VisitResult::Continue` and do nothing,
/// respectively. Every method receives the node plus the ancestor path from
/// the root down to the node's parent.
macro_rules! visitor_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Visit a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called before descending into children. `path` is the ancestor chain"]
                #[doc = "from the root to this node's parent. Return `VisitResult` to control traversal."]
                #[allow(unused_variables)]
                fn [<visit_ $base_name>](&mut self, node: &$node_type, path: &Path) -> VisitResult {
                    VisitResult::Continue
                }

                $(#[$meta])*
                #[doc = concat!("Leave a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after all children have been visited, with the same path the"]
                #[doc = "matching `visit_*` call received. Called even if `SkipChildren` was returned."]
                #[allow(unused_variables)]
                fn [<leave_ $base_name>](&mut self, node: &$node_type, path: &Path) {}
            )*
        }
    };
}

/// Macro to generate transformer trait method signatures.
///
/// This macro generates `transform_*` methods with default implementations
/// that return the node unchanged.
macro_rules! transformer_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Transform a [`", stringify!($node_type), "`] node.")]
                #[doc = ""]
                #[doc = "Called after this node's children have been transformed. `path` is the"]
                #[doc = "ancestor chain from the root to this node's parent."]
                #[allow(unused_variables)]
                fn [<transform_ $base_name>](&mut self, node: $node_type, path: &Path) -> $node_type {
                    node
                }
            )*
        }
    };
}

/// Macro to generate transformer methods that return Transform<T> for list contexts.
macro_rules! transformer_list_methods {
    (
        $(
            $(#[$meta:meta])*
            $base_name:ident : $node_type:ty
        ),* $(,)?
    ) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[doc = concat!("Transform a [`", stringify!($node_type), "`] node in a list context.")]
                #[doc = ""]
                #[doc = "Returns `Transform::Keep` by default. Can also return `Remove` to drop"]
                #[doc = "the node or `Flatten` to splice several nodes into its position."]
                #[allow(unused_variables)]
                fn [<transform_ $base_name>](&mut self, node: $node_type, path: &Path) -> Transform<$node_type> {
                    Transform::Keep(node)
                }
            )*
        }
    };
}

/// Immutable visitor for path-aware traversal.
///
/// Implement this trait to traverse a tree without modifying it. Each node
/// type has a corresponding `visit_*` and `leave_*` method pair, and every
/// method receives the ancestor [`Path`] alongside the node.
///
/// # Traversal Order
///
/// - `visit_*` is called in **pre-order** (before children)
/// - `leave_*` is called in **post-order** (after children)
/// - Children are visited in declared field order; sequence-valued fields
///   are visited element by element
///
/// # Paths
///
/// The path is root-inclusive and excludes the visited node: the root
/// `Module` sees an empty path, and a node at depth *n* sees *n* segments.
/// The same node is dispatched twice for enum wrappers (`visit_statement`
/// then e.g. `visit_assign`) with the identical path, since both describe
/// one tree position.
///
/// # Control Flow
///
/// - Return `VisitResult::Continue` to traverse into children
/// - Return `VisitResult::SkipChildren` to skip children (but `leave_*` still called)
/// - Return `VisitResult::Stop` to halt traversal immediately
///
/// # Example
///
/// ```ignore
/// use astpath::{Name, Path, VisitResult, Visitor};
///
/// struct NameCollector {
///     names: Vec<String>,
/// }
///
/// impl<'a> Visitor<'a> for NameCollector {
///     fn visit_name(&mut self, node: &Name<'a>, path: &Path) -> VisitResult {
///         self.names.push(format!("{} at {}", node.value, path));
///         VisitResult::Continue
///     }
/// }
/// ```
pub trait Visitor<'a> {
    // Module
    visitor_methods! {
        module: Module<'a>,
    }

    // Statements
    visitor_methods! {
        statement: Statement<'a>,
        function_def: FunctionDef<'a>,
        class_def: ClassDef<'a>,
        if_stmt: If<'a>,
        while_stmt: While<'a>,
        for_stmt: For<'a>,
        return_stmt: Return<'a>,
        assign: Assign<'a>,
        expr: Expr<'a>,
        pass_stmt: Pass,
        break_stmt: Break,
        continue_stmt: Continue,
    }

    // Function-related
    visitor_methods! {
        parameters: Parameters<'a>,
        param: Param<'a>,
    }

    // Expressions
    visitor_methods! {
        expression: Expression<'a>,
        name: Name<'a>,
        attribute: Attribute<'a>,
        call: Call<'a>,
        binary_operation: BinaryOperation<'a>,
        unary_operation: UnaryOperation<'a>,
        comparison: Comparison<'a>,
        tuple: Tuple<'a>,
        list: List<'a>,
        constant: Constant<'a>,
    }
}

/// Transformer for rebuilding trees.
///
/// Implement this trait to traverse and transform a tree. Each node type has
/// a corresponding `transform_*` method that receives the owned node plus the
/// ancestor [`Path`] and returns the (possibly replaced) node.
///
/// # Traversal Order
///
/// Children are transformed **before** the node's own handler runs
/// (bottom-up), so a handler always sees its node with already-transformed
/// children, and a replacement returned by a handler is what downstream
/// sibling and parent processing reflect.
///
/// # List Contexts
///
/// `transform_statement` returns [`Transform<T>`] instead of `T` directly,
/// because statements always sit inside sequence-valued fields: a handler
/// can remove a statement or splice several into its position. Singular
/// child fields are replaced in place by the plain `transform_*` methods.
///
/// # Example
///
/// ```ignore
/// use astpath::{Name, Path, Transformer};
///
/// struct Renamer<'a> {
///     from: &'a str,
///     to: &'a str,
/// }
///
/// impl<'a> Transformer<'a> for Renamer<'a> {
///     fn transform_name(&mut self, node: Name<'a>, _path: &Path) -> Name<'a> {
///         if node.value == self.from {
///             Name::new(self.to)
///         } else {
///             node
///         }
///     }
/// }
/// ```
pub trait Transformer<'a> {
    // Module
    transformer_methods! {
        module: Module<'a>,
    }

    // Statements (list context - can be removed/flattened)
    transformer_list_methods! {
        statement: Statement<'a>,
    }

    // Statements (per-kind)
    transformer_methods! {
        function_def: FunctionDef<'a>,
        class_def: ClassDef<'a>,
        if_stmt: If<'a>,
        while_stmt: While<'a>,
        for_stmt: For<'a>,
        return_stmt: Return<'a>,
        assign: Assign<'a>,
        expr: Expr<'a>,
        pass_stmt: Pass,
        break_stmt: Break,
        continue_stmt: Continue,
    }

    // Function-related
    transformer_methods! {
        parameters: Parameters<'a>,
        param: Param<'a>,
    }

    // Expressions
    transformer_methods! {
        expression: Expression<'a>,
        name: Name<'a>,
        attribute: Attribute<'a>,
        call: Call<'a>,
        binary_operation: BinaryOperation<'a>,
        unary_operation: UnaryOperation<'a>,
        comparison: Comparison<'a>,
        tuple: Tuple<'a>,
        list: List<'a>,
        constant: Constant<'a>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::ConstantValue;
    use crate::visitor::walk;

    /// A simple visitor that counts Name nodes.
    struct NameCounter {
        count: usize,
    }

    impl<'a> Visitor<'a> for NameCounter {
        fn visit_name(&mut self, _node: &Name<'a>, _path: &Path) -> VisitResult {
            self.count += 1;
            VisitResult::Continue
        }
    }

    fn small_module() -> Module<'static> {
        Module::new(vec![Statement::Assign(Assign {
            targets: vec![Expression::Name(Name::new("x"))],
            value: Expression::BinaryOperation(BinaryOperation {
                left: Box::new(Expression::Name(Name::new("y"))),
                operator: crate::nodes::BinaryOp::Add,
                right: Box::new(Expression::Constant(Constant {
                    value: ConstantValue::Integer("1"),
                })),
            }),
        })])
    }

    #[test]
    fn test_visit_result_default() {
        assert_eq!(VisitResult::default(), VisitResult::Continue);
    }

    #[test]
    fn test_transform_variants() {
        let keep: Transform<i32> = Transform::Keep(42);
        assert!(keep.is_keep());
        assert!(!keep.is_remove());
        assert!(!keep.is_flatten());

        let remove: Transform<i32> = Transform::Remove;
        assert!(!remove.is_keep());
        assert!(remove.is_remove());
        assert!(!remove.is_flatten());

        let flatten: Transform<i32> = Transform::Flatten(vec![1, 2, 3]);
        assert!(!flatten.is_keep());
        assert!(!flatten.is_remove());
        assert!(flatten.is_flatten());
    }

    #[test]
    fn test_transform_map() {
        let keep: Transform<i32> = Transform::Keep(42);
        match keep.map(|x| x * 2) {
            Transform::Keep(v) => assert_eq!(v, 84),
            _ => panic!("Expected Keep"),
        }

        let remove: Transform<i32> = Transform::Remove;
        assert!(remove.map(|x| x * 2).is_remove());

        let flatten: Transform<i32> = Transform::Flatten(vec![1, 2, 3]);
        match flatten.map(|x| x * 2) {
            Transform::Flatten(v) => assert_eq!(v, vec![2, 4, 6]),
            _ => panic!("Expected Flatten"),
        }
    }

    #[test]
    fn test_transform_from() {
        let t: Transform<i32> = 42.into();
        match t {
            Transform::Keep(v) => assert_eq!(v, 42),
            _ => panic!("Expected Keep"),
        }
    }

    #[test]
    fn test_visitor_trait_compiles() {
        // The trait can be implemented with no overrides; all defaults apply.
        struct EmptyVisitor;

        impl<'a> Visitor<'a> for EmptyVisitor {}

        let mut v = EmptyVisitor;
        assert_eq!(walk(&mut v, &small_module()), VisitResult::Continue);
    }

    #[test]
    fn test_transformer_trait_compiles() {
        struct EmptyTransformer;

        impl<'a> Transformer<'a> for EmptyTransformer {}

        let _t = EmptyTransformer;
    }

    #[test]
    fn test_visitor_default_implementations() {
        let mut counter = NameCounter { count: 0 };
        let module = small_module();

        // Default visit_module returns Continue with the root's empty path.
        let result = counter.visit_module(&module, &Path::new());
        assert_eq!(result, VisitResult::Continue);

        walk(&mut counter, &module);
        assert_eq!(counter.count, 2);
    }
}
