// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Path collection visitor.
//!
//! [`PathCollector`] walks a tree, assigns a [`NodeId`] to every concrete
//! node in pre-order, and records each node's kind and ancestor [`Path`] in a
//! [`PathTable`]. The table is the ground truth for queries like "where does
//! node 17 sit" without re-walking the tree.

use crate::nodes::{
    Assign, Attribute, BinaryOperation, Break, Call, ClassDef, Comparison, Constant, Continue,
    Expr, For, FunctionDef, If, List, Module, Name, NodeIdGenerator, NodeKind, Param,
    Parameters, Pass, PathRecord, PathTable, Return, Tuple, UnaryOperation, While,
};
use crate::path::Path;
use crate::visitor::{walk, VisitResult, Visitor};

/// Visitor that records every node's kind and ancestor path.
///
/// Ids are assigned in pre-order, so the same tree always yields the same
/// table. Only concrete nodes are recorded; the enum wrapper callbacks for
/// `Statement` and `Expression` describe the same tree positions as their
/// active variants and would double-count them.
#[derive(Debug, Default)]
pub struct PathCollector {
    ids: NodeIdGenerator,
    table: PathTable,
}

impl PathCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `module` and return the populated table.
    pub fn collect(module: &Module<'_>) -> PathTable {
        let mut collector = Self::new();
        walk(&mut collector, module);
        tracing::debug!(nodes = collector.table.len(), "collected node paths");
        collector.table
    }

    /// The number of nodes recorded so far.
    pub fn node_count(&self) -> u32 {
        self.ids.count()
    }

    /// Consume the collector and return its table.
    pub fn into_table(self) -> PathTable {
        self.table
    }

    fn record(&mut self, kind: NodeKind, path: &Path) -> VisitResult {
        let id = self.ids.next_id();
        self.table.insert(
            id,
            PathRecord {
                kind,
                path: path.clone(),
            },
        );
        VisitResult::Continue
    }
}

/// Generates one recording `visit_*` method per concrete node type.
macro_rules! record_methods {
    ($( $base_name:ident : $node_type:ty => $kind:ident ),* $(,)?) => {
        paste::paste! {
            $(
                fn [<visit_ $base_name>](&mut self, _node: &$node_type, path: &Path) -> VisitResult {
                    self.record(NodeKind::$kind, path)
                }
            )*
        }
    };
}

impl<'a> Visitor<'a> for PathCollector {
    record_methods! {
        module: Module<'a> => Module,
        function_def: FunctionDef<'a> => FunctionDef,
        class_def: ClassDef<'a> => ClassDef,
        if_stmt: If<'a> => If,
        while_stmt: While<'a> => While,
        for_stmt: For<'a> => For,
        return_stmt: Return<'a> => Return,
        assign: Assign<'a> => Assign,
        expr: Expr<'a> => Expr,
        pass_stmt: Pass => Pass,
        break_stmt: Break => Break,
        continue_stmt: Continue => Continue,
        parameters: Parameters<'a> => Parameters,
        param: Param<'a> => Param,
        name: Name<'a> => Name,
        attribute: Attribute<'a> => Attribute,
        call: Call<'a> => Call,
        binary_operation: BinaryOperation<'a> => BinaryOperation,
        unary_operation: UnaryOperation<'a> => UnaryOperation,
        comparison: Comparison<'a> => Comparison,
        tuple: Tuple<'a> => Tuple,
        list: List<'a> => List,
        constant: Constant<'a> => Constant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Expression, NodeId, Statement};

    /// def f(x): x = 1
    fn function_module() -> Module<'static> {
        Module::new(vec![Statement::FunctionDef(FunctionDef {
            name: Name::new("f"),
            params: Parameters {
                params: vec![Param::new("x")],
            },
            body: vec![Statement::Assign(Assign {
                targets: vec![Expression::Name(Name::new("x"))],
                value: Expression::Constant(Constant::integer("1")),
            })],
            returns: None,
        })])
    }

    #[test]
    fn assigns_preorder_ids() {
        let table = PathCollector::collect(&function_module());
        // Module, FunctionDef, Name, Parameters, Param, Name, Assign, Name, Constant
        assert_eq!(table.len(), 9);
        assert_eq!(table.kind_of(NodeId(0)), Some(NodeKind::Module));
        assert_eq!(table.kind_of(NodeId(1)), Some(NodeKind::FunctionDef));
        assert_eq!(table.kind_of(NodeId(2)), Some(NodeKind::Name));
        assert_eq!(table.kind_of(NodeId(6)), Some(NodeKind::Assign));
        assert_eq!(table.kind_of(NodeId(8)), Some(NodeKind::Constant));
        assert_eq!(table.kind_of(NodeId(9)), None);
    }

    #[test]
    fn records_ancestor_paths() {
        let table = PathCollector::collect(&function_module());
        assert!(table.path_of(NodeId(0)).unwrap().is_empty());
        assert_eq!(
            table.path_of(NodeId(6)).unwrap().to_string(),
            "Module.body[0] > FunctionDef.body[0]"
        );
        assert_eq!(
            table.path_of(NodeId(8)).unwrap().to_string(),
            "Module.body[0] > FunctionDef.body[0] > Assign.value"
        );
    }

    #[test]
    fn collector_counts_nodes() {
        let mut collector = PathCollector::new();
        walk(&mut collector, &function_module());
        assert_eq!(collector.node_count(), 9);
        assert_eq!(collector.into_table().len(), 9);
    }
}
