// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Core types shared by all AST nodes.
//!
//! # Node Identity
//!
//! [`NodeId`] provides stable identity for AST nodes. Identities are assigned
//! during traversal in pre-order (parent before children, left-to-right), so
//! the same tree always produces the same assignments:
//!
//! ```text
//! Given the tree for: x = 1
//! NodeId assignment order:
//!   NodeId(0) -> Module
//!   NodeId(1) -> Assign
//!   NodeId(2) -> Name "x"
//!   NodeId(3) -> Constant "1"
//! ```
//!
//! # PathTable
//!
//! [`PathTable`] is a side table keyed by [`NodeId`] that stores the kind and
//! ancestor [`Path`](crate::path::Path) recorded for each node. It is
//! populated by the [`PathCollector`](crate::visitor::PathCollector) visitor.

use std::collections::HashMap;

use serde::Serialize;

use crate::path::Path;

/// A flat type tag identifying each concrete AST node type.
///
/// `NodeKind` is the explicit dispatch key for location-sensitive logic:
/// path segments carry the kind of each ancestor, so a handler can match an
/// ancestor chain without downcasting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Module,
    FunctionDef,
    ClassDef,
    If,
    While,
    For,
    Return,
    Assign,
    Expr,
    Pass,
    Break,
    Continue,
    Parameters,
    Param,
    Name,
    Attribute,
    Call,
    BinaryOperation,
    UnaryOperation,
    Comparison,
    Tuple,
    List,
    Constant,
}

impl NodeKind {
    /// The node type name, matching the corresponding struct name.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Module => "Module",
            NodeKind::FunctionDef => "FunctionDef",
            NodeKind::ClassDef => "ClassDef",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::For => "For",
            NodeKind::Return => "Return",
            NodeKind::Assign => "Assign",
            NodeKind::Expr => "Expr",
            NodeKind::Pass => "Pass",
            NodeKind::Break => "Break",
            NodeKind::Continue => "Continue",
            NodeKind::Parameters => "Parameters",
            NodeKind::Param => "Param",
            NodeKind::Name => "Name",
            NodeKind::Attribute => "Attribute",
            NodeKind::Call => "Call",
            NodeKind::BinaryOperation => "BinaryOperation",
            NodeKind::UnaryOperation => "UnaryOperation",
            NodeKind::Comparison => "Comparison",
            NodeKind::Tuple => "Tuple",
            NodeKind::List => "List",
            NodeKind::Constant => "Constant",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Node Identity
// ============================================================================

/// A stable, unique identifier for an AST node.
///
/// NodeIds are assigned deterministically in pre-order traversal order:
/// - Parent nodes have lower NodeIds than their children
/// - Left siblings have lower NodeIds than right siblings
/// - The same tree always produces the same NodeId assignments
///
/// NodeIds are the key for side tables like [`PathTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId with the given value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Generator for assigning sequential [`NodeId`]s.
///
/// Used during traversal to assign deterministic ids.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    next_id: u32,
}

impl NodeIdGenerator {
    /// Create a new generator starting from NodeId(0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next NodeId.
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Get the current count of generated NodeIds.
    pub fn count(&self) -> u32 {
        self.next_id
    }

    /// Reset the generator to start from NodeId(0).
    pub fn reset(&mut self) {
        self.next_id = 0;
    }
}

// ============================================================================
// Path Table
// ============================================================================

/// The kind and ancestor path recorded for one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRecord {
    /// The node's type tag.
    pub kind: NodeKind,
    /// The ancestor chain from the root down to the node's parent.
    pub path: Path,
}

/// A table mapping [`NodeId`]s to their recorded [`PathRecord`]s.
///
/// Populated by [`PathCollector`](crate::visitor::PathCollector), which
/// assigns ids in pre-order and records the path delivered to each node.
#[derive(Debug, Default)]
pub struct PathTable {
    records: HashMap<NodeId, PathRecord>,
}

impl PathTable {
    /// Create a new empty PathTable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PathTable with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
        }
    }

    /// Record a node's kind and path.
    pub fn insert(&mut self, node_id: NodeId, record: PathRecord) {
        self.records.insert(node_id, record);
    }

    /// Get the path recorded for a node, if any.
    pub fn path_of(&self, node_id: NodeId) -> Option<&Path> {
        self.records.get(&node_id).map(|r| &r.path)
    }

    /// Get the kind recorded for a node, if any.
    pub fn kind_of(&self, node_id: NodeId) -> Option<NodeKind> {
        self.records.get(&node_id).map(|r| r.kind)
    }

    /// Check if a record exists for a node.
    pub fn contains(&self, node_id: NodeId) -> bool {
        self.records.contains_key(&node_id)
    }

    /// Get the number of recorded nodes.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all (NodeId, PathRecord) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &PathRecord)> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_generator_is_sequential() {
        let mut id_gen = NodeIdGenerator::new();
        assert_eq!(id_gen.next_id(), NodeId(0));
        assert_eq!(id_gen.next_id(), NodeId(1));
        assert_eq!(id_gen.count(), 2);
        id_gen.reset();
        assert_eq!(id_gen.next_id(), NodeId(0));
    }

    #[test]
    fn path_table_lookup() {
        let mut table = PathTable::new();
        assert!(table.is_empty());
        table.insert(
            NodeId(0),
            PathRecord {
                kind: NodeKind::Module,
                path: Path::new(),
            },
        );
        assert_eq!(table.len(), 1);
        assert!(table.contains(NodeId(0)));
        assert_eq!(table.kind_of(NodeId(0)), Some(NodeKind::Module));
        assert!(table.path_of(NodeId(0)).unwrap().is_empty());
        assert_eq!(table.kind_of(NodeId(1)), None);
    }

    #[test]
    fn node_kind_names_match_display() {
        assert_eq!(NodeKind::FunctionDef.name(), "FunctionDef");
        assert_eq!(NodeKind::BinaryOperation.to_string(), "BinaryOperation");
    }
}
