// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Ancestor paths delivered to visitor and transformer callbacks.
//!
//! A [`Path`] describes where in the tree the current node sits: the chain of
//! ancestors from the root `Module` down to the node's immediate parent, each
//! paired with the edge (field, or field plus index) that was taken to reach
//! the next node.
//!
//! # Convention
//!
//! The path is **root-inclusive** and **excludes the visited node itself**:
//!
//! - The root `Module` is visited with an empty path.
//! - Path length equals the depth of the visited node.
//! - For `Module → FunctionDef → If → Assign`, the `Assign` callbacks see
//!   segment kinds `[Module, FunctionDef, If]`.
//!
//! The traversal engine alone extends and truncates the path; callbacks
//! receive `&Path` and observe a snapshot that is valid only for the duration
//! of the call. Clone the path to keep it beyond that.

use serde::Serialize;

use crate::nodes::NodeKind;

/// The edge taken from a parent node down to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Edge {
    /// A singular child field, e.g. the `test` of an `If`.
    Field(&'static str),
    /// One element of a sequence-valued child field, e.g. `body[2]`.
    Item {
        /// The sequence-valued field name.
        field: &'static str,
        /// The element's position within the field.
        index: usize,
    },
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Field(name) => write!(f, ".{name}"),
            Edge::Item { field, index } => write!(f, ".{field}[{index}]"),
        }
    }
}

/// One ancestor in a [`Path`]: the ancestor's kind plus the edge taken out
/// of it toward the visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PathSegment {
    /// The ancestor node's type tag.
    pub kind: NodeKind,
    /// The edge from the ancestor toward the visited node.
    pub edge: Edge,
}

impl PathSegment {
    /// Create a segment for a singular child field.
    pub fn field(kind: NodeKind, name: &'static str) -> Self {
        Self {
            kind,
            edge: Edge::Field(name),
        }
    }

    /// Create a segment for an element of a sequence-valued child field.
    pub fn item(kind: NodeKind, field: &'static str, index: usize) -> Self {
        Self {
            kind,
            edge: Edge::Item { field, index },
        }
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.edge)
    }
}

/// The ancestor chain from the tree root down to the visited node's parent.
///
/// Maintained with strict stack discipline by the traversal engine: each
/// child visit sees the parent's path plus exactly one new segment, and that
/// segment is removed before the next sibling is visited. Only the engine
/// can mutate a `Path`; callbacks receive a shared reference.
///
/// Renders as `Module.body[0] > FunctionDef.body[2] > If.test`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path (the position of the tree root).
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the path by one segment. Engine use only.
    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// Remove the most recent segment. Engine use only.
    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }

    /// The number of ancestors, which equals the visited node's depth.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True for the tree root, which has no ancestors.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments in root-to-parent order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The segment at the given depth, if any.
    pub fn get(&self, index: usize) -> Option<&PathSegment> {
        self.segments.get(index)
    }

    /// The ancestor kinds in root-to-parent order.
    pub fn kinds(&self) -> impl Iterator<Item = NodeKind> + '_ {
        self.segments.iter().map(|segment| segment.kind)
    }

    /// The kind of the visited node's immediate parent, if any.
    pub fn parent_kind(&self) -> Option<NodeKind> {
        self.segments.last().map(|segment| segment.kind)
    }

    /// True if the innermost ancestor kinds match `suffix`, in order.
    ///
    /// `path.ends_with(&[NodeKind::Module, NodeKind::Assign])` holds exactly
    /// for nodes whose parent is an `Assign` directly under the module.
    pub fn ends_with(&self, suffix: &[NodeKind]) -> bool {
        if suffix.len() > self.segments.len() {
            return false;
        }
        let tail = &self.segments[self.segments.len() - suffix.len()..];
        tail.iter().zip(suffix).all(|(segment, kind)| segment.kind == *kind)
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Path {
        let mut path = Path::new();
        path.push(PathSegment::item(NodeKind::Module, "body", 0));
        path.push(PathSegment::item(NodeKind::FunctionDef, "body", 2));
        path.push(PathSegment::field(NodeKind::If, "test"));
        path
    }

    #[test]
    fn display_renders_segments_in_order() {
        assert_eq!(
            sample_path().to_string(),
            "Module.body[0] > FunctionDef.body[2] > If.test"
        );
        assert_eq!(Path::new().to_string(), "<root>");
    }

    #[test]
    fn push_and_pop_follow_stack_discipline() {
        let mut path = sample_path();
        assert_eq!(path.len(), 3);
        path.pop();
        assert_eq!(path.parent_kind(), Some(NodeKind::FunctionDef));
        path.push(PathSegment::field(NodeKind::While, "test"));
        assert_eq!(path.parent_kind(), Some(NodeKind::While));
    }

    #[test]
    fn ends_with_matches_suffixes_only() {
        let path = sample_path();
        assert!(path.ends_with(&[NodeKind::If]));
        assert!(path.ends_with(&[NodeKind::FunctionDef, NodeKind::If]));
        assert!(path.ends_with(&[NodeKind::Module, NodeKind::FunctionDef, NodeKind::If]));
        assert!(!path.ends_with(&[NodeKind::Module, NodeKind::If]));
        assert!(!path.ends_with(&[
            NodeKind::Assign,
            NodeKind::Module,
            NodeKind::FunctionDef,
            NodeKind::If
        ]));
        assert!(Path::new().ends_with(&[]));
    }

    #[test]
    fn kinds_reports_root_to_parent_order() {
        let kinds: Vec<_> = sample_path().kinds().collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Module, NodeKind::FunctionDef, NodeKind::If]
        );
    }
}
