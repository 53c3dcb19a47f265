// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Binding collection visitor.
//!
//! [`BindingCollector`] finds every name that a tree binds (assignment
//! targets, loop targets, function parameters) and classifies each one by
//! where it sits, using only the ancestor [`Path`] delivered to the callback.
//! It is the canonical demonstration of location-sensitive analysis: the same
//! `Name` node means different things under `Assign.targets` at module level,
//! under `Assign.targets` inside a `FunctionDef`, or under `Param.name`.

use serde::Serialize;

use crate::nodes::{Module, Name, NodeKind};
use crate::path::{Edge, Path};
use crate::visitor::{walk, VisitResult, Visitor};

/// What a bound name is, judged from its ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BindingKind {
    /// Assignment target at module level.
    Global,
    /// Assignment target inside a function body.
    Local,
    /// Assignment target directly in a class body.
    ClassAttribute,
    /// The target of a `for` loop.
    LoopTarget,
    /// A function parameter name.
    Parameter,
}

/// One bound name and where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingInfo {
    /// The bound identifier.
    pub name: String,
    /// Classification derived from the ancestor chain.
    pub kind: BindingKind,
    /// The rendered ancestor path of the `Name` node.
    pub location: String,
}

/// The binding construct a `Name` hangs off, found by scanning the path
/// inward-out past any tuple or list destructuring.
enum BindingSite {
    /// `Assign.targets[i]`; holds the depth of the `Assign` segment so scope
    /// classification can scan the ancestors above it.
    Assign(usize),
    ForTarget,
    ParamName,
}

/// Visitor that collects every binding in pre-order.
#[derive(Debug, Default)]
pub struct BindingCollector {
    bindings: Vec<BindingInfo>,
}

impl BindingCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `module` and return all bindings it introduces, in pre-order.
    pub fn collect(module: &Module<'_>) -> Vec<BindingInfo> {
        let mut collector = Self::new();
        walk(&mut collector, module);
        tracing::debug!(bindings = collector.bindings.len(), "collected bindings");
        collector.bindings
    }

    /// The bindings recorded so far.
    pub fn bindings(&self) -> &[BindingInfo] {
        &self.bindings
    }

    /// Find the binding construct this path leads out of, if any.
    ///
    /// Tuple and list segments under `elements` are transparent, so the
    /// names inside `a, (b, c) = value` all bind.
    fn binding_site(path: &Path) -> Option<BindingSite> {
        for depth in (0..path.len()).rev() {
            let segment = path.get(depth)?;
            match (segment.kind, segment.edge) {
                (NodeKind::Tuple, Edge::Item { field: "elements", .. })
                | (NodeKind::List, Edge::Item { field: "elements", .. }) => continue,
                (NodeKind::Assign, Edge::Item { field: "targets", .. }) => {
                    return Some(BindingSite::Assign(depth));
                }
                (NodeKind::For, Edge::Field("target")) => return Some(BindingSite::ForTarget),
                (NodeKind::Param, Edge::Field("name")) => return Some(BindingSite::ParamName),
                _ => return None,
            }
        }
        None
    }

    /// Classify an assignment target by its nearest enclosing definition.
    fn assign_kind(path: &Path, assign_depth: usize) -> BindingKind {
        for depth in (0..assign_depth).rev() {
            match path.get(depth).map(|segment| segment.kind) {
                Some(NodeKind::FunctionDef) => return BindingKind::Local,
                Some(NodeKind::ClassDef) => return BindingKind::ClassAttribute,
                _ => {}
            }
        }
        BindingKind::Global
    }
}

impl<'a> Visitor<'a> for BindingCollector {
    fn visit_name(&mut self, node: &Name<'a>, path: &Path) -> VisitResult {
        let kind = match Self::binding_site(path) {
            Some(BindingSite::Assign(depth)) => Self::assign_kind(path, depth),
            Some(BindingSite::ForTarget) => BindingKind::LoopTarget,
            Some(BindingSite::ParamName) => BindingKind::Parameter,
            None => return VisitResult::Continue,
        };
        self.bindings.push(BindingInfo {
            name: node.value.to_string(),
            kind,
            location: path.to_string(),
        });
        VisitResult::Continue
    }
}
