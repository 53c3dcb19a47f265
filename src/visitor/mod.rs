// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Path-aware visitor and transformer infrastructure.
//!
//! This module provides the traversal traits, the walk and transform engines
//! that maintain the ancestor [`Path`](crate::path::Path) during traversal,
//! and built-in visitors for common analyses.
//!
//! # Visiting
//!
//! Implement [`Visitor`] and override the `visit_*` / `leave_*` methods you
//! care about; every method receives the node plus its ancestor path. Then
//! call [`walk`]:
//!
//! ```ignore
//! use astpath::{walk, Module, Name, Path, VisitResult, Visitor};
//!
//! struct Finder {
//!     locations: Vec<String>,
//! }
//!
//! impl<'a> Visitor<'a> for Finder {
//!     fn visit_name(&mut self, node: &Name<'a>, path: &Path) -> VisitResult {
//!         if node.value == "needle" {
//!             self.locations.push(path.to_string());
//!         }
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut finder = Finder { locations: vec![] };
//! walk(&mut finder, &module);
//! ```
//!
//! # Transforming
//!
//! Implement [`Transformer`] and call [`transform`]; children are rebuilt
//! before each node's own handler runs, and `transform_statement` can remove
//! statements or splice several into place via [`Transform`].
//!
//! # Built-ins
//!
//! - [`PathCollector`] assigns pre-order node ids and records every node's
//!   path in a [`PathTable`](crate::nodes::PathTable)
//! - [`BindingCollector`] finds bound names and classifies them by location
//! - [`RenameTransformer`] renames an identifier, skipping attribute names

mod binding;
mod dispatch;
mod path_collector;
mod rename;
mod traits;

pub use binding::{BindingCollector, BindingInfo, BindingKind};
pub use dispatch::*;
pub use path_collector::PathCollector;
pub use rename::{RenameError, RenameResult, RenameTransformer};
pub use traits::{Transform, Transformer, VisitResult, Visitor};
