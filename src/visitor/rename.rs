// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Identifier renaming transformer.
//!
//! [`RenameTransformer`] rewrites every `Name` matching a source identifier
//! to a new identifier, except where the path shows the name is an attribute
//! of some object (`x.attr`): renaming `attr` there would change a different
//! namespace than the variable being renamed.

use thiserror::Error;

use crate::nodes::{Module, Name, NodeKind};
use crate::path::{Edge, Path};
use crate::visitor::{transform, Transformer};

/// Errors from constructing a rename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("rename requires a non-empty identifier")]
    EmptyName,

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
}

/// Result type for rename operations.
pub type RenameResult<T> = Result<T, RenameError>;

/// True for a non-empty ASCII identifier: a letter or underscore followed by
/// letters, digits, or underscores.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Transformer that renames an identifier throughout a tree.
///
/// Counts the number of replacements it makes; attribute names reached
/// through `Attribute.attr` are left alone.
#[derive(Debug)]
pub struct RenameTransformer<'a> {
    from: &'a str,
    to: &'a str,
    count: usize,
}

impl<'a> RenameTransformer<'a> {
    /// Create a rename from one identifier to another.
    ///
    /// Both names must be valid non-empty identifiers.
    pub fn new(from: &'a str, to: &'a str) -> RenameResult<Self> {
        for name in [from, to] {
            if name.is_empty() {
                return Err(RenameError::EmptyName);
            }
            if !is_identifier(name) {
                return Err(RenameError::InvalidIdentifier(name.to_string()));
            }
        }
        Ok(Self { from, to, count: 0 })
    }

    /// Apply the rename to a whole tree, returning the rewritten tree.
    pub fn apply(&mut self, module: Module<'a>) -> Module<'a> {
        let renamed = transform(self, module);
        tracing::debug!(from = self.from, to = self.to, count = self.count, "renamed");
        renamed
    }

    /// The number of names replaced so far.
    pub fn count(&self) -> usize {
        self.count
    }

    fn is_attribute_name(path: &Path) -> bool {
        matches!(
            path.segments().last(),
            Some(segment)
                if segment.kind == NodeKind::Attribute && segment.edge == Edge::Field("attr")
        )
    }
}

impl<'a> Transformer<'a> for RenameTransformer<'a> {
    fn transform_name(&mut self, node: Name<'a>, path: &Path) -> Name<'a> {
        if node.value == self.from && !Self::is_attribute_name(path) {
            self.count += 1;
            Name::new(self.to)
        } else {
            node
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Assign, Attribute, Constant, Expr, Expression, Statement};

    fn name(value: &str) -> Expression<'_> {
        Expression::Name(Name::new(value))
    }

    /// x = 1
    /// obj.x
    /// x.y
    fn sample_module() -> Module<'static> {
        Module::new(vec![
            Statement::Assign(Assign {
                targets: vec![name("x")],
                value: Expression::Constant(Constant::integer("1")),
            }),
            Statement::Expr(Expr {
                value: Expression::Attribute(Attribute {
                    value: Box::new(name("obj")),
                    attr: Name::new("x"),
                }),
            }),
            Statement::Expr(Expr {
                value: Expression::Attribute(Attribute {
                    value: Box::new(name("x")),
                    attr: Name::new("y"),
                }),
            }),
        ])
    }

    #[test]
    fn renames_variables_but_not_attributes() {
        let mut rename = RenameTransformer::new("x", "renamed").unwrap();
        let module = rename.apply(sample_module());
        assert_eq!(rename.count(), 2);

        // The assignment target and the attribute base are renamed.
        let Statement::Assign(assign) = &module.body[0] else {
            panic!("expected assignment");
        };
        assert_eq!(assign.targets[0], name("renamed"));

        // The attribute name `obj.x` is untouched.
        let Statement::Expr(expr) = &module.body[1] else {
            panic!("expected expression statement");
        };
        let Expression::Attribute(attribute) = &expr.value else {
            panic!("expected attribute");
        };
        assert_eq!(attribute.attr, Name::new("x"));

        // The base of `x.y` is renamed.
        let Statement::Expr(expr) = &module.body[2] else {
            panic!("expected expression statement");
        };
        let Expression::Attribute(attribute) = &expr.value else {
            panic!("expected attribute");
        };
        assert_eq!(*attribute.value, name("renamed"));
    }

    #[test]
    fn rejects_invalid_identifiers() {
        assert_eq!(
            RenameTransformer::new("", "y").unwrap_err(),
            RenameError::EmptyName
        );
        assert_eq!(
            RenameTransformer::new("x", "1bad").unwrap_err(),
            RenameError::InvalidIdentifier("1bad".to_string())
        );
        assert_eq!(
            RenameTransformer::new("has space", "y").unwrap_err(),
            RenameError::InvalidIdentifier("has space".to_string())
        );
        assert!(RenameTransformer::new("_private", "renamed_2").is_ok());
    }

    #[test]
    fn missing_name_renames_nothing() {
        let mut rename = RenameTransformer::new("absent", "other").unwrap();
        let before = sample_module();
        let after = rename.apply(before.clone());
        assert_eq!(rename.count(), 0);
        assert_eq!(after, before);
    }
}
