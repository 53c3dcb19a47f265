// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Integration tests for transformer traversal, splicing, and path delivery.

use astpath::{
    transform, Assign, Constant, Expr, Expression, Module, Name, Pass, Path, Statement, Transform,
    Transformer,
};

fn name(value: &str) -> Expression<'_> {
    Expression::Name(Name::new(value))
}

fn assign<'a>(target: &'a str, value: Expression<'a>) -> Statement<'a> {
    Statement::Assign(Assign {
        targets: vec![name(target)],
        value,
    })
}

/// x = 1
/// y = 2
fn two_assigns() -> Module<'static> {
    Module::new(vec![
        assign("x", Expression::Constant(Constant::integer("1"))),
        assign("y", Expression::Constant(Constant::integer("2"))),
    ])
}

/// Applies one statement-level rewrite keyed on the first assignment target.
struct RewriteAssign<'a> {
    target: &'a str,
    replacement: fn() -> Transform<Statement<'static>>,
}

impl<'a> Transformer<'a> for RewriteAssign<'a> {
    fn transform_statement(
        &mut self,
        node: Statement<'a>,
        _path: &Path,
    ) -> Transform<Statement<'a>> {
        match &node {
            Statement::Assign(a) if a.targets.first() == Some(&name(self.target)) => {
                (self.replacement)()
            }
            _ => Transform::Keep(node),
        }
    }
}

#[test]
fn keep_replaces_a_statement_in_place() {
    let mut rewriter = RewriteAssign {
        target: "x",
        replacement: || Transform::Keep(Statement::Pass(Pass)),
    };
    let module = transform(&mut rewriter, two_assigns());
    assert_eq!(
        module.body,
        vec![
            Statement::Pass(Pass),
            assign("y", Expression::Constant(Constant::integer("2"))),
        ]
    );
}

#[test]
fn remove_closes_the_gap() {
    let mut rewriter = RewriteAssign {
        target: "x",
        replacement: || Transform::Remove,
    };
    let module = transform(&mut rewriter, two_assigns());
    assert_eq!(
        module.body,
        vec![assign("y", Expression::Constant(Constant::integer("2")))]
    );
}

#[test]
fn flatten_splices_in_order() {
    let mut rewriter = RewriteAssign {
        target: "x",
        replacement: || {
            Transform::Flatten(vec![
                Statement::Pass(Pass),
                assign("z", Expression::Constant(Constant::integer("0"))),
            ])
        },
    };
    let module = transform(&mut rewriter, two_assigns());
    assert_eq!(
        module.body,
        vec![
            Statement::Pass(Pass),
            assign("z", Expression::Constant(Constant::integer("0"))),
            assign("y", Expression::Constant(Constant::integer("2"))),
        ]
    );
}

#[test]
fn identity_transform_returns_an_equal_tree() {
    struct Identity;
    impl<'a> Transformer<'a> for Identity {}

    let before = two_assigns();
    let after = transform(&mut Identity, before.clone());
    assert_eq!(after, before);
}

#[test]
fn children_are_transformed_before_parents() {
    #[derive(Default)]
    struct Order {
        events: Vec<String>,
    }

    impl<'a> Transformer<'a> for Order {
        fn transform_name(&mut self, node: Name<'a>, _path: &Path) -> Name<'a> {
            self.events.push(format!("name:{}", node.value));
            node
        }

        fn transform_assign(&mut self, node: Assign<'a>, _path: &Path) -> Assign<'a> {
            self.events.push("assign".to_string());
            node
        }

        fn transform_module(&mut self, node: Module<'a>, _path: &Path) -> Module<'a> {
            self.events.push("module".to_string());
            node
        }
    }

    let mut order = Order::default();
    transform(&mut order, two_assigns());
    assert_eq!(
        order.events,
        vec!["name:x", "assign", "name:y", "assign", "module"]
    );
}

#[test]
fn parent_handlers_see_replaced_children() {
    #[derive(Default)]
    struct RenameThenInspect {
        parent_saw: Vec<String>,
    }

    impl<'a> Transformer<'a> for RenameThenInspect {
        fn transform_name(&mut self, node: Name<'a>, _path: &Path) -> Name<'a> {
            if node.value == "x" {
                Name::new("renamed")
            } else {
                node
            }
        }

        fn transform_assign(&mut self, node: Assign<'a>, _path: &Path) -> Assign<'a> {
            if let Some(Expression::Name(n)) = node.targets.first() {
                self.parent_saw.push(n.value.to_string());
            }
            node
        }
    }

    let mut transformer = RenameThenInspect::default();
    let module = transform(&mut transformer, two_assigns());
    assert_eq!(transformer.parent_saw, vec!["renamed", "y"]);
    assert_eq!(
        module.body[0],
        assign("renamed", Expression::Constant(Constant::integer("1")))
    );
}

#[test]
fn transformer_callbacks_receive_paths() {
    #[derive(Default)]
    struct ConstantPaths {
        seen: Vec<String>,
    }

    impl<'a> Transformer<'a> for ConstantPaths {
        fn transform_constant(&mut self, node: Constant<'a>, path: &Path) -> Constant<'a> {
            self.seen.push(path.to_string());
            node
        }
    }

    let mut transformer = ConstantPaths::default();
    transform(&mut transformer, two_assigns());
    assert_eq!(
        transformer.seen,
        vec![
            "Module.body[0] > Assign.value",
            "Module.body[1] > Assign.value",
        ]
    );
}

#[test]
fn expression_statements_are_rewritten_in_place() {
    struct FoldToNone;

    impl<'a> Transformer<'a> for FoldToNone {
        fn transform_expression(
            &mut self,
            node: Expression<'a>,
            _path: &Path,
        ) -> Expression<'a> {
            match node {
                Expression::Constant(_) => Expression::Constant(Constant::none()),
                other => other,
            }
        }
    }

    let module = Module::new(vec![Statement::Expr(Expr {
        value: Expression::Constant(Constant::integer("42")),
    })]);
    let module = transform(&mut FoldToNone, module);
    assert_eq!(
        module.body,
        vec![Statement::Expr(Expr {
            value: Expression::Constant(Constant::none()),
        })]
    );
}
