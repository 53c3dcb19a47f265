// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Integration tests for visitor traversal and path delivery.

use astpath::{
    walk, Assign, Constant, Expression, FunctionDef, If, Module, Name, NodeKind, Parameters, Path,
    PathCollector, Statement, VisitResult, Visitor,
};

/// def f():
///     if flag:
///         x = 1
/// y = 2
fn nested_module() -> Module<'static> {
    Module::new(vec![
        Statement::FunctionDef(FunctionDef {
            name: Name::new("f"),
            params: Parameters::default(),
            body: vec![Statement::If(If {
                test: Expression::Name(Name::new("flag")),
                body: vec![Statement::Assign(Assign {
                    targets: vec![Expression::Name(Name::new("x"))],
                    value: Expression::Constant(Constant::integer("1")),
                })],
                orelse: vec![],
            })],
            returns: None,
        }),
        Statement::Assign(Assign {
            targets: vec![Expression::Name(Name::new("y"))],
            value: Expression::Constant(Constant::integer("2")),
        }),
    ])
}

/// Records the rendered path of every Name visited.
#[derive(Default)]
struct NamePaths {
    seen: Vec<(String, String)>,
}

impl<'a> Visitor<'a> for NamePaths {
    fn visit_name(&mut self, node: &Name<'a>, path: &Path) -> VisitResult {
        self.seen.push((node.value.to_string(), path.to_string()));
        VisitResult::Continue
    }
}

#[test]
fn paths_report_the_full_ancestor_chain() {
    struct AssignPaths {
        kinds: Vec<Vec<NodeKind>>,
    }

    impl<'a> Visitor<'a> for AssignPaths {
        fn visit_assign(&mut self, _node: &Assign<'a>, path: &Path) -> VisitResult {
            self.kinds.push(path.kinds().collect());
            VisitResult::Continue
        }
    }

    let mut visitor = AssignPaths { kinds: vec![] };
    walk(&mut visitor, &nested_module());
    assert_eq!(
        visitor.kinds,
        vec![
            vec![NodeKind::Module, NodeKind::FunctionDef, NodeKind::If],
            vec![NodeKind::Module],
        ]
    );
}

#[test]
fn every_node_is_visited_exactly_once() {
    // Module, FunctionDef, Name, Parameters, If, Name, Assign, Name,
    // Constant, Assign, Name, Constant
    let table = PathCollector::collect(&nested_module());
    assert_eq!(table.len(), 12);
}

#[test]
fn sibling_subtrees_do_not_leak_into_each_other() {
    let mut visitor = NamePaths::default();
    walk(&mut visitor, &nested_module());
    let y_path = &visitor
        .seen
        .iter()
        .find(|(name, _)| name == "y")
        .expect("y visited")
        .1;
    // `y` sits under the second top-level statement only; nothing from the
    // function's subtree is still on its path.
    assert_eq!(y_path, "Module.body[1] > Assign.targets[0]");
}

#[test]
fn walking_twice_yields_identical_paths() {
    let module = nested_module();
    let mut first = NamePaths::default();
    let mut second = NamePaths::default();
    walk(&mut first, &module);
    walk(&mut second, &module);
    assert_eq!(first.seen, second.seen);
    assert_eq!(first.seen.len(), 4);
}

#[test]
fn skip_children_skips_the_subtree_but_still_leaves() {
    #[derive(Default)]
    struct SkipFunctions {
        names: Vec<String>,
        left_function: bool,
    }

    impl<'a> Visitor<'a> for SkipFunctions {
        fn visit_function_def(&mut self, _node: &FunctionDef<'a>, _path: &Path) -> VisitResult {
            VisitResult::SkipChildren
        }

        fn leave_function_def(&mut self, _node: &FunctionDef<'a>, _path: &Path) {
            self.left_function = true;
        }

        fn visit_name(&mut self, node: &Name<'a>, _path: &Path) -> VisitResult {
            self.names.push(node.value.to_string());
            VisitResult::Continue
        }
    }

    let mut visitor = SkipFunctions::default();
    let result = walk(&mut visitor, &nested_module());
    assert_eq!(result, VisitResult::Continue);
    assert_eq!(visitor.names, vec!["y"]);
    assert!(visitor.left_function);
}

#[test]
fn stop_halts_the_walk_immediately() {
    #[derive(Default)]
    struct StopAtIf {
        names: Vec<String>,
        leaves: usize,
    }

    impl<'a> Visitor<'a> for StopAtIf {
        fn visit_if_stmt(&mut self, _node: &If<'a>, _path: &Path) -> VisitResult {
            VisitResult::Stop
        }

        fn visit_name(&mut self, node: &Name<'a>, _path: &Path) -> VisitResult {
            self.names.push(node.value.to_string());
            VisitResult::Continue
        }

        fn leave_function_def(&mut self, _node: &FunctionDef<'a>, _path: &Path) {
            self.leaves += 1;
        }

        fn leave_module(&mut self, _node: &Module<'a>, _path: &Path) {
            self.leaves += 1;
        }
    }

    let mut visitor = StopAtIf::default();
    let result = walk(&mut visitor, &nested_module());
    assert_eq!(result, VisitResult::Stop);
    // Only the function name was reached before the stop; nothing after the
    // `if` was visited and no ancestor got its leave callback.
    assert_eq!(visitor.names, vec!["f"]);
    assert_eq!(visitor.leaves, 0);
}

#[test]
fn leave_receives_the_same_path_as_visit() {
    #[derive(Default)]
    struct PathEcho {
        entered: Vec<String>,
        mismatches: usize,
    }

    impl<'a> Visitor<'a> for PathEcho {
        fn visit_assign(&mut self, _node: &Assign<'a>, path: &Path) -> VisitResult {
            self.entered.push(path.to_string());
            VisitResult::Continue
        }

        fn leave_assign(&mut self, _node: &Assign<'a>, path: &Path) {
            let expected = self.entered.pop();
            if expected.as_deref() != Some(path.to_string().as_str()) {
                self.mismatches += 1;
            }
        }
    }

    let mut visitor = PathEcho::default();
    walk(&mut visitor, &nested_module());
    assert_eq!(visitor.mismatches, 0);
    assert!(visitor.entered.is_empty());
}

#[test]
fn enum_and_variant_callbacks_share_one_path() {
    #[derive(Default)]
    struct BothLevels {
        statement_paths: Vec<String>,
        assign_paths: Vec<String>,
    }

    impl<'a> Visitor<'a> for BothLevels {
        fn visit_statement(&mut self, node: &Statement<'a>, path: &Path) -> VisitResult {
            if node.kind() == NodeKind::Assign {
                self.statement_paths.push(path.to_string());
            }
            VisitResult::Continue
        }

        fn visit_assign(&mut self, _node: &Assign<'a>, path: &Path) -> VisitResult {
            self.assign_paths.push(path.to_string());
            VisitResult::Continue
        }
    }

    let mut visitor = BothLevels::default();
    walk(&mut visitor, &nested_module());
    assert_eq!(visitor.statement_paths, visitor.assign_paths);
}
