use tandem_engine::ast::{BinaryOperator, Depth, Node};
use tandem_engine::emit::{render, render_at};

fn var_x() -> Node {
    // var x = 1 + 2
    Node::var(vec![Node::binary(
        BinaryOperator::Assign,
        Node::name("x"),
        Node::binary(BinaryOperator::Add, Node::number("1"), Node::number("2")),
    )])
}

// ============================================================================
// Statement List Tests
// ============================================================================

#[test]
fn test_top_level_program() {
    let program = Node::source(vec![var_x()]);
    assert_eq!(render(&program), "var x = 1 + 2;");
}

#[test]
fn test_top_level_joins_with_newlines() {
    let program = Node::source(vec![var_x(), Node::call(Node::name("f"), vec![])]);
    assert_eq!(render(&program), "var x = 1 + 2;\nf();");
}

#[test]
fn test_nested_block_is_braced_and_indented() {
    let program = Node::source(vec![Node::source(vec![var_x()])]);
    assert_eq!(render(&program), "{\n  var x = 1 + 2;\n};");
}

#[test]
fn test_render_at_depth_one() {
    let block = Node::source(vec![var_x()]);
    assert_eq!(render_at(&block, Depth::new(1)), "{\n  var x = 1 + 2;\n}");
}

#[test]
fn test_deeper_nesting() {
    let program = Node::source(vec![Node::source(vec![Node::source(vec![Node::name("y")])])]);
    assert_eq!(render(&program), "{\n  {\n    y;\n};\n};");
}

#[test]
fn test_independent_renders_do_not_share_depth() {
    let block = Node::source(vec![var_x()]);
    let deep = render_at(&block, Depth::new(3));
    let top = render(&block);

    assert_eq!(deep, "{\n      var x = 1 + 2;\n}");
    assert_eq!(top, "var x = 1 + 2;");
}

// ============================================================================
// Operator Tests
// ============================================================================

#[test]
fn test_every_binary_operator_text() {
    for op in BinaryOperator::ALL {
        let node = Node::binary(op, Node::name("a"), Node::name("b"));
        assert_eq!(render(&node), format!("a {} b", op.as_str()));
    }
}

#[test]
fn test_operator_table_entries() {
    let cases = [
        (BinaryOperator::StrictEqual, "==="),
        (BinaryOperator::StrictNotEqual, "!=="),
        (BinaryOperator::Or, "||"),
        (BinaryOperator::And, "&&"),
        (BinaryOperator::UnsignedRightShift, ">>>"),
        (BinaryOperator::UnsignedRightShiftAssign, ">>>="),
        (BinaryOperator::RightShiftAssign, ">>="),
        (BinaryOperator::ModuloAssign, "%="),
        (BinaryOperator::BitXor, "^"),
        (BinaryOperator::InstanceOf, "instanceof"),
        (BinaryOperator::AssignExpr, "="),
    ];
    for (op, text) in cases {
        assert_eq!(op.as_str(), text);
    }
}

// ============================================================================
// Access Tests
// ============================================================================

#[test]
fn test_dot_accessor_operand_order() {
    let node = Node::DotAccessor {
        left: Box::new(Node::name("b")),
        right: Box::new(Node::name("a")),
    };
    assert_eq!(render(&node), "a.b");
}

#[test]
fn test_bracket_access() {
    let node = Node::BracketAccess {
        left: Box::new(Node::name("a")),
        right: Box::new(Node::string("k")),
    };
    assert_eq!(render(&node), "a[\"k\"]");
}

#[test]
fn test_delete() {
    let node = Node::Delete {
        value: Box::new(Node::DotAccessor {
            left: Box::new(Node::name("prop")),
            right: Box::new(Node::name("obj")),
        }),
    };
    assert_eq!(render(&node), "delete obj.prop");
}

// ============================================================================
// Control Flow Tests
// ============================================================================

#[test]
fn test_do_while_with_block() {
    let node = Node::DoWhile {
        left: Box::new(Node::source(vec![Node::call(Node::name("f"), vec![])])),
        right: Box::new(Node::True),
    };
    let program = Node::source(vec![node]);
    assert_eq!(render(&program), "do {\n  f();\n} while(true);");
}

#[test]
fn test_do_while_with_expression() {
    let node = Node::DoWhile {
        left: Box::new(Node::call(Node::name("f"), vec![])),
        right: Box::new(Node::name("c")),
    };
    assert_eq!(render(&node), "do f(); while(c)");
}

#[test]
fn test_do_while_with_keyword_body() {
    let node = Node::DoWhile {
        left: Box::new(Node::Break),
        right: Box::new(Node::False),
    };
    assert_eq!(render(&node), "do break; while(false)");
}

#[test]
fn test_while_and_for_in() {
    let body = Node::source(vec![Node::Continue]);
    let while_loop = Node::While {
        left: Box::new(Node::name("running")),
        right: Box::new(body.clone()),
    };
    let for_in = Node::ForIn {
        left: Box::new(Node::var(vec![Node::name("k")])),
        right: Box::new(Node::name("obj")),
        body: Box::new(body),
    };

    assert_eq!(render(&while_loop), "while(running) {\n  continue;;\n}");
    assert_eq!(render(&for_in), "for(var k in obj) {\n  continue;;\n}");
}

#[test]
fn test_if_else_blocks() {
    let node = Node::If {
        condition: Box::new(Node::name("ok")),
        then: Box::new(Node::source(vec![Node::call(Node::name("yes"), vec![])])),
        otherwise: Some(Box::new(Node::source(vec![Node::call(Node::name("no"), vec![])]))),
    };
    let program = Node::source(vec![node]);
    assert_eq!(
        render(&program),
        "if(ok) {\n  yes();\n} else {\n  no();\n};"
    );
}

// ============================================================================
// Interchange Tests
// ============================================================================

#[test]
fn test_render_tree_from_json() {
    let json = r#"{
        "kind": "SourceElements",
        "value": [
            { "kind": "VarStatement", "value": [
                { "kind": "Binary", "operator": "Assign",
                  "left":  { "kind": "Name", "value": "x" },
                  "right": { "kind": "Binary", "operator": "Add",
                             "left":  { "kind": "Number", "value": "1" },
                             "right": { "kind": "Number", "value": "2" } } }
            ] }
        ]
    }"#;

    let tree: Node = serde_json::from_str(json).unwrap();
    assert_eq!(tree, Node::source(vec![var_x()]));
    assert_eq!(render(&tree), "var x = 1 + 2;");
}

#[test]
fn test_json_missing_side_and_keywords() {
    let json = r#"{ "kind": "Binary", "operator": "Or", "left": { "kind": "This" }, "right": null }"#;
    let tree: Node = serde_json::from_str(json).unwrap();
    assert_eq!(render(&tree), "this || ");
}

#[test]
fn test_unknown_kind_rejected() {
    let json = r#"{ "kind": "Label", "value": "outer" }"#;
    assert!(serde_json::from_str::<Node>(json).is_err());
}

#[test]
fn test_json_round_trip() {
    let tree = Node::source(vec![var_x(), Node::Return { value: None }]);
    let json = serde_json::to_string(&tree).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(render(&back), render(&tree));
}
