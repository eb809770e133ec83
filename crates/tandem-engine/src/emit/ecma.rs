//! ECMAScript source printer
//!
//! Prints each node kind structurally. There is no precedence analysis:
//! grouping survives only where the tree carries explicit `Parenthesis` nodes.

use crate::ast::{BinaryOperator, Depth, Node, PostfixOperator, UnaryOperator, Visitor};

/// Render a tree as a top-level program
pub fn render(node: &Node) -> String {
    render_at(node, Depth::TOP)
}

/// Render a tree as if it sat `depth` blocks deep
pub fn render_at(node: &Node, depth: Depth) -> String {
    node.accept(&mut EcmaVisitor, depth)
}

/// Visitor that prints script source
///
/// Stateless; depth travels with each call, so one instance can be shared by
/// any number of renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct EcmaVisitor;

impl EcmaVisitor {
    fn join(&mut self, nodes: &[Node], depth: Depth) -> String {
        nodes
            .iter()
            .map(|node| node.accept(self, depth))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn optional(&mut self, node: Option<&Node>, depth: Depth) -> String {
        node.map(|node| node.accept(self, depth)).unwrap_or_default()
    }

    /// Body of a loop or conditional. Statement lists always print braced here.
    fn body(&mut self, node: &Node, depth: Depth) -> String {
        node.accept(self, depth.at_least_block())
    }
}

impl Visitor for EcmaVisitor {
    type Output = String;

    fn visit_source_elements(&mut self, statements: &[Node], depth: Depth) -> String {
        let inner = depth.nested();
        let indent = inner.indent();
        let body = statements
            .iter()
            .map(|stmt| format!("{}{};", indent, stmt.accept(self, inner)))
            .collect::<Vec<_>>()
            .join("\n");

        if depth.is_top() {
            body
        } else {
            format!("{{\n{}\n}}", body)
        }
    }

    fn visit_var_statement(&mut self, declarations: &[Node], depth: Depth) -> String {
        format!("var {}", self.join(declarations, depth))
    }

    fn visit_array_literal(&mut self, elements: &[Node], depth: Depth) -> String {
        format!("[{}]", self.join(elements, depth))
    }

    fn visit_object_literal(&mut self, properties: &[Node], depth: Depth) -> String {
        if properties.is_empty() {
            return "{}".to_string();
        }
        format!("{{ {} }}", self.join(properties, depth))
    }

    fn visit_property(&mut self, key: &Node, value: &Node, depth: Depth) -> String {
        format!("{}: {}", key.accept(self, depth), value.accept(self, depth))
    }

    fn visit_comma(&mut self, expressions: &[Node], depth: Depth) -> String {
        self.join(expressions, depth)
    }

    fn visit_function_call(&mut self, callee: &Node, arguments: &[Node], depth: Depth) -> String {
        format!("{}({})", callee.accept(self, depth), self.join(arguments, depth))
    }

    fn visit_new(&mut self, callee: &Node, arguments: &[Node], depth: Depth) -> String {
        format!(
            "new {}({})",
            callee.accept(self, depth),
            self.join(arguments, depth)
        )
    }

    fn visit_function(
        &mut self,
        name: Option<&str>,
        params: &[Node],
        body: &Node,
        depth: Depth,
    ) -> String {
        let name = name.map(|n| format!(" {}", n)).unwrap_or_default();
        format!(
            "function{}({}) {}",
            name,
            self.join(params, depth),
            self.body(body, depth)
        )
    }

    fn visit_name(&mut self, text: &str, _depth: Depth) -> String {
        text.to_string()
    }

    fn visit_number(&mut self, text: &str, _depth: Depth) -> String {
        text.to_string()
    }

    fn visit_string(&mut self, text: &str, _depth: Depth) -> String {
        format!("\"{}\"", text)
    }

    fn visit_regexp(&mut self, text: &str, _depth: Depth) -> String {
        text.to_string()
    }

    fn visit_break(&mut self, _depth: Depth) -> String {
        "break;".to_string()
    }

    fn visit_continue(&mut self, _depth: Depth) -> String {
        "continue;".to_string()
    }

    fn visit_null(&mut self, _depth: Depth) -> String {
        "null".to_string()
    }

    fn visit_true(&mut self, _depth: Depth) -> String {
        "true".to_string()
    }

    fn visit_false(&mut self, _depth: Depth) -> String {
        "false".to_string()
    }

    fn visit_this(&mut self, _depth: Depth) -> String {
        "this".to_string()
    }

    fn visit_bracket_access(&mut self, object: &Node, index: &Node, depth: Depth) -> String {
        format!("{}[{}]", object.accept(self, depth), index.accept(self, depth))
    }

    fn visit_dot_accessor(&mut self, left: &Node, right: &Node, depth: Depth) -> String {
        // The parser stores the property in `left` and the object in `right`.
        format!("{}.{}", right.accept(self, depth), left.accept(self, depth))
    }

    fn visit_do_while(&mut self, body: &Node, condition: &Node, depth: Depth) -> String {
        let rendered = self.body(body, depth);
        let semi = if body.is_source_elements() || rendered.ends_with(';') {
            ""
        } else {
            ";"
        };
        format!(
            "do {}{} while({})",
            rendered,
            semi,
            condition.accept(self, depth)
        )
    }

    fn visit_while(&mut self, condition: &Node, body: &Node, depth: Depth) -> String {
        format!(
            "while({}) {}",
            condition.accept(self, depth),
            self.body(body, depth)
        )
    }

    fn visit_for(
        &mut self,
        init: Option<&Node>,
        test: Option<&Node>,
        update: Option<&Node>,
        body: &Node,
        depth: Depth,
    ) -> String {
        format!(
            "for({}; {}; {}) {}",
            self.optional(init, depth),
            self.optional(test, depth),
            self.optional(update, depth),
            self.body(body, depth)
        )
    }

    fn visit_for_in(&mut self, binding: &Node, object: &Node, body: &Node, depth: Depth) -> String {
        format!(
            "for({} in {}) {}",
            binding.accept(self, depth),
            object.accept(self, depth),
            self.body(body, depth)
        )
    }

    fn visit_if(
        &mut self,
        condition: &Node,
        then: &Node,
        otherwise: Option<&Node>,
        depth: Depth,
    ) -> String {
        let mut out = format!(
            "if({}) {}",
            condition.accept(self, depth),
            self.body(then, depth)
        );
        if let Some(otherwise) = otherwise {
            if !then.is_source_elements() && !out.ends_with(';') {
                out.push(';');
            }
            out.push_str(" else ");
            out.push_str(&self.body(otherwise, depth));
        }
        out
    }

    fn visit_try(
        &mut self,
        body: &Node,
        catch_param: Option<&Node>,
        catch_body: Option<&Node>,
        finally: Option<&Node>,
        depth: Depth,
    ) -> String {
        let mut out = format!("try {}", self.body(body, depth));
        if let Some(handler) = catch_body {
            let param = self.optional(catch_param, depth);
            out.push_str(&format!(" catch({}) {}", param, self.body(handler, depth)));
        }
        if let Some(finalizer) = finally {
            out.push_str(&format!(" finally {}", self.body(finalizer, depth)));
        }
        out
    }

    fn visit_ternary(
        &mut self,
        condition: &Node,
        consequent: &Node,
        alternate: &Node,
        depth: Depth,
    ) -> String {
        format!(
            "{} ? {} : {}",
            condition.accept(self, depth),
            consequent.accept(self, depth),
            alternate.accept(self, depth)
        )
    }

    fn visit_return(&mut self, value: Option<&Node>, depth: Depth) -> String {
        match value {
            Some(value) => format!("return {}", value.accept(self, depth)),
            None => "return".to_string(),
        }
    }

    fn visit_throw(&mut self, value: &Node, depth: Depth) -> String {
        format!("throw {}", value.accept(self, depth))
    }

    fn visit_delete(&mut self, operand: &Node, depth: Depth) -> String {
        format!("delete {}", operand.accept(self, depth))
    }

    fn visit_parenthesis(&mut self, inner: &Node, depth: Depth) -> String {
        format!("({})", inner.accept(self, depth))
    }

    fn visit_unary(&mut self, operator: UnaryOperator, operand: &Node, depth: Depth) -> String {
        let text = operator.as_str();
        let operand = operand.accept(self, depth);
        // `- -x` must not collapse into `--x`
        let sign = |c: char| c == '+' || c == '-';
        if text.ends_with(sign) && operand.starts_with(sign) {
            format!("{} {}", text, operand)
        } else {
            format!("{}{}", text, operand)
        }
    }

    fn visit_postfix(&mut self, operator: PostfixOperator, operand: &Node, depth: Depth) -> String {
        format!("{}{}", operand.accept(self, depth), operator.as_str())
    }

    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: Option<&Node>,
        right: Option<&Node>,
        depth: Depth,
    ) -> String {
        format!(
            "{} {} {}",
            self.optional(left, depth),
            operator,
            self.optional(right, depth)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> Node {
        Node::name(text)
    }

    #[test]
    fn test_literals() {
        assert_eq!(render(&Node::number("3.14")), "3.14");
        assert_eq!(render(&Node::string("it's")), "\"it's\"");
        assert_eq!(
            render(&Node::Regexp {
                value: "/a+/g".into()
            }),
            "/a+/g"
        );
        assert_eq!(render(&Node::Null), "null");
        assert_eq!(render(&Node::This), "this");
        assert_eq!(render(&Node::Continue), "continue;");
    }

    #[test]
    fn test_missing_binary_side_is_empty() {
        let node = Node::Binary {
            operator: BinaryOperator::Subtract,
            left: None,
            right: Some(Box::new(Node::number("1"))),
        };
        assert_eq!(render(&node), " - 1");
    }

    #[test]
    fn test_function_body_always_braced() {
        let node = Node::Function {
            name: Some("add".into()),
            arguments: vec![name("a"), name("b")],
            body: Box::new(Node::source(vec![Node::Return {
                value: Some(Box::new(Node::binary(
                    BinaryOperator::Add,
                    name("a"),
                    name("b"),
                ))),
            }])),
        };
        assert_eq!(render(&node), "function add(a, b) {\n  return a + b;\n}");
    }

    #[test]
    fn test_if_else_with_expression_branch() {
        let node = Node::If {
            condition: Box::new(name("c")),
            then: Box::new(Node::binary(BinaryOperator::AssignExpr, name("x"), Node::number("1"))),
            otherwise: Some(Box::new(Node::binary(
                BinaryOperator::AssignExpr,
                name("x"),
                Node::number("2"),
            ))),
        };
        assert_eq!(render(&node), "if(c) x = 1; else x = 2");
    }

    #[test]
    fn test_try_catch_finally() {
        let node = Node::Try {
            body: Box::new(Node::source(vec![Node::call(name("risky"), vec![])])),
            catch_param: Some(Box::new(name("e"))),
            catch_body: Some(Box::new(Node::source(vec![]))),
            finally: Some(Box::new(Node::source(vec![Node::call(name("done"), vec![])]))),
        };
        assert_eq!(
            render(&node),
            "try {\n  risky();\n} catch(e) {\n\n} finally {\n  done();\n}"
        );
    }

    #[test]
    fn test_unary_and_postfix() {
        let typeof_x = Node::Unary {
            operator: UnaryOperator::Typeof,
            value: Box::new(name("x")),
        };
        let not_x = Node::Unary {
            operator: UnaryOperator::Not,
            value: Box::new(name("x")),
        };
        let i_plus = Node::Postfix {
            operator: PostfixOperator::Increment,
            value: Box::new(name("i")),
        };
        assert_eq!(render(&typeof_x), "typeof x");
        assert_eq!(render(&not_x), "!x");
        assert_eq!(render(&i_plus), "i++");
    }

    #[test]
    fn test_nested_signs_stay_separate_tokens() {
        let unary = |operator, value| Node::Unary {
            operator,
            value: Box::new(value),
        };

        let negate_negate = unary(UnaryOperator::Negate, unary(UnaryOperator::Negate, name("x")));
        let plus_increment = unary(UnaryOperator::Plus, unary(UnaryOperator::Increment, name("x")));
        let minus_plus = unary(UnaryOperator::Negate, unary(UnaryOperator::Plus, name("x")));
        let not_negate = unary(UnaryOperator::Not, unary(UnaryOperator::Negate, name("x")));
        let negative_literal = unary(UnaryOperator::Negate, Node::number("-1"));

        assert_eq!(render(&negate_negate), "- -x");
        assert_eq!(render(&plus_increment), "+ ++x");
        assert_eq!(render(&minus_plus), "- +x");
        assert_eq!(render(&not_negate), "!-x");
        assert_eq!(render(&negative_literal), "- -1");
    }

    #[test]
    fn test_object_literal() {
        let empty = Node::ObjectLiteral { value: vec![] };
        let pair = Node::ObjectLiteral {
            value: vec![Node::Property {
                left: Box::new(name("a")),
                right: Box::new(Node::number("1")),
            }],
        };
        assert_eq!(render(&empty), "{}");
        assert_eq!(render(&pair), "{ a: 1 }");
    }

    #[test]
    fn test_for_loop() {
        let node = Node::For {
            init: Some(Box::new(Node::var(vec![Node::binary(
                BinaryOperator::Assign,
                name("i"),
                Node::number("0"),
            )]))),
            test: Some(Box::new(Node::binary(
                BinaryOperator::LessThan,
                name("i"),
                Node::number("3"),
            ))),
            update: Some(Box::new(Node::Postfix {
                operator: PostfixOperator::Increment,
                value: Box::new(name("i")),
            })),
            body: Box::new(Node::source(vec![Node::Break])),
        };
        assert_eq!(
            render(&node),
            "for(var i = 0; i < 3; i++) {\n  break;;\n}"
        );
    }
}
