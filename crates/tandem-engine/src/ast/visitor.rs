//! Visitor over syntax trees
//!
//! Every visit takes the nesting depth explicitly. A node passes `depth` on to
//! its children unchanged, except a nested statement list, which hands
//! `depth.nested()` to its own statements. No visitor keeps depth as state, so
//! one visitor can render several trees or subtrees in any order.

use super::{BinaryOperator, Node, PostfixOperator, UnaryOperator};

/// Nesting depth of a statement list
///
/// Depth 0 is the program itself. Each enclosing block adds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Depth(usize);

impl Depth {
    /// Program level
    pub const TOP: Depth = Depth(0);

    /// Depth with the given level
    pub const fn new(level: usize) -> Self {
        Depth(level)
    }

    /// Numeric level
    pub const fn get(self) -> usize {
        self.0
    }

    /// True at program level
    pub const fn is_top(self) -> bool {
        self.0 == 0
    }

    /// Depth of the statements inside a block at this depth
    pub const fn nested(self) -> Self {
        Depth(self.0 + 1)
    }

    /// Depth that forces a statement list to print as a braced block
    pub fn at_least_block(self) -> Self {
        Depth(self.0.max(1))
    }

    /// Leading whitespace for a statement at this depth: two spaces per level
    /// below the first
    pub fn indent(self) -> String {
        " ".repeat(self.0.saturating_sub(1) * 2)
    }
}

/// Tree visitor producing one output per node
///
/// Implementations decide how to combine child outputs; [`Node::accept`]
/// routes each node to the matching method.
pub trait Visitor {
    /// Result of visiting one node
    type Output;

    // Lists
    /// Statement list; a program at depth 0, a block below it
    fn visit_source_elements(&mut self, statements: &[Node], depth: Depth) -> Self::Output;

    /// `var` declaration list
    fn visit_var_statement(&mut self, declarations: &[Node], depth: Depth) -> Self::Output;

    /// Array literal
    fn visit_array_literal(&mut self, elements: &[Node], depth: Depth) -> Self::Output;

    /// Object literal
    fn visit_object_literal(&mut self, properties: &[Node], depth: Depth) -> Self::Output;

    /// `key: value` entry of an object literal
    fn visit_property(&mut self, key: &Node, value: &Node, depth: Depth) -> Self::Output;

    /// Comma expression
    fn visit_comma(&mut self, expressions: &[Node], depth: Depth) -> Self::Output;

    /// Call expression
    fn visit_function_call(
        &mut self,
        callee: &Node,
        arguments: &[Node],
        depth: Depth,
    ) -> Self::Output;

    /// `new` expression
    fn visit_new(&mut self, callee: &Node, arguments: &[Node], depth: Depth) -> Self::Output;

    /// Function expression or declaration
    fn visit_function(
        &mut self,
        name: Option<&str>,
        params: &[Node],
        body: &Node,
        depth: Depth,
    ) -> Self::Output;

    // Leaves
    /// Identifier
    fn visit_name(&mut self, text: &str, depth: Depth) -> Self::Output;

    /// Number literal
    fn visit_number(&mut self, text: &str, depth: Depth) -> Self::Output;

    /// String literal, without quotes
    fn visit_string(&mut self, text: &str, depth: Depth) -> Self::Output;

    /// Regular expression literal
    fn visit_regexp(&mut self, text: &str, depth: Depth) -> Self::Output;

    /// `break`
    fn visit_break(&mut self, depth: Depth) -> Self::Output;

    /// `continue`
    fn visit_continue(&mut self, depth: Depth) -> Self::Output;

    /// `null`
    fn visit_null(&mut self, depth: Depth) -> Self::Output;

    /// `true`
    fn visit_true(&mut self, depth: Depth) -> Self::Output;

    /// `false`
    fn visit_false(&mut self, depth: Depth) -> Self::Output;

    /// `this`
    fn visit_this(&mut self, depth: Depth) -> Self::Output;

    // Access
    /// `object[index]`
    fn visit_bracket_access(&mut self, object: &Node, index: &Node, depth: Depth)
        -> Self::Output;

    /// Dotted access; `left` is the property, `right` the object
    fn visit_dot_accessor(&mut self, left: &Node, right: &Node, depth: Depth) -> Self::Output;

    // Control flow
    /// `do` loop
    fn visit_do_while(&mut self, body: &Node, condition: &Node, depth: Depth) -> Self::Output;

    /// `while` loop
    fn visit_while(&mut self, condition: &Node, body: &Node, depth: Depth) -> Self::Output;

    /// `for` loop; any header part may be missing
    fn visit_for(
        &mut self,
        init: Option<&Node>,
        test: Option<&Node>,
        update: Option<&Node>,
        body: &Node,
        depth: Depth,
    ) -> Self::Output;

    /// `for ... in` loop
    fn visit_for_in(
        &mut self,
        binding: &Node,
        object: &Node,
        body: &Node,
        depth: Depth,
    ) -> Self::Output;

    /// Conditional statement
    fn visit_if(
        &mut self,
        condition: &Node,
        then: &Node,
        otherwise: Option<&Node>,
        depth: Depth,
    ) -> Self::Output;

    /// `try` statement
    fn visit_try(
        &mut self,
        body: &Node,
        catch_param: Option<&Node>,
        catch_body: Option<&Node>,
        finally: Option<&Node>,
        depth: Depth,
    ) -> Self::Output;

    /// Conditional expression
    fn visit_ternary(
        &mut self,
        condition: &Node,
        consequent: &Node,
        alternate: &Node,
        depth: Depth,
    ) -> Self::Output;

    /// `return`, with or without a value
    fn visit_return(&mut self, value: Option<&Node>, depth: Depth) -> Self::Output;

    /// `throw`
    fn visit_throw(&mut self, value: &Node, depth: Depth) -> Self::Output;

    // Operators
    /// `delete` expression
    fn visit_delete(&mut self, operand: &Node, depth: Depth) -> Self::Output;

    /// Parenthesized expression
    fn visit_parenthesis(&mut self, inner: &Node, depth: Depth) -> Self::Output;

    /// Prefix operator
    fn visit_unary(&mut self, operator: UnaryOperator, operand: &Node, depth: Depth)
        -> Self::Output;

    /// Postfix update
    fn visit_postfix(
        &mut self,
        operator: PostfixOperator,
        operand: &Node,
        depth: Depth,
    ) -> Self::Output;

    /// Binary operator; either side may be missing
    fn visit_binary(
        &mut self,
        operator: BinaryOperator,
        left: Option<&Node>,
        right: Option<&Node>,
        depth: Depth,
    ) -> Self::Output;
}

impl Node {
    /// Dispatch this node to the matching visitor method
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, depth: Depth) -> V::Output {
        match self {
            Node::SourceElements { value } => visitor.visit_source_elements(value, depth),
            Node::VarStatement { value } => visitor.visit_var_statement(value, depth),
            Node::ArrayLiteral { value } => visitor.visit_array_literal(value, depth),
            Node::ObjectLiteral { value } => visitor.visit_object_literal(value, depth),
            Node::Property { left, right } => visitor.visit_property(left, right, depth),
            Node::Comma { value } => visitor.visit_comma(value, depth),
            Node::FunctionCall { callee, arguments } => {
                visitor.visit_function_call(callee, arguments, depth)
            }
            Node::New { callee, arguments } => visitor.visit_new(callee, arguments, depth),
            Node::Function {
                name,
                arguments,
                body,
            } => visitor.visit_function(name.as_deref(), arguments, body, depth),
            Node::Name { value } => visitor.visit_name(value, depth),
            Node::Number { value } => visitor.visit_number(value, depth),
            Node::String { value } => visitor.visit_string(value, depth),
            Node::Regexp { value } => visitor.visit_regexp(value, depth),
            Node::Break => visitor.visit_break(depth),
            Node::Continue => visitor.visit_continue(depth),
            Node::Null => visitor.visit_null(depth),
            Node::True => visitor.visit_true(depth),
            Node::False => visitor.visit_false(depth),
            Node::This => visitor.visit_this(depth),
            Node::BracketAccess { left, right } => {
                visitor.visit_bracket_access(left, right, depth)
            }
            Node::DotAccessor { left, right } => visitor.visit_dot_accessor(left, right, depth),
            Node::DoWhile { left, right } => visitor.visit_do_while(left, right, depth),
            Node::While { left, right } => visitor.visit_while(left, right, depth),
            Node::For {
                init,
                test,
                update,
                body,
            } => visitor.visit_for(
                init.as_deref(),
                test.as_deref(),
                update.as_deref(),
                body,
                depth,
            ),
            Node::ForIn { left, right, body } => visitor.visit_for_in(left, right, body, depth),
            Node::If {
                condition,
                then,
                otherwise,
            } => visitor.visit_if(condition, then, otherwise.as_deref(), depth),
            Node::Try {
                body,
                catch_param,
                catch_body,
                finally,
            } => visitor.visit_try(
                body,
                catch_param.as_deref(),
                catch_body.as_deref(),
                finally.as_deref(),
                depth,
            ),
            Node::Ternary {
                condition,
                left,
                right,
            } => visitor.visit_ternary(condition, left, right, depth),
            Node::Return { value } => visitor.visit_return(value.as_deref(), depth),
            Node::Throw { value } => visitor.visit_throw(value, depth),
            Node::Delete { value } => visitor.visit_delete(value, depth),
            Node::Parenthesis { value } => visitor.visit_parenthesis(value, depth),
            Node::Unary { operator, value } => visitor.visit_unary(*operator, value, depth),
            Node::Postfix { operator, value } => visitor.visit_postfix(*operator, value, depth),
            Node::Binary {
                operator,
                left,
                right,
            } => visitor.visit_binary(*operator, left.as_deref(), right.as_deref(), depth),
        }
    }
}
