//! Syntax tree for script source
//!
//! Trees are produced by an external parser and only read here. Each node is
//! tagged with its kind and carries either raw leaf text or child nodes. The
//! `left`/`right`/`value` field names follow the parser's node layout, and
//! trees can be exchanged as JSON tagged by `kind`:
//!
//! ```json
//! { "kind": "Binary", "operator": "Add",
//!   "left":  { "kind": "Number", "value": "1" },
//!   "right": { "kind": "Number", "value": "2" } }
//! ```

mod operator;
mod visitor;

pub use operator::{BinaryOperator, PostfixOperator, UnaryOperator};
pub use visitor::{Depth, Visitor};

use serde::{Deserialize, Serialize};

/// A syntax tree node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Node {
    /// Ordered statement list: a program at the top, a block when nested
    SourceElements { value: Vec<Node> },
    /// `var a = 1, b`
    VarStatement { value: Vec<Node> },
    /// `[a, b]`
    ArrayLiteral { value: Vec<Node> },
    /// `{ a: 1 }`; entries are `Property` nodes
    ObjectLiteral { value: Vec<Node> },
    /// `key: value` inside an object literal
    Property { left: Box<Node>, right: Box<Node> },
    /// `a, b`
    Comma { value: Vec<Node> },
    /// `callee(arguments)`
    FunctionCall {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// `new callee(arguments)`
    New {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// `function name(arguments) body`
    Function {
        name: Option<String>,
        arguments: Vec<Node>,
        body: Box<Node>,
    },

    /// Identifier, raw text
    Name { value: String },
    /// Number literal, raw text
    Number { value: String },
    /// String literal contents, without quotes
    String { value: String },
    /// Regular expression literal, raw text including slashes and flags
    Regexp { value: String },

    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,
    /// `this`
    This,

    /// `left[right]`
    BracketAccess { left: Box<Node>, right: Box<Node> },
    /// Dotted access. The parser stores the property name in `left` and the
    /// object in `right`.
    DotAccessor { left: Box<Node>, right: Box<Node> },

    /// `do left while(right)`
    DoWhile { left: Box<Node>, right: Box<Node> },
    /// `while(left) right`
    While { left: Box<Node>, right: Box<Node> },
    /// `for(init; test; update) body`
    For {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    /// `for(left in right) body`
    ForIn {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },
    /// `if(condition) then else otherwise`
    If {
        condition: Box<Node>,
        then: Box<Node>,
        otherwise: Option<Box<Node>>,
    },
    /// `try body catch(param) handler finally finalizer`
    Try {
        body: Box<Node>,
        catch_param: Option<Box<Node>>,
        catch_body: Option<Box<Node>>,
        finally: Option<Box<Node>>,
    },
    /// `condition ? left : right`
    Ternary {
        condition: Box<Node>,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `return value`
    Return { value: Option<Box<Node>> },
    /// `throw value`
    Throw { value: Box<Node> },
    /// `delete value`
    Delete { value: Box<Node> },
    /// `(value)`
    Parenthesis { value: Box<Node> },

    /// Prefix operator applied to `value`
    Unary {
        operator: UnaryOperator,
        value: Box<Node>,
    },
    /// Postfix update of `value`
    Postfix {
        operator: PostfixOperator,
        value: Box<Node>,
    },
    /// `left op right`; a missing side prints as empty text
    Binary {
        operator: BinaryOperator,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
}

impl Node {
    /// Statement list
    pub fn source(value: Vec<Node>) -> Self {
        Node::SourceElements { value }
    }

    /// `var` statement
    pub fn var(value: Vec<Node>) -> Self {
        Node::VarStatement { value }
    }

    /// Identifier
    pub fn name(value: impl Into<String>) -> Self {
        Node::Name {
            value: value.into(),
        }
    }

    /// Number literal
    pub fn number(value: impl Into<String>) -> Self {
        Node::Number {
            value: value.into(),
        }
    }

    /// String literal
    pub fn string(value: impl Into<String>) -> Self {
        Node::String {
            value: value.into(),
        }
    }

    /// Binary operation with both sides present
    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary {
            operator,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Call expression
    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::FunctionCall {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// True for statement lists
    pub fn is_source_elements(&self) -> bool {
        matches!(self, Node::SourceElements { .. })
    }

    /// Name of the node kind, as used in the `kind` tag
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::SourceElements { .. } => "SourceElements",
            Node::VarStatement { .. } => "VarStatement",
            Node::ArrayLiteral { .. } => "ArrayLiteral",
            Node::ObjectLiteral { .. } => "ObjectLiteral",
            Node::Property { .. } => "Property",
            Node::Comma { .. } => "Comma",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::New { .. } => "New",
            Node::Function { .. } => "Function",
            Node::Name { .. } => "Name",
            Node::Number { .. } => "Number",
            Node::String { .. } => "String",
            Node::Regexp { .. } => "Regexp",
            Node::Break => "Break",
            Node::Continue => "Continue",
            Node::Null => "Null",
            Node::True => "True",
            Node::False => "False",
            Node::This => "This",
            Node::BracketAccess { .. } => "BracketAccess",
            Node::DotAccessor { .. } => "DotAccessor",
            Node::DoWhile { .. } => "DoWhile",
            Node::While { .. } => "While",
            Node::For { .. } => "For",
            Node::ForIn { .. } => "ForIn",
            Node::If { .. } => "If",
            Node::Try { .. } => "Try",
            Node::Ternary { .. } => "Ternary",
            Node::Return { .. } => "Return",
            Node::Throw { .. } => "Throw",
            Node::Delete { .. } => "Delete",
            Node::Parenthesis { .. } => "Parenthesis",
            Node::Unary { .. } => "Unary",
            Node::Postfix { .. } => "Postfix",
            Node::Binary { .. } => "Binary",
        }
    }
}
