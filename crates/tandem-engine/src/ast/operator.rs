//! Operator tables for the syntax tree

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators, including assignment forms.
///
/// `Assign` is the statement-level `=` used inside `var` declarations and
/// `AssignExpr` is the expression form; both print as `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Assign,
    AssignExpr,
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
    InstanceOf,
    In,
    Add,
    AddAssign,
    Subtract,
    SubtractAssign,
    Multiply,
    MultiplyAssign,
    Divide,
    DivideAssign,
    Modulo,
    ModuloAssign,
    LeftShift,
    LeftShiftAssign,
    RightShift,
    RightShiftAssign,
    UnsignedRightShift,
    UnsignedRightShiftAssign,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
}

impl BinaryOperator {
    /// Every binary operator, in table order
    pub const ALL: [BinaryOperator; 36] = [
        BinaryOperator::Assign,
        BinaryOperator::AssignExpr,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::StrictEqual,
        BinaryOperator::StrictNotEqual,
        BinaryOperator::LessThan,
        BinaryOperator::LessThanOrEqual,
        BinaryOperator::GreaterThan,
        BinaryOperator::GreaterThanOrEqual,
        BinaryOperator::And,
        BinaryOperator::Or,
        BinaryOperator::InstanceOf,
        BinaryOperator::In,
        BinaryOperator::Add,
        BinaryOperator::AddAssign,
        BinaryOperator::Subtract,
        BinaryOperator::SubtractAssign,
        BinaryOperator::Multiply,
        BinaryOperator::MultiplyAssign,
        BinaryOperator::Divide,
        BinaryOperator::DivideAssign,
        BinaryOperator::Modulo,
        BinaryOperator::ModuloAssign,
        BinaryOperator::LeftShift,
        BinaryOperator::LeftShiftAssign,
        BinaryOperator::RightShift,
        BinaryOperator::RightShiftAssign,
        BinaryOperator::UnsignedRightShift,
        BinaryOperator::UnsignedRightShiftAssign,
        BinaryOperator::BitAnd,
        BinaryOperator::BitAndAssign,
        BinaryOperator::BitOr,
        BinaryOperator::BitOrAssign,
        BinaryOperator::BitXor,
        BinaryOperator::BitXorAssign,
    ];

    /// Source text of the operator
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::AssignExpr => "=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
            BinaryOperator::Add => "+",
            BinaryOperator::AddAssign => "+=",
            BinaryOperator::Subtract => "-",
            BinaryOperator::SubtractAssign => "-=",
            BinaryOperator::Multiply => "*",
            BinaryOperator::MultiplyAssign => "*=",
            BinaryOperator::Divide => "/",
            BinaryOperator::DivideAssign => "/=",
            BinaryOperator::Modulo => "%",
            BinaryOperator::ModuloAssign => "%=",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::LeftShiftAssign => "<<=",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::RightShiftAssign => ">>=",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::UnsignedRightShiftAssign => ">>>=",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::BitAndAssign => "&=",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitOrAssign => "|=",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitXorAssign => "^=",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Typeof,
    Void,
    Negate,
    Plus,
    Not,
    BitwiseNot,
    Increment,
    Decrement,
}

impl UnaryOperator {
    /// Source text, including the trailing space for keyword operators
    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Typeof => "typeof ",
            UnaryOperator::Void => "void ",
            UnaryOperator::Negate => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Not => "!",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::Increment => "++",
            UnaryOperator::Decrement => "--",
        }
    }
}

/// Postfix update operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOperator {
    Increment,
    Decrement,
}

impl PostfixOperator {
    /// Source text of the operator
    pub const fn as_str(self) -> &'static str {
        match self {
            PostfixOperator::Increment => "++",
            PostfixOperator::Decrement => "--",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_exhaustive_and_unique() {
        let unique: HashSet<_> = BinaryOperator::ALL.iter().collect();
        assert_eq!(unique.len(), BinaryOperator::ALL.len());
    }

    #[test]
    fn test_assignment_forms_share_text() {
        assert_eq!(BinaryOperator::Assign.as_str(), "=");
        assert_eq!(BinaryOperator::AssignExpr.as_str(), "=");
        assert_eq!(BinaryOperator::UnsignedRightShiftAssign.to_string(), ">>>=");
    }
}
