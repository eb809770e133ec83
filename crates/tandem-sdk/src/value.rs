//! Script-visible values
//!
//! Primitives are stored inline. Functions and host objects are shared
//! handles, and compare by identity rather than by contents.

use std::fmt;

use crate::function::HostFunction;
use crate::host::BridgedValue;
use crate::symbol::InternedSymbol;

/// A value as seen by script code.
#[derive(Clone, Default)]
pub enum Value {
    /// `undefined`
    #[default]
    Undefined,
    /// `null`
    Null,
    /// Boolean
    Bool(bool),
    /// 32-bit integer
    Int(i32),
    /// Double-precision float
    Float(f64),
    /// String
    String(String),
    /// Interned symbol
    Symbol(InternedSymbol),
    /// Array of values
    Array(Vec<Value>),
    /// Host function
    Function(HostFunction),
    /// Host object surfaced through the bridge
    Object(BridgedValue),
}

impl Value {
    /// Check if this is `undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Check if this is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get as boolean if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i32 if this is an integer
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is numeric (integers widen)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string slice if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the symbol if this is a symbol
    pub fn as_symbol(&self) -> Option<&InternedSymbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Get the elements if this is an array
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the function if this is a host function
    pub fn as_function(&self) -> Option<&HostFunction> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Get the bridged object if this is one
    pub fn as_object(&self) -> Option<&BridgedValue> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Script-level type name, as reported by `typeof`
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "object",
            Value::Function(_) => "function",
            Value::Object(obj) if obj.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("NaN")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
    } else if x.fract() == 0.0 && x.abs() < 1e21 {
        write!(f, "{}", x as i64)
    } else {
        write!(f, "{}", x)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => format_number(f, *x),
            Value::String(s) => f.write_str(s),
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // null and undefined elements print as empty
                    if !matches!(item, Value::Null | Value::Undefined) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Function(func) => write!(f, "{}", func),
            Value::Object(obj) => f.write_str(&obj.to_display_string()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Value::Undefined"),
            Value::Null => write!(f, "Value::Null"),
            Value::Bool(b) => write!(f, "Value::Bool({})", b),
            Value::Int(i) => write!(f, "Value::Int({})", i),
            Value::Float(x) => write!(f, "Value::Float({})", x),
            Value::String(s) => write!(f, "Value::String({:?})", s),
            Value::Symbol(sym) => write!(f, "Value::Symbol({})", sym.inspect()),
            Value::Array(items) => f.debug_tuple("Value::Array").field(items).finish(),
            Value::Function(func) => write!(f, "Value::Function({:?})", func.name()),
            Value::Object(obj) => write!(f, "Value::Object({})", obj.class_name()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolTable;

    #[test]
    fn test_display_primitives() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Float(3.0).to_string(), "3");
        assert_eq!(Value::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::String("hi".into()).to_string(), "hi");
    }

    #[test]
    fn test_display_array_joins_with_commas() {
        let v = Value::Array(vec![Value::Int(1), Value::Null, Value::String("x".into())]);
        assert_eq!(v.to_string(), "1,,x");
    }

    #[test]
    fn test_symbol_equality_is_identity() {
        let table = SymbolTable::new();
        let a = Value::Symbol(table.intern("k"));
        let b = Value::Symbol(table.intern("k"));
        let other = Value::Symbol(SymbolTable::new().intern("k"));

        assert_eq!(a, b);
        assert_ne!(a, other);
        assert_eq!(a.to_string(), "k");
    }

    #[test]
    fn test_function_equality_is_identity() {
        let f = HostFunction::new("f", |_| Ok(Value::Null));
        let g = HostFunction::new("f", |_| Ok(Value::Null));

        assert_eq!(Value::Function(f.clone()), Value::Function(f));
        assert_ne!(
            Value::Function(HostFunction::new("h", |_| Ok(Value::Null))),
            Value::Function(g)
        );
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Value::Int(4).as_f64(), Some(4.0));
        assert_eq!(Value::Float(4.5).as_i32(), None);
        assert_eq!(Value::Int(4), Value::Float(4.0));
        assert_eq!(Value::Int(4).type_name(), "number");
    }
}
