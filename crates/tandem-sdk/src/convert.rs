//! Traits for converting between script values and Rust types.
//!
//! Implement `IntoValue` to hand a Rust value to script code and `FromValue`
//! to read one back. Extraction of the wrong shape fails with
//! [`BridgeError::TypeMismatch`].

use crate::error::{BridgeError, BridgeResult};
use crate::function::HostFunction;
use crate::host::BridgedValue;
use crate::symbol::InternedSymbol;
use crate::value::Value;

/// Convert a Rust value into a script value.
pub trait IntoValue {
    /// Perform the conversion
    fn into_value(self) -> Value;
}

/// Extract a Rust value from a script value.
pub trait FromValue: Sized {
    /// Perform the conversion
    fn from_value(value: &Value) -> BridgeResult<Self>;
}

fn mismatch(expected: &str, value: &Value) -> BridgeError {
    BridgeError::TypeMismatch {
        expected: expected.to_string(),
        got: value.type_name().to_string(),
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Undefined
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoValue for InternedSymbol {
    fn into_value(self) -> Value {
        Value::Symbol(self)
    }
}

impl IntoValue for HostFunction {
    fn into_value(self) -> Value {
        Value::Function(self)
    }
}

impl IntoValue for BridgedValue {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::Array(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(inner) => inner.into_value(),
            None => Value::Null,
        }
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_bool().ok_or_else(|| mismatch("boolean", value))
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_i32().ok_or_else(|| mismatch("integer", value))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", value))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl FromValue for InternedSymbol {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_symbol().cloned().ok_or_else(|| mismatch("symbol", value))
    }
}

impl FromValue for HostFunction {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_function().cloned().ok_or_else(|| mismatch("function", value))
    }
}

impl FromValue for BridgedValue {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value.as_object().cloned().ok_or_else(|| mismatch("object", value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        value
            .as_array()
            .ok_or_else(|| mismatch("array", value))?
            .iter()
            .map(T::from_value)
            .collect()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> BridgeResult<Self> {
        match value {
            Value::Null | Value::Undefined => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
