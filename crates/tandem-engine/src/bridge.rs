//! Reflective value bridge
//!
//! When script code touches a member the runtime cannot resolve on a bridged
//! value, it asks the bridge. [`classify`] decides from the member's shape, the
//! argument count and the assignment suffix alone whether the access is a
//! read, a write or a call; [`dispatch`] then performs it on the host object.

use tandem_sdk::{BridgeError, BridgeResult, BridgedValue, HostFunction, MemberKind, Value};
use tracing::{debug, trace};

use crate::iteration::{IterationCursor, Member, Step};
use crate::runtime::ScriptRuntime;

/// Suffix marking a property write (`foo=`)
pub const ASSIGNMENT_SUFFIX: char = '=';

/// Outcome of classifying a member access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    /// Return the current value of the data property
    Read(&'a str),
    /// Set the property (suffix already stripped) to the single argument
    Write(&'a str),
    /// Call the function property with the arguments
    Call(&'a str),
    /// Not a member of the value; the runtime's missing-member path applies
    Unresolved,
}

/// Classify an access to `name` with `argc` arguments.
///
/// `kind` is what the value reports for `name` as written, suffix included.
/// Order matters: an unresolvable name without the suffix falls through
/// first, then a suffixed name with exactly one argument is a write (even when
/// the name also resolves to a method), then anything that is not a method
/// and has no arguments is a read. Everything else is a call.
pub fn classify(name: &str, kind: Option<MemberKind>, argc: usize) -> Access<'_> {
    let suffixed = name.ends_with(ASSIGNMENT_SUFFIX);

    if kind.is_none() && !suffixed {
        return Access::Unresolved;
    }

    if suffixed && argc == 1 {
        return Access::Write(&name[..name.len() - ASSIGNMENT_SUFFIX.len_utf8()]);
    }

    match kind {
        Some(MemberKind::Function) => Access::Call(name),
        // Data property, or a suffixed name nothing resolves
        _ if argc == 0 => Access::Read(name),
        _ => Access::Call(name),
    }
}

/// Perform an intercepted member access on `value`.
///
/// A trailing `block` is appended to the arguments before classifying, so it
/// counts toward the arity. Errors raised by the host object pass through
/// untouched.
pub fn dispatch(
    value: &BridgedValue,
    name: &str,
    mut args: Vec<Value>,
    block: Option<HostFunction>,
) -> BridgeResult<Value> {
    if let Some(block) = block {
        args.push(Value::Function(block));
    }

    let access = classify(name, value.member_kind(name), args.len());
    trace!(
        target: "tandem::bridge",
        class = value.class_name(),
        member = name,
        argc = args.len(),
        ?access,
        "classified member access"
    );

    match access {
        Access::Unresolved => {
            debug!(
                target: "tandem::bridge",
                class = value.class_name(),
                member = name,
                "falling through to missing member"
            );
            Err(BridgeError::member_not_found(value.class_name(), name))
        }
        Access::Read(property) => value.get(property),
        Access::Write(property) => {
            let assigned = args.pop().unwrap_or_default();
            value.set(property, assigned.clone())?;
            Ok(assigned)
        }
        Access::Call(method) => value.call_method(method, &args),
    }
}

/// Coerce a value into a list of values.
///
/// Arrays are copied, array-likes are read element by element, and objects
/// that can list their members become `[name, value]` pairs in iteration
/// order. `null` and `undefined` give an empty list.
pub fn to_sequence(value: &Value) -> BridgeResult<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items.clone()),
        Value::Null | Value::Undefined => Ok(Vec::new()),
        Value::Object(object) => {
            if let Some(length) = object.len() {
                return (0..length).map(|i| object.index(i)).collect();
            }

            let caps = object.capabilities();
            if !(caps.own_properties || caps.keys || caps.methods) {
                return Err(BridgeError::TypeMismatch {
                    expected: "iterable".to_string(),
                    got: object.class_name().to_string(),
                });
            }

            let mut cursor = IterationCursor::begin(value, false);
            let mut pairs = Vec::with_capacity(cursor.len());
            while let Step::More(member) = cursor.advance()? {
                if let Member::Pair(name, value) = member {
                    pairs.push(Value::Array(vec![Value::String(name.to_string()), value]));
                }
            }
            Ok(pairs)
        }
        other => Err(BridgeError::TypeMismatch {
            expected: "iterable".to_string(),
            got: other.type_name().to_string(),
        }),
    }
}

/// Call `value` with the runtime's global object as the receiver
pub fn invoke(value: &Value, runtime: &dyn ScriptRuntime, args: &[Value]) -> BridgeResult<Value> {
    match value {
        Value::Function(function) => function.call(args),
        Value::Object(object) if object.is_callable() => object.call(&runtime.global(), args),
        other => Err(BridgeError::NotCallable(other.type_name().to_string())),
    }
}

/// Debug text of a value; identical to its string conversion
pub fn describe(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_read() {
        assert_eq!(classify("foo", Some(MemberKind::Data), 0), Access::Read("foo"));
    }

    #[test]
    fn test_classify_write_strips_suffix() {
        assert_eq!(classify("foo=", None, 1), Access::Write("foo"));
        assert_eq!(classify("foo=", Some(MemberKind::Function), 1), Access::Write("foo"));
    }

    #[test]
    fn test_classify_call() {
        assert_eq!(classify("bar", Some(MemberKind::Function), 2), Access::Call("bar"));
        assert_eq!(classify("bar", Some(MemberKind::Function), 0), Access::Call("bar"));
        // Data property with arguments is still a call
        assert_eq!(classify("foo", Some(MemberKind::Data), 1), Access::Call("foo"));
    }

    #[test]
    fn test_classify_unresolved() {
        assert_eq!(classify("baz", None, 0), Access::Unresolved);
        assert_eq!(classify("baz", None, 3), Access::Unresolved);
    }

    #[test]
    fn test_classify_suffixed_name_is_never_unresolved() {
        assert_eq!(classify("baz=", None, 0), Access::Read("baz="));
        assert_eq!(classify("baz=", None, 2), Access::Call("baz="));
    }

    #[test]
    fn test_describe_matches_display() {
        let value = Value::Array(vec![Value::Int(1), Value::Null, Value::String("a".into())]);
        assert_eq!(describe(&value), value.to_string());
        assert_eq!(describe(&Value::Float(3.0)), "3");
    }
}
