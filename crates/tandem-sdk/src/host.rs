//! HostObject trait: the capability surface of a bridged value
//!
//! A host value crosses into script land as a [`BridgedValue`]: a shared
//! handle to something implementing [`HostObject`]. The bridge and the
//! iteration protocol only ever talk to values through this trait, so any
//! host type can be exposed by implementing it.

use std::ops::Deref;
use std::sync::Arc;

use crate::error::{BridgeError, BridgeResult};
use crate::function::HostFunction;
use crate::value::Value;

/// Shape of a resolvable member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Plain data property
    Data,
    /// Function-valued property (a method)
    Function,
}

/// The query operations a value supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Direct listing of own properties
    pub own_properties: bool,
    /// Listing of data keys
    pub keys: bool,
    /// Listing of methods
    pub methods: bool,
    /// Indexed access with a length
    pub indexed: bool,
    /// The value itself can be invoked
    pub callable: bool,
}

/// Operations the bridge may perform on a host value.
///
/// Only `class_name`, `member_kind`, `get`, `set` and `call_method` are
/// required. The listing and indexing queries return `None` when the value
/// does not support them, which is how the capability set is derived.
///
/// Writes go through `&self`: implementors use interior mutability so a write
/// is visible to every holder of the value.
pub trait HostObject: Send + Sync {
    /// Class name used in diagnostics
    fn class_name(&self) -> &str;

    /// Resolve `name` to a data or function property, if it exists
    fn member_kind(&self, name: &str) -> Option<MemberKind>;

    /// Read a data property
    fn get(&self, name: &str) -> BridgeResult<Value>;

    /// Write a data property, creating it if needed
    fn set(&self, name: &str, value: Value) -> BridgeResult<()>;

    /// Call a function property
    fn call_method(&self, name: &str, args: &[Value]) -> BridgeResult<Value>;

    /// Invoke the value itself with an explicit receiver
    fn call(&self, _receiver: &Value, _args: &[Value]) -> BridgeResult<Value> {
        Err(BridgeError::NotCallable(self.class_name().to_string()))
    }

    /// Whether `call` is supported
    fn is_callable(&self) -> bool {
        false
    }

    /// Direct "list own properties" capability
    fn own_properties(&self) -> Option<Vec<String>> {
        None
    }

    /// "keys" capability: data property names
    fn keys(&self) -> Option<Vec<String>> {
        None
    }

    /// "methods" capability: function property names
    fn methods(&self) -> Option<Vec<String>> {
        None
    }

    /// Length for indexed access
    fn length(&self) -> Option<usize> {
        None
    }

    /// Element at `index` for indexed access
    fn index(&self, _index: usize) -> BridgeResult<Value> {
        Err(BridgeError::TypeMismatch {
            expected: "indexable".to_string(),
            got: self.class_name().to_string(),
        })
    }

    /// String conversion of the value
    fn to_display_string(&self) -> String {
        format!("[object {}]", self.class_name())
    }
}

/// Shared handle to a host value visible to script code.
///
/// Clones refer to the same host value; equality is identity.
#[derive(Clone)]
pub struct BridgedValue(Arc<dyn HostObject>);

impl BridgedValue {
    /// Wrap a host object
    pub fn new<T: HostObject + 'static>(object: T) -> Self {
        Self(Arc::new(object))
    }

    /// Wrap an already shared host object
    pub fn from_arc(object: Arc<dyn HostObject>) -> Self {
        Self(object)
    }

    /// True when both handles refer to the same host value
    pub fn ptr_eq(&self, other: &BridgedValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The capability set of the underlying value
    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            own_properties: self.0.own_properties().is_some(),
            keys: self.0.keys().is_some(),
            methods: self.0.methods().is_some(),
            indexed: self.0.length().is_some(),
            callable: self.0.is_callable(),
        }
    }

    /// Script-side read of `name`.
    ///
    /// Data properties are read directly. Function properties come back as a
    /// host function bound to this value, so calling it later reaches the same
    /// receiver. Unknown names read as `undefined`.
    pub fn member(&self, name: &str) -> BridgeResult<Value> {
        match self.0.member_kind(name) {
            Some(MemberKind::Data) => self.0.get(name),
            Some(MemberKind::Function) => {
                let receiver = self.clone();
                let method = name.to_string();
                Ok(Value::Function(HostFunction::new(name, move |args| {
                    receiver.call_method(&method, args)
                })))
            }
            None => Ok(Value::Undefined),
        }
    }

    /// Length when indexed access is supported
    pub fn len(&self) -> Option<usize> {
        self.0.length()
    }
}

impl Deref for BridgedValue {
    type Target = dyn HostObject;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl std::fmt::Debug for BridgedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BridgedValue({})", self.0.class_name())
    }
}

impl PartialEq for BridgedValue {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
