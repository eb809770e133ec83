//! Schema-driven host objects
//!
//! [`HostClass`] describes a class once (data fields with initial values, and
//! methods), and [`HostRecord`] is an instance of it that implements
//! [`HostObject`]. Field and method lookups are hash lookups by name.
//!
//! # Example
//!
//! ```ignore
//! use tandem_sdk::{HostClass, Value};
//!
//! let point = HostClass::builder("Point")
//!     .field("x", Value::Int(0))
//!     .field("y", Value::Int(0))
//!     .method("norm1", |this, _args| {
//!         let x = this.field("x").and_then(|v| v.as_i32()).unwrap_or(0);
//!         let y = this.field("y").and_then(|v| v.as_i32()).unwrap_or(0);
//!         Ok(Value::Int(x.abs() + y.abs()))
//!     })
//!     .build();
//!
//! let p = point.instantiate().into_bridged();
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::{BridgeError, BridgeResult};
use crate::host::{BridgedValue, HostObject, MemberKind};
use crate::value::Value;

/// Method body: receives the instance and the call arguments
pub type MethodFn = Arc<dyn Fn(&HostRecord, &[Value]) -> BridgeResult<Value> + Send + Sync>;

/// Call handler for callable classes: instance, receiver, arguments
pub type CallFn = Arc<dyn Fn(&HostRecord, &Value, &[Value]) -> BridgeResult<Value> + Send + Sync>;

/// Builder for [`HostClass`].
pub struct HostClassBuilder {
    name: String,
    field_lookup: FxHashMap<String, usize>,
    field_names: Vec<String>,
    defaults: Vec<Value>,
    method_lookup: FxHashMap<String, usize>,
    method_names: Vec<String>,
    methods: Vec<MethodFn>,
    call: Option<CallFn>,
}

impl HostClassBuilder {
    /// Add a data field with its initial value. Redeclaring a field replaces
    /// the initial value and keeps the first position.
    pub fn field(mut self, name: &str, initial: Value) -> Self {
        match self.field_lookup.get(name) {
            Some(&index) => self.defaults[index] = initial,
            None => {
                self.field_lookup.insert(name.to_string(), self.field_names.len());
                self.field_names.push(name.to_string());
                self.defaults.push(initial);
            }
        }
        self
    }

    /// Add a method
    pub fn method(
        mut self,
        name: &str,
        body: impl Fn(&HostRecord, &[Value]) -> BridgeResult<Value> + Send + Sync + 'static,
    ) -> Self {
        let body: MethodFn = Arc::new(body);
        match self.method_lookup.get(name) {
            Some(&index) => self.methods[index] = body,
            None => {
                self.method_lookup.insert(name.to_string(), self.method_names.len());
                self.method_names.push(name.to_string());
                self.methods.push(body);
            }
        }
        self
    }

    /// Make instances callable
    pub fn callable(
        mut self,
        handler: impl Fn(&HostRecord, &Value, &[Value]) -> BridgeResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.call = Some(Arc::new(handler));
        self
    }

    /// Build the class
    pub fn build(self) -> Arc<HostClass> {
        Arc::new(HostClass {
            name: self.name,
            field_lookup: self.field_lookup,
            field_names: self.field_names,
            defaults: self.defaults,
            method_lookup: self.method_lookup,
            method_names: self.method_names,
            methods: self.methods,
            call: self.call,
        })
    }
}

/// Shared description of a host class.
pub struct HostClass {
    name: String,
    field_lookup: FxHashMap<String, usize>,
    field_names: Vec<String>,
    defaults: Vec<Value>,
    method_lookup: FxHashMap<String, usize>,
    method_names: Vec<String>,
    methods: Vec<MethodFn>,
    call: Option<CallFn>,
}

impl HostClass {
    /// Create a builder for a class named `name`
    pub fn builder(name: &str) -> HostClassBuilder {
        HostClassBuilder {
            name: name.to_string(),
            field_lookup: FxHashMap::default(),
            field_names: Vec::new(),
            defaults: Vec::new(),
            method_lookup: FxHashMap::default(),
            method_names: Vec::new(),
            methods: Vec::new(),
            call: None,
        }
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up field index by name
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.field_lookup.get(name).copied()
    }

    /// Look up method index by name
    pub fn method_index(&self, name: &str) -> Option<usize> {
        self.method_lookup.get(name).copied()
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// Method names in declaration order
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    /// Create an instance with every field at its initial value
    pub fn instantiate(self: &Arc<Self>) -> HostRecord {
        HostRecord {
            class: Arc::clone(self),
            fields: RwLock::new(self.defaults.clone()),
            expando: RwLock::new(Vec::new()),
        }
    }
}

/// Instance of a [`HostClass`].
///
/// Properties written that the class does not declare are kept as expando
/// properties, in insertion order, after the declared fields. An expando
/// property shadows a method of the same name.
pub struct HostRecord {
    class: Arc<HostClass>,
    fields: RwLock<Vec<Value>>,
    expando: RwLock<Vec<(String, Value)>>,
}

impl HostRecord {
    /// The instance's class
    pub fn class(&self) -> &Arc<HostClass> {
        &self.class
    }

    /// Read a declared or expando property
    pub fn field(&self, name: &str) -> Option<Value> {
        if let Some(index) = self.class.field_index(name) {
            return self.fields.read().get(index).cloned();
        }
        self.expando
            .read()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Write a declared or expando property
    pub fn set_field(&self, name: &str, value: Value) {
        if let Some(index) = self.class.field_index(name) {
            self.fields.write()[index] = value;
            return;
        }
        let mut expando = self.expando.write();
        match expando.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => expando.push((name.to_string(), value)),
        }
    }

    fn has_expando(&self, name: &str) -> bool {
        self.expando.read().iter().any(|(key, _)| key == name)
    }

    /// Hand the instance to script code
    pub fn into_bridged(self) -> BridgedValue {
        BridgedValue::new(self)
    }
}

impl HostObject for HostRecord {
    fn class_name(&self) -> &str {
        self.class.name()
    }

    fn member_kind(&self, name: &str) -> Option<MemberKind> {
        if self.class.field_index(name).is_some() || self.has_expando(name) {
            Some(MemberKind::Data)
        } else if self.class.method_index(name).is_some() {
            Some(MemberKind::Function)
        } else {
            None
        }
    }

    fn get(&self, name: &str) -> BridgeResult<Value> {
        Ok(self.field(name).unwrap_or(Value::Undefined))
    }

    fn set(&self, name: &str, value: Value) -> BridgeResult<()> {
        self.set_field(name, value);
        Ok(())
    }

    fn call_method(&self, name: &str, args: &[Value]) -> BridgeResult<Value> {
        if let Some(Value::Function(func)) = self.field(name) {
            return func.call(args);
        }
        let index = self
            .class
            .method_index(name)
            .ok_or_else(|| BridgeError::member_not_found(self.class.name(), name))?;
        let body = Arc::clone(&self.class.methods[index]);
        body(self, args)
    }

    fn call(&self, receiver: &Value, args: &[Value]) -> BridgeResult<Value> {
        match &self.class.call {
            Some(handler) => handler(self, receiver, args),
            None => Err(BridgeError::NotCallable(self.class.name().to_string())),
        }
    }

    fn is_callable(&self) -> bool {
        self.class.call.is_some()
    }

    fn keys(&self) -> Option<Vec<String>> {
        let mut keys = self.class.field_names().to_vec();
        keys.extend(self.expando.read().iter().map(|(key, _)| key.clone()));
        Some(keys)
    }

    fn methods(&self) -> Option<Vec<String>> {
        Some(self.class.method_names().to_vec())
    }

    fn to_display_string(&self) -> String {
        if self.class.method_index("toString").is_some() {
            if let Ok(text) = self.call_method("toString", &[]) {
                return text.to_string();
            }
        }
        format!("[object {}]", self.class.name())
    }
}
