//! Host functions callable from script code

use std::fmt;
use std::sync::Arc;

use crate::error::BridgeResult;
use crate::value::Value;

/// Signature of a host function body
pub type HostFn = dyn Fn(&[Value]) -> BridgeResult<Value> + Send + Sync;

/// A named, shareable host function.
///
/// Blocks passed alongside a bridged call and bound methods read off a
/// bridged value are both represented this way. Clones share the same body,
/// and equality is identity of that body.
#[derive(Clone)]
pub struct HostFunction {
    name: Arc<str>,
    body: Arc<HostFn>,
}

impl HostFunction {
    /// Wrap a closure as a host function
    pub fn new(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> BridgeResult<Value> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: Arc::from(name.into()),
            body: Arc::new(body),
        }
    }

    /// Function name (may be empty for anonymous blocks)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Call the function. Errors from the body are returned unchanged.
    #[inline]
    pub fn call(&self, args: &[Value]) -> BridgeResult<Value> {
        (self.body)(args)
    }

    /// True when both handles share the same body
    pub fn ptr_eq(&self, other: &HostFunction) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostFunction({:?})", &*self.name)
    }
}

impl fmt::Display for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}() {{ [native code] }}", self.name)
    }
}
