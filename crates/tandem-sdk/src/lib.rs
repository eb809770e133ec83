//! Tandem SDK - host object model shared with script code
//!
//! Host programs expose their values to the embedded script runtime by
//! implementing [`HostObject`] (or by declaring a [`HostClass`]) and wrapping
//! the result in a [`BridgedValue`]. The engine crate dispatches script
//! accesses against this surface without knowing the concrete host type.
//!
//! # Example
//!
//! ```ignore
//! use tandem_sdk::{HostClass, Value};
//!
//! let class = HostClass::builder("Config")
//!     .field("name", Value::String("demo".into()))
//!     .build();
//! let config = class.instantiate().into_bridged();
//! assert_eq!(config.get("name")?, Value::String("demo".into()));
//! ```

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod function;
pub mod host;
pub mod record;
pub mod symbol;
pub mod value;

pub use convert::{FromValue, IntoValue};
pub use error::{BridgeError, BridgeResult};
pub use function::{HostFn, HostFunction};
pub use host::{BridgedValue, Capabilities, HostObject, MemberKind};
pub use record::{CallFn, HostClass, HostClassBuilder, HostRecord, MethodFn};
pub use symbol::{internize, symbols, InternedSymbol, SymbolTable};
pub use value::Value;
