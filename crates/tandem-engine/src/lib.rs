//! Tandem Engine
//!
//! Glue between a host program and an embedded script runtime:
//! - **Bridge**: classifies unresolved member accesses on host values as
//!   reads, writes or calls (`bridge` module)
//! - **Iteration**: cursors over a host value's members (`iteration` module)
//! - **Loader**: at-most-once module loading over a search path (`loader`
//!   and `config` modules)
//! - **AST / Emit**: syntax trees and their rendering back to source (`ast`
//!   and `emit` modules)
//!
//! # Example
//!
//! ```rust,ignore
//! use tandem_engine::{bridge, HostClass, Value};
//!
//! let class = HostClass::builder("Point")
//!     .field("x", Value::Int(1))
//!     .build();
//! let point = class.instantiate().into_bridged();
//!
//! bridge::dispatch(&point, "x=", vec![Value::Int(5)], None)?;
//! assert_eq!(bridge::dispatch(&point, "x", vec![], None)?, Value::Int(5));
//! ```

#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Syntax tree nodes, operators and the visitor trait
pub mod ast;

/// Reflective member dispatch on bridged values
pub mod bridge;

/// Loader configuration
pub mod config;

/// Source emitters
pub mod emit;

/// Member iteration cursors
pub mod iteration;

/// At-most-once module loading
pub mod loader;

/// Embedded runtime collaborator
pub mod runtime;

// ============================================================================
// Re-exports
// ============================================================================

pub use ast::{BinaryOperator, Depth, Node, PostfixOperator, UnaryOperator, Visitor};
pub use bridge::{classify, describe, dispatch, invoke, to_sequence, Access};
pub use config::{ConfigError, LoaderConfig};
pub use emit::{render, render_at, EcmaVisitor};
pub use iteration::{IterationCursor, Member, Step};
pub use loader::{LoadError, LoadedFileSet, ModuleLoader};
pub use runtime::ScriptRuntime;

pub use tandem_sdk::{
    internize, BridgeError, BridgeResult, BridgedValue, HostClass, HostFunction, HostObject,
    HostRecord, InternedSymbol, MemberKind, Value,
};
