//! Embedded-runtime collaborator
//!
//! The engine never evaluates script itself. Whatever runtime hosts it
//! implements [`ScriptRuntime`] so the loader can execute files and the
//! bridge can find the default receiver for plain invocations.

use std::path::Path;

use tandem_sdk::{BridgeResult, Value};

/// Script runtime hosting the engine
pub trait ScriptRuntime {
    /// The runtime's global object, used as the receiver of bare calls
    fn global(&self) -> Value;

    /// Evaluate `source`, attributing it to `path` in diagnostics
    fn load(&self, path: &Path, source: &str) -> BridgeResult<Value>;
}
