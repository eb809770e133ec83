//! Module loading
//!
//! `require` canonicalizes a requested file name, searches the caller's
//! directory and then the configured load path, and executes the first match
//! through the script runtime. Loads are keyed on the canonical path of the
//! file found, so each file runs at most once per [`LoadedFileSet`] while
//! same-named files in different directories stay distinct.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, LazyLock};
use tandem_sdk::{BridgeError, Value};
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::LoaderConfig;
use crate::runtime::ScriptRuntime;

/// Errors that can occur while requiring or loading a module
#[derive(Debug, Error)]
pub enum LoadError {
    /// No search directory holds the file
    #[error("Cannot find module '{name}'. Searched: {}", display_paths(.searched))]
    ModuleNotFound {
        /// Requested name
        name: String,
        /// Candidate paths that were checked
        searched: Vec<PathBuf>,
    },

    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The runtime failed while executing the file
    #[error("Error executing {}: {source}", .path.display())]
    Execution {
        /// File being executed
        path: PathBuf,
        /// Error raised by the runtime
        #[source]
        source: BridgeError,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "(no directories)".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Loaded file tracking
// ============================================================================

static LOADED: LazyLock<Arc<LoadedFileSet>> = LazyLock::new(|| Arc::new(LoadedFileSet::new()));

/// Set of canonical file paths that have been loaded.
///
/// Never shrinks. `mark` is the only mutation and is atomic, so two threads
/// racing to load the same file cannot both win.
#[derive(Debug, Default)]
pub struct LoadedFileSet {
    loaded: Mutex<FxHashSet<PathBuf>>,
}

impl LoadedFileSet {
    /// Empty set, independent of the process-wide one
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide set
    pub fn global() -> Arc<LoadedFileSet> {
        Arc::clone(&LOADED)
    }

    /// Whether `key` has been loaded
    pub fn contains(&self, key: &Path) -> bool {
        self.loaded.lock().contains(key)
    }

    /// Record `key` as loaded. Returns false if it already was.
    pub fn mark(&self, key: PathBuf) -> bool {
        self.loaded.lock().insert(key)
    }

    /// Number of loaded identities
    pub fn len(&self) -> usize {
        self.loaded.lock().len()
    }

    /// True when nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.loaded.lock().is_empty()
    }
}

// ============================================================================
// Loader
// ============================================================================

/// Finds and runs script files
#[derive(Debug, Clone)]
pub struct ModuleLoader {
    config: LoaderConfig,
    loaded: Arc<LoadedFileSet>,
}

impl ModuleLoader {
    /// Loader sharing the process-wide loaded set
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_loaded_set(config, LoadedFileSet::global())
    }

    /// Loader tracking loads in `loaded`
    pub fn with_loaded_set(config: LoaderConfig, loaded: Arc<LoadedFileSet>) -> Self {
        Self { config, loaded }
    }

    /// Active configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Set of loaded files
    pub fn loaded(&self) -> &Arc<LoadedFileSet> {
        &self.loaded
    }

    /// Canonical name of a requested file, relative to a search directory.
    ///
    /// Any extension is replaced with the configured one and the directory
    /// part of the request is kept, minus `.` components. Returns `None` when
    /// the request names no file.
    pub fn identity(&self, file: &Path) -> Option<PathBuf> {
        let stem = file.file_stem()?;

        let mut identity: PathBuf = file
            .parent()
            .map(|dir| {
                dir.components()
                    .filter(|c| !matches!(c, Component::CurDir))
                    .collect::<PathBuf>()
            })
            .unwrap_or_default();

        let mut name = stem.to_os_string();
        name.push(".");
        name.push(&self.config.extension);
        identity.push(name);
        Some(identity)
    }

    /// Locate `identity`: the caller's directory first, then the load path
    /// in order.
    pub fn resolve(&self, identity: &Path, caller: Option<&Path>) -> Result<PathBuf, LoadError> {
        let caller_dir = caller.and_then(Path::parent);
        let mut searched = Vec::new();

        for dir in caller_dir.into_iter().chain(self.config.load_path.iter().map(PathBuf::as_path)) {
            let candidate = dir.join(identity);
            if candidate.is_file() {
                return Ok(candidate);
            }
            trace!(target: "tandem::loader", path = %candidate.display(), "not found");
            searched.push(candidate);
        }

        Err(LoadError::ModuleNotFound {
            name: identity.display().to_string(),
            searched,
        })
    }

    /// Key under which a found file is tracked in the loaded set.
    ///
    /// The canonical path when it can be determined, so that `lib/a.js` reached
    /// through different search directories or `./` prefixes is one file.
    pub fn loaded_key(path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }

    /// Read `path` and execute it in `runtime`, without any loaded-set check
    pub fn load(&self, runtime: &dyn ScriptRuntime, path: &Path) -> Result<Value, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(target: "tandem::loader", path = %path.display(), "loading module");
        runtime
            .load(path, &source)
            .map_err(|source| LoadError::Execution {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Load `file` unless the file it resolves to has already been loaded.
    ///
    /// Returns `Ok(true)` when the file ran now and `Ok(false)` when it had
    /// already been loaded. The file is marked before it runs, so a file that
    /// requires itself does not recurse, and a file that fails stays marked.
    pub fn require(
        &self,
        runtime: &dyn ScriptRuntime,
        file: impl AsRef<Path>,
        caller: Option<&Path>,
    ) -> Result<bool, LoadError> {
        let file = file.as_ref();
        let identity = self
            .identity(file)
            .ok_or_else(|| LoadError::ModuleNotFound {
                name: file.display().to_string(),
                searched: Vec::new(),
            })?;

        let path = self.resolve(&identity, caller)?;
        if !self.loaded.mark(Self::loaded_key(&path)) {
            debug!(target: "tandem::loader", path = %path.display(), "already loaded");
            return Ok(false);
        }

        self.load(runtime, &path)?;
        Ok(true)
    }
}
