//! Symbol table for identifier-like values
//!
//! Script code compares symbols by identity. The table guarantees that every
//! request for the same text hands back the same shared allocation, so two
//! symbols are equal exactly when they point at the same storage.
//!
//! The process-wide table lives for the whole run and never shrinks.

use parking_lot::Mutex;
use rustc_hash::FxHashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

/// A deduplicated symbol.
///
/// Cloning is cheap (one reference count bump). Equality and hashing use the
/// address of the shared text, not its contents.
#[derive(Clone)]
pub struct InternedSymbol(Arc<str>);

impl InternedSymbol {
    /// The symbol's text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when both symbols are the same instance
    #[inline]
    pub fn ptr_eq(&self, other: &InternedSymbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Debug form used by script-side inspection (`:name`)
    pub fn inspect(&self) -> String {
        format!(":{}", self.0)
    }
}

impl PartialEq for InternedSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for InternedSymbol {}

impl Hash for InternedSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0) as *const u8, state);
    }
}

impl fmt::Display for InternedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for InternedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", &*self.0)
    }
}

impl AsRef<str> for InternedSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Insert-or-fetch table of symbols.
///
/// The lookup and the insert happen under one lock, so concurrent callers can
/// never create two instances for the same text.
pub struct SymbolTable {
    entries: Mutex<FxHashSet<Arc<str>>>,
}

impl SymbolTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashSet::default()),
        }
    }

    /// Intern `text`, returning the one instance for it.
    pub fn intern(&self, text: &str) -> InternedSymbol {
        let mut entries = self.entries.lock();
        if let Some(existing) = entries.get(text) {
            return InternedSymbol(Arc::clone(existing));
        }

        let shared: Arc<str> = Arc::from(text);
        entries.insert(Arc::clone(&shared));
        InternedSymbol(shared)
    }

    /// Check whether `text` has been interned.
    pub fn contains(&self, text: &str) -> bool {
        self.entries.lock().contains(text)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

static SYMBOLS: LazyLock<SymbolTable> = LazyLock::new(SymbolTable::new);

/// The process-wide symbol table
pub fn symbols() -> &'static SymbolTable {
    &SYMBOLS
}

/// Intern `text` in the process-wide table.
pub fn internize(text: &str) -> InternedSymbol {
    SYMBOLS.intern(text)
}
