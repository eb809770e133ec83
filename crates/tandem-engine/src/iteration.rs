//! Iteration protocol over bridged values
//!
//! A cursor snapshots a value's member names when it is created and hands
//! them out one at a time, either bare or paired with the member's value as it
//! is at the moment of the step. Exhaustion is reported as [`Step::Done`],
//! never as an error.

use tandem_sdk::{symbols, BridgeResult, BridgedValue, InternedSymbol, SymbolTable, Value};
use tracing::trace;

/// One step of an iteration
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// Another item is available
    More(T),
    /// The sequence has ended; repeated requests keep returning `Done`
    Done,
}

impl<T> Step<T> {
    /// The item, if any
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::More(item) => Some(item),
            Step::Done => None,
        }
    }

    /// True once the sequence has ended
    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done)
    }
}

/// Item produced by a cursor
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// Names-only mode
    Name(InternedSymbol),
    /// Name together with the member's current value
    Pair(InternedSymbol, Value),
}

impl Member {
    /// Name of the member
    pub fn name(&self) -> &InternedSymbol {
        match self {
            Member::Name(name) | Member::Pair(name, _) => name,
        }
    }
}

/// Stateful cursor over a value's member names
#[derive(Debug)]
pub struct IterationCursor {
    items: Vec<InternedSymbol>,
    index: usize,
    source: Option<BridgedValue>,
}

impl IterationCursor {
    /// Start iterating `value`, interning names in the process-wide table.
    ///
    /// Names come from the value's own-property listing when it has one,
    /// otherwise from its keys followed by its methods. A value that is not a
    /// host object yields nothing.
    pub fn begin(value: &Value, names_only: bool) -> Self {
        Self::begin_in(symbols(), value, names_only)
    }

    /// Like [`IterationCursor::begin`] with an explicit symbol table
    pub fn begin_in(table: &SymbolTable, value: &Value, names_only: bool) -> Self {
        let Some(object) = value.as_object() else {
            return Self::over_names(Vec::new());
        };

        let names = match object.own_properties() {
            Some(names) => names,
            None => {
                let mut names = object.keys().unwrap_or_default();
                names.extend(object.methods().unwrap_or_default());
                names
            }
        };
        let items: Vec<_> = names.iter().map(|name| table.intern(name)).collect();

        trace!(
            target: "tandem::iteration",
            class = object.class_name(),
            count = items.len(),
            names_only,
            "begin iteration"
        );

        Self {
            items,
            index: 0,
            source: if names_only { None } else { Some(object.clone()) },
        }
    }

    /// Cursor over a fixed list of names with no value attached
    pub fn over_names(items: Vec<InternedSymbol>) -> Self {
        Self {
            items,
            index: 0,
            source: None,
        }
    }

    /// True while items remain
    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    /// Number of names captured at creation
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing was captured
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the next item
    pub fn position(&self) -> usize {
        self.index
    }

    /// Produce the next item.
    ///
    /// In paired mode the value is looked up now, so writes made after the
    /// cursor was created are visible. Methods come back as bound functions.
    pub fn advance(&mut self) -> BridgeResult<Step<Member>> {
        let Some(name) = self.items.get(self.index).cloned() else {
            return Ok(Step::Done);
        };
        self.index += 1;

        match &self.source {
            Some(source) => {
                let value = source.member(name.as_str())?;
                Ok(Step::More(Member::Pair(name, value)))
            }
            None => Ok(Step::More(Member::Name(name))),
        }
    }
}

impl Iterator for IterationCursor {
    type Item = BridgeResult<Member>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(Step::into_option).transpose()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.index;
        (remaining, Some(remaining))
    }
}
