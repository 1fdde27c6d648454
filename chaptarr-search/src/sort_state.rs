//! Per-source persisted sort preference.
//!
//! The dashboard remembers the last explicit sort a user picked for each
//! source, independent of which book is open, until they return to the
//! default ranking. Storage is delegated to a caller-provided key-value
//! store; the in-memory implementation is the process-local default.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::types::SortState;

/// Keyed store for sort preferences, scoped by source name.
pub trait SortStateStore: Send + Sync + std::fmt::Debug {
    /// The stored sort for a source, if the user ever picked one.
    fn load(&self, source: &str) -> Option<SortState>;

    /// Stores a sort for a source, overwriting any previous choice.
    fn save(&self, source: &str, state: SortState);

    /// Forgets the stored sort (the user returned to "Default").
    fn clear(&self, source: &str);
}

/// In-memory [`SortStateStore`].
#[derive(Debug, Default)]
pub struct MemorySortStateStore {
    entries: Mutex<HashMap<String, SortState>>,
}

impl MemorySortStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SortStateStore for MemorySortStateStore {
    fn load(&self, source: &str) -> Option<SortState> {
        self.entries.lock().get(source).cloned()
    }

    fn save(&self, source: &str, state: SortState) {
        self.entries.lock().insert(source.to_string(), state);
    }

    fn clear(&self, source: &str) {
        self.entries.lock().remove(source);
    }
}
