//! Static `(context, key) → asset` lookup used alongside the catalog.

use std::collections::HashMap;

use roster_core::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// Two-level asset table, e.g. `{"icon": {"char_103_angel": "icons/angel.png"}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageTable {
    entries: HashMap<String, HashMap<String, String>>,
}

impl ImageTable {
    pub fn new(entries: HashMap<String, HashMap<String, String>>) -> Self {
        Self { entries }
    }

    /// Resolve `key` within `context`.
    ///
    /// Fails with [`RosterError::NotFound`] when either level is absent.
    pub fn get_image(&self, context: &str, key: &str) -> Result<&str> {
        self.entries
            .get(context)
            .and_then(|assets| assets.get(key))
            .map(String::as_str)
            .ok_or_else(|| RosterError::NotFound {
                context: context.to_string(),
                key: key.to_string(),
            })
    }

    /// Number of contexts in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
