//! Expand/collapse flags for resource rows.

use std::collections::HashMap;

/// Per-entry expanded flag keyed by resource id. Missing keys read as collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    expanded: HashMap<String, bool>,
}

impl CollapseState {
    /// Flip the flag for `key`, treating a missing key as collapsed.
    ///
    /// # Returns
    /// The new expanded state.
    pub fn toggle(&mut self, key: &str) -> bool {
        let entry = self.expanded.entry(key.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Number of keys ever toggled, stale ones included.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
