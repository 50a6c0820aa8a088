//! Ordered resource list editor.
//!
//! Keeps a local mirror of the externally owned resource list. The external
//! value only seeds the mirror on construction; afterwards this editor is the
//! sole mutator and pushes every committed list back through its sink.

mod collapse;

pub use collapse::CollapseState;

use crate::host::ChangeSink;
use crate::models::Resource;
use tracing::debug;

/// Outcome of a drag-and-drop gesture.
///
/// `destination` is `None` when the item was dropped outside any valid target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropResult {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DropResult {
    pub fn new(source: usize, destination: Option<usize>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

/// Move the element at `from` to position `to`.
///
/// # Returns
/// The reordered list, or `None` when either index is out of range.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= list.len() || to >= list.len() {
        return None;
    }
    let mut result = list.to_vec();
    let moved = result.remove(from);
    result.insert(to, moved);
    Some(result)
}

/// Editor state for one resource list option.
pub struct ResourcesEditor<S> {
    items: Vec<Resource>,
    pending_input: String,
    collapse: CollapseState,
    sink: S,
}

impl<S: ChangeSink<Vec<Resource>>> ResourcesEditor<S> {
    /// Seed the editor from the external value (empty when absent).
    pub fn new(value: Option<Vec<Resource>>, sink: S) -> Self {
        Self {
            items: value.unwrap_or_default(),
            pending_input: String::new(),
            collapse: CollapseState::default(),
            sink,
        }
    }

    /// Current local list, in render order.
    pub fn items(&self) -> &[Resource] {
        &self.items
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Whether the add control is enabled.
    pub fn can_add(&self) -> bool {
        !self.pending_input.is_empty()
    }

    /// Append the pending input as a new resource.
    ///
    /// # Returns
    /// The new resource id, or `None` when the add control is disabled.
    pub fn add(&mut self) -> Option<String> {
        if !self.can_add() {
            return None;
        }
        let url = std::mem::take(&mut self.pending_input);
        let resource = Resource::new(url);
        let id = resource.id.clone();

        let mut next = self.items.clone();
        next.push(resource);
        self.commit(next);
        self.collapse.toggle(&id);
        debug!("resource {} added", id);
        Some(id)
    }

    /// Remove the resource with `id`.
    ///
    /// # Returns
    /// `true` when an entry was removed; unknown ids leave state untouched.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        let next = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.commit(next);
        debug!("resource {} removed", id);
        true
    }

    /// Replace the url of the resource with `id`, keeping its position.
    ///
    /// # Returns
    /// `true` when the entry exists.
    pub fn edit(&mut self, id: &str, url: impl Into<String>) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let mut next = self.items.clone();
        next[index].url = url.into();
        self.commit(next);
        true
    }

    /// Apply a finished drag.
    ///
    /// # Returns
    /// `true` when the list was reordered and committed. Drops outside the
    /// list and out-of-range indices change nothing.
    pub fn reorder(&mut self, drop: DropResult) -> bool {
        let Some(destination) = drop.destination else {
            debug!("drop outside list ignored");
            return false;
        };
        let Some(next) = reorder(&self.items, drop.source, destination) else {
            debug!(
                "drop {} -> {} out of range for {} items",
                drop.source,
                destination,
                self.items.len()
            );
            return false;
        };
        self.commit(next);
        true
    }

    /// Flip the expanded flag of the row keyed by `id`.
    pub fn toggle_collapse(&mut self, id: &str) -> bool {
        self.collapse.toggle(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.collapse.is_expanded(id)
    }

    pub fn collapse_state(&self) -> &CollapseState {
        &self.collapse
    }

    fn commit(&mut self, next: Vec<Resource>) {
        self.items = next.clone();
        self.sink.emit(next);
    }
}

#[cfg(test)]
mod tests;
