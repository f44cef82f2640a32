//! In-memory grocery list store
//!
//! The store is the single owner of list state. Operations are synchronous,
//! total, and atomic (one lock around the state); missing ids are silent
//! no-ops rather than errors.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use super::models::{ArchivedList, GroceryItem, GroceryState};

/// Store object for the active grocery list and its archive history
#[derive(Clone, Default)]
pub struct GroceryStore {
    state: Arc<Mutex<GroceryState>>,
}

impl GroceryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one new item per name, in input order.
    ///
    /// Names are expected to arrive pre-trimmed from the entry boundary;
    /// blank names are skipped here as well so the list never holds an
    /// unnamed item. Returns the created items.
    pub fn add_items(
        &self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Vec<GroceryItem> {
        let created: Vec<GroceryItem> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.trim().is_empty())
            .map(GroceryItem::new)
            .collect();

        if !created.is_empty() {
            let mut state = self.state.lock();
            state.items.extend(created.iter().cloned());
        }

        created
    }

    /// Flip the checked flag on the item with the given id
    pub fn toggle_item(&self, id: Uuid) {
        let mut state = self.state.lock();
        if let Some(item) = state.items.iter_mut().find(|i| i.id == id) {
            item.is_checked = !item.is_checked;
            item.touch();
        }
    }

    /// Remove the item with the given id from the active list
    pub fn remove_item(&self, id: Uuid) {
        let mut state = self.state.lock();
        state.items.retain(|i| i.id != id);
    }

    /// Check off every active item
    pub fn mark_all_purchased(&self) {
        let mut state = self.state.lock();
        for item in state.items.iter_mut() {
            item.is_checked = true;
            item.touch();
        }
    }

    /// Move all checked items into a new archived batch.
    ///
    /// Returns `None` with state unchanged when nothing is checked.
    /// Otherwise the batch is prepended to the archive history, the
    /// unchecked remainder stays active, and the new batch is returned so
    /// the caller can drive undo registration.
    pub fn archive_purchased(&self) -> Option<ArchivedList> {
        let mut state = self.state.lock();

        let (checked, unchecked): (Vec<GroceryItem>, Vec<GroceryItem>) =
            state.items.iter().cloned().partition(|i| i.is_checked);
        if checked.is_empty() {
            return None;
        }

        let archive = ArchivedList::new(checked);
        state.archived.insert(0, archive.clone());
        state.items = unchecked;

        tracing::debug!(
            archive_id = %archive.id,
            count = archive.items.len(),
            "Archived checked items"
        );
        Some(archive)
    }

    /// Empty the active list, returning a snapshot of what it held
    pub fn clear_items(&self) -> Vec<GroceryItem> {
        let mut state = self.state.lock();
        std::mem::take(&mut state.items)
    }

    /// Delete the archived batch with the given id
    pub fn remove_archive(&self, archive_id: Uuid) {
        let mut state = self.state.lock();
        state.archived.retain(|a| a.id != archive_id);
    }

    /// Snapshot of the active items in insertion order
    pub fn items(&self) -> Vec<GroceryItem> {
        self.state.lock().items.clone()
    }

    /// Snapshot of the archived batches, most recent first
    pub fn archived(&self) -> Vec<ArchivedList> {
        self.state.lock().archived.clone()
    }

    /// Number of active items currently checked
    pub fn checked_count(&self) -> usize {
        self.state.lock().items.iter().filter(|i| i.is_checked).count()
    }

    /// Snapshot of the full state (items plus archive history)
    pub fn snapshot(&self) -> GroceryState {
        self.state.lock().clone()
    }
}
