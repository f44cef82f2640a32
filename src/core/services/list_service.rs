//! List operations invoked by the host after any confirmation prompt.
//!
//! Confirmation ("are you sure?") is the host's job; these functions assume
//! the user already agreed. Archive and clear report to the notification
//! surface and register with the undo coordinator; everything else goes
//! straight to the store.

use uuid::Uuid;

use crate::core::{GroceryCore, Notification};
use crate::data::{ArchivedList, GroceryItem};
use crate::util::parse_item_names;

pub struct ListService;

impl ListService {
    /// Add items from a block of entered text, one name per line.
    ///
    /// Returns the created items; an input with no usable lines is a no-op.
    pub fn add_items_from_text(core: &GroceryCore, text: &str) -> Vec<GroceryItem> {
        let names = parse_item_names(text);
        if names.is_empty() {
            return Vec::new();
        }
        core.store().add_items(names)
    }

    /// Flip the checked flag on an item. Missing ids are ignored.
    pub fn toggle_item(core: &GroceryCore, id: Uuid) {
        core.store().toggle_item(id);
    }

    /// Remove an item from the active list. Missing ids are ignored.
    pub fn remove_item(core: &GroceryCore, id: Uuid) {
        core.store().remove_item(id);
    }

    /// Check off every active item
    pub fn mark_all_purchased(core: &GroceryCore) {
        core.store().mark_all_purchased();
    }

    /// Archive the checked items as a new batch and make it undoable.
    ///
    /// Returns `None` (nothing reported, nothing registered) when no item
    /// is checked.
    pub fn archive_purchased(core: &GroceryCore) -> Option<ArchivedList> {
        let archive = core.store().archive_purchased()?;

        core.notify(Notification::ItemsArchived {
            count: archive.items.len(),
        });
        core.undo()
            .register_archive(&archive, archive.items.clone());

        Some(archive)
    }

    /// Clear the active list and make the clear undoable.
    ///
    /// Returns the cleared snapshot; clearing an empty list is a no-op
    /// (nothing reported, nothing registered).
    pub fn clear_list(core: &GroceryCore) -> Vec<GroceryItem> {
        let cleared = core.store().clear_items();
        if cleared.is_empty() {
            return cleared;
        }

        core.notify(Notification::ItemsCleared {
            count: cleared.len(),
        });
        core.undo().register_clear(cleared.clone());

        cleared
    }

    /// Reverse the most recent archive/clear, if still undoable
    pub fn undo(core: &GroceryCore) {
        core.undo().undo();
    }

    /// Dismiss the pending undo without reversing it
    pub fn dismiss_undo(core: &GroceryCore) {
        core.undo().dismiss();
    }
}
