//! Notifications crossing the core → UI boundary
//!
//! The core reports what happened; the host decides presentation (toast,
//! snackbar, platform dialog) and any confirmation prompts beforehand.

use serde::{Deserialize, Serialize};

use crate::undo::UndoKind;

/// Unified event type reported to the host UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Notification {
    /// The active list was cleared
    ItemsCleared { count: usize },

    /// Checked items were moved into an archived batch
    ItemsArchived { count: usize },

    /// The most recent archive/clear can be undone until the countdown fires
    UndoAvailable { kind: UndoKind, count: usize },

    /// A pending undo was applied and the items restored
    UndoApplied { kind: UndoKind, count: usize },

    /// The countdown fired; the pending action is now permanent
    UndoExpired,
}

impl Notification {
    /// Get a short event kind name for display and logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            Notification::ItemsCleared { .. } => "ItemsCleared",
            Notification::ItemsArchived { .. } => "ItemsArchived",
            Notification::UndoAvailable { .. } => "UndoAvailable",
            Notification::UndoApplied { .. } => "UndoApplied",
            Notification::UndoExpired => "UndoExpired",
        }
    }

    /// Human-readable message for the transient notification surface
    pub fn message(&self) -> String {
        match self {
            Notification::ItemsCleared { count } => {
                format!("{} item{} cleared", count, plural(*count))
            }
            Notification::ItemsArchived { count } => {
                format!("{} item{} archived", count, plural(*count))
            }
            Notification::UndoAvailable { kind, count } => {
                format!("{} item{} {}. Undo.", count, plural(*count), kind.label())
            }
            Notification::UndoApplied { count, .. } => {
                format!("{} item{} restored", count, plural(*count))
            }
            Notification::UndoExpired => "Undo expired".to_string(),
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
