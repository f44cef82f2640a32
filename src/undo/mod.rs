//! Timed undo for destructive list actions
//!
//! Archive and clear are reversible for a short window: the most recent one
//! is held as a single pending record with a countdown, and either reversed
//! (`undo`), dropped (`dismiss`), or made permanent (countdown fires).

mod tracker;

use serde::{Deserialize, Serialize};

pub use tracker::{spawn_undo_tracker, UndoCommand, UndoHandle, UndoTrackerConfig};

/// Which destructive action a pending undo would reverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UndoKind {
    /// Checked items were moved into an archived batch
    Archive,
    /// The whole active list was cleared
    Clear,
}

impl UndoKind {
    pub fn label(&self) -> &'static str {
        match self {
            UndoKind::Archive => "archived",
            UndoKind::Clear => "cleared",
        }
    }
}
