//! Background undo coordinator
//!
//! Holds the single pending undo record and its countdown without blocking
//! the caller. Commands arrive on a channel from [`UndoHandle`]; snackbar
//! updates leave on the shared notification channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use uuid::Uuid;

use super::UndoKind;
use crate::core::Notification;
use crate::data::{ArchivedList, GroceryItem, GroceryStore};

/// Configuration for the undo coordinator
pub struct UndoTrackerConfig {
    /// How long a registered action stays undoable (default: 5 seconds)
    pub timeout: Duration,
}

impl Default for UndoTrackerConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
        }
    }
}

/// Commands to the undo coordinator
#[derive(Debug)]
pub enum UndoCommand {
    /// Make an archive action undoable
    RegisterArchive {
        archive_id: Uuid,
        affected: Vec<GroceryItem>,
    },
    /// Make a clear action undoable
    RegisterClear { affected: Vec<GroceryItem> },
    /// Reverse the pending action, if one is still pending
    Undo,
    /// Drop the pending action without reversing it
    Dismiss,
    /// Shutdown the coordinator
    Shutdown,
}

/// Handle to control the undo coordinator
#[derive(Clone)]
pub struct UndoHandle {
    cmd_tx: mpsc::UnboundedSender<UndoCommand>,
}

impl UndoHandle {
    /// Register an archive action for undo, superseding any pending record
    pub fn register_archive(&self, archive: &ArchivedList, checked: Vec<GroceryItem>) {
        let _ = self.cmd_tx.send(UndoCommand::RegisterArchive {
            archive_id: archive.id,
            affected: checked,
        });
    }

    /// Register a clear action for undo, superseding any pending record
    pub fn register_clear(&self, cleared: Vec<GroceryItem>) {
        let _ = self
            .cmd_tx
            .send(UndoCommand::RegisterClear { affected: cleared });
    }

    /// Reverse the pending action (no-op when nothing is pending)
    pub fn undo(&self) {
        let _ = self.cmd_tx.send(UndoCommand::Undo);
    }

    /// Drop the pending action without reversing it
    pub fn dismiss(&self) {
        let _ = self.cmd_tx.send(UndoCommand::Dismiss);
    }

    /// Shutdown the coordinator
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(UndoCommand::Shutdown);
    }
}

/// The single reversible record of the most recent archive or clear
struct PendingUndo {
    kind: UndoKind,
    /// Snapshot of the items the action removed from the active list
    affected: Vec<GroceryItem>,
    /// Present iff kind is Archive
    archive_id: Option<Uuid>,
    /// When the record stops being undoable
    expires_at: Instant,
}

/// Background undo coordinator
struct UndoTracker {
    config: UndoTrackerConfig,
    store: GroceryStore,
    /// Receive commands from the operation surface
    cmd_rx: mpsc::UnboundedReceiver<UndoCommand>,
    /// Send snackbar updates to the host
    update_tx: mpsc::UnboundedSender<Notification>,
    pending: Option<PendingUndo>,
}

impl UndoTracker {
    /// Spawn the coordinator and return a handle to control it
    fn spawn(
        config: UndoTrackerConfig,
        store: GroceryStore,
        update_tx: mpsc::UnboundedSender<Notification>,
    ) -> UndoHandle {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let tracker = Self {
            config,
            store,
            cmd_rx,
            update_tx,
            pending: None,
        };

        tokio::spawn(tracker.run());

        UndoHandle { cmd_tx }
    }

    /// Main loop for the coordinator.
    ///
    /// The sleep deadline is re-derived from the current pending record on
    /// every turn, so at most one countdown is live and a superseded
    /// countdown can never fire against a newer record.
    async fn run(mut self) {
        loop {
            let deadline = self.pending.as_ref().map(|p| p.expires_at);
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    match cmd {
                        None | Some(UndoCommand::Shutdown) => break,
                        Some(UndoCommand::RegisterArchive { archive_id, affected }) => {
                            self.register(UndoKind::Archive, Some(archive_id), affected);
                        }
                        Some(UndoCommand::RegisterClear { affected }) => {
                            self.register(UndoKind::Clear, None, affected);
                        }
                        Some(UndoCommand::Undo) => self.undo(),
                        Some(UndoCommand::Dismiss) => self.dismiss(),
                    }
                }
                _ = sleep_until_deadline(deadline), if deadline.is_some() => {
                    self.expire();
                }
            }
        }
    }

    /// Install a new pending record, superseding any existing one.
    ///
    /// Only the latest action is recoverable; the superseded record's undo
    /// opportunity is silently lost.
    fn register(&mut self, kind: UndoKind, archive_id: Option<Uuid>, affected: Vec<GroceryItem>) {
        if let Some(prev) = self.pending.take() {
            tracing::debug!(kind = prev.kind.label(), "Superseding pending undo");
        }

        let count = affected.len();
        self.pending = Some(PendingUndo {
            kind,
            affected,
            archive_id,
            expires_at: Instant::now() + self.config.timeout,
        });
        let _ = self
            .update_tx
            .send(Notification::UndoAvailable { kind, count });
    }

    /// Reverse the pending action. No-op when nothing is pending.
    fn undo(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        if let (UndoKind::Archive, Some(archive_id)) = (pending.kind, pending.archive_id) {
            self.store.remove_archive(archive_id);
        }

        // Re-add by name only: fresh ids, default metadata, unchecked. The
        // original check state, quantities, and notes are not restored.
        self.store
            .add_items(pending.affected.iter().map(|i| i.name.clone()));

        let _ = self.update_tx.send(Notification::UndoApplied {
            kind: pending.kind,
            count: pending.affected.len(),
        });
    }

    /// Countdown fired: the pending action becomes permanent
    fn expire(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(kind = pending.kind.label(), "Pending undo expired");
            let _ = self.update_tx.send(Notification::UndoExpired);
        }
    }

    /// Drop the pending record without reversing or announcing anything
    fn dismiss(&mut self) {
        self.pending = None;
    }
}

/// Sleep until the pending record's deadline, or forever when idle
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

/// Spawn the undo coordinator and return a handle
pub fn spawn_undo_tracker(
    config: UndoTrackerConfig,
    store: GroceryStore,
    update_tx: mpsc::UnboundedSender<Notification>,
) -> UndoHandle {
    UndoTracker::spawn(config, store, update_tx)
}
