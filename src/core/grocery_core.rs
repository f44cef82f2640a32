//! Core infrastructure owned by the application root.

use tokio::sync::mpsc;

use crate::config::Config;
use crate::core::Notification;
use crate::data::{Database, GroceryStore, PreferenceStore};
use crate::undo::{spawn_undo_tracker, UndoHandle, UndoTrackerConfig};

/// Core infrastructure for Basket, shared by every screen of the host.
///
/// This struct owns all the foundational components:
/// - The in-memory grocery store (canonical list state)
/// - The undo coordinator handle
/// - The notification sender for the host's transient UI
/// - Database connection and preference DAO for persisted settings
///
/// Consumers receive it by reference from the application root; there are
/// no ambient singletons.
pub struct GroceryCore {
    /// Application configuration
    config: Config,
    /// Canonical grocery list state
    store: GroceryStore,
    /// Handle to the undo coordinator
    undo: UndoHandle,
    /// Sender half of the notification boundary
    update_tx: mpsc::UnboundedSender<Notification>,
    /// Database connection (owned to keep the settings store alive)
    _database: Option<Database>,
    /// Preference DAO (None when the settings database is unavailable)
    preference_store: Option<PreferenceStore>,
}

impl GroceryCore {
    /// Create a new GroceryCore with the given configuration.
    ///
    /// Opens the settings database in its default location; on failure the
    /// core still works, with settings degraded to in-memory defaults.
    /// Must be called from within a tokio runtime (the undo coordinator is
    /// spawned here).
    pub fn new(config: Config, update_tx: mpsc::UnboundedSender<Notification>) -> Self {
        let database = match Database::open_default() {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open settings database");
                None
            }
        };

        Self::with_database(config, update_tx, database)
    }

    /// Create a new GroceryCore over an explicit (possibly absent) database.
    ///
    /// Hosts and tests use this to control where settings persist.
    pub fn with_database(
        config: Config,
        update_tx: mpsc::UnboundedSender<Notification>,
        database: Option<Database>,
    ) -> Self {
        let preference_store = database
            .as_ref()
            .map(|db| PreferenceStore::new(db.connection()));

        let store = GroceryStore::new();
        let undo = spawn_undo_tracker(
            UndoTrackerConfig {
                timeout: config.undo_timeout,
            },
            store.clone(),
            update_tx.clone(),
        );

        Self {
            config,
            store,
            undo,
            update_tx,
            _database: database,
            preference_store,
        }
    }

    /// Application configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The canonical grocery list store
    pub fn store(&self) -> &GroceryStore {
        &self.store
    }

    /// Handle to the undo coordinator
    pub fn undo(&self) -> &UndoHandle {
        &self.undo
    }

    /// Preference DAO for persisted settings, when available
    pub fn preference_store(&self) -> Option<&PreferenceStore> {
        self.preference_store.as_ref()
    }

    /// Report an event to the host's notification surface
    pub(crate) fn notify(&self, notification: Notification) {
        tracing::debug!(kind = notification.kind_name(), "Notifying host");
        let _ = self.update_tx.send(notification);
    }
}
