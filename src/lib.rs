pub mod config;
pub mod core;
pub mod data;
pub mod undo;
pub mod util;

pub use config::Config;
pub use core::{
    GroceryCore, ListService, Notification, ServiceError, SettingsService, StorePreference,
};
pub use data::{
    ArchivedList, Database, GroceryItem, GroceryState, GroceryStore, PreferenceStore,
};
pub use undo::{spawn_undo_tracker, UndoHandle, UndoKind, UndoTrackerConfig};
pub use util::parse_item_names;
