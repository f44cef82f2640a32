//! Data layer for Basket
//!
//! In-memory storage for grocery list state, plus SQLite-backed storage for
//! the persisted settings preference.

mod database;
mod grocery;
mod migrations;
mod models;
mod preferences;

pub use database::{Database, DatabaseError};
pub use grocery::GroceryStore;
pub use models::{ArchivedList, GroceryItem, GroceryState};
pub use preferences::PreferenceStore;
