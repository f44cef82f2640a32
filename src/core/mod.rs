//! Core module containing shared infrastructure for Basket.
//!
//! This module provides the components every screen of a host application
//! works through:
//! - The application core owning list state, undo, and settings access
//! - Stateless services for list and settings operations
//! - The notification boundary toward the host's transient UI

mod grocery_core;
mod notifications;
pub mod services;

pub use grocery_core::GroceryCore;
pub use notifications::Notification;
pub use services::{ListService, ServiceError, SettingsService, StorePreference};
