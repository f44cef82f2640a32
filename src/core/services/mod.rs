//! Stateless services over the application core.

mod error;
mod list_service;
mod settings_service;

pub use error::ServiceError;
pub use list_service::ListService;
pub use settings_service::{SettingsService, StorePreference, STORE_PREFERENCE_KEY};
