//! Settings screen operations: the persisted store preference.

use serde::{Deserialize, Serialize};

use crate::core::services::error::ServiceError;
use crate::core::GroceryCore;

/// Preference key for the preferred store name
pub const STORE_PREFERENCE_KEY: &str = "storePreference";

/// The fixed set of selectable stores, plus the `None` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StorePreference {
    Tesco,
    Lidl,
    Aldi,
    #[default]
    None,
}

impl StorePreference {
    /// All options, in the order the settings screen lists them
    pub const ALL: [StorePreference; 4] = [
        StorePreference::Tesco,
        StorePreference::Lidl,
        StorePreference::Aldi,
        StorePreference::None,
    ];

    /// The persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            StorePreference::Tesco => "Tesco",
            StorePreference::Lidl => "Lidl",
            StorePreference::Aldi => "Aldi",
            StorePreference::None => "None",
        }
    }

    /// Parse a persisted value; unknown strings are rejected
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value)
    }
}

pub struct SettingsService;

impl SettingsService {
    /// Read the persisted store preference.
    ///
    /// An absent key, an unrecognized stored value, or a missing settings
    /// database all degrade to `StorePreference::None`.
    pub fn store_preference(core: &GroceryCore) -> Result<StorePreference, ServiceError> {
        let Some(dao) = core.preference_store() else {
            return Ok(StorePreference::None);
        };

        let value = dao
            .get(STORE_PREFERENCE_KEY)
            .map_err(|e| ServiceError::Internal(format!("Failed to read preference: {}", e)))?;

        Ok(value
            .as_deref()
            .and_then(StorePreference::parse)
            .unwrap_or_default())
    }

    /// Persist the store preference
    pub fn set_store_preference(
        core: &GroceryCore,
        preference: StorePreference,
    ) -> Result<(), ServiceError> {
        let Some(dao) = core.preference_store() else {
            return Err(ServiceError::Internal(
                "Settings database not available".to_string(),
            ));
        };

        dao.set(STORE_PREFERENCE_KEY, preference.as_str())
            .map_err(|e| ServiceError::Internal(format!("Failed to save preference: {}", e)))
    }
}
