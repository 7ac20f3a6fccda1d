//! Category lookup entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, RegistryError};

/// Classifies reported items (e.g. Electronics, Clothing, ID Cards)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::validation("category name is required"));
        }
        Ok(Self {
            id: CategoryId::new_v7(),
            name,
            created_at: Utc::now(),
        })
    }

    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::validation("category name is required"));
        }
        self.name = name;
        Ok(())
    }
}
