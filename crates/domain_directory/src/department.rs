//! Department lookup entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{DepartmentId, RegistryError};

/// Campus department an item report is attached to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    /// Building or office location, if known
    pub building: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Department {
    pub fn new(name: impl Into<String>, building: Option<String>) -> Result<Self, RegistryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RegistryError::validation("department name is required"));
        }
        Ok(Self {
            id: DepartmentId::new_v7(),
            name,
            building,
            created_at: Utc::now(),
        })
    }
}
