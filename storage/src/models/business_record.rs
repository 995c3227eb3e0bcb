//! Business record model for persistence.
//!
//! Maps to the `businesses` table. Only [`BusinessListing`] is meant for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// Lowercase, trimmed form used for comparison only.
pub fn normalize_text(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessStatus {
    Active,
    Inactive,
}

impl BusinessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessStatus::Active => "active",
            BusinessStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessStatus {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(BusinessStatus::Active),
            "inactive" => Ok(BusinessStatus::Inactive),
            other => Err(StorageError::Corrupt(format!("unknown status '{}'", other))),
        }
    }
}

/// A fully validated registration, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub keywords: Vec<String>,
    pub registered_by: String,
    pub registered_at: DateTime<Utc>,
}

impl NewBusiness {
    pub fn name_normalized(&self) -> String {
        normalize_text(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: i64,
    pub name: String,
    pub name_normalized: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub keywords: Vec<String>,
    pub registered_by: String,
    pub registered_at: DateTime<Utc>,
    pub status: BusinessStatus,
}

impl BusinessRecord {
    /// Builds the stored form of `business` under `id`; new records are active.
    pub fn from_new(id: i64, business: &NewBusiness) -> Self {
        Self {
            id,
            name: business.name.clone(),
            name_normalized: business.name_normalized(),
            address: business.address.clone(),
            phone: business.phone.clone(),
            email: business.email.clone(),
            keywords: business.keywords.clone(),
            registered_by: business.registered_by.clone(),
            registered_at: business.registered_at,
            status: BusinessStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BusinessStatus::Active
    }

    pub fn listing(&self) -> BusinessListing {
        BusinessListing {
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

/// Display projection of a business: no internal fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessListing {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
