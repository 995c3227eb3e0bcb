//! Predicate over name/keywords/address used by `RecordStore::query_active`.

use serde::{Deserialize, Serialize};

use super::business_record::BusinessRecord;

/// Filter values are expected to be normalized (see [`super::normalize_text`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessFilter {
    All,
    /// Name contains the query, or some keyword equals or contains it.
    Matches(String),
    /// Case-folded address contains the location.
    AddressContains(String),
}

impl BusinessFilter {
    pub fn matches(&self, record: &BusinessRecord) -> bool {
        match self {
            BusinessFilter::All => true,
            BusinessFilter::Matches(query) => {
                record.name_normalized.contains(query.as_str())
                    || record.keywords.iter().any(|k| k.contains(query.as_str()))
            }
            BusinessFilter::AddressContains(location) => record
                .address
                .as_deref()
                .map(|a| a.to_lowercase().contains(location.as_str()))
                .unwrap_or(false),
        }
    }
}
