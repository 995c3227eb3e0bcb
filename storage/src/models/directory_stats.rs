//! Aggregate statistics for the directory.
//!
//! Assembled from RecordStore::count_active, recent_active and popular_keywords.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total_active: i64,
    pub recent: Vec<RecentBusiness>,
    pub popular_keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentBusiness {
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: i64,
}
