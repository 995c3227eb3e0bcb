//! Record Store abstraction shared by the SQLite and in-memory implementations.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{BusinessFilter, BusinessRecord, BusinessStatus, KeywordCount, NewBusiness};

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists one business atomically and returns its id. Created records are always active.
    async fn create(&self, business: &NewBusiness) -> Result<i64, StorageError>;

    /// Active records passing `filter`, in retrieval order (`registered_at` ascending, then id).
    async fn query_active(&self, filter: &BusinessFilter) -> Result<Vec<BusinessRecord>, StorageError>;

    async fn count_active(&self) -> Result<i64, StorageError>;

    /// Most recently registered active records, newest first.
    async fn recent_active(&self, limit: usize) -> Result<Vec<BusinessRecord>, StorageError>;

    /// Keyword frequencies over active records, most frequent first, ties by keyword.
    async fn popular_keywords(&self, limit: usize) -> Result<Vec<KeywordCount>, StorageError>;

    /// Returns false when no record has `id`.
    async fn set_status(&self, id: i64, status: BusinessStatus) -> Result<bool, StorageError>;
}
