//! In-memory implementation of the RecordStore trait.

use crate::error::StorageError;
use crate::models::{BusinessFilter, BusinessRecord, BusinessStatus, KeywordCount, NewBusiness};
use crate::repository::RecordStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
struct Inner {
    records: Vec<BusinessRecord>,
    next_id: i64,
}

/// Record store for tests and development. Records are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records including inactive ones.
    pub async fn all(&self) -> Vec<BusinessRecord> {
        self.inner.read().await.records.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn retrieval_order(records: &mut [BusinessRecord]) {
    records.sort_by(|a, b| a.registered_at.cmp(&b.registered_at).then(a.id.cmp(&b.id)));
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create(&self, business: &NewBusiness) -> Result<i64, StorageError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.records.push(BusinessRecord::from_new(id, business));
        drop(inner);
        info!(id, "Business written to in-memory store");
        Ok(id)
    }

    async fn query_active(&self, filter: &BusinessFilter) -> Result<Vec<BusinessRecord>, StorageError> {
        let inner = self.inner.read().await;
        let mut records: Vec<BusinessRecord> = inner
            .records
            .iter()
            .filter(|r| r.is_active() && filter.matches(r))
            .cloned()
            .collect();
        retrieval_order(&mut records);
        Ok(records)
    }

    async fn count_active(&self) -> Result<i64, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner.records.iter().filter(|r| r.is_active()).count() as i64)
    }

    async fn recent_active(&self, limit: usize) -> Result<Vec<BusinessRecord>, StorageError> {
        let mut records = self.query_active(&BusinessFilter::All).await?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    async fn popular_keywords(&self, limit: usize) -> Result<Vec<KeywordCount>, StorageError> {
        let inner = self.inner.read().await;
        let mut counts: HashMap<&str, i64> = HashMap::new();
        for record in inner.records.iter().filter(|r| r.is_active()) {
            for keyword in &record.keywords {
                *counts.entry(keyword.as_str()).or_insert(0) += 1;
            }
        }
        let mut popular: Vec<KeywordCount> = counts
            .into_iter()
            .map(|(keyword, count)| KeywordCount {
                keyword: keyword.to_string(),
                count,
            })
            .collect();
        popular.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
        popular.truncate(limit);
        Ok(popular)
    }

    async fn set_status(&self, id: i64, status: BusinessStatus) -> Result<bool, StorageError> {
        let mut inner = self.inner.write().await;
        match inner.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
