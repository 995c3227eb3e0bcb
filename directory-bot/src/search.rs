//! Keyword search over active businesses, plus location search and directory statistics.

use directory_core::Result;
use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Duration;
use storage::{BusinessFilter, BusinessListing, BusinessRecord, DirectoryStats, RecentBusiness, RecordStore};
use tracing::{info, instrument};

use crate::bounded::bounded;
use crate::command::normalize;

const STATS_RECENT: usize = 3;
const STATS_POPULAR: usize = 5;

/// Distinct from a store error: the query ran and nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<BusinessListing>),
    NoResults,
}

impl SearchOutcome {
    fn from_records(records: Vec<BusinessRecord>) -> Self {
        if records.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Found(records.iter().map(BusinessRecord::listing).collect())
        }
    }
}

/// Relevance of `record` for `query`: exact keyword 3, name contains 2, keyword contains 1.
pub fn relevance(query: &str, record: &BusinessRecord) -> u8 {
    if record.keywords.iter().any(|k| k == query) {
        3
    } else if record.name_normalized.contains(query) {
        2
    } else if record.keywords.iter().any(|k| k.contains(query)) {
        1
    } else {
        0
    }
}

/// Orders matching records by relevance, then oldest listing first, then id; keeps at most `limit`.
pub fn rank(query: &str, records: Vec<BusinessRecord>, limit: usize) -> Vec<BusinessRecord> {
    let mut scored: Vec<(u8, BusinessRecord)> = records
        .into_iter()
        .filter(|r| r.is_active())
        .map(|r| (relevance(query, &r), r))
        .filter(|(score, _)| *score > 0)
        .collect();
    scored.sort_by_key(|(score, r)| (Reverse(*score), r.registered_at, r.id));
    scored.into_iter().take(limit).map(|(_, r)| r).collect()
}

#[derive(Clone)]
pub struct SearchEngine {
    store: Arc<dyn RecordStore>,
    limit: usize,
    timeout: Duration,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn RecordStore>, limit: usize, timeout: Duration) -> Self {
        Self {
            store,
            limit,
            timeout,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let query = normalize(query);
        if query.is_empty() {
            return Ok(SearchOutcome::NoResults);
        }

        let filter = BusinessFilter::Matches(query.clone());
        let records = bounded(self.timeout, "query_active", self.store.query_active(&filter)).await?;
        let ranked = rank(&query, records, self.limit);

        info!(result_count = ranked.len(), "step: search done");
        Ok(SearchOutcome::from_records(ranked))
    }

    #[instrument(skip(self))]
    pub async fn search_near(&self, location: &str) -> Result<SearchOutcome> {
        let location = normalize(location);
        if location.is_empty() {
            return Ok(SearchOutcome::NoResults);
        }

        let filter = BusinessFilter::AddressContains(location);
        let mut records = bounded(self.timeout, "query_active", self.store.query_active(&filter)).await?;
        records.retain(BusinessRecord::is_active);
        records.sort_by_key(|r| (r.registered_at, r.id));
        records.truncate(self.limit);

        info!(result_count = records.len(), "step: location search done");
        Ok(SearchOutcome::from_records(records))
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<DirectoryStats> {
        let total_active = bounded(self.timeout, "count_active", self.store.count_active()).await?;
        let recent = bounded(self.timeout, "recent_active", self.store.recent_active(STATS_RECENT)).await?;
        let popular_keywords =
            bounded(self.timeout, "popular_keywords", self.store.popular_keywords(STATS_POPULAR)).await?;

        Ok(DirectoryStats {
            total_active,
            recent: recent
                .into_iter()
                .map(|r| RecentBusiness {
                    name: r.name,
                    registered_at: r.registered_at,
                })
                .collect(),
            popular_keywords,
        })
    }
}
