//! Storage crate: business record persistence and the Record Store abstraction.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – BusinessRecord, NewBusiness, BusinessListing, BusinessFilter, DirectoryStats
//! - [`repository`] – RecordStore trait
//! - [`business_repo`] – BusinessRepository (SQLite)
//! - [`inmemory`] – InMemoryRecordStore
//! - [`sqlite_pool`] – SqlitePoolManager

mod business_repo;
mod error;
mod inmemory;
mod models;
mod repository;
mod sqlite_pool;

#[cfg(test)]
mod business_repo_test;

pub use business_repo::BusinessRepository;
pub use error::StorageError;
pub use inmemory::InMemoryRecordStore;
pub use models::{
    normalize_text, BusinessFilter, BusinessListing, BusinessRecord, BusinessStatus,
    DirectoryStats, KeywordCount, NewBusiness, RecentBusiness,
};
pub use repository::RecordStore;
pub use sqlite_pool::SqlitePoolManager;
