//! Timeout wrapper for store calls. A timeout is a retryable store failure, never an empty result.

use directory_core::{DirectoryError, Result};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::error;

pub async fn bounded<T, E, F>(limit: Duration, operation: &'static str, call: F) -> Result<T>
where
    E: Display,
    F: Future<Output = std::result::Result<T, E>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            error!(operation, error = %e, "Store call failed");
            Err(DirectoryError::StoreUnavailable(format!("{}: {}", operation, e)))
        }
        Err(_) => {
            error!(operation, timeout_ms = limit.as_millis() as u64, "Store call timed out");
            Err(DirectoryError::StoreUnavailable(format!(
                "{}: timed out after {:?}",
                operation, limit
            )))
        }
    }
}
