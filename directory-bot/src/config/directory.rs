//! Directory policy: session inactivity window, search cap, store timeout, support contact.

use anyhow::Result;
use std::env;
use std::time::Duration;

/// Upper bound for SESSION_TIMEOUT_SECS.
pub const MAX_SESSION_TIMEOUT_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// SESSION_TIMEOUT_SECS
    pub session_timeout_secs: u64,
    /// SEARCH_RESULT_LIMIT
    pub search_result_limit: usize,
    /// STORE_TIMEOUT_MS
    pub store_timeout_ms: u64,
    /// SUPPORT_EMAIL
    pub support_email: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            session_timeout_secs: 600,
            search_result_limit: 10,
            store_timeout_ms: 5000,
            support_email: "support@yourdomain.com".to_string(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl DirectoryConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            session_timeout_secs: env_parse("SESSION_TIMEOUT_SECS", defaults.session_timeout_secs),
            search_result_limit: env_parse("SEARCH_RESULT_LIMIT", defaults.search_result_limit),
            store_timeout_ms: env_parse("STORE_TIMEOUT_MS", defaults.store_timeout_ms),
            support_email: env::var("SUPPORT_EMAIL").unwrap_or(defaults.support_email),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.session_timeout_secs == 0 {
            anyhow::bail!("SESSION_TIMEOUT_SECS must be at least 1");
        }
        if self.session_timeout_secs > MAX_SESSION_TIMEOUT_SECS {
            anyhow::bail!(
                "SESSION_TIMEOUT_SECS must be at most {} (one week)",
                MAX_SESSION_TIMEOUT_SECS
            );
        }
        if self.search_result_limit == 0 {
            anyhow::bail!("SEARCH_RESULT_LIMIT must be at least 1");
        }
        if self.store_timeout_ms == 0 {
            anyhow::bail!("STORE_TIMEOUT_MS must be at least 1");
        }
        Ok(())
    }

    /// Clamped to [`MAX_SESSION_TIMEOUT_SECS`]; validate() rejects larger values.
    pub fn session_timeout(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_timeout_secs.min(MAX_SESSION_TIMEOUT_SECS) as i64)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
