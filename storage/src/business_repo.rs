//! Business repository: SQLite-backed [`RecordStore`].
//!
//! Keywords are stored as a JSON array in a TEXT column. SQL narrows candidates with LIKE;
//! [`BusinessFilter::matches`] makes the final decision so both stores agree on semantics.

use crate::error::StorageError;
use crate::models::{BusinessFilter, BusinessRecord, BusinessStatus, KeywordCount, NewBusiness};
use crate::repository::RecordStore;
use crate::sqlite_pool::SqlitePoolManager;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    name: String,
    name_normalized: String,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    keywords: String,
    registered_by: String,
    registered_at: DateTime<Utc>,
    status: String,
}

impl TryFrom<BusinessRow> for BusinessRecord {
    type Error = StorageError;

    fn try_from(row: BusinessRow) -> Result<Self, Self::Error> {
        Ok(BusinessRecord {
            id: row.id,
            name: row.name,
            name_normalized: row.name_normalized,
            address: row.address,
            phone: row.phone,
            email: row.email,
            keywords: serde_json::from_str(&row.keywords)?,
            registered_by: row.registered_by,
            registered_at: row.registered_at,
            status: row.status.parse()?,
        })
    }
}

/// Escapes LIKE wildcards so `value` is matched literally (with `ESCAPE '\'`).
fn like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// True when `value` appears verbatim inside its JSON encoding, so a LIKE over the
/// keywords column cannot miss a match.
fn json_verbatim(value: &str) -> bool {
    !value.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}

const SELECT_ACTIVE: &str = "SELECT * FROM businesses WHERE status = 'active'";
const ORDER_RETRIEVAL: &str = " ORDER BY registered_at ASC, id ASC";

#[derive(Clone)]
pub struct BusinessRepository {
    pool_manager: SqlitePoolManager,
}

impl BusinessRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating businesses table if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS businesses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                name_normalized TEXT NOT NULL,
                address TEXT,
                phone TEXT,
                email TEXT,
                keywords TEXT NOT NULL,
                registered_by TEXT NOT NULL,
                registered_at TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active'
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_businesses_name_normalized ON businesses(name_normalized);
            CREATE INDEX IF NOT EXISTS idx_businesses_status ON businesses(status);
            CREATE INDEX IF NOT EXISTS idx_businesses_registered_at ON businesses(registered_at);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Businesses table ready");
        Ok(())
    }

    async fn fetch(&self, sql: &str, binds: &[String]) -> Result<Vec<BusinessRecord>, StorageError> {
        let mut query = sqlx::query_as::<_, BusinessRow>(sql);
        for value in binds {
            query = query.bind(value);
        }
        let rows = query.fetch_all(self.pool_manager.pool()).await?;
        rows.into_iter().map(BusinessRecord::try_from).collect()
    }
}

#[async_trait]
impl RecordStore for BusinessRepository {
    async fn create(&self, business: &NewBusiness) -> Result<i64, StorageError> {
        let keywords = serde_json::to_string(&business.keywords)?;

        let result = sqlx::query(
            r#"
            INSERT INTO businesses (name, name_normalized, address, phone, email, keywords, registered_by, registered_at, status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&business.name)
        .bind(business.name_normalized())
        .bind(&business.address)
        .bind(&business.phone)
        .bind(&business.email)
        .bind(&keywords)
        .bind(&business.registered_by)
        .bind(business.registered_at)
        .bind(BusinessStatus::Active.as_str())
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!(id, keyword_count = business.keywords.len(), "Saved business");
        Ok(id)
    }

    async fn query_active(&self, filter: &BusinessFilter) -> Result<Vec<BusinessRecord>, StorageError> {
        let (sql, binds) = match filter {
            BusinessFilter::Matches(query) if json_verbatim(query) => {
                let pattern = like_pattern(query);
                (
                    format!(
                        "{} AND (name_normalized LIKE ? ESCAPE '\\' OR keywords LIKE ? ESCAPE '\\'){}",
                        SELECT_ACTIVE, ORDER_RETRIEVAL
                    ),
                    vec![pattern.clone(), pattern],
                )
            }
            BusinessFilter::AddressContains(location) if location.is_ascii() => (
                format!("{} AND address LIKE ? ESCAPE '\\'{}", SELECT_ACTIVE, ORDER_RETRIEVAL),
                vec![like_pattern(location)],
            ),
            _ => (format!("{}{}", SELECT_ACTIVE, ORDER_RETRIEVAL), Vec::new()),
        };

        let candidates = self.fetch(&sql, &binds).await?;
        let candidate_count = candidates.len();
        let records: Vec<BusinessRecord> = candidates
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();

        debug!(candidate_count, matched = records.len(), "query_active done");
        Ok(records)
    }

    async fn count_active(&self) -> Result<i64, StorageError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM businesses WHERE status = 'active'")
                .fetch_one(self.pool_manager.pool())
                .await?;
        Ok(count.0)
    }

    async fn recent_active(&self, limit: usize) -> Result<Vec<BusinessRecord>, StorageError> {
        let rows = sqlx::query_as::<_, BusinessRow>(
            "SELECT * FROM businesses WHERE status = 'active' ORDER BY registered_at DESC, id DESC LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(self.pool_manager.pool())
        .await?;
        rows.into_iter().map(BusinessRecord::try_from).collect()
    }

    async fn popular_keywords(&self, limit: usize) -> Result<Vec<KeywordCount>, StorageError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT kw.value AS keyword, COUNT(*) AS frequency
            FROM businesses, json_each(businesses.keywords) AS kw
            WHERE businesses.status = 'active'
            GROUP BY kw.value
            ORDER BY frequency DESC, keyword ASC
            LIMIT ?
            "#,
        )
        .bind(limit as i64)
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(keyword, count)| KeywordCount { keyword, count })
            .collect())
    }

    async fn set_status(&self, id: i64, status: BusinessStatus) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE businesses SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(self.pool_manager.pool())
            .await?;
        info!(id, status = %status, updated = result.rows_affected(), "Updated business status");
        Ok(result.rows_affected() > 0)
    }
}
