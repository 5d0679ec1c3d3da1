use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use super::{MessageRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl SqlxSqliteRepo {
    /// Creates the `sms` table if it does not exist yet. No migrations:
    /// the schema is append-only and has never changed.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(sqlite_queries::QUERY_CREATE_SMS_TABLE)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }
}

/// Tolerant row mapping: a NULL in a hand-edited or legacy row degrades
/// to the same defaults the webhook would have stored, so one bad row
/// never takes the dashboard down.
fn row_to_record(row: SqliteRow) -> models::sms::SmsRecord {
    models::sms::SmsRecord {
        id: row.try_get("id").unwrap_or(-1),
        from_number: row.try_get("from_number").unwrap_or_default(),
        to_number: row.try_get("to_number").unwrap_or_default(),
        body: row.try_get("body").unwrap_or_default(),
        provider_raw: row.try_get("provider_raw").unwrap_or_default(),
        created_at: row.try_get("created_at").unwrap_or(DateTime::UNIX_EPOCH),
    }
}

#[async_trait]
impl MessageRepo for SqlxSqliteRepo {
    async fn insert_sms(
        &self,
        from_number: &str,
        to_number: &str,
        body: &str,
        provider_raw: &str,
    ) -> anyhow::Result<i64> {
        let result = sqlx::query(sqlite_queries::QUERY_INSERT_SMS)
            .bind(from_number)
            .bind(to_number)
            .bind(body)
            .bind(provider_raw)
            .bind(Utc::now())
            .execute(&self.db_pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_recent_sms(&self, limit: i64) -> anyhow::Result<Vec<models::sms::SmsRecord>> {
        Ok(sqlx::query(sqlite_queries::QUERY_GET_RECENT_SMS)
            .bind(limit)
            .map(row_to_record)
            .fetch_all(&self.db_pool)
            .await?)
    }
}
