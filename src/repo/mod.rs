pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait MessageRepo {
    /// Persists one normalized message plus the raw provider payload.
    /// The store assigns `id` and `created_at`; returns the new id.
    async fn insert_sms(
        &self,
        from_number: &str,
        to_number: &str,
        body: &str,
        provider_raw: &str,
    ) -> anyhow::Result<i64>;

    /// Returns at most `limit` records, newest first: `created_at`
    /// descending, ties broken by `id` descending.
    async fn get_recent_sms(&self, limit: i64) -> anyhow::Result<Vec<models::sms::SmsRecord>>;
}

pub type ImplMessageRepo = Box<dyn MessageRepo>;
