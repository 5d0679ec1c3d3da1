use chrono::{DateTime, Utc};
use serde::Serialize;

/// One inbound SMS notification as persisted in the `sms` table.
///
/// Records are append-only: once inserted they are never updated or
/// deleted by this application. `id` and `created_at` are assigned by
/// the store at insert time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmsRecord {
    pub id: i64,
    pub from_number: String,
    pub to_number: String,
    pub body: String,
    /// Original provider payload, serialized verbatim. Kept for
    /// debugging; never parsed again.
    pub provider_raw: String,
    pub created_at: DateTime<Utc>,
}
