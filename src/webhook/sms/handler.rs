//! Ingestion logic for inbound SMS notifications.

use super::schemas::NormalizedSms;
use crate::repo;
use log::info;
use serde_json::Value;

/// Normalizes an inbound payload and appends it to the store.
///
/// The full payload is serialized alongside the normalized fields so
/// the original shape stays available for debugging, whatever the
/// provider sent. Returns the id assigned by the store.
pub async fn process_incoming_sms(
    payload: &Value,
    repo: &repo::ImplMessageRepo,
) -> anyhow::Result<i64> {
    let sms = NormalizedSms::from_payload(payload);
    let provider_raw = payload.to_string();

    let id = repo
        .insert_sms(&sms.from, &sms.to, &sms.text, &provider_raw)
        .await?;

    info!(
        "sms received: id={id} from={from} to={to} text={text:?}",
        from = sms.from,
        to = sms.to,
        text = sms.text
    );

    Ok(id)
}
