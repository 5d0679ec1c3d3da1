//! SMS webhook endpoint handler
//!
//! Receives delivery notifications from the SMS provider. The payload
//! shape is provider-controlled and not guaranteed stable, so the body
//! is read raw and normalized leniently; the endpoint answers the
//! provider with a minimal JSON acknowledgment.

use super::handler;
use crate::front::AppState;
use log::error;
use ntex::{util::Bytes, web};
use serde_json::json;

/// Webhook receiver endpoint (POST)
///
/// Responds `200 {"received": true}` once the notification is stored.
/// Any parse, normalization or persistence failure is logged and turned
/// into a generic `500 {"error": "internal_error"}`; nothing at this
/// boundary crashes the process or leaves the provider hanging.
#[web::post("")]
pub async fn receive(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!("failed to parse webhook body as JSON: {e}");
            return Ok(internal_error_response());
        }
    };

    match handler::process_incoming_sms(&payload, &app_state.repo).await {
        Ok(_) => Ok(web::HttpResponse::Ok().json(&json!({ "received": true }))),
        Err(e) => {
            error!("failed to store incoming sms: {e}");
            Ok(internal_error_response())
        }
    }
}

fn internal_error_response() -> web::HttpResponse {
    web::HttpResponse::InternalServerError().json(&json!({ "error": "internal_error" }))
}
