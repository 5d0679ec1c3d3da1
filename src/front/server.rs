//! Handlers not linked to a specific url

use ntex::web;
use serde_json::json;

use crate::front::errors;

/// Liveness probe
#[web::get("/health")]
pub async fn health() -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&json!({ "status": "ok" })))
}

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}
