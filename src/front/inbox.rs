//! Inbox dashboard view.

use ntex::web;
use serde::Serialize;
use serde_json::json;

use crate::{
    api, consts,
    front::{AppState, errors, otp, templates},
    models,
};

/// One rendered row of the inbox table.
///
/// `otp` is derived from the body on every render and never persisted,
/// so a change to the heuristic retroactively changes historical rows.
#[derive(Debug, Serialize)]
pub struct InboxRow {
    pub id: i64,
    pub from_number: String,
    pub to_number: String,
    pub body: String,
    pub otp: Option<String>,
    pub received_at: String,
}

impl From<models::sms::SmsRecord> for InboxRow {
    fn from(record: models::sms::SmsRecord) -> Self {
        let otp = otp::extract_otp(&record.body);

        Self {
            id: record.id,
            from_number: record.from_number,
            to_number: record.to_number,
            body: record.body,
            otp,
            received_at: record
                .created_at
                .format(consts::RECEIVED_AT_DISPLAY_FORMAT)
                .to_string(),
        }
    }
}

/// Endpoint to render the inbox view
#[web::get("/")]
pub async fn index(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let records = api::inbox::recent_messages(&app_state.repo)
        .await
        .map_err(|e| {
            errors::ServerError::InternalServerError(format!(
                "at / endpoint recent messages couldnt be retrieved: {e}"
            ))
        })?;

    let rows = records.into_iter().map(InboxRow::from).collect::<Vec<_>>();

    let context = tera::Context::from_value(json!({ "rows": rows })).unwrap_or_default();

    let content = templates::WEB_TEMPLATES
        .render("inbox.html", &context)
        .map_err(|e| {
            errors::ServerError::TemplateError(format!(
                "at / endpoint the template couldnt be rendered: {e}"
            ))
        })?;

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(content))
}
