use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tripnest_core::inquiry::{self, ContactForm};

use crate::{error::AppError, extract::JsonBody, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

/// POST /api/contact
async fn submit_contact(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<ContactForm>,
) -> Result<Json<Value>, AppError> {
    inquiry::submit(state.contacts.as_ref(), form, Utc::now()).await?;
    Ok(Json(json!({ "ok": true })))
}
