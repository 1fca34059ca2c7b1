use axum::{extract::State, routing::post, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tripnest_core::accounts::{self, LoginForm, RegisterForm};
use tripnest_shared::PublicUser;

use crate::{error::AppError, extract::JsonBody, state::AppState};

/// No session or token is issued; the client keeps the returned user.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub ok: bool,
    pub user: PublicUser,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<RegisterForm>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = accounts::register(state.users.as_ref(), form, Utc::now()).await?;
    Ok(Json(AuthResponse { ok: true, user }))
}

async fn login(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<LoginForm>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = accounts::login(state.users.as_ref(), form).await?;
    tracing::info!("User {} logged in", user.id);
    Ok(Json(AuthResponse { ok: true, user }))
}
