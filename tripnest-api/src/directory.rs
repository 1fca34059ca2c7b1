//! Read-only showcase collections.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tripnest_core::lookup;
use tripnest_shared::{Agent, Destination, Hotel, Testimonial};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/testimonials", get(list_testimonials))
        .route("/api/agents", get(list_agents))
        .route("/api/agents/{id}", get(get_agent))
        .route("/api/destinations", get(list_destinations))
        .route("/api/hotels", get(list_hotels))
}

async fn list_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.directory.testimonials().await)
}

async fn list_agents(State(state): State<AppState>) -> Json<Vec<Agent>> {
    Json(state.directory.agents().await)
}

async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Agent>, AppError> {
    let agent = lookup::agent(state.directory.as_ref(), &id).await?;
    Ok(Json(agent))
}

async fn list_destinations(State(state): State<AppState>) -> Json<Vec<Destination>> {
    Json(state.directory.destinations().await)
}

async fn list_hotels(State(state): State<AppState>) -> Json<Vec<Hotel>> {
    Json(state.directory.hotels().await)
}
