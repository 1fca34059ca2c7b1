use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tripnest_catalog::{DurationBucket, PackageQuery, PriceRange, SortBy};
use tripnest_core::listing::{self, AgentPackageForm};
use tripnest_core::lookup;
use tripnest_shared::{Category, TourPackage};

use crate::{error::AppError, extract::JsonBody, state::AppState};

/// Query string accepted by `/api/packages/search`.
///
/// Empty values are treated as absent, matching what a cleared form sends.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<String>,
    pub sort_by: Option<String>,
}

impl TryFrom<SearchParams> for PackageQuery {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let min_rating = match present(&params.rating) {
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|r| r.is_finite())
                    .ok_or_else(|| AppError::ValidationError(format!("invalid rating: {}", raw)))?,
            ),
            None => None,
        };

        Ok(PackageQuery {
            search_term: present(&params.q).map(str::to_string),
            category: present(&params.category)
                .map(str::parse::<Category>)
                .transpose()
                .map_err(|e| AppError::ValidationError(e.to_string()))?,
            price_range: present(&params.price_range)
                .map(str::parse::<PriceRange>)
                .transpose()?,
            duration: present(&params.duration)
                .map(str::parse::<DurationBucket>)
                .transpose()?,
            min_rating,
            sort_by: present(&params.sort_by)
                .map(str::parse::<SortBy>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/packages", get(list_packages).post(create_package))
        .route("/api/packages/search", get(search_packages))
        .route("/api/packages/{id}", get(get_package))
}

/// GET /api/packages
async fn list_packages(State(state): State<AppState>) -> Json<Vec<TourPackage>> {
    Json(state.packages.list_all().await)
}

/// GET /api/packages/search
async fn search_packages(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<TourPackage>>, AppError> {
    let query = PackageQuery::try_from(params)?;
    tracing::debug!("Searching packages with {:?}", query);

    let packages = state.packages.list_all().await;
    Ok(Json(query.apply(packages)))
}

/// GET /api/packages/{id}
async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TourPackage>, AppError> {
    let package = lookup::package(state.packages.as_ref(), &id).await?;
    Ok(Json(package))
}

/// POST /api/packages
/// Agent submission; the package is appended to the agent collection.
async fn create_package(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<AgentPackageForm>,
) -> Result<(StatusCode, Json<TourPackage>), AppError> {
    let package = listing::submit(state.packages.as_ref(), form, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(package)))
}
