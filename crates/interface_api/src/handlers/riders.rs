//! Rider catalog handlers

use axum::{extract::{Path, Query, State}, Json};

use crate::{AppState, error::ApiError};
use crate::dto::rider::{RiderQuery, RiderResponse};

/// Lists catalog riders, optionally for one policy type and customer age
pub async fn list_riders(
    State(state): State<AppState>,
    Query(query): Query<RiderQuery>,
) -> Result<Json<Vec<RiderResponse>>, ApiError> {
    let service = state.service.read().await;
    let catalog = service.catalog();

    let riders = match &query.policy_type {
        Some(policy_type) => catalog.riders_for_policy_type(policy_type),
        None => catalog.riders().collect(),
    };

    Ok(Json(
        riders
            .into_iter()
            .filter(|r| query.customer_age.map_or(true, |age| r.is_eligible(age)))
            .map(RiderResponse::from)
            .collect(),
    ))
}

/// Gets a catalog rider by code
pub async fn get_rider(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<RiderResponse>, ApiError> {
    let service = state.service.read().await;
    service
        .catalog()
        .get(&code)
        .map(|r| Json(RiderResponse::from(r)))
        .ok_or_else(|| ApiError::NotFound(format!("Unknown rider: {}", code)))
}
