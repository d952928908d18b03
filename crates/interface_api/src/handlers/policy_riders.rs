//! Policy rider handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::PolicyId;
use domain_rider::{PolicyRef, RiderCode, RiderService};

use crate::{AppState, error::ApiError};
use crate::dto::policy_rider::*;

fn rider_code(code: &str) -> Result<RiderCode, ApiError> {
    RiderCode::new(code).map_err(|e| ApiError::BadRequest(e.to_string()))
}

fn policy_riders(service: &RiderService, policy_id: PolicyId) -> Result<PolicyRidersResponse, ApiError> {
    let riders = service
        .riders_for_policy(&policy_id)
        .iter()
        .map(PolicyRiderResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PolicyRidersResponse {
        policy_id: *policy_id.as_uuid(),
        riders,
        summary: service.summary(&policy_id)?,
    })
}

/// Lists riders attached to a policy with their roll-up
pub async fn list_policy_riders(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PolicyRidersResponse>, ApiError> {
    let service = state.service.read().await;
    Ok(Json(policy_riders(&service, PolicyId::from(id))?))
}

/// Attaches a catalog rider to a policy
pub async fn attach_rider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AttachRiderRequest>,
) -> Result<(StatusCode, Json<PolicyRiderResponse>), ApiError> {
    request.validate()?;

    let policy = PolicyRef::new(
        PolicyId::from(id),
        request.policy_type.clone(),
        request.agent_name.clone(),
    );

    let mut service = state.service.write().await;
    let attached = service.attach_by_code(
        &policy,
        &request.rider_code,
        request.customer_age,
        request.options(),
    )?;

    Ok((StatusCode::CREATED, Json(PolicyRiderResponse::try_from(&attached)?)))
}

/// Activates a pending rider
pub async fn activate_rider(
    State(state): State<AppState>,
    Path((id, code)): Path<(Uuid, String)>,
) -> Result<Json<PolicyRiderResponse>, ApiError> {
    let code = rider_code(&code)?;
    let mut service = state.service.write().await;
    let activated = service.activate_rider(&PolicyId::from(id), &code)?;
    Ok(Json(PolicyRiderResponse::try_from(&activated)?))
}

/// Removes a rider from a policy; removing an absent rider is not an error
pub async fn remove_rider(
    State(state): State<AppState>,
    Path((id, code)): Path<(Uuid, String)>,
) -> Result<StatusCode, ApiError> {
    let code = rider_code(&code)?;
    let mut service = state.service.write().await;
    service.remove_rider(&PolicyId::from(id), &code);
    Ok(StatusCode::NO_CONTENT)
}
