//! Admin endpoints for deciding reservation requests

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::request::{Decision, ReservationRequest},
};

use super::MessageResponse;

/// Decision payload for a pending request
#[derive(Deserialize, ToSchema)]
pub struct DecideRequestBody {
    /// "approve" or "disapprove"
    pub decision: Option<String>,
}

/// List reservation requests awaiting a decision
#[utoipa::path(
    get,
    path = "/api/admin/requests",
    tag = "admin",
    responses(
        (status = 200, description = "Pending reservation requests", body = Vec<ReservationRequest>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ReservationRequest>>> {
    let requests = state.services.requests.list_pending().await?;
    Ok(Json(requests))
}

/// Approve or disapprove a pending reservation request
#[utoipa::path(
    put,
    path = "/api/admin/requests/{requestId}",
    tag = "admin",
    params(("requestId" = i32, Path, description = "Reservation request ID")),
    request_body = DecideRequestBody,
    responses(
        (status = 200, description = "Decision applied", body = MessageResponse),
        (status = 400, description = "Invalid decision or request not pending", body = crate::error::ErrorResponse)
    )
)]
pub async fn decide_request(
    State(state): State<crate::AppState>,
    Path(request_id): Path<i32>,
    Json(body): Json<DecideRequestBody>,
) -> AppResult<Json<MessageResponse>> {
    let decision = state
        .services
        .requests
        .decide(request_id, body.decision.as_deref())
        .await?;

    let message = match decision {
        Decision::Approve => "Reservation request status updated successfully.",
        Decision::Disapprove => "Reservation request removed successfully.",
    };
    Ok(Json(MessageResponse::new(message)))
}
