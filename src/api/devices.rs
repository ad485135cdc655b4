//! Device listing, reservation and registration endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::device::{CreateDevice, Device, ReserveDevice},
};

use super::MessageResponse;

/// List devices available for reservation
#[utoipa::path(
    get,
    path = "/api/devices",
    tag = "devices",
    responses(
        (status = 200, description = "Available devices", body = Vec<Device>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_devices(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Device>>> {
    let devices = state.services.devices.list_available().await?;
    Ok(Json(devices))
}

/// Request a device reservation
#[utoipa::path(
    post,
    path = "/api/reserveDevice",
    tag = "devices",
    request_body = ReserveDevice,
    responses(
        (status = 200, description = "Reservation request created", body = MessageResponse),
        (status = 400, description = "Missing fields or device unavailable", body = crate::error::ErrorResponse)
    )
)]
pub async fn reserve_device(
    State(state): State<crate::AppState>,
    Json(data): Json<ReserveDevice>,
) -> AppResult<Json<MessageResponse>> {
    state.services.devices.reserve(&data).await?;
    Ok(Json(MessageResponse::new(
        "Reservation request created successfully.",
    )))
}

/// Register a new device
#[utoipa::path(
    post,
    path = "/api/addDevice",
    tag = "devices",
    request_body = CreateDevice,
    responses(
        (status = 200, description = "Device added", body = MessageResponse),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_device(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateDevice>,
) -> AppResult<Json<MessageResponse>> {
    let device = state.services.devices.add(&data).await?;
    tracing::info!("Device {} added", device.tag_number);
    Ok(Json(MessageResponse::new("New device added successfully.")))
}
