//! Room slot listing and reservation endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::room::{AvailableRoom, ReserveRoomSlot},
};

use super::MessageResponse;

/// List room slots available for reservation
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Available room slots", body = Vec<AvailableRoom>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_rooms(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<AvailableRoom>>> {
    let rooms = state.services.rooms.list_available().await?;
    Ok(Json(rooms))
}

/// Reserve a room slot
#[utoipa::path(
    post,
    path = "/api/reserveRoom",
    tag = "rooms",
    request_body = ReserveRoomSlot,
    responses(
        (status = 200, description = "Room reserved", body = MessageResponse),
        (status = 400, description = "Missing or malformed fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn reserve_room(
    State(state): State<crate::AppState>,
    Json(data): Json<ReserveRoomSlot>,
) -> AppResult<Json<MessageResponse>> {
    state.services.rooms.reserve(&data).await?;
    Ok(Json(MessageResponse::new("Room reserved successfully.")))
}
