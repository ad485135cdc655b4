//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, devices, health, rooms};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campus Reserve API",
        version = "1.0.0",
        description = "Campus equipment and room reservation REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Devices
        devices::list_devices,
        devices::reserve_device,
        devices::add_device,
        // Rooms
        rooms::list_rooms,
        rooms::reserve_room,
        // Admin
        admin::list_requests,
        admin::decide_request,
    ),
    components(
        schemas(
            // Devices
            crate::models::device::Device,
            crate::models::device::ReserveDevice,
            crate::models::device::CreateDevice,
            // Rooms
            crate::models::room::AvailableRoom,
            crate::models::room::ReserveRoomSlot,
            // Requests
            crate::models::request::ReservationRequest,
            admin::DecideRequestBody,
            // Common
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "devices", description = "Device inventory and reservation requests"),
        (name = "rooms", description = "Room slot reservations"),
        (name = "admin", description = "Reservation request decisions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
