//! API handlers for the reservation REST endpoints

pub mod admin;
pub mod devices;
pub mod health;
pub mod openapi;
pub mod rooms;

use serde::Serialize;
use utoipa::ToSchema;

/// Generic success response body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
