//! Room reservation slot model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Projection returned by the available-rooms listing.
///
/// Slots are pre-seeded; a slot is available while its user field is unset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AvailableRoom {
    pub room_reservation_id: i32,
    pub room: String,
    #[serde(rename = "user_netID")]
    pub user_net_id: Option<String>,
}

/// Room reservation intent as submitted by the client.
///
/// Date and times arrive as strings and are parsed during validation;
/// fields are optional so missing values surface as validation errors.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReserveRoomSlot {
    pub room_reservation_id: Option<i32>,
    #[serde(rename = "user_netID")]
    pub user_net_id: Option<String>,
    pub event_title: Option<String>,
    pub reservation_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Validated room reservation, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomReservation {
    pub room_reservation_id: i32,
    pub user_net_id: Option<String>,
    pub event_title: Option<String>,
    pub reservation_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
