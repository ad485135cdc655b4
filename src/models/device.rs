//! Device inventory model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A device in the campus inventory
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Device {
    /// Unique tag number, assigned by the database
    pub tag_number: i32,
    pub model_category: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub funding_source: Option<String>,
    pub department_ownership: Option<String>,
    pub po_number: Option<String>,
    pub warranty_expiration: Option<NaiveDate>,
    /// True once an approved reservation is outstanding
    pub res_req_status: bool,
    /// NetID of the user the device is assigned to, if any
    pub assigned_to: Option<String>,
}

/// Device reservation intent as submitted by the client.
///
/// Fields are optional so that missing values surface as validation
/// errors rather than deserialization rejections.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReserveDevice {
    #[serde(rename = "deviceId")]
    pub device_id: Option<i32>,
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

/// Attributes for registering a new device.
///
/// Every field is optional; the tag number is assigned by storage and the
/// reservation flag starts false.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDevice {
    pub model_category: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub funding_source: Option<String>,
    pub department_ownership: Option<String>,
    pub po_number: Option<String>,
    pub warranty_expiration: Option<NaiveDate>,
}
