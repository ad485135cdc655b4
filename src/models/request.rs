//! Device reservation request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A pending or approved device reservation request.
///
/// Device attributes are copied at request time; `tag_number` is not a
/// live foreign key into the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ReservationRequest {
    pub request_id: i32,
    pub tag_number: i32,
    #[serde(rename = "user_netID")]
    pub user_net_id: String,
    pub model_category: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub funding_source: Option<String>,
    pub department_ownership: Option<String>,
    pub po_number: Option<String>,
    pub warranty_expiration: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    /// False while pending, true once approved
    pub res_req_status: bool,
}

/// Admin decision on a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Disapprove,
}

impl Decision {
    /// Parse a decision string; anything but "approve"/"disapprove" is invalid.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approve" => Some(Decision::Approve),
            "disapprove" => Some(Decision::Disapprove),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_decisions() {
        assert_eq!(Decision::parse("approve"), Some(Decision::Approve));
        assert_eq!(Decision::parse("disapprove"), Some(Decision::Disapprove));
    }

    #[test]
    fn rejects_unknown_decisions() {
        assert_eq!(Decision::parse("deny"), None);
        assert_eq!(Decision::parse("Approve"), None);
        assert_eq!(Decision::parse(""), None);
    }
}
