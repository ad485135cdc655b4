//! Device inventory and reservation-request service

use crate::{
    error::{AppError, AppResult},
    models::device::{CreateDevice, Device, ReserveDevice},
    repository::Repository,
};

#[derive(Clone)]
pub struct DevicesService {
    repository: Repository,
}

impl DevicesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List devices available for reservation
    pub async fn list_available(&self) -> AppResult<Vec<Device>> {
        self.repository.devices.list_available().await
    }

    /// Request a reservation for a device.
    ///
    /// Validates the inputs before touching storage; fails with a conflict
    /// if the device does not exist or is already flagged.
    pub async fn reserve(&self, data: &ReserveDevice) -> AppResult<()> {
        let (tag_number, user_net_id) = validate_reserve(data)?;
        self.repository
            .requests
            .create_for_device(tag_number, &user_net_id)
            .await
    }

    /// Register a new device
    pub async fn add(&self, data: &CreateDevice) -> AppResult<Device> {
        self.repository.devices.create(data).await
    }
}

/// Check that both reservation inputs are present and non-empty
fn validate_reserve(data: &ReserveDevice) -> AppResult<(i32, String)> {
    let tag_number = data.device_id.ok_or_else(missing_fields)?;
    let user_net_id = data
        .user_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or_else(missing_fields)?;
    Ok((tag_number, user_net_id.to_string()))
}

fn missing_fields() -> AppError {
    AppError::Validation("Device ID and user name are required.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(device_id: Option<i32>, user_name: Option<&str>) -> ReserveDevice {
        ReserveDevice {
            device_id,
            user_name: user_name.map(String::from),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let result = validate_reserve(&payload(Some(101), Some("jdoe")));
        assert_eq!(result.unwrap(), (101, "jdoe".to_string()));
    }

    #[test]
    fn rejects_missing_device_id() {
        assert!(validate_reserve(&payload(None, Some("jdoe"))).is_err());
    }

    #[test]
    fn rejects_missing_or_empty_user_name() {
        assert!(validate_reserve(&payload(Some(101), None)).is_err());
        assert!(validate_reserve(&payload(Some(101), Some(""))).is_err());
    }
}
