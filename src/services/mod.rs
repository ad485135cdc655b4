//! Business logic services

pub mod devices;
pub mod requests;
pub mod rooms;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub devices: devices::DevicesService,
    pub requests: requests::RequestsService,
    pub rooms: rooms::RoomsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            devices: devices::DevicesService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            rooms: rooms::RoomsService::new(repository),
        }
    }
}
