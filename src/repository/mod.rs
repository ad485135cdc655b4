//! Repository layer for database operations

pub mod devices;
pub mod requests;
pub mod rooms;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub devices: devices::DevicesRepository,
    pub requests: requests::RequestsRepository,
    pub rooms: rooms::RoomsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            devices: devices::DevicesRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            rooms: rooms::RoomsRepository::new(pool.clone()),
            pool,
        }
    }
}
