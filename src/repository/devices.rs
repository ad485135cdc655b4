//! Devices repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::device::{CreateDevice, Device},
};

#[derive(Clone)]
pub struct DevicesRepository {
    pool: Pool<Postgres>,
}

impl DevicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List devices with no outstanding approved reservation
    pub async fn list_available(&self) -> AppResult<Vec<Device>> {
        let rows = sqlx::query_as::<_, Device>(
            "SELECT * FROM current_devices WHERE res_req_status = FALSE",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Register a new device with the reservation flag cleared and no assignee
    pub async fn create(&self, data: &CreateDevice) -> AppResult<Device> {
        let row = sqlx::query_as::<_, Device>(
            r#"
            INSERT INTO current_devices (
                model_category, model_name, serial_number, location,
                funding_source, department_ownership, po_number,
                warranty_expiration, res_req_status, assigned_to
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, NULL)
            RETURNING *
            "#,
        )
        .bind(&data.model_category)
        .bind(&data.model_name)
        .bind(&data.serial_number)
        .bind(&data.location)
        .bind(&data.funding_source)
        .bind(&data.department_ownership)
        .bind(&data.po_number)
        .bind(data.warranty_expiration)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
