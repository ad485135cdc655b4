//! Reservation requests repository for database operations

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::request::ReservationRequest,
};

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List requests still awaiting an admin decision
    pub async fn list_pending(&self) -> AppResult<Vec<ReservationRequest>> {
        let rows = sqlx::query_as::<_, ReservationRequest>(
            "SELECT * FROM reservation_requests WHERE res_req_status = FALSE",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a request for a device, copying its attributes at request time.
    ///
    /// The availability check and the insert are a single statement: nothing
    /// is written unless the device exists with its reservation flag clear.
    pub async fn create_for_device(&self, tag_number: i32, user_net_id: &str) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservation_requests (
                tag_number, user_net_id, model_category, model_name,
                serial_number, location, assigned_to, funding_source,
                department_ownership, po_number, warranty_expiration
            )
            SELECT tag_number, $1, model_category, model_name,
                   serial_number, location, assigned_to, funding_source,
                   department_ownership, po_number, warranty_expiration
            FROM current_devices
            WHERE tag_number = $2 AND res_req_status = FALSE
            "#,
        )
        .bind(user_net_id)
        .bind(tag_number)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(
                "Device is not available for reservation.".to_string(),
            ));
        }
        Ok(())
    }

    /// Approve a request and flag the referenced device, atomically.
    ///
    /// Both writes happen in one transaction; a failure anywhere rolls back
    /// the request-status update as well.
    pub async fn approve(&self, request_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            UPDATE reservation_requests
            SET res_req_status = TRUE
            WHERE request_id = $1
            RETURNING tag_number, user_net_id
            "#,
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::Conflict(format!("Reservation request {} not found", request_id))
        })?;

        let tag_number: i32 = row.get("tag_number");
        let user_net_id: String = row.get("user_net_id");

        sqlx::query(
            r#"
            UPDATE current_devices
            SET assigned_to = $1, res_req_status = TRUE
            WHERE tag_number = $2
            "#,
        )
        .bind(&user_net_id)
        .bind(tag_number)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Disapprove a request by deleting it
    pub async fn delete(&self, request_id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reservation_requests WHERE request_id = $1")
            .bind(request_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Reservation request {} not found",
                request_id
            )));
        }
        Ok(())
    }
}
