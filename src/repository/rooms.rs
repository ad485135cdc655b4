//! Room reservations repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::room::{AvailableRoom, RoomReservation},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List slots with no assigned user, projected to the listing fields
    pub async fn list_available(&self) -> AppResult<Vec<AvailableRoom>> {
        let rows = sqlx::query_as::<_, AvailableRoom>(
            r#"
            SELECT room_reservation_id, room, user_net_id
            FROM room_reservations
            WHERE user_net_id IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Fill in a slot's reservation fields. Unconditional write on the
    /// matching row; last writer wins.
    pub async fn reserve(&self, reservation: &RoomReservation) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE room_reservations
            SET user_net_id = $1, event_title = $2, reservation_date = $3,
                start_time = $4, end_time = $5
            WHERE room_reservation_id = $6
            "#,
        )
        .bind(&reservation.user_net_id)
        .bind(&reservation.event_title)
        .bind(reservation.reservation_date)
        .bind(reservation.start_time)
        .bind(reservation.end_time)
        .bind(reservation.room_reservation_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Room reservation slot {} not found",
                reservation.room_reservation_id
            )));
        }
        Ok(())
    }
}
