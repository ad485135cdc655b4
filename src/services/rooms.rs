//! Room reservation service

use chrono::{NaiveDate, NaiveTime};

use crate::{
    error::{AppError, AppResult},
    models::room::{AvailableRoom, ReserveRoomSlot, RoomReservation},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List slots still available for reservation
    pub async fn list_available(&self) -> AppResult<Vec<AvailableRoom>> {
        self.repository.rooms.list_available().await
    }

    /// Reserve a slot. Validates and parses the inputs before touching
    /// storage; the write itself is last-writer-wins.
    pub async fn reserve(&self, data: &ReserveRoomSlot) -> AppResult<()> {
        let reservation = validate_reserve(data)?;
        self.repository.rooms.reserve(&reservation).await
    }
}

/// Check required fields and parse date/time values.
///
/// The slot id, date, start time and end time are required; the NetID and
/// event title are not.
fn validate_reserve(data: &ReserveRoomSlot) -> AppResult<RoomReservation> {
    let room_reservation_id = data.room_reservation_id.ok_or_else(missing_fields)?;
    let date = data
        .reservation_date
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(missing_fields)?;
    let start = data
        .start_time
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(missing_fields)?;
    let end = data
        .end_time
        .as_deref()
        .filter(|value| !value.is_empty())
        .ok_or_else(missing_fields)?;

    Ok(RoomReservation {
        room_reservation_id,
        user_net_id: data.user_net_id.clone().filter(|value| !value.is_empty()),
        event_title: data.event_title.clone().filter(|value| !value.is_empty()),
        reservation_date: parse_date(date)?,
        start_time: parse_time(start, "start time")?,
        end_time: parse_time(end, "end time")?,
    })
}

fn missing_fields() -> AppError {
    AppError::Validation(
        "Room Reservation ID, reservation date, start time, and end time are required."
            .to_string(),
    )
}

fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid reservation date: {}", value)))
}

fn parse_time(value: &str, field: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::Validation(format!("Invalid {}: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> ReserveRoomSlot {
        ReserveRoomSlot {
            room_reservation_id: Some(5),
            user_net_id: Some("jdoe".to_string()),
            event_title: Some("Meeting".to_string()),
            reservation_date: Some("2024-05-01".to_string()),
            start_time: Some("08:00".to_string()),
            end_time: Some("10:00".to_string()),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let reservation = validate_reserve(&payload()).unwrap();
        assert_eq!(reservation.room_reservation_id, 5);
        assert_eq!(reservation.user_net_id.as_deref(), Some("jdoe"));
        assert_eq!(
            reservation.reservation_date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(
            reservation.start_time,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
    }

    #[test]
    fn accepts_times_with_seconds() {
        let mut data = payload();
        data.start_time = Some("08:30:00".to_string());
        let reservation = validate_reserve(&data).unwrap();
        assert_eq!(
            reservation.start_time,
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
    }

    #[test]
    fn allows_missing_net_id_and_title() {
        let mut data = payload();
        data.user_net_id = None;
        data.event_title = Some(String::new());
        let reservation = validate_reserve(&data).unwrap();
        assert_eq!(reservation.user_net_id, None);
        assert_eq!(reservation.event_title, None);
    }

    #[test]
    fn rejects_missing_required_fields() {
        let strips: [fn(&mut ReserveRoomSlot); 4] = [
            |d| d.room_reservation_id = None,
            |d| d.reservation_date = None,
            |d| d.start_time = Some(String::new()),
            |d| d.end_time = None,
        ];
        for strip in strips {
            let mut data = payload();
            strip(&mut data);
            assert!(validate_reserve(&data).is_err());
        }
    }

    #[test]
    fn rejects_malformed_date_and_time() {
        let mut data = payload();
        data.reservation_date = Some("05/01/2024".to_string());
        assert!(validate_reserve(&data).is_err());

        let mut data = payload();
        data.end_time = Some("10am".to_string());
        assert!(validate_reserve(&data).is_err());
    }
}
