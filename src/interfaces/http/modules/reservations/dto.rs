//! Reservation DTOs
//!
//! Mapping is an explicit field-by-field copy in each direction; the only
//! fields the client never controls are `id` and `userId`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::{NewReservation, Reservation};

/// Form payload for creating or updating a reservation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationInput {
    /// Hotel the reservation is for
    pub hotel_id: i32,
    /// Reserved room
    pub room_id: i32,
    /// Stay dates (ISO 8601 dates)
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Number of guests
    #[validate(range(min = 1, message = "at least one guest is required"))]
    pub guests: i32,
    /// Confirmation timestamp (ISO 8601); listings sort on it
    pub confirmation: DateTime<Utc>,
    /// Soft-cancellation flag
    #[serde(default)]
    pub canceled: bool,
}

/// Reservation representation in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i32,
    pub hotel_id: i32,
    pub user_id: String,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub confirmation: DateTime<Utc>,
    pub canceled: bool,
    pub created_at: DateTime<Utc>,
}

impl ReservationInput {
    /// Input → new record. `user_id` always comes from the authenticated
    /// caller, never from the request body.
    pub fn into_new_reservation(self, user_id: String) -> NewReservation {
        NewReservation {
            hotel_id: self.hotel_id,
            user_id,
            room_id: self.room_id,
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            confirmation: self.confirmation,
            canceled: self.canceled,
        }
    }

    /// Input → existing record, overwriting every mapped field in place.
    /// `id`, `user_id` and `created_at` stay as stored.
    pub fn apply_to(self, existing: &mut Reservation) {
        existing.hotel_id = self.hotel_id;
        existing.room_id = self.room_id;
        existing.check_in = self.check_in;
        existing.check_out = self.check_out;
        existing.guests = self.guests;
        existing.confirmation = self.confirmation;
        existing.canceled = self.canceled;
    }
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            hotel_id: r.hotel_id,
            user_id: r.user_id,
            room_id: r.room_id,
            check_in: r.check_in,
            check_out: r.check_out,
            guests: r.guests,
            confirmation: r.confirmation,
            canceled: r.canceled,
            created_at: r.created_at,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input() -> ReservationInput {
        ReservationInput {
            hotel_id: 5,
            room_id: 12,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            guests: 2,
            confirmation: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            canceled: false,
        }
    }

    #[test]
    fn into_new_reservation_uses_caller_identity() {
        let new = input().into_new_reservation("caller-id".to_string());
        assert_eq!(new.user_id, "caller-id");
        assert_eq!(new.hotel_id, 5);
        assert_eq!(new.guests, 2);
    }

    #[test]
    fn apply_to_preserves_id_and_user() {
        let mut existing = Reservation {
            id: 7,
            hotel_id: 1,
            user_id: "original-owner".to_string(),
            room_id: 3,
            check_in: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2023, 6, 2).unwrap(),
            guests: 1,
            confirmation: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            canceled: false,
            created_at: Utc.with_ymd_and_hms(2023, 5, 1, 0, 0, 0).unwrap(),
        };
        let created_at = existing.created_at;

        let mut update = input();
        update.canceled = true;
        update.apply_to(&mut existing);

        assert_eq!(existing.id, 7);
        assert_eq!(existing.user_id, "original-owner");
        assert_eq!(existing.created_at, created_at);
        assert_eq!(existing.hotel_id, 5);
        assert_eq!(existing.room_id, 12);
        assert_eq!(existing.guests, 2);
        assert!(existing.canceled);
    }

    #[test]
    fn dto_copies_every_field() {
        let r = Reservation {
            id: 9,
            hotel_id: 5,
            user_id: "u".to_string(),
            room_id: 12,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            guests: 2,
            confirmation: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            canceled: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let dto = ReservationDto::from(r.clone());
        assert_eq!(dto.id, r.id);
        assert_eq!(dto.user_id, r.user_id);
        assert_eq!(dto.confirmation, r.confirmation);
        assert!(dto.canceled);
    }

    #[test]
    fn form_payload_deserializes_with_camel_case_fields() {
        let parsed: ReservationInput = serde_urlencoded::from_str(
            "hotelId=5&roomId=12&checkIn=2024-01-10&checkOut=2024-01-14\
             &guests=2&confirmation=2024-01-10T00%3A00%3A00Z",
        )
        .unwrap();
        assert_eq!(parsed.hotel_id, 5);
        assert_eq!(parsed.check_in, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert!(!parsed.canceled); // defaults to false when omitted
    }
}
