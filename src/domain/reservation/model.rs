//! Reservation domain entity

use chrono::{DateTime, NaiveDate, Utc};

/// A room reservation linking a user to a hotel for a stay.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Unique reservation ID, assigned by the store on insert
    pub id: i32,
    /// Hotel this reservation belongs to (hotels are owned externally)
    pub hotel_id: i32,
    /// Identity-provider user id of the guest who created the reservation.
    /// Set server-side at creation; never changes afterwards.
    pub user_id: String,
    /// Reserved room
    pub room_id: i32,
    /// Stay dates
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Number of guests
    pub guests: i32,
    /// Confirmation timestamp, the canonical sort key for listings
    pub confirmation: DateTime<Utc>,
    /// Soft-cancellation flag. Canceled reservations stay in the store and
    /// remain visible to their owner, but drop out of hotel listings.
    pub canceled: bool,
    /// When the row was inserted
    pub created_at: DateTime<Utc>,
}

/// A reservation about to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub hotel_id: i32,
    pub user_id: String,
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub confirmation: DateTime<Utc>,
    pub canceled: bool,
}

impl Reservation {
    /// Soft-cancel this reservation
    pub fn cancel(&mut self) {
        self.canceled = true;
    }

    /// Active reservations appear in hotel listings
    pub fn is_active(&self) -> bool {
        !self.canceled
    }

    /// Number of nights between check-in and check-out
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation {
            id: 1,
            hotel_id: 5,
            user_id: "user-1".to_string(),
            room_id: 12,
            check_in: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap(),
            guests: 2,
            confirmation: Utc::now(),
            canceled: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn new_reservation_is_active() {
        let r = sample_reservation();
        assert!(r.is_active());
        assert!(!r.canceled);
    }

    #[test]
    fn cancel_sets_flag_and_deactivates() {
        let mut r = sample_reservation();
        r.cancel();
        assert!(r.canceled);
        assert!(!r.is_active());
    }

    #[test]
    fn cancel_keeps_identity() {
        let mut r = sample_reservation();
        r.cancel();
        assert_eq!(r.id, 1);
        assert_eq!(r.user_id, "user-1");
        assert_eq!(r.hotel_id, 5);
    }

    #[test]
    fn nights_spans_the_stay() {
        let r = sample_reservation();
        assert_eq!(r.nights(), 4);
    }
}
