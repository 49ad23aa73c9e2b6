//! Reservation repository interface

use async_trait::async_trait;

use super::model::{NewReservation, Reservation};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation; the store assigns the id.
    async fn create(&self, reservation: NewReservation) -> DomainResult<Reservation>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Reservation>>;

    /// All non-canceled reservations for a hotel, ascending by confirmation
    async fn list_active_for_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Reservation>>;

    /// All reservations for a user (canceled included), ascending by confirmation
    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Reservation>>;

    /// Overwrite an existing reservation in place. Fails with `NotFound`
    /// if no row with the given id exists.
    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    /// Hard-delete a reservation. Fails with `NotFound` if absent.
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
