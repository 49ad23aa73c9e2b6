//! Repository provider abstraction
//!
//! Handlers depend on this trait instead of a concrete database, so the
//! store can be swapped per request scope (or mocked in tests).

use crate::domain::reservation::ReservationRepository;
use crate::domain::user::UserRepository;

/// Unified access to the per-aggregate repositories.
pub trait RepositoryProvider: Send + Sync {
    fn reservations(&self) -> &dyn ReservationRepository;

    fn users(&self) -> &dyn UserRepository;
}
