pub mod error;
pub mod repositories;
pub mod reservation;
pub mod user;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use reservation::{NewReservation, Reservation, ReservationRepository};
pub use user::{NewUser, User, UserRepository, UserRole};
