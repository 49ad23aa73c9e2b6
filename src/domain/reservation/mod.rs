pub mod model;
pub mod repository;

pub use model::{NewReservation, Reservation};
pub use repository::ReservationRepository;
