//! Repository implementations for database access
//!
//! Each repository borrows the pool and scopes one table's operations:
//! - Lookups return `Option` - only failures are errors
//! - Inserts use `RETURNING` so callers get the stored row
//! - Every value travels as a bound parameter, never spliced into SQL

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::{Property, PropertyRepo, PropertyWithRating};
pub use reservations::{GuestReservation, ReservationRepo};
pub use users::{User, UserRepo};
