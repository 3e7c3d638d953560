//! Plain data objects crossing the consumer boundary.
//!
//! The route layer hands these in (deserialized from request bodies and
//! query strings) and receives the record structs defined alongside each
//! repository.

pub mod limit;
pub mod property;
pub mod user;

pub use limit::Limit;
pub use property::{NewProperty, PropertySearch};
pub use user::NewUser;
