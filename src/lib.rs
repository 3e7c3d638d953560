//! hearthstay-db: data-access layer for the Hearthstay vacation-rental app
//!
//! Everything the web tier needs from Postgres lives here: user lookup and
//! sign-up, a guest's past reservations with review averages, filtered
//! property search, and listing creation. Handlers borrow a shared
//! [`sqlx::PgPool`] and construct a repository per call.
//!
//! ```no_run
//! use hearthstay_db::{create_pool, DbConfig, Limit, PropertyRepo, PropertySearch};
//!
//! # async fn run() -> hearthstay_db::DbResult<()> {
//! let config = DbConfig::from_env()?;
//! let pool = create_pool(&config).await?;
//!
//! let criteria = PropertySearch {
//!     city: Some("Vancouver".to_owned()),
//!     ..PropertySearch::default()
//! };
//! let listings = PropertyRepo::new(&pool)
//!     .search(&criteria, Limit::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::DbConfig;
pub use db::pool::create_pool;
pub use db::repos::{
    GuestReservation, Property, PropertyRepo, PropertyWithRating, ReservationRepo, User, UserRepo,
};
pub use error::{DbError, DbResult};
pub use models::{Limit, NewProperty, NewUser, PropertySearch};
