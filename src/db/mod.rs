//! Database layer - connection pool, statement assembly, and repositories
//!
//! # Design Principles
//!
//! - Shared connection pool - handlers borrow it, repositories are per-call
//! - List queries aggregate in SQL - review averages come back with the rows
//! - Clause keywords are rendered once by the builder - no WHERE/AND branching
//! - Absence is `Ok(None)` - errors are reserved for failures

pub mod pool;
pub mod repos;
pub mod sql;

pub use pool::create_pool;
pub use repos::*;
