//! User input payloads.

use serde::{Deserialize, Serialize};

/// Fields for creating a user.
///
/// Email uniqueness is enforced by the store, not checked here; a duplicate
/// surfaces to the caller as a database error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}
