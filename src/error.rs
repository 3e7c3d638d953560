//! Error types for the data-access layer.
//!
//! Store failures always surface to the caller as a `DbError`; nothing in
//! this crate logs an error and resolves to an empty result. Absence of a
//! single record is not an error, so lookups return `Ok(None)`.

use thiserror::Error;

/// Result type alias for data-access operations.
pub type DbResult<T> = std::result::Result<T, DbError>;

/// Errors surfaced by the data-access layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Store error: connectivity, constraint violation, malformed SQL.
    ///
    /// Constraint violations (e.g. a duplicate user email) arrive as
    /// `sqlx::Error::Database` and can be matched by callers that want to
    /// translate them.
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Connection configuration was missing or malformed.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl DbError {
    /// Create a config error.
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = DbError::config("DATABASE_URL is not set");
        assert_eq!(
            err.to_string(),
            "configuration error: DATABASE_URL is not set"
        );
    }

    #[test]
    fn sqlx_error_conversion() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
