//! User lookup and creation.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::DbResult;
use crate::models::NewUser;

/// User record from the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User repository.
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a user by exact email.
    ///
    /// An absent email is `Ok(None)`, not an error.
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Look up a user by id. Same absent-is-`None` contract as
    /// [`find_by_email`](Self::find_by_email).
    pub async fn find_by_id(&self, id: i32) -> DbResult<Option<User>> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user, returning the created row with its generated id.
    ///
    /// No uniqueness pre-check: a duplicate email is the store's unique
    /// constraint to reject, and arrives as a database error.
    pub async fn create(&self, user: &NewUser) -> DbResult<User> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
