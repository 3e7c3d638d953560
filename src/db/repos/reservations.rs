//! Reservation history for guests.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::DbResult;
use crate::models::Limit;

/// A guest's past reservation joined with the booked property and that
/// property's average review rating.
///
/// The property's own id is carried by `property_id`; the remaining
/// property columns are flattened in alongside the reservation fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestReservation {
    pub id: i32,
    pub guest_id: i32,
    pub property_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner_id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub average_rating: f64,
}

/// Past reservations with property details and mean review rating.
///
/// Grouped by property and reservation identity so the review join cannot
/// duplicate rows; `AVG` is cast to float8 because sqlx does not decode
/// Postgres NUMERIC natively.
const PAST_RESERVATIONS_SQL: &str = r#"
SELECT
    reservations.id,
    reservations.guest_id,
    reservations.property_id,
    reservations.start_date,
    reservations.end_date,
    properties.owner_id,
    properties.title,
    properties.description,
    properties.thumbnail_photo_url,
    properties.cover_photo_url,
    properties.cost_per_night,
    properties.parking_spaces,
    properties.number_of_bathrooms,
    properties.number_of_bedrooms,
    properties.country,
    properties.street,
    properties.city,
    properties.province,
    properties.post_code,
    AVG(property_reviews.rating)::float8 AS average_rating
FROM reservations
JOIN properties ON properties.id = reservations.property_id
JOIN property_reviews ON property_reviews.property_id = properties.id
WHERE reservations.guest_id = $1
  AND reservations.end_date < CURRENT_DATE
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date, reservations.id
LIMIT $2
"#;

/// Reservation repository. Reservations are only read by this layer.
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a guest's past reservations: strictly ended before today,
    /// oldest start date first, capped at `limit` rows.
    pub async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: Limit,
    ) -> DbResult<Vec<GuestReservation>> {
        let reservations: Vec<GuestReservation> = sqlx::query_as(PAST_RESERVATIONS_SQL)
            .bind(guest_id)
            .bind(limit.get())
            .fetch_all(self.pool)
            .await?;

        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The date bound, grouping, and ordering are load-bearing: past-only
    // rows, no fan-out duplication, ascending stay order with id breaking
    // start-date ties.
    #[test]
    fn past_reservations_query_shape() {
        assert!(PAST_RESERVATIONS_SQL.contains("reservations.end_date < CURRENT_DATE"));
        assert!(PAST_RESERVATIONS_SQL.contains("GROUP BY properties.id, reservations.id"));
        assert!(
            PAST_RESERVATIONS_SQL.contains("ORDER BY reservations.start_date, reservations.id")
        );
        assert!(PAST_RESERVATIONS_SQL.contains("LIMIT $2"));
    }
}
