//! Property search and creation.
//!
//! Search is the one query in the layer whose shape depends on input. The
//! criteria map one-to-one onto predicates handed to
//! [`SelectBuilder`](crate::db::sql::SelectBuilder); the builder owns clause
//! keywords and placeholder numbering, so no combination of filters can
//! render malformed SQL.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::db::sql::{SelectBuilder, SqlValue};
use crate::error::DbResult;
use crate::models::{Limit, NewProperty, PropertySearch};

/// A property listing as stored.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Property {
    pub id: i32,
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
}

/// A search result: one property with its average review rating.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PropertyWithRating {
    pub id: i32,
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

// Properties with no reviews are absent from search results; the inner
// join is the membership rule, not an accident of the aggregate.
const SEARCH_BASE_SQL: &str = r#"SELECT
    properties.id,
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
FROM properties
JOIN property_reviews ON property_reviews.property_id = properties.id"#;

/// Render a search statement and its bind list from the given criteria.
///
/// Row-level criteria become `WHERE` predicates; the rating floor compares
/// against the per-property average, which only exists after grouping, so
/// it becomes a `HAVING` predicate.
fn build_search(search: &PropertySearch, limit: Limit) -> (String, Vec<SqlValue>) {
    let mut query = SelectBuilder::new(SEARCH_BASE_SQL);

    if let Some(city) = &search.city {
        query.filter("properties.city LIKE $?", format!("%{}%", city));
    }
    if let Some(owner_id) = search.owner_id {
        query.filter("properties.owner_id = $?", owner_id);
    }
    if let Some(minimum) = search.minimum_price_per_night {
        query.filter("properties.cost_per_night >= $?", minimum);
    }
    if let Some(maximum) = search.maximum_price_per_night {
        query.filter("properties.cost_per_night <= $?", maximum);
    }
    if let Some(minimum_rating) = search.minimum_rating {
        query.having("AVG(property_reviews.rating) >= $?", minimum_rating);
    }

    // Id breaks cost ties so identical searches return identical order.
    query
        .group_by("properties.id")
        .order_by("properties.cost_per_night, properties.id");
    query.build(limit.get())
}

/// Property repository.
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Search property listings, cheapest first (ties order by id).
    ///
    /// Absent criteria contribute nothing to the statement; an empty
    /// [`PropertySearch`] lists everything up to `limit`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use hearthstay_db::{Limit, PropertyRepo, PropertySearch};
    /// # async fn run(pool: &sqlx::PgPool) -> hearthstay_db::DbResult<()> {
    /// let criteria = PropertySearch {
    ///     city: Some("Vancouver".to_owned()),
    ///     minimum_rating: Some(4.0),
    ///     ..PropertySearch::default()
    /// };
    /// let results = PropertyRepo::new(pool).search(&criteria, Limit::new(20)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(
        &self,
        search: &PropertySearch,
        limit: Limit,
    ) -> DbResult<Vec<PropertyWithRating>> {
        let (sql, binds) = build_search(search, limit);
        if search.is_empty() {
            tracing::debug!(limit = limit.get(), "listing properties without filters");
        } else {
            tracing::debug!(filters = ?search, statement = %sql, "searching properties");
        }

        let mut query = sqlx::query_as::<_, PropertyWithRating>(&sql);
        for value in binds {
            query = match value {
                SqlValue::Int(v) => query.bind(v),
                SqlValue::BigInt(v) => query.bind(v),
                SqlValue::Float(v) => query.bind(v),
                SqlValue::Text(v) => query.bind(v),
            };
        }

        let properties = query.fetch_all(self.pool).await?;
        Ok(properties)
    }

    /// Insert a property listing and return the stored row.
    pub async fn create(&self, property: &NewProperty) -> DbResult<Property> {
        let created: Property = sqlx::query_as(
            r#"
INSERT INTO properties (
    owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
    country, street, city, province, post_code
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING
    id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
    country, street, city, province, post_code
"#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }
}
