//! Property input payloads and search filters.

use serde::{Deserialize, Serialize};

/// Fields for creating a property listing.
///
/// All fourteen fields are required; anything beyond required/typed columns
/// is the store's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
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

/// Sparse filter criteria for property search.
///
/// Every field is optional; an absent field contributes no predicate. The
/// default value searches with no filters at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySearch {
    /// Case-sensitive substring match on the city name.
    pub city: Option<String>,
    /// Exact match on the owning user.
    pub owner_id: Option<i32>,
    /// Inclusive lower bound on cost per night.
    pub minimum_price_per_night: Option<i32>,
    /// Inclusive upper bound on cost per night.
    pub maximum_price_per_night: Option<i32>,
    /// Inclusive lower bound on the average review rating. Applied after
    /// aggregation - ratings only exist as an average over reviews.
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.owner_id.is_none()
            && self.minimum_price_per_night.is_none()
            && self.maximum_price_per_night.is_none()
            && self.minimum_rating.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_filters() {
        assert!(PropertySearch::default().is_empty());
    }

    #[test]
    fn any_filter_is_not_empty() {
        let search = PropertySearch {
            minimum_rating: Some(4.0),
            ..Default::default()
        };
        assert!(!search.is_empty());
    }
}
