//! Row-cap type for list queries.

use serde::{Deserialize, Serialize};

/// Default number of rows returned by list queries.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum number of rows a list query returns.
///
/// Every construction path clamps to at least 1, deserialization included,
/// so route-layer input cannot request `LIMIT 0` or a negative cap. Always
/// bound as the final positional parameter of the statement, never
/// interpolated into the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Limit(i64);

impl Limit {
    /// Create a limit, clamped to a minimum of 1.
    pub fn new(n: i64) -> Self {
        Self(n.max(1))
    }

    /// The value to bind for `LIMIT $n`.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

impl From<i64> for Limit {
    fn from(n: i64) -> Self {
        Self::new(n)
    }
}

impl From<Limit> for i64 {
    fn from(limit: Limit) -> i64 {
        limit.0
    }
}

/// Route layers pass an optional limit; absent means the default of 10.
impl From<Option<i64>> for Limit {
    fn from(n: Option<i64>) -> Self {
        match n {
            Some(n) => Self::new(n),
            None => Self::default(),
        }
    }
}
