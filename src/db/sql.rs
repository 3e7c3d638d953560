//! Assembly of dynamically filtered SELECT statements.
//!
//! Filtered list queries are built from optional criteria. Rather than
//! choosing between `WHERE` and `AND` while predicates are appended, the
//! builder collects predicates and bound values and renders each clause
//! keyword exactly once in [`SelectBuilder::build`]. No combination of
//! filters can produce a second `WHERE`.
//!
//! Placeholder numbers are assigned in bind order, so `$n` in the text
//! always refers to the n-th value of the returned bind list.

/// A value bound to a positional placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Float(f64),
    Text(String),
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::BigInt(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

/// Marker in a predicate fragment replaced by the next placeholder.
const PLACEHOLDER: &str = "$?";

/// Accumulates filter predicates and bound values for a SELECT.
///
/// Row predicates render as a single `WHERE a AND b ...` clause; aggregate
/// predicates render as `HAVING ...` after the `GROUP BY`, where conditions
/// on computed aggregates belong.
#[derive(Debug)]
pub struct SelectBuilder {
    base: String,
    filters: Vec<String>,
    aggregate_filters: Vec<String>,
    group_by: Option<String>,
    order_by: Option<String>,
    binds: Vec<SqlValue>,
}

impl SelectBuilder {
    /// Start from a base `SELECT ... FROM ... JOIN ...` fragment.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            filters: Vec::new(),
            aggregate_filters: Vec::new(),
            group_by: None,
            order_by: None,
            binds: Vec::new(),
        }
    }

    /// Add a row predicate. `$?` in the fragment is replaced with the
    /// placeholder for `value`.
    pub fn filter(&mut self, fragment: &str, value: impl Into<SqlValue>) -> &mut Self {
        let fragment = self.number(fragment, value.into());
        self.filters.push(fragment);
        self
    }

    /// Add a post-aggregation predicate, rendered under `HAVING`.
    pub fn having(&mut self, fragment: &str, value: impl Into<SqlValue>) -> &mut Self {
        let fragment = self.number(fragment, value.into());
        self.aggregate_filters.push(fragment);
        self
    }

    /// Set the `GROUP BY` expression.
    pub fn group_by(&mut self, expr: &str) -> &mut Self {
        self.group_by = Some(expr.to_owned());
        self
    }

    /// Set the `ORDER BY` expression.
    pub fn order_by(&mut self, expr: &str) -> &mut Self {
        self.order_by = Some(expr.to_owned());
        self
    }

    /// Render the statement, appending `LIMIT` as the final bound
    /// parameter. Returns the SQL text and the values in bind order.
    pub fn build(mut self, limit: i64) -> (String, Vec<SqlValue>) {
        let mut sql = self.base;

        if !self.filters.is_empty() {
            sql.push_str("\nWHERE ");
            sql.push_str(&self.filters.join("\n  AND "));
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str("\nGROUP BY ");
            sql.push_str(group_by);
        }
        if !self.aggregate_filters.is_empty() {
            sql.push_str("\nHAVING ");
            sql.push_str(&self.aggregate_filters.join("\n  AND "));
        }
        if let Some(order_by) = &self.order_by {
            sql.push_str("\nORDER BY ");
            sql.push_str(order_by);
        }

        self.binds.push(limit.into());
        sql.push_str(&format!("\nLIMIT ${}", self.binds.len()));

        (sql, self.binds)
    }

    /// Record the value and substitute its placeholder into the fragment.
    fn number(&mut self, fragment: &str, value: SqlValue) -> String {
        debug_assert!(
            fragment.contains(PLACEHOLDER),
            "predicate fragment has no {} marker: {}",
            PLACEHOLDER,
            fragment
        );
        self.binds.push(value);
        fragment.replace(PLACEHOLDER, &format!("${}", self.binds.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_predicates_renders_no_clauses() {
        let (sql, binds) = SelectBuilder::new("SELECT id FROM things").build(10);

        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
        assert!(sql.ends_with("LIMIT $1"));
        assert_eq!(binds, vec![SqlValue::BigInt(10)]);
    }

    #[test]
    fn single_filter_renders_where() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder.filter("name LIKE $?", "%van%");
        let (sql, binds) = builder.build(10);

        assert!(sql.contains("WHERE name LIKE $1"));
        assert_eq!(
            binds,
            vec![SqlValue::Text("%van%".to_owned()), SqlValue::BigInt(10)]
        );
    }

    #[test]
    fn where_appears_once_for_many_filters() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder
            .filter("a = $?", 1)
            .filter("b >= $?", 2)
            .filter("c <= $?", 3);
        let (sql, _) = builder.build(10);

        assert_eq!(sql.matches("WHERE").count(), 1);
        assert_eq!(sql.matches("AND").count(), 2);
    }

    #[test]
    fn aggregate_filter_lands_after_group_by() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder.filter("a = $?", 1).having("AVG(score) >= $?", 4.0);
        builder.group_by("id").order_by("cost");
        let (sql, _) = builder.build(10);

        let where_at = sql.find("WHERE").unwrap();
        let group_at = sql.find("GROUP BY id").unwrap();
        let having_at = sql.find("HAVING AVG(score) >= $2").unwrap();
        let order_at = sql.find("ORDER BY cost").unwrap();
        let limit_at = sql.find("LIMIT $3").unwrap();

        assert!(where_at < group_at);
        assert!(group_at < having_at);
        assert!(having_at < order_at);
        assert!(order_at < limit_at);
    }

    #[test]
    fn aggregate_only_renders_having_without_where() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder.having("AVG(score) >= $?", 4.0);
        builder.group_by("id");
        let (sql, binds) = builder.build(10);

        assert!(!sql.contains("WHERE"));
        assert!(sql.contains("HAVING AVG(score) >= $1"));
        assert_eq!(binds, vec![SqlValue::Float(4.0), SqlValue::BigInt(10)]);
    }

    #[test]
    fn placeholders_follow_bind_order() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder
            .filter("a LIKE $?", "%x%")
            .filter("b = $?", 7)
            .having("AVG(score) >= $?", 3.5);
        let (sql, binds) = builder.build(25);

        assert!(sql.contains("a LIKE $1"));
        assert!(sql.contains("b = $2"));
        assert!(sql.contains("AVG(score) >= $3"));
        assert!(sql.ends_with("LIMIT $4"));
        assert_eq!(
            binds,
            vec![
                SqlValue::Text("%x%".to_owned()),
                SqlValue::Int(7),
                SqlValue::Float(3.5),
                SqlValue::BigInt(25),
            ]
        );
    }

    #[test]
    fn limit_is_always_the_final_bind() {
        let mut builder = SelectBuilder::new("SELECT id FROM things");
        builder.filter("a = $?", 1);
        let (sql, binds) = builder.build(99);

        assert_eq!(binds.last(), Some(&SqlValue::BigInt(99)));
        assert!(sql.ends_with(&format!("LIMIT ${}", binds.len())));
    }
}
