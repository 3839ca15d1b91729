//! Dynamic filter construction for freight listings.
//!
//! [`FreightFilter`] normalizes the optional search inputs and
//! [`freight_predicate`] turns them into one boolean SQL expression. Every
//! user-supplied value is sent as a bound parameter. Case folding goes through
//! the `unicode_lower` function registered in [`crate::db`], so patterns and
//! column values are lowered by the same rule.

use diesel::dsl::sql;
use diesel::expression::BoxableExpression;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::Sqlite;

use crate::schema::freights;

/// Composable predicate over the `freights` table.
pub type FreightPredicate = Box<dyn BoxableExpression<freights::table, Sqlite, SqlType = Bool>>;

/// Optional filters applied to a freight listing. Blank inputs are dropped on
/// construction so `Some` always holds a non-blank value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreightFilter {
    pub search_term: Option<String>,
    pub status: Option<String>,
    pub property_key: Option<String>,
    pub property_value: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl FreightFilter {
    pub fn new(
        search_term: Option<String>,
        status: Option<String>,
        property_key: Option<String>,
        property_value: Option<String>,
    ) -> Self {
        Self {
            search_term: non_blank(search_term),
            status: non_blank(status),
            property_key: non_blank(property_key),
            property_value: non_blank(property_value),
        }
    }

    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = non_blank(Some(term.into()));
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = non_blank(Some(status.into()));
        self
    }

    pub fn property_key(mut self, key: impl Into<String>) -> Self {
        self.property_key = non_blank(Some(key.into()));
        self
    }

    pub fn property_value(mut self, value: impl Into<String>) -> Self {
        self.property_value = non_blank(Some(value.into()));
        self
    }

    /// True when no filter is active.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
            && self.status.is_none()
            && self.property_key.is_none()
            && self.property_value.is_none()
    }
}

/// JSON path selecting a top-level member, quoted so keys may contain dots.
fn property_path(key: &str) -> String {
    format!("$.\"{}\"", key.replace('"', "\\\""))
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}

fn property_predicate(key: &str, value: Option<&str>) -> FreightPredicate {
    let path = property_path(key);
    match value {
        // Booleans are compared by their JSON spelling, everything else by its
        // extracted text.
        Some(value) => Box::new(
            sql::<Bool>("(json_extract(freights.properties, ")
                .bind::<Text, _>(path.clone())
                .sql(") IS NOT NULL AND unicode_lower(CASE json_type(freights.properties, ")
                .bind::<Text, _>(path.clone())
                .sql(
                    ") WHEN 'true' THEN 'true' WHEN 'false' THEN 'false' \
                     ELSE CAST(json_extract(freights.properties, ",
                )
                .bind::<Text, _>(path)
                .sql(") AS TEXT) END) LIKE ")
                .bind::<Text, _>(contains_pattern(value))
                .sql(")"),
        ),
        None => Box::new(
            sql::<Bool>("json_extract(freights.properties, ")
                .bind::<Text, _>(path)
                .sql(") IS NOT NULL"),
        ),
    }
}

fn search_predicate(term: &str) -> FreightPredicate {
    let pattern = contains_pattern(term);
    Box::new(
        sql::<Bool>("(unicode_lower(freights.client_name) LIKE ")
            .bind::<Text, _>(pattern.clone())
            .sql(" OR unicode_lower(freights.status) LIKE ")
            .bind::<Text, _>(pattern.clone())
            .sql(" OR unicode_lower(freights.properties) LIKE ")
            .bind::<Text, _>(pattern)
            .sql(")"),
    )
}

/// Builds the predicate for `filter`. Active conditions are joined with AND;
/// an empty filter matches every row.
pub fn freight_predicate(filter: &FreightFilter) -> FreightPredicate {
    let mut predicates: Vec<FreightPredicate> = Vec::new();

    if let Some(status) = &filter.status {
        predicates.push(Box::new(freights::status.eq(status.clone())));
    }

    match (&filter.property_key, &filter.property_value) {
        (Some(key), value) => predicates.push(property_predicate(key, value.as_deref())),
        (None, Some(value)) => {
            log::warn!(
                "Ignoring property value filter {value:?} without a property key; use the search term instead"
            );
        }
        (None, None) => {}
    }

    if let Some(term) = &filter.search_term {
        predicates.push(search_predicate(term));
    }

    predicates
        .into_iter()
        .reduce(|acc, predicate| -> FreightPredicate { Box::new(acc.and(predicate)) })
        .unwrap_or_else(|| -> FreightPredicate { Box::new(sql::<Bool>("1 = 1")) })
}
