// Restaurant entity + query component
//
// Five reads over `restaurants`. Zero rows is reported as `NotFound`,
// never as an execution failure.

use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::db::{FromRow, Store};
use crate::error::{require_row, require_rows, QueryError, QueryResult};
use crate::params::parse_id;

// ============================================================================
// RESTAURANT ENTITY
// ============================================================================

/// One row of `restaurants`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,

    /// Free text; filtering compares it case-insensitively
    pub cuisine: String,

    #[serde(with = "crate::entities::flag")]
    pub is_veg: bool,

    #[serde(with = "crate::entities::flag")]
    pub has_outdoor_seating: bool,

    #[serde(with = "crate::entities::flag")]
    pub is_luxury: bool,

    pub rating: f64,
}

impl FromRow for Restaurant {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Restaurant {
            id: row.get("id")?,
            name: row.get("name")?,
            cuisine: row.get("cuisine")?,
            is_veg: row.get("isVeg")?,
            has_outdoor_seating: row.get("hasOutdoorSeating")?,
            is_luxury: row.get("isLuxury")?,
            rating: row.get("rating")?,
        })
    }
}

// ============================================================================
// QUERY COMPONENT
// ============================================================================

const SELECT_RESTAURANTS: &str =
    "SELECT id, name, cuisine, isVeg, hasOutdoorSeating, isLuxury, rating FROM restaurants";

const NO_RESTAURANTS: &str = "No restaurants found";

/// Read operations over `restaurants`
#[derive(Debug, Clone)]
pub struct RestaurantQueries {
    store: Arc<Store>,
}

impl RestaurantQueries {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// All restaurants in the store's natural order
    pub fn all(&self) -> QueryResult<Vec<Restaurant>> {
        let rows: Vec<Restaurant> = self.store.fetch_all(SELECT_RESTAURANTS, [])?;
        debug!(rows = rows.len(), "restaurants: all");

        require_rows(rows, NO_RESTAURANTS)
    }

    /// Exact match on id
    pub fn by_id(&self, id: i64) -> QueryResult<Restaurant> {
        let row: Option<Restaurant> = self
            .store
            .fetch_one(&format!("{} WHERE id = ?1", SELECT_RESTAURANTS), [id])?;
        debug!(id, found = row.is_some(), "restaurants: by id");

        require_row(row, format!("No restaurants found for id {}", id))
    }

    /// Coerce a raw path segment into an id, then look it up.
    ///
    /// A segment with no leading integer is reported as not found without
    /// touching the store.
    pub fn by_raw_id(&self, raw: &str) -> QueryResult<Restaurant> {
        match parse_id(raw) {
            Some(id) => self.by_id(id),
            None => {
                debug!(raw, "restaurants: id is not a number");
                Err(QueryError::NotFound(format!(
                    "No restaurants found for id {}",
                    raw
                )))
            }
        }
    }

    /// Case-insensitive exact match on cuisine
    pub fn by_cuisine(&self, cuisine: &str) -> QueryResult<Vec<Restaurant>> {
        let cuisine = cuisine.to_lowercase();

        let rows: Vec<Restaurant> = self.store.fetch_all(
            &format!("{} WHERE LOWER(cuisine) = ?1", SELECT_RESTAURANTS),
            [&cuisine],
        )?;
        debug!(%cuisine, rows = rows.len(), "restaurants: by cuisine");

        require_rows(rows, format!("No restaurants found for {} cuisine", cuisine))
    }

    /// Restaurants matching all three flags.
    ///
    /// A `None` flag binds as `NULL` and therefore matches nothing.
    pub fn filter(
        &self,
        is_veg: Option<bool>,
        has_outdoor_seating: Option<bool>,
        is_luxury: Option<bool>,
    ) -> QueryResult<Vec<Restaurant>> {
        let rows: Vec<Restaurant> = self.store.fetch_all(
            &format!(
                "{} WHERE isVeg = ?1 AND hasOutdoorSeating = ?2 AND isLuxury = ?3",
                SELECT_RESTAURANTS
            ),
            params![is_veg, has_outdoor_seating, is_luxury],
        )?;
        debug!(
            ?is_veg,
            ?has_outdoor_seating,
            ?is_luxury,
            rows = rows.len(),
            "restaurants: filter"
        );

        require_rows(rows, NO_RESTAURANTS)
    }

    /// All restaurants, highest rating first
    pub fn sorted_by_rating(&self) -> QueryResult<Vec<Restaurant>> {
        let rows: Vec<Restaurant> = self
            .store
            .fetch_all(&format!("{} ORDER BY rating DESC", SELECT_RESTAURANTS), [])?;
        debug!(rows = rows.len(), "restaurants: sorted by rating");

        require_rows(rows, NO_RESTAURANTS)
    }
}
