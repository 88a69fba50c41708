// Dish entity + query component

use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::db::{FromRow, Store};
use crate::error::{require_row, require_rows, QueryError, QueryResult};
use crate::params::parse_id;

/// One row of `dishes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub price: f64,

    #[serde(with = "crate::entities::flag")]
    pub is_veg: bool,
}

impl FromRow for Dish {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Dish {
            id: row.get("id")?,
            name: row.get("name")?,
            price: row.get("price")?,
            is_veg: row.get("isVeg")?,
        })
    }
}

const SELECT_DISHES: &str = "SELECT id, name, price, isVeg FROM dishes";

const NO_DISHES: &str = "No dishes found";
const NO_DISH: &str = "No dish found";

/// Read operations over `dishes`
#[derive(Debug, Clone)]
pub struct DishQueries {
    store: Arc<Store>,
}

impl DishQueries {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn all(&self) -> QueryResult<Vec<Dish>> {
        let rows: Vec<Dish> = self.store.fetch_all(SELECT_DISHES, [])?;
        debug!(rows = rows.len(), "dishes: all");

        require_rows(rows, NO_DISHES)
    }

    pub fn by_id(&self, id: i64) -> QueryResult<Dish> {
        let row: Option<Dish> = self
            .store
            .fetch_one(&format!("{} WHERE id = ?1", SELECT_DISHES), [id])?;
        debug!(id, found = row.is_some(), "dishes: by id");

        require_row(row, NO_DISH)
    }

    /// Same coercion as restaurants: no leading integer means not found
    pub fn by_raw_id(&self, raw: &str) -> QueryResult<Dish> {
        match parse_id(raw) {
            Some(id) => self.by_id(id),
            None => {
                debug!(raw, "dishes: id is not a number");
                Err(QueryError::NotFound(NO_DISH.to_string()))
            }
        }
    }

    /// Dishes whose stored flag equals `is_veg`
    pub fn filter_by_veg(&self, is_veg: bool) -> QueryResult<Vec<Dish>> {
        let rows: Vec<Dish> = self
            .store
            .fetch_all(&format!("{} WHERE isVeg = ?1", SELECT_DISHES), [is_veg])?;
        debug!(is_veg, rows = rows.len(), "dishes: filter");

        require_rows(rows, NO_DISHES)
    }

    /// All dishes, cheapest first
    pub fn sorted_by_price(&self) -> QueryResult<Vec<Dish>> {
        let rows: Vec<Dish> = self
            .store
            .fetch_all(&format!("{} ORDER BY price ASC", SELECT_DISHES), [])?;
        debug!(rows = rows.len(), "dishes: sorted by price");

        require_rows(rows, NO_DISHES)
    }
}
