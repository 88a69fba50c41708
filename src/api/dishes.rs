use axum::extract::{Path, Query, State};
use axum::response::Response;

use super::response::found;
use super::{run_query, AppState};
use crate::error::QueryError;
use crate::params::{dish_veg_flag, query_value};

/// GET /dishes
pub async fn list(State(state): State<AppState>) -> Result<Response, QueryError> {
    let queries = state.dishes;
    let rows = run_query(move || queries.all()).await?;
    Ok(found(rows))
}

/// GET /dishes/details/:id
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, QueryError> {
    let queries = state.dishes;
    let dish = run_query(move || queries.by_raw_id(&id)).await?;
    Ok(found(dish))
}

/// GET /dishes/filter?isVeg=
///
/// The query string is taken as raw pairs so no shape of it is rejected.
pub async fn filter(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, QueryError> {
    let is_veg = dish_veg_flag(query_value(&pairs, "isVeg"));

    let queries = state.dishes;
    let rows = run_query(move || queries.filter_by_veg(is_veg)).await?;
    Ok(found(rows))
}

/// GET /dishes/sort-by-price
pub async fn sort_by_price(State(state): State<AppState>) -> Result<Response, QueryError> {
    let queries = state.dishes;
    let rows = run_query(move || queries.sorted_by_price()).await?;
    Ok(found(rows))
}
