use axum::extract::{Path, Query, State};
use axum::response::Response;

use super::response::found;
use super::{run_query, AppState};
use crate::error::QueryError;
use crate::params::{query_value, restaurant_flag};

/// GET /restaurants
pub async fn list(State(state): State<AppState>) -> Result<Response, QueryError> {
    let queries = state.restaurants;
    let rows = run_query(move || queries.all()).await?;
    Ok(found(rows))
}

/// GET /restaurants/details/:id
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, QueryError> {
    let queries = state.restaurants;
    let restaurant = run_query(move || queries.by_raw_id(&id)).await?;
    Ok(found(restaurant))
}

/// GET /restaurants/cuisine/:cuisine
pub async fn by_cuisine(
    State(state): State<AppState>,
    Path(cuisine): Path<String>,
) -> Result<Response, QueryError> {
    let queries = state.restaurants;
    let rows = run_query(move || queries.by_cuisine(&cuisine)).await?;
    Ok(found(rows))
}

/// GET /restaurants/filter?isVeg=&hasOutdoorSeating=&isLuxury=
///
/// Raw query pairs: values are coerced, never rejected.
pub async fn filter(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, QueryError> {
    let is_veg = restaurant_flag(query_value(&pairs, "isVeg"));
    let has_outdoor_seating = restaurant_flag(query_value(&pairs, "hasOutdoorSeating"));
    let is_luxury = restaurant_flag(query_value(&pairs, "isLuxury"));

    let queries = state.restaurants;
    let rows =
        run_query(move || queries.filter(is_veg, has_outdoor_seating, is_luxury)).await?;
    Ok(found(rows))
}

/// GET /restaurants/sort-by-rating
pub async fn sort_by_rating(State(state): State<AppState>) -> Result<Response, QueryError> {
    let queries = state.restaurants;
    let rows = run_query(move || queries.sorted_by_rating()).await?;
    Ok(found(rows))
}
