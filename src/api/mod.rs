// HTTP mapping layer
//
// Each route extracts its parameters, runs exactly one query operation on the
// blocking pool, and renders the outcome as an `Envelope`.

pub mod dishes;
pub mod health;
pub mod response;
pub mod restaurants;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::db::Store;
use crate::entities::{DishQueries, RestaurantQueries};
use crate::error::{QueryError, QueryResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub restaurants: RestaurantQueries,
    pub dishes: DishQueries,
}

impl AppState {
    /// Inject one store handle into both query components
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            restaurants: RestaurantQueries::new(store.clone()),
            dishes: DishQueries::new(store.clone()),
            store,
        }
    }
}

/// Build the router for all query routes plus `/health`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/restaurants", get(restaurants::list))
        .route("/restaurants/details/:id", get(restaurants::details))
        .route("/restaurants/cuisine/:cuisine", get(restaurants::by_cuisine))
        .route("/restaurants/filter", get(restaurants::filter))
        .route("/restaurants/sort-by-rating", get(restaurants::sort_by_rating))
        .route("/dishes", get(dishes::list))
        .route("/dishes/details/:id", get(dishes::details))
        .route("/dishes/filter", get(dishes::filter))
        .route("/dishes/sort-by-price", get(dishes::sort_by_price))
        .route("/health", get(health::health_check))
        .with_state(state)
}

/// Run a synchronous store operation off the async executor.
///
/// A panicked or cancelled task becomes an execution failure.
pub(crate) async fn run_query<T, F>(query: F) -> QueryResult<T>
where
    F: FnOnce() -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(query)
        .await
        .map_err(|e| QueryError::Execution(e.to_string()))?
}
