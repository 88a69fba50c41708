// Dine Query - Core Library
// Read-only restaurant & dish queries over SQLite, served through axum

pub mod api;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod params;

// Re-export commonly used types
pub use api::{router, AppState};
pub use config::Config;
pub use db::{create_schema, FromRow, Store, StoreError};
pub use entities::{Dish, DishQueries, Restaurant, RestaurantQueries};
pub use error::{QueryError, QueryResult};
pub use params::{dish_veg_flag, parse_id, restaurant_flag};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
