// Entity models and their query components
//
// Each entity module owns:
// - the row type, serialized with the table's column names
// - a query component issuing exactly one parameterized read per operation

pub mod dish;
pub mod restaurant;

pub use dish::{Dish, DishQueries};
pub use restaurant::{Restaurant, RestaurantQueries};

/// Serde adapter for flag columns: `bool` in Rust, `0`/`1` on the wire
pub mod flag {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::invalid_value(
                Unexpected::Unsigned(other.into()),
                &"flag value 0 or 1",
            )),
        }
    }
}
