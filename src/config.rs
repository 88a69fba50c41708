// Centralized configuration (environment variables + defaults).

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "database.sqlite";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_CONNECTIONS: usize = crate::db::DEFAULT_CONNECTIONS;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// SQLite file opened read-only at startup
    pub database_path: PathBuf,
    /// Read-only connections kept open to it
    pub database_connections: usize,
    /// Address to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Config {
    /// Read `DATABASE_PATH`, `DATABASE_CONNECTIONS`, `HOST` and `PORT`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let database_connections = match lookup("DATABASE_CONNECTIONS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| {
                    format!("DATABASE_CONNECTIONS must be a positive integer, got {:?}", raw)
                })?,
            None => DEFAULT_DATABASE_CONNECTIONS,
        };

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            database_path,
            database_connections,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_path, PathBuf::from("database.sqlite"));
        assert_eq!(config.database_connections, 4);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/var/lib/dine/db.sqlite"),
            ("DATABASE_CONNECTIONS", "8"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/dine/db.sqlite"));
        assert_eq!(config.database_connections, 8);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_connection_count() {
        for raw in ["0", "many", "-2"] {
            let err =
                Config::from_lookup(lookup_from(&[("DATABASE_CONNECTIONS", raw)])).unwrap_err();
            assert!(err.to_string().contains("DATABASE_CONNECTIONS"));
        }
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
