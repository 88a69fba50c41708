// Storage collaborator - a small pool of SQLite handles, opened once, queried many times
//
// Every read goes through `fetch_all` / `fetch_one` with bound parameters;
// no SQL is ever assembled from request input.

use rusqlite::{Connection, OpenFlags, OptionalExtension, Params, Row};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, TryLockError};
use thiserror::Error;
use tracing::debug;

/// Connections opened by `Store::open`
pub const DEFAULT_CONNECTIONS: usize = 4;

/// Failure raised by the store while executing a statement
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database handle is unusable after a panicked query")]
    Poisoned,
}

/// Maps one result row onto a typed entity
pub trait FromRow: Sized {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

/// Shared handle to the relational store.
///
/// `rusqlite::Connection` is `Send` but not `Sync`, so each connection sits
/// behind its own mutex. A statement takes the first idle connection and only
/// waits when every connection is busy.
#[derive(Debug)]
pub struct Store {
    conns: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl Store {
    /// Open an existing database file read-only with the default pool size
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Self::open_pool(path, DEFAULT_CONNECTIONS)
    }

    /// Open `connections` read-only handles to the same file (at least one)
    pub fn open_pool(path: &Path, connections: usize) -> Result<Self, StoreError> {
        let conns = (0..connections.max(1))
            .map(|_| {
                Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .map(Mutex::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(path = %path.display(), connections = conns.len(), "opened read-only store");

        Ok(Self {
            conns,
            next: AtomicUsize::new(0),
        })
    }

    /// Open an empty in-memory database (tests and local fixtures)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    /// Wrap an already prepared connection.
    ///
    /// In-memory databases are private to their connection, so this is a pool of one.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conns: vec![Mutex::new(conn)],
            next: AtomicUsize::new(0),
        }
    }

    /// Number of pooled connections
    pub fn connections(&self) -> usize {
        self.conns.len()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        let start = self.next.fetch_add(1, Ordering::Relaxed) % self.conns.len();

        for offset in 0..self.conns.len() {
            match self.conns[(start + offset) % self.conns.len()].try_lock() {
                Ok(conn) => return Ok(conn),
                Err(TryLockError::WouldBlock) => continue,
                Err(TryLockError::Poisoned(_)) => return Err(StoreError::Poisoned),
            }
        }

        // All busy
        self.conns[start].lock().map_err(|_| StoreError::Poisoned)
    }

    /// Execute a parameterized query and collect every row
    pub fn fetch_all<T, P>(&self, sql: &str, params: P) -> Result<Vec<T>, StoreError>
    where
        T: FromRow,
        P: Params,
    {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;

        let rows = stmt
            .query_map(params, |row| T::from_row(row))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    /// Execute a parameterized query and return the first row, if any
    pub fn fetch_one<T, P>(&self, sql: &str, params: P) -> Result<Option<T>, StoreError>
    where
        T: FromRow,
        P: Params,
    {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;

        let row = stmt.query_row(params, |row| T::from_row(row)).optional()?;

        Ok(row)
    }

    /// Round-trip a trivial statement to prove the handle is usable
    pub fn ping(&self) -> Result<(), StoreError> {
        let conn = self.lock()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}

/// Create the two tables the service reads from.
///
/// The server never calls this: production databases arrive populated.
pub fn create_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            cuisine TEXT NOT NULL,
            isVeg INTEGER NOT NULL DEFAULT 0,
            hasOutdoorSeating INTEGER NOT NULL DEFAULT 0,
            isLuxury INTEGER NOT NULL DEFAULT 0,
            rating REAL NOT NULL
        );

        CREATE TABLE IF NOT EXISTS dishes (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            isVeg INTEGER NOT NULL DEFAULT 0
        );",
    )?;

    Ok(())
}
