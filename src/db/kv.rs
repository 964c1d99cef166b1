//! Key-value backing for the event store.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;

/// Durable medium holding serialized blobs under string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Blobs stored in the `kv` table of the application database.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Process-local store, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    map: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut map = HashMap::new();
        map.insert(key.to_string(), value.to_string());
        Self { map }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.map.remove(key);
        Ok(())
    }
}
