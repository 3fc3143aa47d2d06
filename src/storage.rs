use crate::dlog;
use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::Path;

/// Local key-value storage with string keys and string values.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key-value slots kept in a single SQLite table.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open(path: &Path) -> Result<Self> {
        let display = path.display();
        let conn =
            Connection::open(path).with_context(|| format!("Opening SQLite DB: {display}"))?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Opening in-memory SQLite DB")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        if !table_exists(&conn, "local_storage")? {
            tracing::info!("creating local_storage table");
        }
        conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS local_storage (
              key    TEXT PRIMARY KEY,
              value  TEXT NOT NULL
            );
            ",
        )
        .context("Ensuring SQLite schema")?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Reading storage slot {key:?}"))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                r"
                INSERT INTO local_storage (key, value) VALUES (?1, ?2)
                ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
                ",
                params![key, value],
            )
            .with_context(|| format!("Writing storage slot {key:?}"))?;
        dlog!("storage_write key={key} bytes={}", value.len());
        Ok(())
    }
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1 LIMIT 1")?;
    let mut rows = stmt.query([table])?;
    Ok(rows.next()?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_overwrites() {
        let mut s = MemoryStorage::new();
        assert_eq!(s.get_item("workouts").unwrap(), None);
        s.set_item("workouts", "[]").unwrap();
        s.set_item("workouts", "[1]").unwrap();
        assert_eq!(s.get_item("workouts").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn sqlite_storage_is_last_write_wins() {
        let mut s = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(s.get_item("workouts").unwrap(), None);
        s.set_item("workouts", "first").unwrap();
        s.set_item("workouts", "second").unwrap();
        s.set_item("other", "x").unwrap();
        assert_eq!(s.get_item("workouts").unwrap().as_deref(), Some("second"));
        assert_eq!(s.get_item("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn sqlite_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapty.sqlite3");

        {
            let mut s = SqliteStorage::open(&path).unwrap();
            s.set_item("workouts", "[]").unwrap();
        }

        let s = SqliteStorage::open(&path).unwrap();
        assert_eq!(s.get_item("workouts").unwrap().as_deref(), Some("[]"));
    }
}
