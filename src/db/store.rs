//! Persistence of the entry list.
//!
//! The whole list lives as one JSON document under a single storage key,
//! read whole and written whole (last writer wins).

use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::models::entry::FoodEntry;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const DEFAULT_STORAGE_KEY: &str = "foodEntries";

pub trait EntryStore {
    /// Read the full list. Missing or corrupt data yields an empty list.
    fn load(&mut self) -> AppResult<Vec<FoodEntry>>;

    /// Replace the full list.
    fn save(&mut self, entries: &[FoodEntry]) -> AppResult<()>;
}

/// Key-value store backed by the `kv` table.
pub struct SqliteStore<'a> {
    conn: &'a Connection,
    key: String,
}

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    fn read_raw(&self) -> AppResult<Option<String>> {
        let raw = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [&self.key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(raw)
    }
}

impl EntryStore for SqliteStore<'_> {
    fn load(&mut self) -> AppResult<Vec<FoodEntry>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // fail open: unreadable data counts as "no entries"
                let _ = ttlog(
                    self.conn,
                    "load",
                    &self.key,
                    &format!("Ignoring corrupt stored entries: {e}"),
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entries: &[FoodEntry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)?;
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![self.key, json, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

/// In-memory store; keeps the serialized form so tests exercise the same
/// JSON round trip as the real store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }
}

impl EntryStore for MemoryStore {
    fn load(&mut self) -> AppResult<Vec<FoodEntry>> {
        Ok(self
            .raw
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default())
    }

    fn save(&mut self, entries: &[FoodEntry]) -> AppResult<()> {
        self.raw = Some(serde_json::to_string(entries)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::models::meal::Meal;
    use chrono::NaiveDate;

    fn entry(id: &str) -> FoodEntry {
        FoodEntry {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            meal: Meal::Lunch,
            food: "米饭".to_string(),
            calories: 200.0,
            protein: 4.0,
            carbs: 45.0,
            fat: 0.5,
        }
    }

    #[test]
    fn sqlite_store_overwrites_whole_list() {
        let pool = DbPool::in_memory().unwrap();
        let mut store = SqliteStore::new(&pool.conn, DEFAULT_STORAGE_KEY);

        assert!(store.load().unwrap().is_empty());

        store.save(&[entry("1"), entry("2")]).unwrap();
        store.save(&[entry("3")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![entry("3")]);
    }

    #[test]
    fn sqlite_store_fails_open_on_corrupt_json() {
        let pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES ('foodEntries', '{not json', '')",
                [],
            )
            .unwrap();

        let mut store = SqliteStore::new(&pool.conn, DEFAULT_STORAGE_KEY);
        assert!(store.load().unwrap().is_empty());

        let warnings: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'load'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn reads_browser_shaped_json() {
        let raw = r#"[{"id":"1760860800000","date":"2026-10-19","meal":"snack","food":"苹果","calories":52,"protein":0.3,"carbs":14,"fat":0.2}]"#;
        let mut store = MemoryStore::with_raw(raw);
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].meal, Meal::Snack);
        assert_eq!(loaded[0].calories, 52.0);
    }

    #[test]
    fn memory_store_fails_open() {
        let mut store = MemoryStore::with_raw("garbage");
        assert!(store.load().unwrap().is_empty());
    }
}
