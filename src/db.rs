// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Coinkeep", "coinkeep"));

/// Storage keys, one per entity collection.
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const CATEGORIES: &str = "categories";
    pub const GOALS: &str = "goals";
    pub const SAVINGS_RECORDS: &str = "savings_records";
    pub const SETTINGS: &str = "settings";
    pub const WALLETS: &str = "wallets";
    pub const TAGS: &str = "tags";
    pub const RECURRING: &str = "recurring";
    pub const TEMPLATES: &str = "templates";
    pub const WISHES: &str = "wishes";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const CHECKINS: &str = "checkins";
}

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("coinkeep.sqlite"))
}

/// Key-value persistence adapter. Each key holds one JSON-serialized
/// collection; the in-memory stores stay authoritative for the session.
pub struct Db {
    conn: Connection,
}

impl Db {
    pub fn open() -> Result<Self> {
        let path = db_path()?;
        let conn =
            Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Db { conn })
    }

    /// Read one collection. A missing key or a row that no longer parses
    /// falls back to `default` without raising.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw: Option<String> = match self
            .conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()
        {
            Ok(v) => v,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using default");
                return default;
            }
        };
        match raw {
            Some(s) => match serde_json::from_str(&s) {
                Ok(v) => v,
                Err(e) => {
                    warn!(key, error = %e, "corrupt collection, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Write one collection. Failures are logged and swallowed; callers
    /// keep going on in-memory state.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(j) => j,
            Err(e) => {
                warn!(key, error = %e, "serialize failed, collection not persisted");
                return;
            }
        };
        if let Err(e) = self.conn.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, json],
        ) {
            warn!(key, error = %e, "storage write failed, collection not persisted");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self
            .conn
            .execute("DELETE FROM kv WHERE key=?1", params![key])
        {
            warn!(key, error = %e, "storage remove failed");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.conn.execute("DELETE FROM kv", []) {
            warn!(error = %e, "storage clear failed");
        }
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_yields_default() {
        let db = Db::open_in_memory().unwrap();
        assert_eq!(db.get("missing", Vec::<String>::new()), Vec::<String>::new());
    }

    #[test]
    fn set_then_get_round_trips() {
        let db = Db::open_in_memory().unwrap();
        db.set("list", &vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            db.get("list", Vec::<String>::new()),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn corrupt_value_yields_default() {
        let db = Db::open_in_memory().unwrap();
        db.conn
            .execute("INSERT INTO kv(key, value) VALUES('bad', 'not json')", [])
            .unwrap();
        assert_eq!(db.get("bad", Vec::<String>::new()), Vec::<String>::new());
    }

    #[test]
    fn remove_drops_the_key() {
        let db = Db::open_in_memory().unwrap();
        db.set("gone", &7u32);
        db.remove("gone");
        assert_eq!(db.get("gone", 0u32), 0);
    }
}
