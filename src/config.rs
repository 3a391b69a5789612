//! Connection configuration.
//!
//! The store is an embedded SQLite engine, so a "database" is a single file
//! named after the logical database, living under a data directory. Values
//! can be set directly or read from the environment:
//!
//! - `PLATZIGRAM_DATA_DIR`: directory holding database files (default `data`)
//! - `PLATZIGRAM_DB`: logical database name (default `platzigram`)
//! - `PLATZIGRAM_SETUP`: `1`/`true` to provision schema on connect (default off)

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DB: &str = "platzigram";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where database files are created.
    pub data_dir: String,
    /// Logical database name; maps to `<data_dir>/<db>.db`.
    pub db: String,
    /// When set, `connect` provisions the database, tables and indexes
    /// (idempotent, safe against an already-provisioned database).
    pub setup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            db: DEFAULT_DB.to_string(),
            setup: false,
        }
    }
}

impl Config {
    /// Reads the configuration from the environment, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("PLATZIGRAM_DATA_DIR")
                .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            db: env::var("PLATZIGRAM_DB").unwrap_or_else(|_| DEFAULT_DB.to_string()),
            setup: env::var("PLATZIGRAM_SETUP")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    /// Path of the database file for this configuration.
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join(format!("{}.db", self.db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.data_dir, "data");
        assert_eq!(config.db, "platzigram");
        assert!(!config.setup);
        assert_eq!(config.database_path(), PathBuf::from("data/platzigram.db"));
    }

    #[test]
    fn database_path_uses_db_name() {
        let config = Config {
            data_dir: "/tmp/pg".to_string(),
            db: "platzigram_test".to_string(),
            setup: true,
        };
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/pg/platzigram_test.db")
        );
    }
}
