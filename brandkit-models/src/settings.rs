use brandkit_error::BKResult;
use config::{Config, File};
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use sysinfo::System;

use crate::constants::{DATA_DIR, ENV_PREFIX, IN_MEMORY_DB_PATH};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(Arc::new(Inner::default()))
    }
}

impl Settings {
    pub fn new(config_path: String) -> BKResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }

    /// Wrap an already assembled configuration, used by tests and embedders.
    pub fn from_inner(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub db: Db,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Runtime root directory for all relative paths (`./data`, `./logs`).
    ///
    /// Applied by changing the process working directory at startup.
    /// Override with `BK__GENERAL__RUNTIME_DIR=/var/lib/brandkit`.
    #[serde(default = "General::runtime_dir_default")]
    pub runtime_dir: String,
}

impl Default for General {
    fn default() -> Self {
        General {
            runtime_dir: General::runtime_dir_default(),
        }
    }
}

impl General {
    fn runtime_dir_default() -> String {
        ".".into()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn port_default() -> u16 {
        5680
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn workers_default() -> i32 {
        0
    }

    /// Get actual number of workers based on configuration.
    ///
    /// `0` means one worker per CPU; a negative value subtracts from the CPU count.
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            0 => System::new_all().cpus().len().max(1),
            n if n > 0 => n as usize,
            n => std::cmp::max(
                1,
                (System::new_all().cpus().len() as i64 + n as i64).max(1) as usize,
            ),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

/// BKDbConfig describes how to reach the relational store.
pub trait BKDbConfig: Send + Sync {
    /// Returns the database file path.
    fn db_path(&self) -> String;

    /// Generates a URL for the database connection.
    fn to_url(&self) -> String;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl BKDbConfig for Sqlite {
    fn db_path(&self) -> String {
        self.path.clone()
    }

    fn to_url(&self) -> String {
        if self.is_in_memory() {
            return "sqlite::memory:".into();
        }
        if self.auto_create {
            // mode=rwc creates the file when it does not exist
            format!("sqlite:{}/{}?mode=rwc", DATA_DIR, self.path)
        } else {
            format!("sqlite:{}/{}", DATA_DIR, self.path)
        }
    }
}

impl Sqlite {
    /// An in-memory database lives inside a single connection.
    #[inline]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY_DB_PATH
    }

    /// Connection pool ceiling; in-memory databases are pinned to one connection.
    #[inline]
    pub fn effective_max_connections(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.max_connections.max(1)
        }
    }

    fn path_default() -> String {
        "brandkit.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        60000
    }

    fn max_lifetime_default() -> u64 {
        1_800_000
    }

    fn max_connections_default() -> u32 {
        16
    }

    fn auto_create_default() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_urls() {
        let file = Sqlite::default();
        assert_eq!(file.to_url(), "sqlite:./data/brandkit.db?mode=rwc");

        let strict = Sqlite {
            auto_create: false,
            ..Sqlite::default()
        };
        assert_eq!(strict.to_url(), "sqlite:./data/brandkit.db");

        let memory = Sqlite {
            path: IN_MEMORY_DB_PATH.into(),
            max_connections: 8,
            ..Sqlite::default()
        };
        assert_eq!(memory.to_url(), "sqlite::memory:");
        assert_eq!(memory.effective_max_connections(), 1);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let settings = Settings::new("/nonexistent/brandkit-test.toml".into()).unwrap();
        assert_eq!(settings.web.router_prefix, "/api");
        assert_eq!(settings.db.sqlite.path, "brandkit.db");
        assert_eq!(settings.general.runtime_dir, ".");
    }

    #[test]
    fn test_explicit_worker_count() {
        let web = Web {
            workers: 3,
            ..Web::default()
        };
        assert_eq!(web.get_worker_count(), 3);
        assert!(Web::default().get_worker_count() >= 1);
    }
}
