//! Application configuration.
//!
//! # Responsibility
//! - Name the storage slot, the database file and the log level.
//! - Carry notice auto-hide durations and the app metadata stamped on exports.
//!
//! # Invariants
//! - Every field has a built-in default; a partial document only overrides
//!   the fields it names.
//! - Keys are camelCase, like every other JSON document the app writes.
//! - `storageKey` and `dbFileName` are never blank, `logLevel` is a known
//!   level, and notice durations lie in `1..=MAX_NOTICE_MS`.

use crate::db::{open_db, DbResult};
use chrono::TimeDelta;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "projectLinks";
pub const DEFAULT_DB_FILE_NAME: &str = "projlinks.sqlite3";
pub const DEFAULT_SUCCESS_NOTICE_MS: u64 = 3_000;
pub const DEFAULT_WARNING_NOTICE_MS: u64 = 2_000;
/// One hour.
pub const MAX_NOTICE_MS: u64 = 60 * 60 * 1_000;

/// Application identity written into every export envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    pub version: String,
    pub creator: String,
    /// ISO-8601 instant; rendered in the page footer.
    pub created_date: String,
    pub updated_date: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            version: "0.0.2".to_string(),
            creator: "Gerasimos Makis Mouzakitis".to_string(),
            created_date: "2025-09-19T08:52:40.000Z".to_string(),
            updated_date: "2025-09-19T08:58:32.000Z".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Key of the slot holding the serialized project list.
    pub storage_key: String,
    /// SQLite file name, joined onto the host's data directory.
    pub db_file_name: String,
    pub log_level: String,
    pub success_notice_ms: u64,
    pub warning_notice_ms: u64,
    pub app_metadata: AppMetadata,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: crate::logging::default_log_level().to_string(),
            success_notice_ms: DEFAULT_SUCCESS_NOTICE_MS,
            warning_notice_ms: DEFAULT_WARNING_NOTICE_MS,
            app_metadata: AppMetadata::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(details) => write!(f, "invalid config: {details}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl AppConfig {
    /// Parses a JSON config document, filling omitted fields with defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storageKey must not be blank"));
        }
        if self.db_file_name.trim().is_empty() {
            return Err(ConfigError::Invalid("dbFileName must not be blank"));
        }
        if crate::logging::normalize_level(&self.log_level).is_err() {
            return Err(ConfigError::Invalid(
                "logLevel must be one of trace|debug|info|warn|error",
            ));
        }
        for ms in [self.success_notice_ms, self.warning_notice_ms] {
            if ms == 0 || ms > MAX_NOTICE_MS {
                return Err(ConfigError::Invalid(
                    "notice durations must be between 1 ms and one hour",
                ));
            }
        }
        Ok(())
    }

    /// Location of the database file inside `data_dir`.
    pub fn db_path(&self, data_dir: impl AsRef<Path>) -> PathBuf {
        data_dir.as_ref().join(self.db_file_name.trim())
    }

    /// Opens (and migrates) the configured database inside `data_dir`.
    pub fn open_database(&self, data_dir: impl AsRef<Path>) -> DbResult<Connection> {
        open_db(self.db_path(data_dir))
    }

    /// Starts file logging at the configured level under `log_dir`.
    pub fn init_logging(&self, log_dir: &str) -> Result<(), String> {
        crate::logging::init_logging(&self.log_level, log_dir)
    }

    pub fn success_notice_duration(&self) -> TimeDelta {
        millis_to_delta(self.success_notice_ms)
    }

    pub fn warning_notice_duration(&self) -> TimeDelta {
        millis_to_delta(self.warning_notice_ms)
    }
}

fn millis_to_delta(ms: u64) -> TimeDelta {
    TimeDelta::milliseconds(i64::try_from(ms).unwrap_or(i64::MAX / 1_000_000))
}
