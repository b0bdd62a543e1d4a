//! Error types for the terminal core.
//!
//! - [`RegistryError`] - static command table misconfiguration (fatal at startup)
//! - [`StorageError`] - persisted-state access failures (always recovered)
//! - [`WeatherError`] - weather lookups that cannot produce a report
//!
//! Unknown commands and bad arguments are not errors at this level; they are
//! reported to the user as error-styled [`ExecutionResult`](crate::ExecutionResult)s.

use thiserror::Error;

/// Command registration errors.
///
/// These indicate a programming error in the command table and are raised
/// immediately at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A command name collides with an existing name or alias.
    #[error("command \"{0}\" is already registered")]
    DuplicateName(String),
    /// An alias collides with an existing name or alias.
    #[error("alias \"{0}\" is already registered")]
    DuplicateAlias(String),
}

/// Key-value store errors.
///
/// Callers log these and fall back to defaults; they never reach the user.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store is not available (no window, private mode, ...).
    #[error("storage not available")]
    Unavailable,
    /// Reading a key failed.
    #[error("failed to read \"{key}\": {reason}")]
    Read { key: String, reason: String },
    /// Writing a key failed (quota, permissions, ...).
    #[error("failed to write \"{key}\": {reason}")]
    Write { key: String, reason: String },
    /// A value could not be encoded or decoded as JSON.
    #[error("invalid JSON for \"{key}\": {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Weather lookup failures shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("Please enter a city name.")]
    EmptyCity,
    /// Geocoding returned no match.
    #[error("City \"{0}\" not found. Please check the spelling.")]
    CityNotFound(String),
    /// The geocoding service failed.
    #[error("Failed to connect to geocoding service")]
    Geocoding,
    /// The forecast service failed.
    #[error("Failed to fetch weather data")]
    Forecast,
}
