//! Browser-side utilities.
//!
//! Provides:
//! - [`dom`] - window, localStorage and focus helpers
//! - `fetch` - JSON fetching raced against a timeout
//! - [`LocalStorage`] - localStorage-backed `KeyValueStore`
//! - [`logger`] - console backend for the `log` facade
//! - [`fetch_weather`] - Open-Meteo lookups for the `weather` command

pub mod audio;
pub mod dom;
mod fetch;
pub mod logger;
mod storage;
mod weather;

pub use storage::LocalStorage;
pub use weather::fetch_weather;
