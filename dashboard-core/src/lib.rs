//! Core library for the weather dashboard.
//!
//! This crate defines:
//! - Configuration read from the process environment
//! - An OpenWeather client and the raw observation model
//! - S3 archival of observations under timestamped keys
//! - The sequential per-city fetch-and-archive pass
//!
//! It is used by `dashboard-cli`, but can also be reused by other binaries or services.

pub mod archive;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod openweather;

pub use archive::{ARCHIVE_PREFIX, Archiver, archive_key, run_timestamp};
pub use config::{Config, DEFAULT_CITIES};
pub use dashboard::{CityReport, CityStatus, Dashboard};
pub use error::{ArchiveError, FetchError, ShapeError};
pub use model::{CurrentConditions, Observation};
pub use openweather::{OPENWEATHER_URL, OpenWeatherClient};
