use std::env;

use crate::openweather::OPENWEATHER_URL;

/// Cities archived on each run unless overridden when constructing [`Config`].
pub const DEFAULT_CITIES: &[&str] = &["Philadelphia", "Seattle", "New York"];

/// Runtime configuration, read once at startup and handed to each component.
///
/// None of the values are validated here: a missing API key surfaces later as
/// an HTTP 401 from OpenWeather, a missing bucket name as an S3 request
/// error. That keeps `from_env` infallible and side-effect free.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeather API key (`OPENWEATHER_API`).
    pub api_key: String,
    /// Destination bucket for archived observations (`AWS_BUCKET_NAME`).
    pub bucket_name: String,
    /// Bucket region (`AWS_REGION`). `None` lets the AWS SDK's default
    /// provider chain (profile, instance metadata) resolve it.
    pub region: Option<String>,
    /// Cities fetched and archived, in order.
    pub cities: Vec<String>,
    /// Current-weather endpoint queried for each city.
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENWEATHER_API").unwrap_or_default(),
            bucket_name: env::var("AWS_BUCKET_NAME").unwrap_or_default(),
            region: env::var("AWS_REGION").ok(),
            cities: DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect(),
            api_url: OPENWEATHER_URL.to_string(),
        }
    }
}
