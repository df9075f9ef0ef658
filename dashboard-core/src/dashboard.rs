//! The sequential fetch-and-archive pass over the configured city list.

use crate::archive::Archiver;
use crate::error::{ArchiveError, FetchError, ShapeError};
use crate::model::CurrentConditions;
use crate::openweather::OpenWeatherClient;

/// Outcome of one city's pass.
#[derive(Debug)]
pub enum CityStatus {
    /// Fetched, printed and archived; carries the object key written.
    Archived { key: String },
    /// The fetch failed; archival was skipped.
    FetchFailed(FetchError),
    /// Fetched and printed, but the upload failed.
    ArchiveFailed(ArchiveError),
}

/// Per-city record of a dashboard run.
#[derive(Debug)]
pub struct CityReport {
    pub city: String,
    pub status: CityStatus,
}

/// Fetches current weather for each configured city in order, prints the
/// report lines and archives every raw response.
#[derive(Debug, Clone)]
pub struct Dashboard {
    weather: OpenWeatherClient,
    archiver: Archiver,
    cities: Vec<String>,
}

impl Dashboard {
    pub fn new(weather: OpenWeatherClient, archiver: Archiver, cities: Vec<String>) -> Self {
        Self {
            weather,
            archiver,
            cities,
        }
    }

    /// Run the dashboard once.
    ///
    /// Fetch and upload failures are reported per city and the loop moves on
    /// to the next one. A response that parses as JSON but lacks the expected
    /// fields is a [`ShapeError`] and aborts the whole run.
    pub async fn run(&self) -> Result<Vec<CityReport>, ShapeError> {
        let mut reports = Vec::with_capacity(self.cities.len());

        for city in &self.cities {
            println!("{}", fetching_banner(city));

            let observation = match self.weather.current_weather(city).await {
                Ok(observation) => observation,
                Err(err) => {
                    tracing::warn!("Fetch failed for {city}: {err}");
                    println!("{}", fetch_failed_line(city));
                    reports.push(CityReport {
                        city: city.clone(),
                        status: CityStatus::FetchFailed(err),
                    });
                    continue;
                }
            };

            println!("{}", conditions_report(&observation.conditions()?));

            let status = match self.archiver.archive(city, observation).await {
                Ok(key) => {
                    println!("{}", saved_line(city));
                    CityStatus::Archived { key }
                }
                Err(err) => {
                    tracing::error!("Archive failed for {city}: {err}");
                    println!("{}", save_failed_line(&err));
                    CityStatus::ArchiveFailed(err)
                }
            };

            reports.push(CityReport {
                city: city.clone(),
                status,
            });
        }

        Ok(reports)
    }
}

// Report wording printed by `run`; pinned verbatim by tests.

fn fetching_banner(city: &str) -> String {
    format!("\nFetching weather for {city}...")
}

fn fetch_failed_line(city: &str) -> String {
    format!("Failed to fetch weather data for {city}")
}

fn conditions_report(conditions: &CurrentConditions) -> String {
    format!(
        "Temperature: {}°F\nFeels like: {}°F\nHumidity: {}%\nConditions: {}",
        conditions.temperature_f,
        conditions.feels_like_f,
        conditions.humidity_pct,
        conditions.description
    )
}

fn saved_line(city: &str) -> String {
    format!("Weather data for {city} saved to S3!")
}

fn save_failed_line(err: &ArchiveError) -> String {
    format!("Error saving to S3: {err}")
}
