use serde::Deserialize;
use serde_json::Value;

use crate::error::ShapeError;

/// One raw weather API response for one city at one point in time.
///
/// The full JSON body is kept as-is so the archive preserves every field the
/// upstream API returned; the typed view used for the printed report is
/// extracted on demand with [`Observation::conditions`].
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    raw: Value,
}

/// The four report fields extracted from an observation.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature_f: f64,
    pub feels_like_f: f64,
    pub humidity_pct: u8,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl Observation {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Extract the report fields from the expected OpenWeather shape.
    ///
    /// Requires `main.temp`, `main.feels_like`, `main.humidity` and at least
    /// one `weather` entry; anything else is a [`ShapeError`].
    pub fn conditions(&self) -> Result<CurrentConditions, ShapeError> {
        let parsed: OwCurrent = serde_json::from_value(self.raw.clone())?;
        let first = parsed
            .weather
            .into_iter()
            .next()
            .ok_or(ShapeError::NoConditions)?;

        Ok(CurrentConditions {
            temperature_f: parsed.main.temp,
            feels_like_f: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            description: first.description,
        })
    }

    /// Inject the run timestamp into the body, overwriting any `timestamp`
    /// field the upstream response happened to carry. Non-object roots are
    /// left untouched.
    pub fn stamp(&mut self, timestamp: &str) {
        if let Value::Object(fields) = &mut self.raw {
            fields.insert(
                "timestamp".to_string(),
                Value::String(timestamp.to_string()),
            );
        }
    }

    pub fn as_json(&self) -> &Value {
        &self.raw
    }

    pub fn into_json(self) -> Value {
        self.raw
    }
}
