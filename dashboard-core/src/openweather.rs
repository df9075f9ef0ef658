use reqwest::Client;
use serde_json::Value;

use crate::error::FetchError;
use crate::model::Observation;

/// OpenWeather current-weather endpoint.
pub const OPENWEATHER_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Client for the OpenWeather current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the current observation for one city, in imperial units.
    ///
    /// No timeout and no retry: a transport failure or a non-2xx status is
    /// returned as a [`FetchError`] for the caller to handle.
    pub async fn current_weather(&self, city: &str) -> Result<Observation, FetchError> {
        tracing::debug!("Requesting current weather for {city}");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "imperial"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Api {
                status,
                body: truncate_body(&body),
            });
        }

        let raw: Value = serde_json::from_str(&body)?;
        Ok(Observation::new(raw))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    if body.chars().count() <= MAX_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(MAX_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn current_weather_returns_observation_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "Nairobi"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "main": {"temp": 75, "feels_like": 77, "humidity": 60},
                "weather": [{"description": "clear sky"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("test-key".to_string(), server.uri());
        let observation = client
            .current_weather("Nairobi")
            .await
            .expect("mocked fetch should succeed");

        let conditions = observation.conditions().expect("well-formed body");
        assert_eq!(conditions.temperature_f, 75.0);
        assert_eq!(conditions.feels_like_f, 77.0);
        assert_eq!(conditions.humidity_pct, 60);
        assert_eq!(conditions.description, "clear sky");
    }

    #[tokio::test]
    async fn current_weather_surfaces_http_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("bad-key".to_string(), server.uri());
        let err = client.current_weather("Nairobi").await.unwrap_err();

        match err {
            FetchError::Api { status, body } => {
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn current_weather_surfaces_transport_errors() {
        // Discard port; nothing listens there, so the connection is refused.
        let client =
            OpenWeatherClient::new("test-key".to_string(), "http://127.0.0.1:9".to_string());

        let err = client.current_weather("Nairobi").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn current_weather_surfaces_unparseable_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("test-key".to_string(), server.uri());
        let err = client.current_weather("Nairobi").await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn truncate_body_limits_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }
}
