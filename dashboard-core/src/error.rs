use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::put_object::PutObjectError;

/// Failure to obtain a weather observation for one city.
///
/// Handled per city by the dashboard loop: the city is reported as failed and
/// the run moves on. Never fatal.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to OpenWeather failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenWeather returned HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse OpenWeather response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fetched response that does not match the expected OpenWeather shape.
///
/// Unlike [`FetchError`], this aborts the whole run: a response we cannot
/// extract the report fields from means the upstream contract changed.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    #[error("unexpected weather response shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("weather response contained no conditions entry")]
    NoConditions,
}

/// Failure to archive an observation to S3. Handled per city, never fatal.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to serialize observation for `{city}`: {source}")]
    Serialize {
        city: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to upload archive object `{key}`: {source}")]
    Upload {
        key: String,
        #[source]
        source: Box<SdkError<PutObjectError>>,
    },
}
