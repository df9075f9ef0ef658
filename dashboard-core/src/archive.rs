//! S3 archival of raw weather observations.
//!
//! One object per city per run, keyed by a second-granularity local
//! timestamp that is also stamped into the body.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use chrono::Local;

use crate::config::Config;
use crate::error::ArchiveError;
use crate::model::Observation;

/// Key namespace for archived observations.
pub const ARCHIVE_PREFIX: &str = "weather-data";

/// S3-backed archive for weather observations.
#[derive(Debug, Clone)]
pub struct Archiver {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: Option<String>,
}

impl Archiver {
    /// Build an archiver from shared AWS configuration, applying the
    /// configured region when present. With no region configured the SDK's
    /// default provider chain resolves it.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }
        let sdk_config = loader.load().await;
        let client = aws_sdk_s3::Client::new(&sdk_config);

        Self::new(client, config.bucket_name.clone(), config.region.clone())
    }

    /// Build an archiver around an existing client. Tests use this to target
    /// a mock endpoint.
    pub fn new(client: aws_sdk_s3::Client, bucket: String, region: Option<String>) -> Self {
        Self {
            client,
            bucket,
            region,
        }
    }

    /// Make sure the destination bucket exists before the run starts.
    ///
    /// Any head-check failure falls through to a creation attempt, including
    /// permission errors that do not mean the bucket is absent. Creation
    /// failures are logged and swallowed; the run continues either way.
    pub async fn ensure_bucket(&self) {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => {
                tracing::info!("Bucket {} exists", self.bucket);
                return;
            }
            Err(err) => {
                tracing::info!("Creating bucket {}: head check failed: {}", self.bucket, err);
            }
        }

        let mut request = self.client.create_bucket().bucket(&self.bucket);
        // Outside us-east-1, CreateBucket requires an explicit location
        // constraint matching the configured region.
        if let Some(region) = self.region.as_deref().filter(|r| *r != "us-east-1") {
            let constraint = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region))
                .build();
            request = request.create_bucket_configuration(constraint);
        }

        match request.send().await {
            Ok(_) => tracing::info!("Successfully created bucket {}", self.bucket),
            Err(err) => tracing::error!("Error creating bucket {}: {}", self.bucket, err),
        }
    }

    /// Archive one observation under `weather-data/{city}-{timestamp}.json`,
    /// stamping the timestamp into the body before serialization so body and
    /// key always agree. Returns the key written.
    pub async fn archive(
        &self,
        city: &str,
        mut observation: Observation,
    ) -> Result<String, ArchiveError> {
        let timestamp = run_timestamp();
        let key = archive_key(city, &timestamp);
        observation.stamp(&timestamp);

        let body =
            serde_json::to_vec(observation.as_json()).map_err(|source| ArchiveError::Serialize {
                city: city.to_string(),
                source,
            })?;

        tracing::debug!("Uploading {} ({} bytes)", key, body.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(body))
            .content_type("application/json")
            .send()
            .await
            .map_err(|source| ArchiveError::Upload {
                key: key.clone(),
                source: Box::new(source),
            })?;

        Ok(key)
    }
}

/// Storage key for one city's observation at one timestamp.
///
/// Timestamps have second granularity: two archives for the same city within
/// the same second produce the same key, and the later upload silently
/// overwrites the earlier one.
pub fn archive_key(city: &str, timestamp: &str) -> String {
    format!("{ARCHIVE_PREFIX}/{city}-{timestamp}.json")
}

/// Local wall-clock timestamp in `YYYYMMDD-HHMMSS` form.
pub fn run_timestamp() -> String {
    Local::now().format("%Y%m%d-%H%M%S").to_string()
}
