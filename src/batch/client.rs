// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! AWS Batch integration: list jobs per queue and status via the ListJobs API.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_batch::config::Credentials;
use aws_sdk_batch::error::DisplayErrorContext;
use aws_sdk_batch::types::{JobStatus as AwsJobStatus, JobSummary as AwsJobSummary};
use chrono::{DateTime, Utc};
use tracing::debug;

use super::types::{JobQueue, JobStatus, JobSummary};
use crate::error::{BatchError, Result};

/// Query side of the batch service, as seen by the collector
#[async_trait]
pub trait ListJobs: Sync {
    /// List the jobs of `queue` currently in `status`.
    ///
    /// Only the first page of results is returned.
    async fn list_jobs(&self, queue: &JobQueue, status: JobStatus) -> Result<Vec<JobSummary>>;
}

/// Region and credential overrides for the Batch client
#[derive(Debug, Clone, Default)]
pub struct ClientSettings {
    pub region: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

impl ClientSettings {
    /// Region override, ignoring empty strings
    fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }

    /// Static credentials, if both halves were supplied
    fn static_credentials(&self) -> Result<Option<Credentials>> {
        let key_id = self.access_key_id.as_deref().filter(|k| !k.is_empty());
        let secret = self.secret_access_key.as_deref().filter(|s| !s.is_empty());

        match (key_id, secret) {
            (Some(key_id), Some(secret)) => Ok(Some(Credentials::new(
                key_id,
                secret,
                None,
                None,
                "batchwatch-static",
            ))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(BatchError::Config(
                "--access-key-id given without --secret-access-key".to_string(),
            )),
            (None, Some(_)) => Err(BatchError::Config(
                "--secret-access-key given without --access-key-id".to_string(),
            )),
        }
    }
}

/// Batch client backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct BatchClient {
    client: aws_sdk_batch::Client,
}

impl BatchClient {
    /// Build a client from the default AWS provider chain plus any overrides.
    ///
    /// Fails if no region can be resolved, so that misconfiguration surfaces
    /// before the first query.
    pub async fn connect(settings: &ClientSettings) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(credentials) = settings.static_credentials()? {
            loader = loader.credentials_provider(credentials);
        }
        if let Some(region) = settings.region() {
            loader = loader.region(Region::new(region.to_string()));
        }

        let sdk_config = loader.load().await;
        let region = sdk_config.region().ok_or_else(|| {
            BatchError::Config("no AWS region configured (use --region or AWS_REGION)".to_string())
        })?;
        debug!(%region, "Batch client configured");

        Ok(Self {
            client: aws_sdk_batch::Client::new(&sdk_config),
        })
    }
}

#[async_trait]
impl ListJobs for BatchClient {
    async fn list_jobs(&self, queue: &JobQueue, status: JobStatus) -> Result<Vec<JobSummary>> {
        let output = self
            .client
            .list_jobs()
            .job_queue(queue.name())
            .job_status(AwsJobStatus::from(status.as_str()))
            .send()
            .await
            .map_err(|e| BatchError::ListJobs {
                queue: queue.name().to_string(),
                status,
                message: DisplayErrorContext(&e).to_string(),
            })?;

        if output.next_token().is_some() {
            debug!(
                queue = %queue,
                %status,
                "ListJobs returned more pages; only the first is counted"
            );
        }

        Ok(output.job_summary_list().iter().map(convert_summary).collect())
    }
}

/// Convert an SDK job summary, mapping the millisecond start time.
///
/// A missing name or ID becomes an empty string, so a nameless job still
/// reports a runtime under `aws.batch.runtime.<queue>.`.
fn convert_summary(summary: &AwsJobSummary) -> JobSummary {
    let job = JobSummary::new(
        summary.job_id().unwrap_or_default(),
        summary.job_name().unwrap_or_default(),
    );
    match summary.started_at().and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(started_at) => job.with_started_at(started_at),
        None => job,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::metrics::runtime_key;

    fn settings(key_id: Option<&str>, secret: Option<&str>) -> ClientSettings {
        ClientSettings {
            region: None,
            access_key_id: key_id.map(String::from),
            secret_access_key: secret.map(String::from),
        }
    }

    #[test]
    fn test_static_credentials_both_given() {
        let creds = settings(Some("AKIDEXAMPLE"), Some("secret"))
            .static_credentials()
            .unwrap();
        let creds = creds.expect("credentials should be built");
        assert_eq!(creds.access_key_id(), "AKIDEXAMPLE");
        assert_eq!(creds.secret_access_key(), "secret");
    }

    #[test]
    fn test_static_credentials_absent() {
        assert!(settings(None, None).static_credentials().unwrap().is_none());
        assert!(settings(Some(""), Some("")).static_credentials().unwrap().is_none());
    }

    #[test]
    fn test_static_credentials_half_given_is_config_error() {
        let err = settings(Some("AKIDEXAMPLE"), None).static_credentials().unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));

        let err = settings(None, Some("secret")).static_credentials().unwrap_err();
        assert!(matches!(err, BatchError::Config(_)));
    }

    #[test]
    fn test_empty_region_is_ignored() {
        let mut s = ClientSettings::default();
        assert_eq!(s.region(), None);
        s.region = Some(String::new());
        assert_eq!(s.region(), None);
        s.region = Some("eu-central-1".to_string());
        assert_eq!(s.region(), Some("eu-central-1"));
    }

    #[test]
    fn test_convert_summary() {
        let summary = AwsJobSummary::builder()
            .job_id("a1b2")
            .job_name("nightly-etl")
            .started_at(1_700_000_000_000)
            .build();

        let job = convert_summary(&summary);
        assert_eq!(job.job_id, "a1b2");
        assert_eq!(job.name, "nightly-etl");
        assert_eq!(job.started_at.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn test_convert_summary_without_start() {
        let summary = AwsJobSummary::builder()
            .job_id("c3d4")
            .job_name("queued")
            .build();

        assert!(convert_summary(&summary).started_at.is_none());
    }

    #[test]
    fn test_convert_summary_without_name() {
        let summary = AwsJobSummary::builder().started_at(1_700_000_000_000).build();

        let job = convert_summary(&summary);
        assert_eq!(job.name, "");
        assert_eq!(job.job_id, "");
        assert_eq!(
            runtime_key(&JobQueue::from("q1"), &job.name),
            "aws.batch.runtime.q1."
        );
    }
}
