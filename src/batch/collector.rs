// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Collection pass: query every (queue, status) pair and reduce the job
//! listings to counts and RUNNING-job runtimes.
//!
//! A pass is all-or-nothing. The first failed query aborts it and the caller
//! gets the error, never a partial snapshot.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::client::ListJobs;
use super::metrics::{jobs_key, runtime_key, MetricSnapshot};
use super::types::{JobQueue, JobStatus};
use crate::error::Result;

/// Run one collection pass measured against the current wall clock
pub async fn collect<S: ListJobs + ?Sized>(
    service: &S,
    queues: &[JobQueue],
) -> Result<MetricSnapshot> {
    collect_at(service, queues, Utc::now()).await
}

/// Run one collection pass with runtimes measured against `now`
pub async fn collect_at<S: ListJobs + ?Sized>(
    service: &S,
    queues: &[JobQueue],
    now: DateTime<Utc>,
) -> Result<MetricSnapshot> {
    let mut snapshot = MetricSnapshot::new();

    for queue in queues {
        for status in JobStatus::TRACKED {
            let jobs = service.list_jobs(queue, status).await?;
            debug!(queue = %queue, %status, count = jobs.len(), "listed jobs");

            snapshot.insert(jobs_key(queue, status), jobs.len() as f64);

            if !status.is_running() {
                continue;
            }

            for job in &jobs {
                if job.started_at.is_none() {
                    warn!(
                        queue = %queue,
                        job = %job.name,
                        job_id = %job.job_id,
                        "running job has no start time, runtime counted from the Unix epoch"
                    );
                }
                // Same-named jobs in one queue overwrite each other
                snapshot.insert(runtime_key(queue, &job.name), job.runtime_minutes(now));
            }
        }
    }

    Ok(snapshot)
}
