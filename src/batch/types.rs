// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Job queue, job status and job summary types shared by the client and collector.

use std::fmt;

use chrono::{DateTime, Utc};

/// Job state as tracked by the collector.
///
/// Terminal states (SUCCEEDED, FAILED) are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobStatus {
    Submitted,
    Pending,
    Runnable,
    Starting,
    Running,
}

impl JobStatus {
    /// All tracked statuses, in query order
    pub const TRACKED: [JobStatus; 5] = [
        JobStatus::Submitted,
        JobStatus::Pending,
        JobStatus::Runnable,
        JobStatus::Starting,
        JobStatus::Running,
    ];

    /// Literal token used both on the wire and in metric keys
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Submitted => "SUBMITTED",
            JobStatus::Pending => "PENDING",
            JobStatus::Runnable => "RUNNABLE",
            JobStatus::Starting => "STARTING",
            JobStatus::Running => "RUNNING",
        }
    }

    /// Whether runtimes are reported for jobs in this state
    pub fn is_running(self) -> bool {
        matches!(self, JobStatus::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named Batch job queue
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobQueue(String);

impl JobQueue {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for JobQueue {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for JobQueue {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for JobQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One in-flight job as returned by a list query
#[derive(Debug, Clone, PartialEq)]
pub struct JobSummary {
    /// Job ID assigned by the service
    pub job_id: String,
    /// Job name (used as the runtime metric's trailing key segment)
    pub name: String,
    /// When the job entered RUNNING, if the service reported it
    pub started_at: Option<DateTime<Utc>>,
}

impl JobSummary {
    pub fn new(job_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            name: name.into(),
            started_at: None,
        }
    }

    pub fn with_started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self
    }

    /// Minutes elapsed between the job's start and `now`.
    ///
    /// A job without a start timestamp counts from the Unix epoch.
    pub fn runtime_minutes(&self, now: DateTime<Utc>) -> f64 {
        let started = self.started_at.unwrap_or(DateTime::UNIX_EPOCH);
        let elapsed = now.signed_duration_since(started);
        elapsed.num_milliseconds() as f64 / 60_000.0
    }
}
