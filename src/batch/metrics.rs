// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Metric key layout. Single source of truth for the collector and the graph schema.

use std::collections::BTreeMap;

use super::types::{JobQueue, JobStatus};

/// Namespace shared by every metric this plugin emits
pub const PREFIX: &str = "aws.batch";

/// Metric group, i.e. the second key segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Job count per queue and status
    Jobs,
    /// Per-job runtime in minutes
    Runtime,
}

impl MetricKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Jobs => "jobs",
            MetricKind::Runtime => "runtime",
        }
    }

    /// Graph key with the queue segment left as a `#` wildcard
    pub fn graph_key(self) -> String {
        format!("{}.{}.#", PREFIX, self.as_str())
    }
}

/// `aws.batch.jobs.<queue>.<STATUS>`
pub fn jobs_key(queue: &JobQueue, status: JobStatus) -> String {
    format!("{}.{}.{}.{}", PREFIX, MetricKind::Jobs.as_str(), queue, status)
}

/// `aws.batch.runtime.<queue>.<jobName>`
pub fn runtime_key(queue: &JobQueue, job_name: &str) -> String {
    format!("{}.{}.{}.{}", PREFIX, MetricKind::Runtime.as_str(), queue, job_name)
}

/// All metrics from one collection pass, keyed by full metric name
pub type MetricSnapshot = BTreeMap<String, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_key() {
        let queue = JobQueue::from("q1");
        assert_eq!(jobs_key(&queue, JobStatus::Runnable), "aws.batch.jobs.q1.RUNNABLE");
    }

    #[test]
    fn test_runtime_key() {
        let queue = JobQueue::from("gpu");
        assert_eq!(runtime_key(&queue, "resize-images"), "aws.batch.runtime.gpu.resize-images");
    }

    #[test]
    fn test_graph_keys() {
        assert_eq!(MetricKind::Jobs.graph_key(), "aws.batch.jobs.#");
        assert_eq!(MetricKind::Runtime.graph_key(), "aws.batch.runtime.#");
    }
}
