// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! AWS Batch queue monitoring.
//!
//! Architecture:
//! - Schema (`describe`): static graph definitions, announced once to the agent
//! - Collector (`collect`): one point-in-time pass over every queue and tracked status

pub mod client;
pub mod collector;
pub mod metrics;
pub mod schema;
pub mod types;

pub use client::{BatchClient, ClientSettings};
pub use collector::collect;
pub use metrics::MetricSnapshot;
pub use schema::{describe, GraphSchema};
pub use types::{JobQueue, JobStatus};
