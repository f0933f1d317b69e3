// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! Static graph definitions announced to the monitoring agent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metrics::MetricKind;
use super::types::JobStatus;

/// Value unit of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Integer,
    Float,
}

/// One line within a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetric {
    /// Trailing key segment, or `*` to match any
    pub name: String,
    /// Display label; `%2` is replaced by the agent with the matched segment
    pub label: String,
    #[serde(default)]
    pub stacked: bool,
}

impl GraphMetric {
    fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            stacked: false,
        }
    }
}

/// A graph group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub label: String,
    pub unit: Unit,
    pub metrics: Vec<GraphMetric>,
}

/// Full schema, keyed by graph key (e.g. `aws.batch.jobs.#`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSchema {
    pub graphs: BTreeMap<String, Graph>,
}

/// Describe the graphs this plugin feeds. Pure; needs no collected data.
pub fn describe() -> GraphSchema {
    let jobs = Graph {
        label: "AWS Batch Jobs".to_string(),
        unit: Unit::Integer,
        metrics: JobStatus::TRACKED
            .iter()
            .map(|s| GraphMetric::new(s.as_str(), s.as_str()))
            .collect(),
    };

    // Job names are only known after a pass, so a single wildcard entry
    let runtime = Graph {
        label: "AWS Batch Jobs Runtime".to_string(),
        unit: Unit::Float,
        metrics: vec![GraphMetric::new("*", "%2")],
    };

    let mut graphs = BTreeMap::new();
    graphs.insert(MetricKind::Jobs.graph_key(), jobs);
    graphs.insert(MetricKind::Runtime.graph_key(), runtime);
    GraphSchema { graphs }
}
