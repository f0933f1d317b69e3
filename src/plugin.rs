// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

//! mackerel-agent plugin protocol.
//!
//! The agent runs the plugin once with `MACKEREL_AGENT_PLUGIN_META` set to
//! learn the graph definitions, then once per interval to read values as
//! tab-separated `name value epoch` lines on stdout.

use std::io::Write;

use anyhow::Result;

use crate::batch::{GraphSchema, MetricSnapshot};

/// Environment variable the agent sets when it asks for graph definitions
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

/// First line of the meta output
const META_HEADER: &str = "# mackerel-agent-plugin";

/// Whether the agent is asking for graph definitions instead of values
pub fn meta_requested(env_value: Option<&str>) -> bool {
    env_value.is_some_and(|v| !v.is_empty())
}

/// Write the graph definitions in the agent's meta format
pub fn write_meta<W: Write>(out: &mut W, schema: &GraphSchema) -> Result<()> {
    writeln!(out, "{}", META_HEADER)?;
    writeln!(out, "{}", serde_json::to_string(schema)?)?;
    out.flush()?;
    Ok(())
}

/// Write one line per metric, all stamped with the same `timestamp` (Unix seconds)
pub fn write_values<W: Write>(
    out: &mut W,
    snapshot: &MetricSnapshot,
    timestamp: i64,
) -> Result<()> {
    for (key, value) in snapshot {
        writeln!(out, "{}\t{:.6}\t{}", key, value, timestamp)?;
    }
    out.flush()?;
    Ok(())
}
