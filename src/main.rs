// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use std::ffi::OsString;
use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod batch;
mod error;
mod plugin;

use batch::{BatchClient, ClientSettings, JobQueue};

#[derive(Parser, Debug)]
#[command(name = "batchwatch")]
#[command(about = "AWS Batch job queue metrics for mackerel-agent")]
#[command(version)]
#[command(after_help = "Options also accept the single-dash form (-job-queue=NAME, -region=...).\n\
Static credentials need both --access-key-id and --secret-access-key; giving only \
one is an error. Without either, the default AWS credential chain is used.")]
struct Args {
    /// AWS Access Key ID (requires --secret-access-key)
    #[arg(long)]
    access_key_id: Option<String>,

    /// AWS Secret Access Key (requires --access-key-id)
    #[arg(long)]
    secret_access_key: Option<String>,

    /// AWS region of the job queues
    #[arg(long)]
    region: Option<String>,

    /// Job queue name (repeat for several queues)
    #[arg(long = "job-queue", value_name = "NAME")]
    job_queues: Vec<String>,
}

/// Long option names that may arrive as `-name` from existing agent configs
const LONG_FLAGS: [&str; 4] = ["access-key-id", "secret-access-key", "region", "job-queue"];

/// Rewrite `-job-queue=q` style options to `--job-queue=q`.
///
/// Anything after a bare `--` is passed through untouched.
fn normalize_single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut after_terminator = false;
    args.into_iter()
        .map(|arg| {
            if after_terminator {
                return arg;
            }
            let text = match arg.to_str() {
                Some(text) => text.to_owned(),
                None => return arg,
            };
            if text == "--" {
                after_terminator = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // stdout belongs to the agent protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse_from(normalize_single_dash_flags(std::env::args_os()));

    if plugin::meta_requested(std::env::var(plugin::META_ENV).ok().as_deref()) {
        return plugin::write_meta(&mut io::stdout().lock(), &batch::describe());
    }

    run_collection(args).await
}

/// Build the client, run one pass and print the values
async fn run_collection(args: Args) -> Result<()> {
    let settings = ClientSettings {
        region: args.region,
        access_key_id: args.access_key_id,
        secret_access_key: args.secret_access_key,
    };
    let client = BatchClient::connect(&settings)
        .await
        .context("Failed to set up AWS Batch client")?;

    let queues: Vec<JobQueue> = args.job_queues.into_iter().map(JobQueue::from).collect();
    if queues.is_empty() {
        info!("no --job-queue given, nothing to collect");
    }

    let snapshot = batch::collect(&client, &queues)
        .await
        .context("Failed to collect AWS Batch metrics")?;

    plugin::write_values(&mut io::stdout().lock(), &snapshot, Utc::now().timestamp())
}
