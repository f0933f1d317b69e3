// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use thiserror::Error;

use crate::batch::JobStatus;

#[derive(Error, Debug)]
pub enum BatchError {
    /// Setup problem detected before any query is sent
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ListJobs failed for queue '{queue}' status {status}: {message}")]
    ListJobs {
        queue: String,
        status: JobStatus,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, BatchError>;
