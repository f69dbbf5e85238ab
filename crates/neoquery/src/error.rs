// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NeoError>;

#[derive(Debug, Error)]
pub enum NeoError {
    /// The store could not be opened (missing file, locked, bad access mode).
    #[error("Failed to open database {}: {source}", .path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: duckdb::Error,
    },

    #[error("No catalog query labelled '{0}'")]
    QueryNotFound(String),

    /// Prepare, bind or execute failed inside the store.
    #[error("Query failed: {0}")]
    Query(#[from] duckdb::Error),

    #[error("Database location not configured: {0}")]
    NotConfigured(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NeoError {
    pub fn connection<P: Into<PathBuf>>(path: P, source: duckdb::Error) -> Self {
        NeoError::Connection {
            path: path.into(),
            source,
        }
    }

    pub fn query_not_found<S: AsRef<str>>(label: S) -> Self {
        NeoError::QueryNotFound(label.as_ref().to_string())
    }
}
