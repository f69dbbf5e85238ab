// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use arrow_csv::WriterBuilder;
use clap::ValueEnum;
use neoquery::{StoreConfig, Table};

/// How a result table is written to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Boxed text table (default)
    Table,
    /// CSV with a header row
    Csv,
    /// Only the number of rows
    Count,
}

/// Resolve the database from --database, NEO_DB or NEO_CONFIG
pub fn store_config(override_path: Option<PathBuf>, read_only: bool) -> Result<StoreConfig> {
    let config = StoreConfig::from_env_with_override(override_path)?;
    // Dashboard commands never write; ingest commands must.
    Ok(config.read_only(read_only))
}

pub fn write_table<W: Write>(out: &mut W, table: &Table, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if table.num_rows() == 0 {
                writeln!(out, "No results found.")?;
                return Ok(());
            }
            let formatted = table
                .pretty()
                .map_err(|e| anyhow!("Failed to format results as table: {}", e))?;
            writeln!(out, "{}", formatted)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = WriterBuilder::new().with_header(true).build(&mut *out);
            for batch in table.batches() {
                csv_writer
                    .write(batch)
                    .with_context(|| "Failed to write CSV")?;
            }
        }
        OutputFormat::Count => {
            writeln!(out, "{}", table.num_rows())?;
        }
    }
    Ok(())
}
