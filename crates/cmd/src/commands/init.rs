// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Context, Result};
use neoquery::StoreConfig;
use neoquery::ingest;

pub fn init_command<W: Write>(out: &mut W, config: &StoreConfig) -> Result<()> {
    ingest::init(config)
        .with_context(|| format!("Failed to initialize {}", config.database.display()))?;
    writeln!(out, "Initialized database at: {}", config.database.display())?;
    Ok(())
}
