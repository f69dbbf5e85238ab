// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use neoquery::StoreConfig;
use neoquery::ingest::{self, Target};

/// Load the asteroid file first so approaches land next to their asteroids.
pub fn import_command<W: Write>(
    out: &mut W,
    config: &StoreConfig,
    asteroids: Option<&Path>,
    approaches: Option<&Path>,
) -> Result<()> {
    if asteroids.is_none() && approaches.is_none() {
        bail!("Nothing to import: pass --asteroids and/or --approaches");
    }

    let files = [(Target::Asteroids, asteroids), (Target::CloseApproach, approaches)];
    for (target, file) in files {
        let Some(file) = file else { continue };
        let rows = ingest::import_csv(config, target, file)
            .with_context(|| format!("Failed to import {} into {}", file.display(), target))?;
        writeln!(out, "Imported {} rows into {}", rows, target)?;
    }
    Ok(())
}
