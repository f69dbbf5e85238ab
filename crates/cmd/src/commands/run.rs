// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Result, anyhow};
use neoquery::{Dashboard, QueryStore, catalog};

use crate::common::{OutputFormat, write_table};

/// Accept either a full label or the number it starts with
pub fn resolve_label(selection: &str) -> Result<&'static str> {
    if let Some(entry) = catalog::lookup(selection) {
        return Ok(entry.label);
    }
    selection
        .trim()
        .trim_end_matches('.')
        .parse::<usize>()
        .ok()
        .and_then(catalog::by_number)
        .map(|entry| entry.label)
        .ok_or_else(|| anyhow!("Unknown query '{}'. Run 'neo queries' to list them.", selection))
}

pub fn run_command<S: QueryStore, W: Write>(
    out: &mut W,
    dashboard: &Dashboard<S>,
    selection: &str,
    format: OutputFormat,
) -> Result<()> {
    let label = resolve_label(selection)?;
    diagnostics::log_debug!("run_command resolved {selection} to {label}", selection: selection, label: label);

    let table = dashboard.execute(label)?;
    if format != OutputFormat::Count {
        writeln!(out, "{}", label)?;
    }
    write_table(out, &table, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_by_number() -> Result<()> {
        assert_eq!(resolve_label("7")?, "7. Sort by max estimated diameter");
        assert_eq!(resolve_label("20.")?, "20. Count of unique asteroids by orbiting body");
        Ok(())
    }

    #[test]
    fn test_resolve_by_label() -> Result<()> {
        let label = "13. Hazardous vs Non-Hazardous";
        assert_eq!(resolve_label(label)?, label);
        Ok(())
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve_label("0").is_err());
        assert!(resolve_label("21").is_err());
        assert!(resolve_label("fastest").is_err());
    }
}
