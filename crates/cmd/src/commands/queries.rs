// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use neoquery::catalog;

pub fn queries_command<W: Write>(out: &mut W, show_sql: bool) -> Result<()> {
    for entry in catalog::entries() {
        writeln!(out, "{}", entry.label)?;
        if show_sql {
            writeln!(out, "{}", entry.sql.trim_end())?;
        }
    }
    Ok(())
}
