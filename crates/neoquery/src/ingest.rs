// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Loading the dataset. These are the only writes in the crate.

use diagnostics::*;
use duckdb::{Connection, params};
use std::fmt;
use std::path::Path;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Asteroid, CloseApproach};
use crate::schema;
use crate::store::open;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Asteroids,
    CloseApproach,
}

impl Target {
    pub fn table_name(self) -> &'static str {
        match self {
            Target::Asteroids => "asteroids",
            Target::CloseApproach => "close_approach",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_name())
    }
}

/// Create the schema in the configured database.
pub fn init(config: &StoreConfig) -> Result<()> {
    let conn = open(config)?;
    schema::create_tables(&conn)
}

/// Append a CSV file to one table, matching CSV headers to column names.
/// Returns the number of rows inserted.
pub fn import_csv<P: AsRef<Path>>(config: &StoreConfig, target: Target, path: P) -> Result<usize> {
    let conn = open(config)?;
    schema::create_tables(&conn)?;

    // The path is spliced as a string literal; read_csv_auto takes no bound parameters.
    let file = path.as_ref().display().to_string().replace('\'', "''");
    let sql = format!(
        "INSERT INTO {} BY NAME SELECT * FROM read_csv_auto('{}', header = true)",
        target.table_name(),
        file
    );
    let rows = conn.execute(&sql, [])?;

    let table = target.table_name();
    if rows == 0 {
        log_warn!("No rows in {file} for {table}", file: file, table: table);
    } else {
        log_info!("Imported {rows} rows into {table} from {file}", rows: rows, table: table, file: file);
    }
    Ok(rows)
}

fn insert_asteroid_rows(conn: &Connection, rows: &[Asteroid]) -> Result<usize> {
    let mut stmt = conn.prepare("INSERT INTO asteroids VALUES (?, ?, ?, ?, ?, ?)")?;
    for a in rows {
        stmt.execute(params![
            a.id,
            a.name,
            a.estimated_diameter_min_km,
            a.estimated_diameter_max_km,
            a.absolute_magnitude_h,
            a.is_potentially_hazardous_asteroid,
        ])?;
    }
    Ok(rows.len())
}

fn insert_approach_rows(conn: &Connection, rows: &[CloseApproach]) -> Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO close_approach VALUES (?, CAST(? AS DATE), ?, ?, ?, ?, ?)",
    )?;
    for c in rows {
        stmt.execute(params![
            c.neo_reference_id,
            c.close_approach_date.format("%Y-%m-%d").to_string(),
            c.relative_velocity_kmph,
            c.astronomical,
            c.miss_distance_km,
            c.miss_distance_lunar,
            c.orbiting_body,
        ])?;
    }
    Ok(rows.len())
}

/// Insert typed rows into both tables inside one transaction.
pub fn insert(
    config: &StoreConfig,
    asteroids: &[Asteroid],
    approaches: &[CloseApproach],
) -> Result<(usize, usize)> {
    let mut conn = open(config)?;
    schema::create_tables(&conn)?;

    let tx = conn.transaction()?;
    let a = insert_asteroid_rows(&tx, asteroids)?;
    let c = insert_approach_rows(&tx, approaches)?;
    tx.commit()?;

    log_info!("Inserted {a} asteroids and {c} approaches", a: a, c: c);
    Ok((a, c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DuckStore, QueryStore};
    use chrono::NaiveDate;

    #[test]
    fn test_insert_typed_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = StoreConfig::new(dir.path().join("neo.duckdb"));

        let asteroids = vec![Asteroid {
            id: 2000433,
            name: "433 Eros".to_string(),
            estimated_diameter_min_km: 22.1,
            estimated_diameter_max_km: 49.5,
            absolute_magnitude_h: 10.3,
            is_potentially_hazardous_asteroid: false,
        }];
        let approaches = vec![CloseApproach {
            neo_reference_id: 2000433,
            close_approach_date: NaiveDate::from_ymd_opt(2024, 1, 12).expect("date"),
            relative_velocity_kmph: 20000.0,
            astronomical: 0.3,
            miss_distance_km: 44_000_000.0,
            miss_distance_lunar: 116.0,
            orbiting_body: "Earth".to_string(),
        }];

        assert_eq!(insert(&config, &asteroids, &approaches)?, (1, 1));

        let store = DuckStore::new(config.read_only(true));
        let table = store.query("SELECT * FROM close_approach", &[])?;
        assert_eq!(table.num_rows(), 1);
        Ok(())
    }

    #[test]
    fn test_header_only_csv_imports_nothing() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = StoreConfig::new(dir.path().join("neo.duckdb"));
        let csv = dir.path().join("asteroids.csv");
        std::fs::write(
            &csv,
            "id,name,estimated_diameter_min_km,estimated_diameter_max_km,absolute_magnitude_h,is_potentially_hazardous_asteroid\n",
        )?;

        assert_eq!(import_csv(&config, Target::Asteroids, &csv)?, 0);
        Ok(())
    }

    #[test]
    fn test_target_names() {
        assert_eq!(Target::Asteroids.to_string(), "asteroids");
        assert_eq!(Target::CloseApproach.to_string(), "close_approach");
    }
}
