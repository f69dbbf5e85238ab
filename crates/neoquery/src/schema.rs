// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Table and column identifiers of the NEO dataset.

use duckdb::Connection;
use sea_query::Iden;

use crate::error::Result;

#[derive(Iden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Asteroids {
    Table,
    Id,
    Name,
    EstimatedDiameterMinKm,
    EstimatedDiameterMaxKm,
    AbsoluteMagnitudeH,
    IsPotentiallyHazardousAsteroid,
}

#[derive(Iden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseApproach {
    Table,
    NeoReferenceId,
    CloseApproachDate,
    RelativeVelocityKmph,
    Astronomical,
    MissDistanceKm,
    MissDistanceLunar,
    OrbitingBody,
}

const CREATE_ASTEROIDS: &str = "
    CREATE TABLE IF NOT EXISTS asteroids (
        id BIGINT PRIMARY KEY,
        name VARCHAR NOT NULL,
        estimated_diameter_min_km DOUBLE,
        estimated_diameter_max_km DOUBLE,
        absolute_magnitude_h DOUBLE,
        is_potentially_hazardous_asteroid BOOLEAN
    );
";

// No foreign key: referential integrity is assumed of the loaded data.
const CREATE_CLOSE_APPROACH: &str = "
    CREATE TABLE IF NOT EXISTS close_approach (
        neo_reference_id BIGINT NOT NULL,
        close_approach_date DATE,
        relative_velocity_kmph DOUBLE,
        astronomical DOUBLE,
        miss_distance_km DOUBLE,
        miss_distance_lunar DOUBLE,
        orbiting_body VARCHAR
    );
";

/// Create both tables if they are missing.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_ASTEROIDS)?;
    conn.execute_batch(CREATE_CLOSE_APPROACH)?;
    Ok(())
}
