// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The fixed set of analytical queries offered by the dashboard.
//!
//! Each entry is sent to the store exactly as written, without
//! parameters. The order here is the order shown to the operator.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub label: &'static str,
    pub sql: &'static str,
}

pub const CATALOG: [CatalogEntry; 20] = [
    CatalogEntry {
        label: "1. Count of asteroid approaches",
        sql: "
        SELECT neo_reference_id, COUNT(*) AS approach_count
        FROM close_approach
        GROUP BY neo_reference_id;
    ",
    },
    CatalogEntry {
        label: "2. Average velocity per asteroid",
        sql: "
        SELECT neo_reference_id, AVG(relative_velocity_kmph) AS avg_velocity
        FROM close_approach
        GROUP BY neo_reference_id;
    ",
    },
    CatalogEntry {
        label: "3. Top 10 fastest asteroids",
        sql: "
        SELECT neo_reference_id, MAX(relative_velocity_kmph) AS top_speed
        FROM close_approach
        GROUP BY neo_reference_id
        ORDER BY top_speed DESC
        LIMIT 10;
    ",
    },
    CatalogEntry {
        label: "4. Hazardous asteroids with >3 approaches",
        sql: "
        SELECT a.id, a.name, COUNT(*) AS approach_count
        FROM asteroids a
        JOIN close_approach c ON a.id = c.neo_reference_id
        WHERE a.is_potentially_hazardous_asteroid = TRUE
        GROUP BY a.id, a.name
        HAVING COUNT(*) > 3;
    ",
    },
    CatalogEntry {
        label: "5. Month with most asteroid approaches",
        sql: "
        SELECT MONTH(close_approach_date) AS month, COUNT(*) AS approach_count
        FROM close_approach
        GROUP BY MONTH(close_approach_date)
        ORDER BY approach_count DESC
        LIMIT 1;
    ",
    },
    CatalogEntry {
        label: "6. Asteroid with fastest approach ever",
        sql: "
        SELECT neo_reference_id, MAX(relative_velocity_kmph) AS max_speed
        FROM close_approach
        GROUP BY neo_reference_id
        ORDER BY max_speed DESC
        LIMIT 1;
    ",
    },
    CatalogEntry {
        label: "7. Sort by max estimated diameter",
        sql: "
        SELECT id, name, estimated_diameter_max_km
        FROM asteroids
        ORDER BY estimated_diameter_max_km DESC;
    ",
    },
    CatalogEntry {
        label: "8. Closest approach trend over time (most frequent asteroid)",
        sql: "
        SELECT neo_reference_id, close_approach_date, miss_distance_km
        FROM close_approach
        WHERE neo_reference_id = (
            SELECT neo_reference_id
            FROM close_approach
            GROUP BY neo_reference_id
            ORDER BY COUNT(*) DESC
            LIMIT 1
        )
        ORDER BY close_approach_date ASC;
    ",
    },
    CatalogEntry {
        label: "9. Closest approach for each asteroid",
        sql: "
        SELECT c.neo_reference_id, a.name, c.close_approach_date, MIN(c.miss_distance_km) AS closest_distance
        FROM close_approach c
        JOIN asteroids a ON a.id = c.neo_reference_id
        GROUP BY c.neo_reference_id, a.name, c.close_approach_date;
    ",
    },
    CatalogEntry {
        label: "10. Asteroids with velocity > 50,000 km/h",
        sql: "
        SELECT DISTINCT a.id, a.name, c.relative_velocity_kmph
        FROM asteroids a
        JOIN close_approach c ON a.id = c.neo_reference_id
        WHERE c.relative_velocity_kmph > 50000;
    ",
    },
    CatalogEntry {
        label: "11. Monthly asteroid approach count",
        sql: "
        SELECT MONTH(close_approach_date) AS month, COUNT(*) AS total_approaches
        FROM close_approach
        GROUP BY MONTH(close_approach_date)
        ORDER BY month;
    ",
    },
    CatalogEntry {
        label: "12. Highest brightness (lowest magnitude)",
        sql: "
        SELECT id, name, absolute_magnitude_h
        FROM asteroids
        ORDER BY absolute_magnitude_h ASC
        LIMIT 1;
    ",
    },
    CatalogEntry {
        label: "13. Hazardous vs Non-Hazardous",
        sql: "
        SELECT is_potentially_hazardous_asteroid, COUNT(*) AS total
        FROM asteroids
        GROUP BY is_potentially_hazardous_asteroid;
    ",
    },
    CatalogEntry {
        label: "14. Asteroids passing closer than the Moon (< 1 LD)",
        sql: "
        SELECT a.name, c.close_approach_date, c.miss_distance_lunar
        FROM asteroids a
        JOIN close_approach c ON a.id = c.neo_reference_id
        WHERE c.miss_distance_lunar < 1;
    ",
    },
    CatalogEntry {
        label: "15. Asteroids that came within 0.05 AU",
        sql: "
        SELECT name, close_approach_date, astronomical
        FROM asteroids
        JOIN close_approach  ON id = neo_reference_id
        WHERE astronomical < 0.05;
    ",
    },
    CatalogEntry {
        label: "16. Bottom 10 fastest asteroids",
        sql: "
        SELECT neo_reference_id, MAX(relative_velocity_kmph) AS bottom_speed
        FROM close_approach
        GROUP BY neo_reference_id
        ORDER BY bottom_speed ASC
        LIMIT 10;
    ",
    },
    CatalogEntry {
        label: "17. show the asteroid table",
        sql: "
         SELECT * from asteroids;
     ",
    },
    CatalogEntry {
        label: "18. show the Closeapproach table",
        sql: "
         SELECT * from close_approach;
     ",
    },
    CatalogEntry {
        label: "19. Sort by min estimated diameter",
        sql: "
        SELECT id, name, estimated_diameter_min_km
        FROM asteroids
        ORDER BY estimated_diameter_min_km ASC;
    ",
    },
    CatalogEntry {
        label: "20. Count of unique asteroids by orbiting body",
        sql: "
         SELECT orbiting_body, COUNT(DISTINCT neo_reference_id) AS unique_asteroids
         FROM close_approach
         GROUP BY orbiting_body
         ORDER BY unique_asteroids DESC;
     ",
    },
];

/// All entries in display order.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

pub fn labels() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|e| e.label)
}

/// Exact label match.
pub fn lookup(label: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.label == label)
}

/// Entry by the ordinal its label starts with ("7. Sort by ..." is 7).
pub fn by_number(number: usize) -> Option<&'static CatalogEntry> {
    let prefix = format!("{}. ", number);
    CATALOG.iter().find(|e| e.label.starts_with(&prefix))
}
