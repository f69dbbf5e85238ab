// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Entities of the NEO dataset and the filter snapshot.

use chrono::NaiveDate;
use std::fmt;

/// One row of the `asteroids` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub id: i64,
    pub name: String,
    pub estimated_diameter_min_km: f64,
    pub estimated_diameter_max_km: f64,
    pub absolute_magnitude_h: f64,
    pub is_potentially_hazardous_asteroid: bool,
}

/// One row of the `close_approach` table. Many approaches reference one asteroid.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    pub neo_reference_id: i64,
    pub close_approach_date: NaiveDate,
    pub relative_velocity_kmph: f64,
    /// Miss distance in AU.
    pub astronomical: f64,
    pub miss_distance_km: f64,
    pub miss_distance_lunar: f64,
    pub orbiting_body: String,
}

/// Tri-state hazard selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HazardFilter {
    #[default]
    Any,
    True,
    False,
}

impl HazardFilter {
    /// The flag value rows must carry, or `None` when every row passes.
    pub fn required(self) -> Option<bool> {
        match self {
            HazardFilter::Any => None,
            HazardFilter::True => Some(true),
            HazardFilter::False => Some(false),
        }
    }
}

impl fmt::Display for HazardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HazardFilter::Any => "Any",
            HazardFilter::True => "True",
            HazardFilter::False => "False",
        };
        write!(f, "{}", s)
    }
}

/// Inclusive range of approach dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range exists only when both ends were supplied.
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }
}

/// Snapshot of the filter widgets at the moment a filter is applied.
///
/// The builder trusts these values as given; range checks belong to
/// whatever produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// km/h
    pub min_velocity: f64,
    /// km, compared against the asteroid's minimum estimated diameter
    pub min_diameter: f64,
    /// km, compared (as a lower bound) against the maximum estimated diameter
    pub max_diameter: f64,
    pub max_au: f64,
    pub max_lunar_distance: f64,
    pub hazard: HazardFilter,
    pub date_range: Option<DateRange>,
}

impl Default for FilterState {
    /// The dashboard's initial widget values.
    fn default() -> Self {
        Self {
            min_velocity: 25000.0,
            min_diameter: 0.5,
            max_diameter: 0.5,
            max_au: 0.05,
            max_lunar_distance: 200.0,
            hazard: HazardFilter::Any,
            date_range: None,
        }
    }
}

impl FilterState {
    pub fn with_hazard(mut self, hazard: HazardFilter) -> Self {
        self.hazard = hazard;
        self
    }

    pub fn with_date_range(mut self, date_range: Option<DateRange>) -> Self {
        self.date_range = date_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_partial_date_range_is_none() {
        assert_eq!(DateRange::from_parts(Some(date(2024, 1, 1)), None), None);
        assert_eq!(DateRange::from_parts(None, Some(date(2024, 1, 31))), None);
        assert_eq!(DateRange::from_parts(None, None), None);
        assert_eq!(
            DateRange::from_parts(Some(date(2024, 1, 1)), Some(date(2024, 1, 31))),
            Some(DateRange::new(date(2024, 1, 1), date(2024, 1, 31)))
        );
    }

    #[test]
    fn test_hazard_required() {
        assert_eq!(HazardFilter::Any.required(), None);
        assert_eq!(HazardFilter::True.required(), Some(true));
        assert_eq!(HazardFilter::False.required(), Some(false));
    }

    #[test]
    fn test_default_state_matches_dashboard() {
        let state = FilterState::default();
        assert_eq!(state.min_velocity, 25000.0);
        assert_eq!(state.max_lunar_distance, 200.0);
        assert_eq!(state.hazard, HazardFilter::Any);
        assert!(state.date_range.is_none());
    }
}
