// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use neoquery::{Dashboard, DateRange, FilterState, HazardFilter, QueryStore, filter};

use crate::common::{OutputFormat, write_table};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HazardChoice {
    Any,
    True,
    False,
}

impl From<HazardChoice> for HazardFilter {
    fn from(choice: HazardChoice) -> Self {
        match choice {
            HazardChoice::Any => HazardFilter::Any,
            HazardChoice::True => HazardFilter::True,
            HazardChoice::False => HazardFilter::False,
        }
    }
}

fn bounded(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(min..=max).contains(&v) {
        return Err(format!("{} is outside {}..={}", v, min, max));
    }
    Ok(v)
}

fn velocity(s: &str) -> Result<f64, String> {
    bounded(s, 0.0, 100000.0)
}

fn diameter(s: &str) -> Result<f64, String> {
    bounded(s, 0.0, 10.0)
}

fn au(s: &str) -> Result<f64, String> {
    bounded(s, 0.0, 1.0)
}

fn lunar(s: &str) -> Result<f64, String> {
    bounded(s, 0.0, 200.0)
}

/// Filter widgets. Ranges are checked here; the query builder takes
/// whatever it is given.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Minimum relative velocity (km/h), 0-100000
    #[arg(long, default_value = "25000", value_parser = velocity)]
    pub min_velocity: f64,

    /// Minimum of the asteroid's min estimated diameter (km), 0-10
    #[arg(long, default_value = "0.5", value_parser = diameter)]
    pub min_diameter: f64,

    /// Minimum of the asteroid's max estimated diameter (km), 0-10
    #[arg(long, default_value = "0.5", value_parser = diameter)]
    pub max_diameter: f64,

    /// Maximum miss distance (AU), 0-1
    #[arg(long, default_value = "0.05", value_parser = au)]
    pub max_au: f64,

    /// Maximum miss distance (lunar distances), 0-200
    #[arg(long, default_value = "200", value_parser = lunar)]
    pub max_lunar: f64,

    /// Hazardous state
    #[arg(long, value_enum, default_value_t = HazardChoice::Any)]
    pub hazard: HazardChoice,

    /// First approach date (YYYY-MM-DD); ignored without --to
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last approach date (YYYY-MM-DD); ignored without --from
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState {
            min_velocity: self.min_velocity,
            min_diameter: self.min_diameter,
            max_diameter: self.max_diameter,
            max_au: self.max_au,
            max_lunar_distance: self.max_lunar,
            hazard: self.hazard.into(),
            date_range: DateRange::from_parts(self.from, self.to),
        }
    }
}

pub fn filter_command<S: QueryStore, W: Write>(
    out: &mut W,
    dashboard: &Dashboard<S>,
    args: &FilterArgs,
    format: OutputFormat,
    show_sql: bool,
) -> Result<()> {
    let state = args.to_state();

    if show_sql {
        let query = filter::build(&state);
        writeln!(out, "{}", query.sql)?;
        let params: Vec<String> = query.params.iter().map(|p| p.to_string()).collect();
        writeln!(out, "params: [{}]", params.join(", "))?;
    }

    let table = dashboard.apply(&state)?;
    if format != OutputFormat::Count {
        writeln!(out, "{} records found", table.num_rows())?;
    }
    write_table(out, &table, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(velocity("100000"), Ok(100000.0));
        assert!(velocity("100001").is_err());
        assert!(diameter("-0.1").is_err());
        assert_eq!(au("0.05"), Ok(0.05));
        assert!(au("1.5").is_err());
        assert!(lunar("abc").is_err());
    }

    #[test]
    fn test_bounds_reject_non_finite() {
        assert!(velocity("NaN").is_err());
        assert!(au("nan").is_err());
        assert!(diameter("inf").is_err());
        assert!(lunar("-inf").is_err());
    }

    #[test]
    fn test_hazard_choice() {
        assert_eq!(HazardFilter::from(HazardChoice::Any), HazardFilter::Any);
        assert_eq!(HazardFilter::from(HazardChoice::True), HazardFilter::True);
        assert_eq!(HazardFilter::from(HazardChoice::False), HazardFilter::False);
    }
}
