// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Builds the parametrized query behind the filter view.
//!
//! A [`FilterState`] becomes an ordered list of [`Predicate`]s. The list
//! is rendered once, and the bound parameters are read off the same list,
//! so clause order and parameter order cannot drift apart.

use sea_query::{Expr, Order, Query, SelectStatement, SimpleExpr, SqliteQueryBuilder, Value};
use std::fmt;

use crate::model::FilterState;
use crate::schema::{Asteroids, CloseApproach};

/// A positional parameter bound to one `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Real(f64),
    Text(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Real(v) => write!(f, "{}", v),
            Param::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Param::Real(v)
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

impl From<&Param> for Value {
    fn from(p: &Param) -> Self {
        match p {
            Param::Real(v) => Value::from(*v),
            Param::Text(s) => Value::from(s.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Asteroid(Asteroids),
    Approach(CloseApproach),
}

impl Column {
    fn expr(self) -> Expr {
        match self {
            Column::Asteroid(c) => Expr::col((Asteroids::Table, c)),
            Column::Approach(c) => Expr::col((CloseApproach::Table, c)),
        }
    }
}

/// One clause of the WHERE conjunction.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column >= ?`
    AtLeast(Column, Param),
    /// `column <= ?`
    AtMost(Column, Param),
    /// `column BETWEEN ? AND ?`
    Between(Column, Param, Param),
    /// `column = TRUE|FALSE`, rendered inline. Only for values drawn from a
    /// closed set; anything the operator can type must go through a `Param`.
    IsLiteral(Column, bool),
}

impl Predicate {
    pub fn params(&self) -> Vec<&Param> {
        match self {
            Predicate::AtLeast(_, p) | Predicate::AtMost(_, p) => vec![p],
            Predicate::Between(_, lo, hi) => vec![lo, hi],
            Predicate::IsLiteral(..) => vec![],
        }
    }

    fn to_expr(&self) -> SimpleExpr {
        match self {
            Predicate::AtLeast(c, p) => c.expr().gte(Value::from(p)),
            Predicate::AtMost(c, p) => c.expr().lte(Value::from(p)),
            Predicate::Between(c, lo, hi) => c.expr().between(Value::from(lo), Value::from(hi)),
            Predicate::IsLiteral(c, b) => c.expr().eq(SimpleExpr::Constant(Value::Bool(Some(*b)))),
        }
    }
}

/// Rendered SQL plus its parameters, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<Param>,
}

/// The ordered predicate list for a filter snapshot.
pub fn predicates(state: &FilterState) -> Vec<Predicate> {
    use Asteroids as A;
    use CloseApproach as C;

    let mut preds = vec![
        Predicate::AtLeast(
            Column::Approach(C::RelativeVelocityKmph),
            state.min_velocity.into(),
        ),
        Predicate::AtLeast(
            Column::Asteroid(A::EstimatedDiameterMinKm),
            state.min_diameter.into(),
        ),
        Predicate::AtLeast(
            Column::Asteroid(A::EstimatedDiameterMaxKm),
            state.max_diameter.into(),
        ),
        Predicate::AtMost(Column::Approach(C::Astronomical), state.max_au.into()),
        Predicate::AtMost(
            Column::Approach(C::MissDistanceLunar),
            state.max_lunar_distance.into(),
        ),
    ];

    if let Some(range) = &state.date_range {
        preds.push(Predicate::Between(
            Column::Approach(C::CloseApproachDate),
            range.start.format("%Y-%m-%d").to_string().into(),
            range.end.format("%Y-%m-%d").to_string().into(),
        ));
    }

    if let Some(flag) = state.hazard.required() {
        preds.push(Predicate::IsLiteral(
            Column::Asteroid(A::IsPotentiallyHazardousAsteroid),
            flag,
        ));
    }

    preds
}

fn base_select() -> SelectStatement {
    Query::select()
        .column((Asteroids::Table, Asteroids::Name))
        .column((Asteroids::Table, Asteroids::EstimatedDiameterMinKm))
        .column((Asteroids::Table, Asteroids::EstimatedDiameterMaxKm))
        .column((Asteroids::Table, Asteroids::IsPotentiallyHazardousAsteroid))
        .column((CloseApproach::Table, CloseApproach::CloseApproachDate))
        .column((CloseApproach::Table, CloseApproach::RelativeVelocityKmph))
        .column((CloseApproach::Table, CloseApproach::Astronomical))
        .column((CloseApproach::Table, CloseApproach::MissDistanceKm))
        .column((CloseApproach::Table, CloseApproach::MissDistanceLunar))
        .from(Asteroids::Table)
        .inner_join(
            CloseApproach::Table,
            Expr::col((Asteroids::Table, Asteroids::Id))
                .equals((CloseApproach::Table, CloseApproach::NeoReferenceId)),
        )
        .to_owned()
}

/// Render a predicate list into the filter query.
pub fn render(preds: &[Predicate]) -> FilterQuery {
    let mut select = base_select();
    for pred in preds {
        select.and_where(pred.to_expr());
    }
    select.order_by(
        (CloseApproach::Table, CloseApproach::RelativeVelocityKmph),
        Order::Desc,
    );

    let (sql, values) = select.build(SqliteQueryBuilder);
    let params: Vec<Param> = preds
        .iter()
        .flat_map(|p| p.params())
        .cloned()
        .collect();
    debug_assert_eq!(values.0.len(), params.len());

    FilterQuery { sql, params }
}

/// Translate a filter snapshot into one parametrized query.
pub fn build(state: &FilterState) -> FilterQuery {
    render(&predicates(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DateRange, HazardFilter};
    use chrono::NaiveDate;

    fn january() -> Option<DateRange> {
        DateRange::from_parts(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 31),
        )
    }

    fn reals(values: &[f64]) -> Vec<Param> {
        values.iter().copied().map(Param::Real).collect()
    }

    const ORDER_CLAUSE: &str = r#"ORDER BY "close_approach"."relative_velocity_kmph" DESC"#;
    const HAZARD_COLUMN: &str = r#""asteroids"."is_potentially_hazardous_asteroid""#;

    #[test]
    fn test_default_state_has_five_base_params() {
        let q = build(&FilterState::default());
        assert_eq!(q.params, reals(&[25000.0, 0.5, 0.5, 0.05, 200.0]));
        assert_eq!(q.sql.matches('?').count(), 5);
        assert!(!q.sql.contains("BETWEEN"));
        assert!(!q.sql.contains(&format!("{} =", HAZARD_COLUMN)));
        assert!(q.sql.ends_with(ORDER_CLAUSE), "{}", q.sql);
    }

    #[test]
    fn test_base_predicates_in_order() {
        let q = build(&FilterState::default());
        let clauses = [
            r#""close_approach"."relative_velocity_kmph" >= ?"#,
            r#""asteroids"."estimated_diameter_min_km" >= ?"#,
            r#""asteroids"."estimated_diameter_max_km" >= ?"#,
            r#""close_approach"."astronomical" <= ?"#,
            r#""close_approach"."miss_distance_lunar" <= ?"#,
        ];
        let mut last = 0;
        for clause in clauses {
            let at = q.sql.find(clause).unwrap_or_else(|| panic!("missing {} in {}", clause, q.sql));
            assert!(at > last, "{} out of order", clause);
            last = at;
        }
    }

    #[test]
    fn test_join_on_reference_id() {
        let q = build(&FilterState::default());
        assert!(q.sql.contains(
            r#"INNER JOIN "close_approach" ON "asteroids"."id" = "close_approach"."neo_reference_id""#
        ), "{}", q.sql);
    }

    #[test]
    fn test_date_range_adds_two_text_params() {
        let q = build(&FilterState::default().with_date_range(january()));
        assert_eq!(q.params.len(), 7);
        assert_eq!(q.params[5], Param::Text("2024-01-01".to_string()));
        assert_eq!(q.params[6], Param::Text("2024-01-31".to_string()));
        assert!(q.sql.contains(r#""close_approach"."close_approach_date" BETWEEN ? AND ?"#));
        assert!(q.sql.ends_with(ORDER_CLAUSE));
    }

    #[test]
    fn test_hazard_true_is_literal() {
        let q = build(&FilterState::default().with_hazard(HazardFilter::True));
        assert_eq!(q.params.len(), 5);
        assert!(q.sql.contains(&format!("{} = TRUE", HAZARD_COLUMN)), "{}", q.sql);
        assert!(q.sql.ends_with(ORDER_CLAUSE));
    }

    #[test]
    fn test_hazard_literal_is_bare() {
        let q = build(&FilterState::default().with_hazard(HazardFilter::True));
        assert!(!q.sql.contains("(TRUE)"), "{}", q.sql);
        let suffix = format!("AND {} = TRUE {}", HAZARD_COLUMN, ORDER_CLAUSE);
        assert!(q.sql.ends_with(&suffix), "{}", q.sql);

        let q = build(&FilterState::default().with_hazard(HazardFilter::False));
        assert!(!q.sql.contains("(FALSE)"), "{}", q.sql);
        assert_eq!(q.params.len(), 5);
    }

    #[test]
    fn test_hazard_false_is_literal() {
        let q = build(&FilterState::default().with_hazard(HazardFilter::False));
        assert_eq!(q.params.len(), 5);
        assert!(q.sql.contains(&format!("{} = FALSE", HAZARD_COLUMN)), "{}", q.sql);
    }

    #[test]
    fn test_date_then_hazard_clause_order() {
        let state = FilterState::default()
            .with_hazard(HazardFilter::True)
            .with_date_range(january());
        let q = build(&state);

        let mut expected = reals(&[25000.0, 0.5, 0.5, 0.05, 200.0]);
        expected.push(Param::Text("2024-01-01".to_string()));
        expected.push(Param::Text("2024-01-31".to_string()));
        assert_eq!(q.params, expected);

        let between = q.sql.find("BETWEEN").expect("date clause");
        let hazard = q
            .sql
            .find(&format!("{} = TRUE", HAZARD_COLUMN))
            .expect("hazard clause");
        let order = q.sql.find("ORDER BY").expect("order clause");
        assert!(between < hazard && hazard < order);
    }

    #[test]
    fn test_values_are_forwarded_unchecked() {
        let state = FilterState {
            min_velocity: -1.0,
            max_au: 42.0,
            ..FilterState::default()
        };
        let q = build(&state);
        assert_eq!(q.params[0], Param::Real(-1.0));
        assert_eq!(q.params[3], Param::Real(42.0));
    }

    #[test]
    fn test_predicate_params() {
        let preds = predicates(&FilterState::default().with_hazard(HazardFilter::False));
        assert_eq!(preds.len(), 6);
        assert!(preds[5].params().is_empty());
        assert_eq!(preds[0].params(), vec![&Param::Real(25000.0)]);
    }
}
