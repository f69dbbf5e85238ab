// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! neoquery - query core for the near-Earth object dashboard
//!
//! Two read paths over the `asteroids` and `close_approach` tables:
//! a fixed catalog of analytical queries run verbatim, and a filter view
//! whose query is assembled from a [`FilterState`] snapshot with bound
//! parameters. Both go through the [`QueryStore`] seam; [`DuckStore`]
//! implements it over DuckDB.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod schema;
pub mod store;

pub use catalog::{CATALOG, CatalogEntry};
pub use config::StoreConfig;
pub use dashboard::Dashboard;
pub use error::{NeoError, Result};
pub use filter::{FilterQuery, Param, Predicate};
pub use model::{Asteroid, CloseApproach, DateRange, FilterState, HazardFilter};
pub use store::{DuckStore, QueryStore, Table};
