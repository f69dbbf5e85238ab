// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The two dashboard operations: run a catalog query, apply a filter.

use diagnostics::*;

use crate::catalog;
use crate::error::{NeoError, Result};
use crate::filter::{self, FilterQuery};
use crate::model::FilterState;
use crate::store::{QueryStore, Table};

pub struct Dashboard<S: QueryStore> {
    store: S,
}

impl<S: QueryStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the catalog entry with this exact label. Nothing is cached, so
    /// every call is a fresh round trip.
    pub fn execute(&self, label: &str) -> Result<Table> {
        let entry = catalog::lookup(label).ok_or_else(|| {
            log_error!("Unknown catalog label {label}", label: label);
            NeoError::query_not_found(label)
        })?;

        let table = self.store.query(entry.sql, &[])?;
        let rows = table.num_rows();
        log_info!("Catalog query {label} returned {rows} rows", label: label, rows: rows);
        Ok(table)
    }

    /// Build the filter query for `state` and run it.
    pub fn apply(&self, state: &FilterState) -> Result<Table> {
        let FilterQuery { sql, params } = filter::build(state);
        let table = self.store.query(&sql, &params)?;

        let rows = table.num_rows();
        let hazard = state.hazard.to_string();
        let dated = state.date_range.is_some();
        log_info!("Filter (hazard {hazard}, dated {dated}) matched {rows} rows",
                  hazard: hazard, dated: dated, rows: rows);
        Ok(table)
    }
}
