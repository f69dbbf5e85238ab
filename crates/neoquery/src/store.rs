// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Access to the relational store.

use diagnostics::*;
use duckdb::arrow::datatypes::{Schema, SchemaRef};
use duckdb::arrow::error::ArrowError;
use duckdb::arrow::record_batch::RecordBatch;
use duckdb::arrow::util::pretty::pretty_format_batches;
use duckdb::types::{ToSql, ToSqlOutput, Value};
use duckdb::{AccessMode, Config, Connection, params_from_iter};
use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::{NeoError, Result};
use crate::filter::Param;

/// A materialized result: ordered columns and ordered rows, as returned.
#[derive(Debug, Clone)]
pub struct Table {
    schema: SchemaRef,
    batches: Vec<RecordBatch>,
}

impl Table {
    pub fn new(schema: SchemaRef, batches: Vec<RecordBatch>) -> Self {
        Self { schema, batches }
    }

    pub fn empty() -> Self {
        Self::new(Arc::new(Schema::empty()), Vec::new())
    }

    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.schema.fields().iter().map(|f| f.name().clone()).collect()
    }

    /// Boxed text rendering of the whole table.
    pub fn pretty(&self) -> std::result::Result<String, ArrowError> {
        Ok(pretty_format_batches(&self.batches)?.to_string())
    }
}

/// One round trip to the store: SQL text plus positional parameters in,
/// a table out.
pub trait QueryStore {
    fn query(&self, sql: &str, params: &[Param]) -> Result<Table>;
}

impl ToSql for Param {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Param::Real(v) => ToSqlOutput::Owned(Value::Double(*v)),
            Param::Text(s) => ToSqlOutput::Owned(Value::Text(s.clone())),
        })
    }
}

/// DuckDB-backed store. Holds only the descriptor; every call opens its
/// own connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct DuckStore {
    config: StoreConfig,
}

impl DuckStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn connect(&self) -> Result<Connection> {
        open(&self.config)
    }
}

/// Open a connection according to the descriptor.
pub fn open(config: &StoreConfig) -> Result<Connection> {
    let path = &config.database;
    let conn = if config.read_only {
        Config::default()
            .access_mode(AccessMode::ReadOnly)
            .and_then(|flags| Connection::open_with_flags(path, flags))
    } else {
        Connection::open(path)
    };
    conn.map_err(|e| {
        let database = path.display().to_string();
        let reason = e.to_string();
        log_error!("Failed to open {database}: {reason}", database: database, reason: reason);
        NeoError::connection(path, e)
    })
}

fn query_failed(sql: &str, e: duckdb::Error) -> NeoError {
    let reason = e.to_string();
    log_error!("Query failed: {reason} in {sql}", reason: reason, sql: sql);
    NeoError::Query(e)
}

impl QueryStore for DuckStore {
    fn query(&self, sql: &str, params: &[Param]) -> Result<Table> {
        let conn = self.connect()?;
        let param_count = params.len();
        log_debug!("SQL with {param_count} params: {sql}", param_count: param_count, sql: sql);

        let table = {
            let mut stmt = conn.prepare(sql).map_err(|e| query_failed(sql, e))?;
            let arrow = stmt
                .query_arrow(params_from_iter(params.iter()))
                .map_err(|e| query_failed(sql, e))?;
            let schema = arrow.get_schema();
            let batches: Vec<RecordBatch> = arrow.collect();
            Table::new(schema, batches)
        };
        drop(conn);

        Ok(table)
    }
}
