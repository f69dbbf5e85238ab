// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{self, FilterArgs};
use cmd::common::{OutputFormat, store_config};
use neoquery::{Dashboard, DuckStore};

/// Near-Earth object dashboard: run the fixed analytical queries or
/// filter close approaches against a DuckDB database.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "neo")]
struct Cli {
    /// Database file (defaults to NEO_DB, then the NEO_CONFIG file)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the asteroids and close_approach tables
    Init,

    /// Load CSV files into the tables
    Import {
        /// CSV with asteroids columns
        #[arg(long)]
        asteroids: Option<PathBuf>,

        /// CSV with close_approach columns
        #[arg(long)]
        approaches: Option<PathBuf>,
    },

    /// List the catalog queries
    #[command(visible_alias = "ls")]
    Queries {
        /// Print each query's SQL under its label
        #[arg(long)]
        sql: bool,
    },

    /// Run one catalog query, by label or by number
    Run {
        query: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Apply the filter view
    Filter {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print the generated SQL and parameters first
        #[arg(long)]
        show_sql: bool,
    },
}

#[allow(clippy::print_stderr)]
fn main() {
    match main_result() {
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {:?}", err);
            std::process::exit(1);
        }
    }
}

fn main_result() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Init => {
            let config = store_config(cli.database, false)?;
            commands::init_command(&mut out, &config)
        }

        Commands::Import {
            asteroids,
            approaches,
        } => {
            let config = store_config(cli.database, false)?;
            commands::import_command(&mut out, &config, asteroids.as_deref(), approaches.as_deref())
        }

        Commands::Queries { sql } => commands::queries_command(&mut out, sql),

        Commands::Run { query, format } => {
            let dashboard = Dashboard::new(DuckStore::new(store_config(cli.database, true)?));
            commands::run_command(&mut out, &dashboard, &query, format)
        }

        Commands::Filter {
            filter,
            format,
            show_sql,
        } => {
            let dashboard = Dashboard::new(DuckStore::new(store_config(cli.database, true)?));
            commands::filter_command(&mut out, &dashboard, &filter, format, show_sql)
        }
    }
}
