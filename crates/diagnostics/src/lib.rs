// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging facade shared by the neowatch crates.
//!
//! Output goes to stderr through `emit_term`. The level comes from the
//! `NEO_LOG` environment variable:
//! - `NEO_LOG=off` (default) - nothing is emitted
//! - `NEO_LOG=error` / `warn` / `info` / `debug` - emit at that level and above

use std::sync::Once;

// Re-export emit so the macros resolve from dependent crates
pub use emit;

/// Environment variable that selects the log level.
pub const LOG_ENV: &str = "NEO_LOG";

static INIT: Once = Once::new();

/// Map a `NEO_LOG` value to a minimum level. `None` means logging is off.
pub fn parse_level(value: &str) -> Result<Option<emit::Level>, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "error" => Ok(Some(emit::Level::Error)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "info" => Ok(Some(emit::Level::Info)),
        "debug" => Ok(Some(emit::Level::Debug)),
        other => Err(format!("unknown {} value '{}'", LOG_ENV, other)),
    }
}

/// Initialize diagnostics from the `NEO_LOG` environment variable.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let value = std::env::var(LOG_ENV).unwrap_or_else(|_| "off".to_string());

        let level = match parse_level(&value) {
            Ok(None) => return,
            Ok(Some(level)) => level,
            Err(msg) => {
                // Bootstrap warning, the emitter is not installed yet
                eprintln!("Warning: {}, using 'info'", msg);
                emit::Level::Info
            }
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        // The runtime lives for the whole process
        std::mem::forget(rt);
    });
}

/// Log a normal operation (a query round trip, an import).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detail useful when debugging (rendered SQL, parameter counts).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log a condition that does not stop the operation.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log a failure that is about to be returned to the operator.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
