// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod filter;
pub mod import;
pub mod init;
pub mod queries;
pub mod run;

pub use filter::{FilterArgs, filter_command};
pub use import::import_command;
pub use init::init_command;
pub use queries::queries_command;
pub use run::run_command;
