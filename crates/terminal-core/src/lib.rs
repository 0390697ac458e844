// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Terminal bridge: native SDK snapshots, request types and errors shared
// across all crates.

pub mod config;
pub mod enums;
pub mod error;
pub mod events;
pub mod request;
pub mod types;

pub use config::TerminalConfig;
pub use enums::*;
pub use error::TerminalError;
pub use events::TerminalEvent;
pub use request::*;
pub use types::*;
