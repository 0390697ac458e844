// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// terminal-codec: translation between native SDK snapshots and the generic
// value trees that cross the UI runtime boundary.
//
// The codec is stateless: every function is a pure transformation of its
// argument and may be called from any thread without coordination.

pub mod access;
pub mod decode;
pub mod encode;
pub mod events;
pub mod response;
pub mod tokens;

pub use access::{Field, lookup};
pub use decode::{map_to_cart, map_to_cart_line_items, map_to_discovery_configuration};
pub use encode::*;
pub use events::map_from_event;
pub use response::{create_error, create_result};
pub use tokens::*;
