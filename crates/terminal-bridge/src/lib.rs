// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native card-reader SDK seam.
//
// `traits` is the contract a platform SDK binding implements, `simulated`
// is the in-process backend used on desktop and CI, and `module` routes
// boundary calls from the UI runtime through the codec to a backend.

pub mod module;
pub mod simulated;
pub mod traits;

pub use module::TerminalModule;

/// Returns the bridge implementation for the current build.
///
/// Native SDK bindings are vendor-owned and linked by the host app; builds
/// without one get the simulator.
pub fn platform_bridge() -> Box<dyn traits::TerminalBridge> {
    Box::new(simulated::SimulatedTerminal::new())
}
