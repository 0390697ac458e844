// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the terminal bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum TerminalError {
    // -- Boundary payload contract --
    #[error("type mismatch at key `{key}`: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("missing required key `{0}`")]
    MissingKey(String),

    #[error("unknown method `{0}`")]
    UnknownMethod(String),

    // -- Native SDK --
    #[error("no reader is connected")]
    NotConnected,

    #[error("native SDK error {code}: {message}")]
    Sdk { code: String, message: String },

    // -- Configuration / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

impl TerminalError {
    /// Stable code reported across the boundary alongside the message.
    ///
    /// SDK errors keep the code the native layer supplied.
    pub fn code(&self) -> &str {
        match self {
            Self::TypeMismatch { .. } => "typeMismatch",
            Self::MissingKey(_) => "missingKey",
            Self::UnknownMethod(_) => "unknownMethod",
            Self::NotConnected => "notConnectedToReader",
            Self::Sdk { code, .. } => code,
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::PlatformUnavailable => "platformUnavailable",
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TerminalError>;
