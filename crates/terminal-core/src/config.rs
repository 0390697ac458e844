// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.
//
// Values are kept as the boundary's string tokens; the codec's translation
// tables turn them into SDK enums at the point of use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Persistent terminal settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TerminalConfig {
    /// Discovery method token (e.g. "internet", "bluetoothScan").
    pub discovery_method: String,
    /// Discover simulated readers instead of physical ones.
    pub simulated: bool,
    /// Native SDK log level token.
    pub log_level: String,
    /// Simulated reader update behaviour token.
    pub simulated_update: String,
    /// ISO currency code used for demo payments.
    pub currency: String,
    /// Location readers are registered to, if any.
    pub location_id: Option<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            discovery_method: "internet".into(),
            simulated: true,
            log_level: "none".into(),
            simulated_update: "none".into(),
            currency: "usd".into(),
            location_id: None,
        }
    }
}

impl TerminalConfig {
    /// Load settings from a JSON file.
    ///
    /// A missing or unreadable file yields the defaults; the bridge must be
    /// able to start without any persisted settings.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default terminal config");
                Self::default()
            }
        }
    }

    /// Load settings, reporting why the file could not be used.
    pub fn try_load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TerminalConfig::load(&dir.path().join("absent.json"));
        assert_eq!(config, TerminalConfig::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(TerminalConfig::try_load(&path).is_err());
        assert_eq!(TerminalConfig::load(&path), TerminalConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal.json");
        let config = TerminalConfig {
            discovery_method: "bluetoothScan".into(),
            log_level: "verbose".into(),
            location_id: Some("tml_123".into()),
            ..TerminalConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(TerminalConfig::load(&path), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal.json");
        std::fs::write(&path, r#"{ "discoveryMethod": "handoff" }"#).unwrap();

        let config = TerminalConfig::load(&path);
        assert_eq!(config.discovery_method, "handoff");
        assert_eq!(config.currency, "usd");
        assert!(config.simulated);
    }
}
