// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scripted boundary call sequences, driven the way a UI runtime would drive
// the bridge: parameter trees in, response trees out.

use serde_json::{Value, json};
use terminal_bridge::TerminalModule;
use terminal_core::TerminalConfig;
use terminal_core::error::{Result, TerminalError};
use tracing::info;

/// One boundary call and its response.
#[derive(Debug, Clone)]
pub struct Step {
    pub method: &'static str,
    pub request: Value,
    pub response: Value,
}

/// Records every call so the whole exchange can be printed afterwards.
pub struct Session<'a> {
    module: &'a TerminalModule,
    steps: Vec<Step>,
}

impl<'a> Session<'a> {
    pub fn new(module: &'a TerminalModule) -> Self {
        Self {
            module,
            steps: Vec::new(),
        }
    }

    /// Perform a call, turning an error response back into an error.
    pub fn call(&mut self, method: &'static str, request: Value) -> Result<Value> {
        let response = self.module.call(method, &request);
        self.steps.push(Step {
            method,
            request,
            response: response.clone(),
        });

        match response.get("error") {
            Some(error) => Err(TerminalError::Sdk {
                code: error["code"].as_str().unwrap_or("unknown").to_owned(),
                message: error["message"].as_str().unwrap_or_default().to_owned(),
            }),
            None => Ok(response),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

fn string_at<'v>(value: &'v Value, pointer: &str) -> Result<&'v str> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .ok_or_else(|| TerminalError::MissingKey(pointer.to_owned()))
}

/// Initialise the SDK, discover readers and connect to the first one.
pub fn connect(session: &mut Session<'_>, config: &TerminalConfig) -> Result<()> {
    session.call("initialize", json!({ "logLevel": config.log_level }))?;
    session.call(
        "simulateReaderUpdate",
        json!({ "update": config.simulated_update }),
    )?;

    let discovered = session.call(
        "discoverReaders",
        json!({
            "discoveryMethod": config.discovery_method,
            "simulated": config.simulated,
        }),
    )?;
    let serial_number = string_at(&discovered, "/readers/0/serialNumber")?.to_owned();
    info!(%serial_number, "connecting to first discovered reader");

    session.call(
        "connectReader",
        json!({
            "reader": { "serialNumber": serial_number },
            "locationId": config.location_id,
        }),
    )?;
    Ok(())
}

/// Take a card payment with a cart on the reader display, then refund part of it.
pub fn payment_flow(session: &mut Session<'_>, config: &TerminalConfig) -> Result<()> {
    session.call(
        "setReaderDisplay",
        json!({
            "cart": {
                "currency": config.currency,
                "tax": 100,
                "total": 1200,
                "lineItems": [
                    { "displayName": "Flat white", "quantity": 2, "amount": 450 },
                    { "displayName": "Croissant", "quantity": 1, "amount": 200 },
                ],
            }
        }),
    )?;

    let created = session.call(
        "createPaymentIntent",
        json!({ "amount": 1200, "currency": config.currency, "description": "Demo order" }),
    )?;
    let payment_intent_id = string_at(&created, "/paymentIntent/id")?.to_owned();

    session.call(
        "collectPaymentMethod",
        json!({ "paymentIntentId": payment_intent_id }),
    )?;
    let confirmed = session.call(
        "confirmPaymentIntent",
        json!({ "paymentIntentId": payment_intent_id }),
    )?;
    session.call("clearReaderDisplay", Value::Null)?;

    let charge_id = string_at(&confirmed, "/paymentIntent/charges/0/id")?.to_owned();
    session.call(
        "collectRefundPaymentMethod",
        json!({ "chargeId": charge_id, "amount": 450, "currency": config.currency }),
    )?;
    session.call("confirmRefund", Value::Null)?;
    Ok(())
}

/// Save a card for later use.
pub fn setup_flow(session: &mut Session<'_>) -> Result<()> {
    let created = session.call(
        "createSetupIntent",
        json!({ "description": "Save card for subscription" }),
    )?;
    let setup_intent_id = string_at(&created, "/setupIntent/id")?.to_owned();

    session.call(
        "collectSetupIntentPaymentMethod",
        json!({ "setupIntentId": setup_intent_id, "customerConsentCollected": true }),
    )?;
    session.call(
        "confirmSetupIntent",
        json!({ "setupIntentId": setup_intent_id }),
    )?;
    Ok(())
}

/// Read back account and device state, then disconnect.
pub fn wrap_up(session: &mut Session<'_>) -> Result<()> {
    session.call("listLocations", json!({ "limit": 10 }))?;
    session.call("offlineStatus", Value::Null)?;
    session.call("drainEvents", Value::Null)?;
    session.call("disconnectReader", Value::Null)?;
    session.call("connectionStatus", Value::Null)?;
    Ok(())
}

/// Run every flow in order, stopping at the first failed call.
pub fn run_all(session: &mut Session<'_>, config: &TerminalConfig) -> Result<()> {
    connect(session, config)?;
    payment_flow(session, config)?;
    setup_flow(session)?;
    wrap_up(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminal_bridge::platform_bridge;

    fn module() -> TerminalModule {
        TerminalModule::new(platform_bridge())
    }

    #[test]
    fn all_flows_complete_with_defaults() {
        let module = module();
        let mut session = Session::new(&module);
        run_all(&mut session, &TerminalConfig::default()).unwrap();

        let steps = session.steps();
        assert!(steps.iter().all(|s| s.response.get("error").is_none()));
        let last = steps.last().unwrap();
        assert_eq!(last.method, "connectionStatus");
        assert_eq!(last.response["connectionStatus"], "notConnected");
    }

    #[test]
    fn refund_is_partial() {
        let module = module();
        let mut session = Session::new(&module);
        let config = TerminalConfig::default();
        connect(&mut session, &config).unwrap();
        payment_flow(&mut session, &config).unwrap();

        let refund = &session.steps().last().unwrap().response;
        assert_eq!(refund["refund"]["amount"], 450);
        assert_eq!(refund["refund"]["status"], "succeeded");
    }

    #[test]
    fn location_from_config_is_used() {
        let module = module();
        let mut session = Session::new(&module);
        let config = TerminalConfig {
            location_id: Some("tml_simulated_main".into()),
            ..TerminalConfig::default()
        };
        connect(&mut session, &config).unwrap();

        let connected = &session.steps().last().unwrap().response;
        assert_eq!(connected["reader"]["locationId"], "tml_simulated_main");
        assert_eq!(connected["reader"]["locationStatus"], "set");
    }

    #[test]
    fn physical_discovery_stops_the_run() {
        let module = module();
        let mut session = Session::new(&module);
        let config = TerminalConfig {
            simulated: false,
            ..TerminalConfig::default()
        };

        let err = run_all(&mut session, &config).unwrap_err();
        assert_eq!(err.code(), "platformUnavailable");
        assert_eq!(session.steps().last().unwrap().method, "discoverReaders");
    }

    #[test]
    fn config_file_drives_discovery() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terminal.json");
        std::fs::write(&path, r#"{ "discoveryMethod": "bluetoothScan" }"#).unwrap();
        let config = TerminalConfig::load(&path);

        let module = module();
        let mut session = Session::new(&module);
        connect(&mut session, &config).unwrap();

        let connected = &session.steps().last().unwrap().response;
        assert_eq!(connected["reader"]["deviceType"], "chipper2X");
    }
}
