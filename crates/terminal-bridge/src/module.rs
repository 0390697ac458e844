// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Boundary call surface exposed to the UI runtime.
//
// Every call takes a generic parameter tree and returns a generic response
// tree: `{ <key>: <encoded node> }` on success or
// `{ "error": { "code", "message" } }` on failure. Nothing panics across the
// boundary; payload contract violations become error responses.

use serde_json::{Map, Value};
use terminal_codec::access::{
    get_boolean, get_int_or, get_map_or, get_string_or, params, require_int, require_string,
};
use terminal_codec::{
    create_error, create_result, map_from_connection_status, map_from_event,
    map_from_list_locations, map_from_offline_status, map_from_payment_intent,
    map_from_payment_status, map_from_reader, map_from_readers, map_from_refund,
    map_from_setup_intent, map_to_cart, map_to_discovery_configuration, map_to_log_level,
    map_to_simulate_reader_update,
};
use terminal_core::error::{Result, TerminalError};
use terminal_core::request::{
    PaymentIntentParameters, RefundParameters, SetupIntentParameters, SimulatorConfiguration,
};
use tracing::{debug, warn};

use crate::traits::TerminalBridge;

/// Method names accepted by [`TerminalModule::call`].
pub const METHODS: &[&str] = &[
    "initialize",
    "simulateReaderUpdate",
    "discoverReaders",
    "connectReader",
    "disconnectReader",
    "connectionStatus",
    "paymentStatus",
    "createPaymentIntent",
    "collectPaymentMethod",
    "confirmPaymentIntent",
    "cancelPaymentIntent",
    "setReaderDisplay",
    "clearReaderDisplay",
    "createSetupIntent",
    "collectSetupIntentPaymentMethod",
    "confirmSetupIntent",
    "collectRefundPaymentMethod",
    "confirmRefund",
    "listLocations",
    "offlineStatus",
    "drainEvents",
];

/// Routes boundary calls to a [`TerminalBridge`] backend.
pub struct TerminalModule {
    bridge: Box<dyn TerminalBridge>,
}

impl TerminalModule {
    pub fn new(bridge: Box<dyn TerminalBridge>) -> Self {
        Self { bridge }
    }

    pub fn platform_name(&self) -> &str {
        self.bridge.platform_name()
    }

    /// Dispatch one boundary call and encode its response.
    pub fn call(&self, method: &str, payload: &Value) -> Value {
        debug!(method, "boundary call");
        match self.dispatch(method, payload) {
            Ok(response) => response,
            Err(err) => {
                warn!(method, code = err.code(), "boundary call failed: {err}");
                create_error(&err)
            }
        }
    }

    fn dispatch(&self, method: &str, payload: &Value) -> Result<Value> {
        let p = params(payload)?;
        match method {
            "initialize" => self.initialize(&p),
            "simulateReaderUpdate" => self.simulate_reader_update(&p),
            "discoverReaders" => self.discover_readers(&p),
            "connectReader" => self.connect_reader(&p),
            "disconnectReader" => {
                self.bridge.disconnect_reader()?;
                Ok(empty())
            }
            "connectionStatus" => Ok(create_result(
                "connectionStatus",
                map_from_connection_status(&self.bridge.connection_status()).into(),
            )),
            "paymentStatus" => Ok(create_result(
                "paymentStatus",
                map_from_payment_status(&self.bridge.payment_status()).into(),
            )),
            "createPaymentIntent" => self.create_payment_intent(&p),
            "collectPaymentMethod" => {
                let id = require_string(&p, "paymentIntentId")?;
                let intent = self.bridge.collect_payment_method(id)?;
                Ok(create_result("paymentIntent", map_from_payment_intent(&intent)))
            }
            "confirmPaymentIntent" => {
                let id = require_string(&p, "paymentIntentId")?;
                let intent = self.bridge.confirm_payment_intent(id)?;
                Ok(create_result("paymentIntent", map_from_payment_intent(&intent)))
            }
            "cancelPaymentIntent" => {
                let id = require_string(&p, "paymentIntentId")?;
                let intent = self.bridge.cancel_payment_intent(id)?;
                Ok(create_result("paymentIntent", map_from_payment_intent(&intent)))
            }
            "setReaderDisplay" => {
                let cart = get_map_or(&p, "cart", None)?
                    .ok_or_else(|| TerminalError::MissingKey("cart".into()))?;
                self.bridge.set_reader_display(&map_to_cart(cart)?)?;
                Ok(empty())
            }
            "clearReaderDisplay" => {
                self.bridge.clear_reader_display()?;
                Ok(empty())
            }
            "createSetupIntent" => self.create_setup_intent(&p),
            "collectSetupIntentPaymentMethod" => {
                let id = require_string(&p, "setupIntentId")?;
                let consent = get_boolean(&p, "customerConsentCollected")?;
                let intent = self.bridge.collect_setup_intent_payment_method(id, consent)?;
                Ok(create_result("setupIntent", map_from_setup_intent(&intent)))
            }
            "confirmSetupIntent" => {
                let id = require_string(&p, "setupIntentId")?;
                let intent = self.bridge.confirm_setup_intent(id)?;
                Ok(create_result("setupIntent", map_from_setup_intent(&intent)))
            }
            "collectRefundPaymentMethod" => self.collect_refund_payment_method(&p),
            "confirmRefund" => {
                let refund = self.bridge.confirm_refund()?;
                Ok(create_result("refund", map_from_refund(&refund)))
            }
            "listLocations" => self.list_locations(&p),
            "offlineStatus" => {
                let status = self.bridge.offline_status()?;
                Ok(create_result("offlineStatus", map_from_offline_status(&status)))
            }
            "drainEvents" => Ok(create_result("events", self.drain_events())),
            other => Err(TerminalError::UnknownMethod(other.to_owned())),
        }
    }

    fn initialize(&self, p: &Map<String, Value>) -> Result<Value> {
        let log_level = map_to_log_level(get_string_or(p, "logLevel", None)?);
        self.bridge.initialize(log_level)?;
        // A reader may survive a UI runtime reload; report it so the UI can
        // resume without rediscovering.
        let reader = self.bridge.connected_reader();
        Ok(create_result(
            "reader",
            reader.as_ref().map_or(Value::Null, map_from_reader),
        ))
    }

    fn simulate_reader_update(&self, p: &Map<String, Value>) -> Result<Value> {
        let update = map_to_simulate_reader_update(get_string_or(p, "update", None)?);
        self.bridge
            .set_simulator_configuration(SimulatorConfiguration { update })?;
        Ok(empty())
    }

    fn discover_readers(&self, p: &Map<String, Value>) -> Result<Value> {
        let config = map_to_discovery_configuration(p)?;
        let readers = self.bridge.discover_readers(&config)?;
        Ok(create_result("readers", map_from_readers(&readers)))
    }

    fn connect_reader(&self, p: &Map<String, Value>) -> Result<Value> {
        let reader = get_map_or(p, "reader", None)?
            .ok_or_else(|| TerminalError::MissingKey("reader".into()))?;
        let serial_number = require_string(reader, "serialNumber")?;
        let location_id = get_string_or(p, "locationId", None)?;

        let reader = self.bridge.connect_reader(serial_number, location_id)?;
        Ok(create_result("reader", map_from_reader(&reader)))
    }

    fn create_payment_intent(&self, p: &Map<String, Value>) -> Result<Value> {
        let params = PaymentIntentParameters {
            amount: require_int(p, "amount")?,
            currency: require_string(p, "currency")?.to_owned(),
            description: get_string_or(p, "description", None)?.map(str::to_owned),
        };
        let intent = self.bridge.create_payment_intent(&params)?;
        Ok(create_result("paymentIntent", map_from_payment_intent(&intent)))
    }

    fn create_setup_intent(&self, p: &Map<String, Value>) -> Result<Value> {
        let params = SetupIntentParameters {
            customer_id: get_string_or(p, "customerId", None)?.map(str::to_owned),
            description: get_string_or(p, "description", None)?.map(str::to_owned),
        };
        let intent = self.bridge.create_setup_intent(&params)?;
        Ok(create_result("setupIntent", map_from_setup_intent(&intent)))
    }

    fn collect_refund_payment_method(&self, p: &Map<String, Value>) -> Result<Value> {
        let params = RefundParameters {
            charge_id: require_string(p, "chargeId")?.to_owned(),
            amount: require_int(p, "amount")?,
            currency: require_string(p, "currency")?.to_owned(),
        };
        self.bridge.collect_refund_payment_method(&params)?;
        Ok(empty())
    }

    fn list_locations(&self, p: &Map<String, Value>) -> Result<Value> {
        let limit = get_int_or(p, "limit", None)?.and_then(|l| match u32::try_from(l) {
            Ok(limit) => Some(limit),
            Err(_) => {
                debug!(limit = l, "out-of-range location limit, listing without a limit");
                None
            }
        });
        let locations = self.bridge.list_locations(limit)?;
        Ok(create_result("locations", map_from_list_locations(&locations)))
    }

    /// Encode pending SDK callbacks as `[{ "name", "payload" }]` in arrival order.
    fn drain_events(&self) -> Value {
        self.bridge
            .drain_events()
            .iter()
            .map(|event| {
                let (name, payload) = map_from_event(event);
                serde_json::json!({ "name": name, "payload": payload })
            })
            .collect()
    }
}

/// Success response for calls with nothing to report.
fn empty() -> Value {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulated::SimulatedTerminal;
    use serde_json::json;

    fn module() -> TerminalModule {
        TerminalModule::new(Box::new(SimulatedTerminal::new()))
    }

    fn connected_module() -> TerminalModule {
        let module = module();
        module.call("initialize", &json!({ "logLevel": "verbose" }));
        module.call(
            "discoverReaders",
            &json!({ "discoveryMethod": "internet", "simulated": true }),
        );
        let response = module.call(
            "connectReader",
            &json!({ "reader": { "serialNumber": "SIMULATORPOSE1" } }),
        );
        assert!(response.get("reader").is_some(), "{response}");
        module.call("drainEvents", &Value::Null);
        module
    }

    #[test]
    fn initialize_reports_no_reader() {
        let response = module().call("initialize", &Value::Null);
        assert_eq!(response, json!({ "reader": null }));
    }

    #[test]
    fn unknown_method_is_an_error_response() {
        let response = module().call("teleport", &Value::Null);
        assert_eq!(response["error"]["code"], "unknownMethod");
    }

    #[test]
    fn non_map_payload_is_a_type_mismatch() {
        let response = module().call("initialize", &json!([1, 2]));
        assert_eq!(response["error"]["code"], "typeMismatch");
    }

    #[test]
    fn discovered_readers_are_encoded() {
        let module = module();
        module.call("initialize", &Value::Null);
        let response = module.call(
            "discoverReaders",
            &json!({ "discoveryMethod": "bluetoothScan", "simulated": true }),
        );
        let readers = response["readers"].as_array().unwrap();
        assert_eq!(readers.len(), 3);
        assert_eq!(readers[0]["deviceType"], "chipper2X");
        assert!(readers[0]["batteryLevel"].is_number());
    }

    #[test]
    fn payment_flow_over_the_boundary() {
        let module = connected_module();
        let created = module.call(
            "createPaymentIntent",
            &json!({ "amount": 1050, "currency": "usd" }),
        );
        let id = created["paymentIntent"]["id"].as_str().unwrap().to_owned();
        assert_eq!(created["paymentIntent"]["status"], "requiresPaymentMethod");

        let collected = module.call("collectPaymentMethod", &json!({ "paymentIntentId": id }));
        assert_eq!(collected["paymentIntent"]["status"], "requiresConfirmation");

        let confirmed = module.call("confirmPaymentIntent", &json!({ "paymentIntentId": id }));
        assert_eq!(confirmed["paymentIntent"]["status"], "succeeded");
        assert_eq!(confirmed["paymentIntent"]["amount"], 1050);
        assert_eq!(confirmed["paymentIntent"]["charges"].as_array().unwrap().len(), 1);

        let events = module.call("drainEvents", &Value::Null);
        let names: Vec<_> = events["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_owned())
            .collect();
        assert!(names.contains(&"didRequestReaderInput".to_owned()));
    }

    #[test]
    fn wrong_amount_type_is_reported() {
        let module = connected_module();
        let response = module.call(
            "createPaymentIntent",
            &json!({ "amount": "ten", "currency": "usd" }),
        );
        assert_eq!(response["error"]["code"], "typeMismatch");
        assert!(
            response["error"]["message"]
                .as_str()
                .unwrap()
                .contains("amount")
        );
    }

    #[test]
    fn missing_payment_intent_id_is_reported() {
        let response = connected_module().call("collectPaymentMethod", &json!({}));
        assert_eq!(response["error"]["code"], "missingKey");
    }

    #[test]
    fn reader_display_requires_cart_fields() {
        let module = connected_module();
        let ok = module.call(
            "setReaderDisplay",
            &json!({ "cart": {
                "currency": "usd",
                "tax": 50,
                "total": 1050,
                "lineItems": [{ "displayName": "Latte", "quantity": 2, "amount": 500 }],
            }}),
        );
        assert_eq!(ok, json!({}));

        let missing = module.call("setReaderDisplay", &json!({ "cart": { "currency": "usd" } }));
        assert_eq!(missing["error"]["code"], "missingKey");
    }

    #[test]
    fn calls_without_reader_report_not_connected() {
        let module = module();
        module.call("initialize", &Value::Null);
        let response = module.call("clearReaderDisplay", &Value::Null);
        assert_eq!(response["error"]["code"], "notConnectedToReader");
    }

    #[test]
    fn refund_flow_over_the_boundary() {
        let module = connected_module();
        let collected = module.call(
            "collectRefundPaymentMethod",
            &json!({ "chargeId": "ch_123", "amount": 500, "currency": "usd" }),
        );
        assert_eq!(collected, json!({}));
        let refund = module.call("confirmRefund", &Value::Null);
        assert_eq!(refund["refund"]["amount"], 500);
        assert_eq!(refund["refund"]["chargeId"], "ch_123");
    }

    #[test]
    fn locations_and_statuses() {
        let module = connected_module();
        let locations = module.call("listLocations", &json!({ "limit": 1 }));
        assert_eq!(locations["locations"].as_array().unwrap().len(), 1);
        assert_eq!(
            module.call("connectionStatus", &Value::Null),
            json!({ "connectionStatus": "connected" })
        );
        assert_eq!(
            module.call("paymentStatus", &Value::Null),
            json!({ "paymentStatus": "ready" })
        );
    }

    #[test]
    fn out_of_range_limit_lists_everything() {
        let module = connected_module();
        for limit in [json!(-1), json!(5_000_000_000_i64)] {
            let response = module.call("listLocations", &json!({ "limit": limit }));
            assert_eq!(response["locations"].as_array().unwrap().len(), 2, "{limit}");
        }
    }

    #[test]
    fn every_listed_method_is_routed() {
        let module = module();
        for method in METHODS {
            let response = module.call(method, &Value::Null);
            assert_ne!(response["error"]["code"], "unknownMethod", "{method}");
        }
    }
}
