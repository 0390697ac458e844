// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Simulated SDK backend for desktop/CI builds.
//
// Mirrors the native SDK's simulator: a fixed set of simulated readers per
// discovery method, payments that always succeed, and software updates
// driven by `SimulateReaderUpdate`. State lives behind a mutex so the bridge
// can be shared across callback threads.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Utc};
use terminal_core::enums::{
    ConnectionStatus, DeviceType, DiscoveryMethod, LocationStatus, LogLevel, NetworkStatus,
    PaymentIntentStatus, PaymentStatus, ReaderDisplayMessage, ReaderInputOptions,
    SetupAttemptStatus, SetupIntentStatus, SetupIntentUsage, SimulateReaderUpdate,
    UpdateTimeEstimate,
};
use terminal_core::error::{Result, TerminalError};
use terminal_core::events::TerminalEvent;
use terminal_core::request::{
    Cart, DiscoveryConfiguration, PaymentIntentParameters, RefundParameters,
    SetupIntentParameters, SimulatorConfiguration,
};
use terminal_core::types::{
    Address, Charge, Location, OfflineStatus, PaymentIntent, Reader, ReaderSoftwareUpdate,
    Refund, SetupAttempt, SetupIntent, SetupIntentCardPresentDetails,
    SetupIntentPaymentMethodDetails,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::traits::*;

const SIMULATED_SOFTWARE_VERSION: &str = "2.13.2.0";
const UPDATED_SOFTWARE_VERSION: &str = "2.14.1.0";

/// Undrained events kept before the oldest are discarded.
const MAX_PENDING_EVENTS: usize = 256;

/// Build an SDK error with a stable code.
fn sdk_err(code: &str, message: impl Into<String>) -> TerminalError {
    TerminalError::Sdk {
        code: code.to_owned(),
        message: message.into(),
    }
}

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

#[derive(Default)]
struct SimState {
    initialized: bool,
    log_level: LogLevel,
    simulator: SimulatorConfiguration,
    discovered: Vec<Reader>,
    connected: Option<Reader>,
    // Intents live for the lifetime of the simulator, like a single SDK
    // session; nothing is persisted or evicted.
    payment_intents: HashMap<String, PaymentIntent>,
    setup_intents: HashMap<String, SetupIntent>,
    pending_refund: Option<RefundParameters>,
    reader_display: Option<Cart>,
    events: VecDeque<TerminalEvent>,
}

impl SimState {
    /// Queue an event, discarding the oldest once the queue is full.
    fn emit(&mut self, event: TerminalEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            if let Some(dropped) = self.events.pop_front() {
                debug!(event = dropped.name(), "event queue full, dropping oldest");
            }
        }
        self.events.push_back(event);
    }

    fn require_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(sdk_err("notInitialized", "initialize must be called first"))
        }
    }

    fn require_connected(&self) -> Result<&Reader> {
        self.require_initialized()?;
        self.connected.as_ref().ok_or(TerminalError::NotConnected)
    }

    fn payment_intent_mut(&mut self, id: &str) -> Result<&mut PaymentIntent> {
        self.payment_intents
            .get_mut(id)
            .ok_or_else(|| sdk_err("paymentIntentNotFound", format!("no payment intent {id}")))
    }

    fn setup_intent_mut(&mut self, id: &str) -> Result<&mut SetupIntent> {
        self.setup_intents
            .get_mut(id)
            .ok_or_else(|| sdk_err("setupIntentNotFound", format!("no setup intent {id}")))
    }
}

/// In-process stand-in for the native SDK.
#[derive(Default)]
pub struct SimulatedTerminal {
    state: Mutex<SimState>,
}

impl SimulatedTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, SimState> {
        // Every mutation leaves the state consistent, so a poisoned lock is
        // still safe to use.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locations the simulated account owns.
    fn locations() -> Vec<Location> {
        vec![
            Location {
                id: Some("tml_simulated_main".into()),
                display_name: Some("Main Street".into()),
                address: Some(Address {
                    country: Some("US".into()),
                    city: Some("San Francisco".into()),
                    postal_code: Some("94110".into()),
                    line1: Some("510 Townsend St".into()),
                    line2: None,
                    state: Some("CA".into()),
                }),
                livemode: Some(false),
            },
            Location {
                id: Some("tml_simulated_popup".into()),
                display_name: Some("Pop-up stand".into()),
                address: None,
                livemode: None,
            },
        ]
    }

    fn simulated_readers(method: &DiscoveryMethod) -> Vec<Reader> {
        let smart = |device: DeviceType, serial: &str| Reader {
            id: Some(format!("tmr_{serial}")),
            label: Some(format!("Simulated {device}")),
            ip_address: Some("0.0.0.0".into()),
            network_status: Some(NetworkStatus::Online),
            ..Self::base_reader(device, serial)
        };
        let mobile = |device: DeviceType, serial: &str, battery: f32| Reader {
            battery_level: Some(battery),
            ..Self::base_reader(device, serial)
        };

        match method {
            DiscoveryMethod::Internet | DiscoveryMethod::Handoff => vec![
                smart(DeviceType::WisePosE, "SIMULATORPOSE1"),
                smart(DeviceType::VerifoneP400, "SIMULATORP4001"),
            ],
            DiscoveryMethod::BluetoothScan => vec![
                mobile(DeviceType::Chipper2X, "SIMULATORCHIP1", 0.92),
                mobile(DeviceType::StripeM2, "SIMULATORM2001", 0.47),
                mobile(DeviceType::WisePad3, "SIMULATORWP301", 0.75),
            ],
            DiscoveryMethod::LocalMobile | DiscoveryMethod::Embedded => {
                vec![Self::base_reader(DeviceType::CotsDevice, "SIMULATORCOTS1")]
            }
            DiscoveryMethod::Other(_) => Vec::new(),
        }
    }

    fn base_reader(device: DeviceType, serial: &str) -> Reader {
        Reader {
            software_version: Some(SIMULATED_SOFTWARE_VERSION.into()),
            simulated: true,
            location_status: LocationStatus::NotSet,
            ..Reader::new(device, serial)
        }
    }

    /// The simulator never loses its network, so nothing is stored offline.
    fn online_status() -> OfflineStatus {
        OfflineStatus {
            network_status: Some(NetworkStatus::Online),
            offline_payments_count: 0,
            offline_payment_amounts_by_currency: Vec::new(),
        }
    }

    fn software_update(mode: SimulateReaderUpdate) -> Option<ReaderSoftwareUpdate> {
        let mode = match mode {
            SimulateReaderUpdate::Random => match Uuid::new_v4().as_bytes()[0] % 3 {
                0 => SimulateReaderUpdate::None,
                1 => SimulateReaderUpdate::UpdateAvailable,
                _ => SimulateReaderUpdate::Required,
            },
            other => other,
        };
        let update = |required_at| ReaderSoftwareUpdate {
            version: Some(UPDATED_SOFTWARE_VERSION.into()),
            time_estimate: UpdateTimeEstimate::LessThanOneMinute,
            required_at,
        };
        match mode {
            SimulateReaderUpdate::UpdateAvailable => Some(update(Utc::now() + Duration::days(7))),
            SimulateReaderUpdate::Required => Some(update(Utc::now())),
            _ => None,
        }
    }
}

impl TerminalBridge for SimulatedTerminal {
    fn platform_name(&self) -> &str {
        "Simulated"
    }
}

impl SdkLifecycle for SimulatedTerminal {
    fn initialize(&self, log_level: LogLevel) -> Result<()> {
        let mut state = self.state();
        state.initialized = true;
        state.log_level = log_level;
        info!(?log_level, "simulated terminal initialised");
        Ok(())
    }

    fn set_simulator_configuration(&self, config: SimulatorConfiguration) -> Result<()> {
        let mut state = self.state();
        state.require_initialized()?;
        debug!(update = ?config.update, "simulator configuration updated");
        state.simulator = config;
        Ok(())
    }
}

impl ReaderDiscovery for SimulatedTerminal {
    fn discover_readers(&self, config: &DiscoveryConfiguration) -> Result<Vec<Reader>> {
        let mut state = self.state();
        state.require_initialized()?;
        if !config.simulated {
            warn!("physical reader discovery requested from simulated terminal");
            return Err(TerminalError::PlatformUnavailable);
        }

        let readers = Self::simulated_readers(&config.discovery_method);
        info!(
            method = %config.discovery_method,
            found = readers.len(),
            "simulated discovery finished"
        );
        state.discovered = readers.clone();
        Ok(readers)
    }
}

impl ReaderConnection for SimulatedTerminal {
    fn connect_reader(&self, serial_number: &str, location_id: Option<&str>) -> Result<Reader> {
        let mut state = self.state();
        state.require_initialized()?;
        if let Some(current) = &state.connected {
            return Err(sdk_err(
                "alreadyConnectedToReader",
                format!(
                    "already connected to {}",
                    current.serial_number.as_deref().unwrap_or("a reader")
                ),
            ));
        }

        let mut reader = state
            .discovered
            .iter()
            .find(|r| r.serial_number.as_deref() == Some(serial_number))
            .cloned()
            .ok_or_else(|| {
                sdk_err("readerNotFound", format!("reader {serial_number} was not discovered"))
            })?;

        state.emit(TerminalEvent::ConnectionStatusChanged(ConnectionStatus::Connecting));

        if let Some(location_id) = location_id {
            let location = Self::locations()
                .into_iter()
                .find(|l| l.id.as_deref() == Some(location_id))
                .unwrap_or_else(|| Location {
                    id: Some(location_id.to_owned()),
                    display_name: None,
                    address: None,
                    livemode: None,
                });
            reader.location = Some(location);
            reader.location_status = LocationStatus::Set;
        }

        match Self::software_update(state.simulator.update) {
            Some(update) if update.required_at <= Utc::now() => {
                info!(version = ?update.version, "installing required simulated update");
                reader.software_version = update.version;
            }
            Some(update) => {
                state.emit(TerminalEvent::AvailableUpdate(update.clone()));
                reader.available_update = Some(update);
            }
            None => {}
        }

        state.emit(TerminalEvent::ConnectionStatusChanged(ConnectionStatus::Connected));
        state.emit(TerminalEvent::PaymentStatusChanged(PaymentStatus::Ready));
        state.emit(TerminalEvent::OfflineStatusChanged(Self::online_status()));
        info!(serial_number, "simulated reader connected");
        state.connected = Some(reader.clone());
        Ok(reader)
    }

    fn disconnect_reader(&self) -> Result<()> {
        let mut state = self.state();
        state.connected.take().ok_or(TerminalError::NotConnected)?;
        state.reader_display = None;
        state.emit(TerminalEvent::ConnectionStatusChanged(ConnectionStatus::NotConnected));
        state.emit(TerminalEvent::PaymentStatusChanged(PaymentStatus::NotReady));
        Ok(())
    }

    fn connected_reader(&self) -> Option<Reader> {
        self.state().connected.clone()
    }

    fn connection_status(&self) -> ConnectionStatus {
        if self.state().connected.is_some() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::NotConnected
        }
    }

    fn payment_status(&self) -> PaymentStatus {
        if self.state().connected.is_some() {
            PaymentStatus::Ready
        } else {
            PaymentStatus::NotReady
        }
    }
}

impl PaymentOperations for SimulatedTerminal {
    fn create_payment_intent(&self, params: &PaymentIntentParameters) -> Result<PaymentIntent> {
        let mut state = self.state();
        state.require_initialized()?;
        if params.amount <= 0 {
            return Err(sdk_err("invalidAmount", "amount must be positive"));
        }

        let intent = PaymentIntent {
            id: Some(new_id("pi")),
            amount: params.amount as f64,
            currency: Some(params.currency.to_ascii_lowercase()),
            status: Some(PaymentIntentStatus::RequiresPaymentMethod),
            description: params.description.clone(),
            created: Utc::now().timestamp(),
            charges: Vec::new(),
        };
        let id = intent.id.clone().unwrap_or_default();
        state.payment_intents.insert(id, intent.clone());
        Ok(intent)
    }

    fn collect_payment_method(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        let mut state = self.state();
        state.require_connected()?;

        let intent = state.payment_intent_mut(payment_intent_id)?;
        if intent.status != Some(PaymentIntentStatus::RequiresPaymentMethod) {
            return Err(sdk_err(
                "unexpectedSdkError",
                "payment intent is not awaiting a payment method",
            ));
        }
        intent.status = Some(PaymentIntentStatus::RequiresConfirmation);
        let intent = intent.clone();

        for event in [
            TerminalEvent::PaymentStatusChanged(PaymentStatus::WaitingForInput),
            TerminalEvent::RequestReaderInput(ReaderInputOptions::from_flags(true, true, true)),
            TerminalEvent::RequestReaderDisplayMessage(ReaderDisplayMessage::RemoveCard),
            TerminalEvent::PaymentStatusChanged(PaymentStatus::Ready),
        ] {
            state.emit(event);
        }
        Ok(intent)
    }

    fn confirm_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        let mut state = self.state();
        state.require_connected()?;

        let intent = state.payment_intent_mut(payment_intent_id)?;
        if intent.status != Some(PaymentIntentStatus::RequiresConfirmation) {
            return Err(sdk_err(
                "unexpectedSdkError",
                "payment intent has no collected payment method",
            ));
        }
        intent.status = Some(PaymentIntentStatus::Succeeded);
        intent.charges.push(Charge {
            id: Some(new_id("ch")),
            status: Some("succeeded".into()),
            currency: intent.currency.clone(),
            amount: intent.amount,
            description: intent.description.clone(),
        });
        info!(payment_intent_id, "simulated payment succeeded");
        Ok(intent.clone())
    }

    fn cancel_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent> {
        let mut state = self.state();
        state.require_initialized()?;

        let intent = state.payment_intent_mut(payment_intent_id)?;
        if intent.status == Some(PaymentIntentStatus::Succeeded) {
            return Err(sdk_err("unexpectedSdkError", "payment intent already succeeded"));
        }
        intent.status = Some(PaymentIntentStatus::Canceled);
        Ok(intent.clone())
    }

    fn set_reader_display(&self, cart: &Cart) -> Result<()> {
        let mut state = self.state();
        state.require_connected()?;
        debug!(items = cart.line_items.len(), total = cart.total, "reader display set");
        state.reader_display = Some(cart.clone());
        Ok(())
    }

    fn clear_reader_display(&self) -> Result<()> {
        let mut state = self.state();
        state.require_connected()?;
        state.reader_display = None;
        Ok(())
    }

    fn offline_status(&self) -> Result<OfflineStatus> {
        self.state().require_initialized()?;
        Ok(Self::online_status())
    }
}

impl SetupIntentOperations for SimulatedTerminal {
    fn create_setup_intent(&self, params: &SetupIntentParameters) -> Result<SetupIntent> {
        let mut state = self.state();
        state.require_initialized()?;

        let id = new_id("seti");
        let intent = SetupIntent {
            id: Some(id.clone()),
            created: Utc::now().timestamp(),
            status: Some(SetupIntentStatus::RequiresPaymentMethod),
            usage: Some(SetupIntentUsage::OffSession),
            latest_attempt: None,
            application_id: None,
            client_secret: Some(format!("{id}_secret_{}", Uuid::new_v4().simple())),
            description: params.description.clone(),
            mandate_id: None,
            on_behalf_of_id: None,
            payment_method_id: None,
            single_use_mandate_id: None,
        };
        state.setup_intents.insert(id, intent.clone());
        Ok(intent)
    }

    fn collect_setup_intent_payment_method(
        &self,
        setup_intent_id: &str,
        customer_consent_collected: bool,
    ) -> Result<SetupIntent> {
        let mut state = self.state();
        state.require_connected()?;
        if !customer_consent_collected {
            return Err(sdk_err(
                "customerConsentRequired",
                "customer consent must be collected before saving a card",
            ));
        }

        let intent = state.setup_intent_mut(setup_intent_id)?;
        if intent.status != Some(SetupIntentStatus::RequiresPaymentMethod) {
            return Err(sdk_err(
                "unexpectedSdkError",
                "setup intent is not awaiting a payment method",
            ));
        }
        intent.status = Some(SetupIntentStatus::RequiresConfirmation);
        let intent = intent.clone();
        state.emit(TerminalEvent::RequestReaderInput(
            ReaderInputOptions::from_flags(true, false, true),
        ));
        Ok(intent)
    }

    fn confirm_setup_intent(&self, setup_intent_id: &str) -> Result<SetupIntent> {
        let mut state = self.state();
        state.require_connected()?;

        let intent = state.setup_intent_mut(setup_intent_id)?;
        if intent.status != Some(SetupIntentStatus::RequiresConfirmation) {
            return Err(sdk_err(
                "unexpectedSdkError",
                "setup intent has no collected payment method",
            ));
        }
        let payment_method_id = new_id("pm");
        intent.status = Some(SetupIntentStatus::Succeeded);
        intent.payment_method_id = Some(payment_method_id.clone());
        intent.latest_attempt = Some(SetupAttempt {
            id: Some(new_id("setatt")),
            created: Utc::now().timestamp(),
            status: SetupAttemptStatus::Succeeded,
            usage: intent.usage.clone(),
            is_live_mode: false,
            payment_method_details: Some(SetupIntentPaymentMethodDetails {
                card_present: Some(SetupIntentCardPresentDetails {
                    emv_auth_data: Some("8A023030".into()),
                    generated_card: Some(payment_method_id.clone()),
                }),
                interac_present: None,
            }),
            customer_id: None,
            setup_intent_id: intent.id.clone(),
            on_behalf_of_id: None,
            application_id: None,
            payment_method_id: Some(payment_method_id),
        });
        Ok(intent.clone())
    }
}

impl RefundOperations for SimulatedTerminal {
    fn collect_refund_payment_method(&self, params: &RefundParameters) -> Result<()> {
        let mut state = self.state();
        state.require_connected()?;
        state.pending_refund = Some(params.clone());
        state.emit(TerminalEvent::RequestReaderInput(
            ReaderInputOptions::from_flags(true, false, true),
        ));
        Ok(())
    }

    fn confirm_refund(&self) -> Result<Refund> {
        let mut state = self.state();
        state.require_connected()?;
        let params = state
            .pending_refund
            .take()
            .ok_or_else(|| sdk_err("refundFailed", "no refund payment method was collected"))?;

        Ok(Refund {
            id: Some(new_id("re")),
            amount: Some(params.amount as f64),
            currency: Some(params.currency),
            status: Some("succeeded".into()),
            reason: None,
            description: None,
            charge_id: Some(params.charge_id),
            payment_intent_id: None,
            balance_transaction: None,
            failure_balance_transaction: None,
            failure_reason: None,
            receipt_number: None,
            source_transfer_reversal: None,
            transfer_reversal: None,
        })
    }
}

impl LocationOperations for SimulatedTerminal {
    fn list_locations(&self, limit: Option<u32>) -> Result<Vec<Location>> {
        self.state().require_initialized()?;
        let mut locations = Self::locations();
        if let Some(limit) = limit {
            locations.truncate(limit as usize);
        }
        Ok(locations)
    }
}

impl EventSource for SimulatedTerminal {
    fn drain_events(&self) -> Vec<TerminalEvent> {
        std::mem::take(&mut self.state().events).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_terminal() -> SimulatedTerminal {
        let terminal = SimulatedTerminal::new();
        terminal.initialize(LogLevel::None).unwrap();
        terminal
    }

    fn simulated_discovery(method: DiscoveryMethod) -> DiscoveryConfiguration {
        DiscoveryConfiguration {
            discovery_method: method,
            simulated: true,
            timeout: 0,
        }
    }

    fn connected_terminal() -> SimulatedTerminal {
        let terminal = ready_terminal();
        terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::Internet))
            .unwrap();
        terminal.connect_reader("SIMULATORPOSE1", None).unwrap();
        terminal.drain_events();
        terminal
    }

    #[test]
    fn calls_before_initialize_fail() {
        let terminal = SimulatedTerminal::new();
        let err = terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::Internet))
            .unwrap_err();
        assert_eq!(err.code(), "notInitialized");
    }

    #[test]
    fn discovery_depends_on_method() {
        let terminal = ready_terminal();
        let internet = terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::Internet))
            .unwrap();
        assert_eq!(internet.len(), 2);
        assert!(internet.iter().all(|r| r.simulated && r.network_status.is_some()));

        let bluetooth = terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::BluetoothScan))
            .unwrap();
        assert_eq!(bluetooth.len(), 3);
        assert!(bluetooth.iter().all(|r| r.battery_level.is_some()));
    }

    #[test]
    fn physical_discovery_is_unavailable() {
        let terminal = ready_terminal();
        let config = DiscoveryConfiguration::default();
        assert!(matches!(
            terminal.discover_readers(&config),
            Err(TerminalError::PlatformUnavailable)
        ));
    }

    #[test]
    fn connect_registers_location() {
        let terminal = ready_terminal();
        terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::Internet))
            .unwrap();
        let reader = terminal
            .connect_reader("SIMULATORPOSE1", Some("tml_simulated_main"))
            .unwrap();
        assert_eq!(reader.location_status, LocationStatus::Set);
        assert_eq!(
            reader.location.unwrap().display_name.as_deref(),
            Some("Main Street")
        );
        assert_eq!(terminal.connection_status(), ConnectionStatus::Connected);
    }

    #[test]
    fn connect_unknown_serial_fails() {
        let terminal = ready_terminal();
        let err = terminal.connect_reader("NOPE", None).unwrap_err();
        assert_eq!(err.code(), "readerNotFound");
    }

    #[test]
    fn available_update_is_reported() {
        let terminal = ready_terminal();
        terminal
            .set_simulator_configuration(SimulatorConfiguration {
                update: SimulateReaderUpdate::UpdateAvailable,
            })
            .unwrap();
        terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::BluetoothScan))
            .unwrap();
        let reader = terminal.connect_reader("SIMULATORM2001", None).unwrap();
        assert!(reader.available_update.is_some());
        assert!(
            terminal
                .drain_events()
                .iter()
                .any(|e| matches!(e, TerminalEvent::AvailableUpdate(_)))
        );
    }

    #[test]
    fn required_update_is_installed_on_connect() {
        let terminal = ready_terminal();
        terminal
            .set_simulator_configuration(SimulatorConfiguration {
                update: SimulateReaderUpdate::Required,
            })
            .unwrap();
        terminal
            .discover_readers(&simulated_discovery(DiscoveryMethod::BluetoothScan))
            .unwrap();
        let reader = terminal.connect_reader("SIMULATORWP301", None).unwrap();
        assert!(reader.available_update.is_none());
        assert_eq!(reader.software_version.as_deref(), Some(UPDATED_SOFTWARE_VERSION));
    }

    #[test]
    fn payment_flow_succeeds_with_charge() {
        let terminal = connected_terminal();
        let intent = terminal
            .create_payment_intent(&PaymentIntentParameters {
                amount: 1050,
                currency: "USD".into(),
                description: None,
            })
            .unwrap();
        let id = intent.id.unwrap();
        assert_eq!(intent.currency.as_deref(), Some("usd"));

        let collected = terminal.collect_payment_method(&id).unwrap();
        assert_eq!(collected.status, Some(PaymentIntentStatus::RequiresConfirmation));
        let events = terminal.drain_events();
        assert!(events.iter().any(|e| matches!(e, TerminalEvent::RequestReaderInput(_))));

        let confirmed = terminal.confirm_payment_intent(&id).unwrap();
        assert_eq!(confirmed.status, Some(PaymentIntentStatus::Succeeded));
        assert_eq!(confirmed.charges.len(), 1);
        assert_eq!(confirmed.charges[0].amount, 1050.0);

        assert!(terminal.cancel_payment_intent(&id).is_err());
    }

    #[test]
    fn confirm_without_collect_fails() {
        let terminal = connected_terminal();
        let intent = terminal
            .create_payment_intent(&PaymentIntentParameters {
                amount: 100,
                currency: "usd".into(),
                description: None,
            })
            .unwrap();
        assert!(terminal.confirm_payment_intent(intent.id.as_deref().unwrap()).is_err());
    }

    #[test]
    fn collect_requires_connected_reader() {
        let terminal = ready_terminal();
        let intent = terminal
            .create_payment_intent(&PaymentIntentParameters {
                amount: 100,
                currency: "usd".into(),
                description: None,
            })
            .unwrap();
        assert!(matches!(
            terminal.collect_payment_method(intent.id.as_deref().unwrap()),
            Err(TerminalError::NotConnected)
        ));
    }

    #[test]
    fn setup_intent_flow_records_attempt() {
        let terminal = connected_terminal();
        let intent = terminal
            .create_setup_intent(&SetupIntentParameters::default())
            .unwrap();
        let id = intent.id.unwrap();

        assert_eq!(
            terminal
                .collect_setup_intent_payment_method(&id, false)
                .unwrap_err()
                .code(),
            "customerConsentRequired"
        );
        terminal.collect_setup_intent_payment_method(&id, true).unwrap();
        let confirmed = terminal.confirm_setup_intent(&id).unwrap();
        assert_eq!(confirmed.status, Some(SetupIntentStatus::Succeeded));
        let attempt = confirmed.latest_attempt.unwrap();
        assert_eq!(attempt.status, SetupAttemptStatus::Succeeded);
        assert_eq!(attempt.setup_intent_id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn succeeded_setup_intent_cannot_be_collected_again() {
        let terminal = connected_terminal();
        let id = terminal
            .create_setup_intent(&SetupIntentParameters::default())
            .unwrap()
            .id
            .unwrap();
        terminal.collect_setup_intent_payment_method(&id, true).unwrap();
        let first = terminal.confirm_setup_intent(&id).unwrap();

        let err = terminal
            .collect_setup_intent_payment_method(&id, true)
            .unwrap_err();
        assert_eq!(err.code(), "unexpectedSdkError");
        assert!(terminal.confirm_setup_intent(&id).is_err());

        let stored = terminal.state().setup_intents[&id].clone();
        assert_eq!(stored.status, Some(SetupIntentStatus::Succeeded));
        assert_eq!(stored.payment_method_id, first.payment_method_id);
    }

    #[test]
    fn second_connect_is_rejected() {
        let terminal = connected_terminal();
        let err = terminal.connect_reader("SIMULATORP4001", None).unwrap_err();
        assert_eq!(err.code(), "alreadyConnectedToReader");
        assert_eq!(
            terminal.connected_reader().unwrap().serial_number.as_deref(),
            Some("SIMULATORPOSE1")
        );
        assert!(terminal.drain_events().is_empty());

        terminal.disconnect_reader().unwrap();
        assert!(terminal.connect_reader("SIMULATORP4001", None).is_ok());
    }

    #[test]
    fn undrained_events_are_bounded() {
        let terminal = ready_terminal();
        {
            let mut state = terminal.state();
            for _ in 0..MAX_PENDING_EVENTS {
                state.emit(TerminalEvent::PaymentStatusChanged(PaymentStatus::Processing));
            }
            state.emit(TerminalEvent::PaymentStatusChanged(PaymentStatus::Ready));
        }

        let events = terminal.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert_eq!(
            events.last(),
            Some(&TerminalEvent::PaymentStatusChanged(PaymentStatus::Ready))
        );
        assert!(terminal.drain_events().is_empty());
    }

    #[test]
    fn refund_requires_collection_first() {
        let terminal = connected_terminal();
        assert_eq!(terminal.confirm_refund().unwrap_err().code(), "refundFailed");

        terminal
            .collect_refund_payment_method(&RefundParameters {
                charge_id: "ch_1".into(),
                amount: 500,
                currency: "usd".into(),
            })
            .unwrap();
        let refund = terminal.confirm_refund().unwrap();
        assert_eq!(refund.amount, Some(500.0));
        assert_eq!(refund.charge_id.as_deref(), Some("ch_1"));
    }

    #[test]
    fn disconnect_twice_fails() {
        let terminal = connected_terminal();
        terminal.disconnect_reader().unwrap();
        assert_eq!(terminal.payment_status(), PaymentStatus::NotReady);
        assert!(matches!(
            terminal.disconnect_reader(),
            Err(TerminalError::NotConnected)
        ));
    }

    #[test]
    fn list_locations_honours_limit() {
        let terminal = ready_terminal();
        assert_eq!(terminal.list_locations(None).unwrap().len(), 2);
        assert_eq!(terminal.list_locations(Some(1)).unwrap().len(), 1);
    }
}
