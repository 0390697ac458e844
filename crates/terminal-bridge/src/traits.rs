// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native card-reader SDK.
//
// The SDK is vendor-owned; these traits are the request/response contract
// the rest of the workspace is written against. Intents are addressed by id
// because the SDK keeps the live objects on its side.

use terminal_core::enums::{ConnectionStatus, LogLevel, PaymentStatus};
use terminal_core::error::Result;
use terminal_core::events::TerminalEvent;
use terminal_core::request::{
    Cart, DiscoveryConfiguration, PaymentIntentParameters, RefundParameters,
    SetupIntentParameters, SimulatorConfiguration,
};
use terminal_core::types::{Location, OfflineStatus, PaymentIntent, Reader, Refund, SetupIntent};

/// Unified bridge that groups every SDK capability.
pub trait TerminalBridge:
    SdkLifecycle
    + ReaderDiscovery
    + ReaderConnection
    + PaymentOperations
    + SetupIntentOperations
    + RefundOperations
    + LocationOperations
    + EventSource
    + Send
    + Sync
{
    /// Human-readable backend name (e.g. "Android", "Simulated").
    fn platform_name(&self) -> &str;
}

/// SDK start-up and simulator settings.
pub trait SdkLifecycle {
    /// Initialise the SDK. Must precede every other call.
    fn initialize(&self, log_level: LogLevel) -> Result<()>;

    fn set_simulator_configuration(&self, config: SimulatorConfiguration) -> Result<()>;
}

pub trait ReaderDiscovery {
    /// Run one discovery pass and return the readers found.
    fn discover_readers(&self, config: &DiscoveryConfiguration) -> Result<Vec<Reader>>;
}

pub trait ReaderConnection {
    /// Connect to a previously discovered reader, registering it to
    /// `location_id` when given.
    fn connect_reader(&self, serial_number: &str, location_id: Option<&str>) -> Result<Reader>;

    fn disconnect_reader(&self) -> Result<()>;

    fn connected_reader(&self) -> Option<Reader>;

    fn connection_status(&self) -> ConnectionStatus;

    fn payment_status(&self) -> PaymentStatus;
}

pub trait PaymentOperations {
    fn create_payment_intent(&self, params: &PaymentIntentParameters) -> Result<PaymentIntent>;

    /// Wait for a card on the connected reader.
    fn collect_payment_method(&self, payment_intent_id: &str) -> Result<PaymentIntent>;

    fn confirm_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent>;

    fn cancel_payment_intent(&self, payment_intent_id: &str) -> Result<PaymentIntent>;

    /// Show a cart on a smart reader's screen.
    fn set_reader_display(&self, cart: &Cart) -> Result<()>;

    fn clear_reader_display(&self) -> Result<()>;

    /// Payments stored on the device while the network was down.
    fn offline_status(&self) -> Result<OfflineStatus>;
}

pub trait SetupIntentOperations {
    fn create_setup_intent(&self, params: &SetupIntentParameters) -> Result<SetupIntent>;

    fn collect_setup_intent_payment_method(
        &self,
        setup_intent_id: &str,
        customer_consent_collected: bool,
    ) -> Result<SetupIntent>;

    fn confirm_setup_intent(&self, setup_intent_id: &str) -> Result<SetupIntent>;
}

pub trait RefundOperations {
    /// Read the card to refund on the connected reader.
    fn collect_refund_payment_method(&self, params: &RefundParameters) -> Result<()>;

    fn confirm_refund(&self) -> Result<Refund>;
}

pub trait LocationOperations {
    fn list_locations(&self, limit: Option<u32>) -> Result<Vec<Location>>;
}

/// Callbacks delivered by the SDK since the last drain.
pub trait EventSource {
    fn drain_events(&self) -> Vec<TerminalEvent>;
}
