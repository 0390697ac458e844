// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Translation tables between native SDK enums and boundary string tokens.
//
// Outbound tables are total: anything not listed (including `Other` values
// from newer SDKs) becomes "unknown". Inbound tables are total too: an
// unrecognised or absent token resolves to a documented default and the
// configuration parse carries on.

use terminal_core::enums::{
    ConnectionStatus, DeviceType, DiscoveryMethod, LocationStatus, LogLevel, NetworkStatus,
    PaymentIntentStatus, PaymentStatus, ReaderDisplayMessage, ReaderInputOptions,
    SetupAttemptStatus, SetupIntentStatus, SetupIntentUsage, SimulateReaderUpdate,
    UpdateTimeEstimate,
};
use tracing::debug;

/// Token emitted for any native value outside a table.
pub const UNKNOWN: &str = "unknown";

// ---------------------------------------------------------------------------
// Outbound: native enum -> token
// ---------------------------------------------------------------------------

/// Reader model token.
pub fn map_from_device_type(device_type: &DeviceType) -> &'static str {
    match device_type {
        DeviceType::Chipper2X => "chipper2X",
        DeviceType::CotsDevice => "cotsDevice",
        DeviceType::StripeM2 => "stripeM2",
        DeviceType::VerifoneP400 => "verifoneP400",
        DeviceType::WisePad3 => "wisePad3",
        DeviceType::WisePosE => "wisePosE",
        DeviceType::Unknown | DeviceType::Other(_) => UNKNOWN,
    }
}

/// Whether the reader is registered to a location.
pub fn map_from_location_status(status: &LocationStatus) -> &'static str {
    match status {
        LocationStatus::NotSet => "notSet",
        LocationStatus::Set => "set",
        LocationStatus::Unknown | LocationStatus::Other(_) => UNKNOWN,
    }
}

/// Readers that do not report a network status encode as "unknown".
pub fn map_from_network_status(status: Option<&NetworkStatus>) -> &'static str {
    match status {
        Some(NetworkStatus::Offline) => "offline",
        Some(NetworkStatus::Online) => "online",
        Some(NetworkStatus::Other(_)) | None => UNKNOWN,
    }
}

/// Discovery method token, the inverse of [`map_to_discovery_method`].
pub fn map_from_discovery_method(method: &DiscoveryMethod) -> &'static str {
    match method {
        DiscoveryMethod::BluetoothScan => "bluetoothScan",
        DiscoveryMethod::Internet => "internet",
        DiscoveryMethod::Embedded => "embedded",
        DiscoveryMethod::LocalMobile => "localMobile",
        DiscoveryMethod::Handoff => "handoff",
        DiscoveryMethod::Other(_) => UNKNOWN,
    }
}

/// Payment intent status token; an unset status is "unknown".
pub fn map_from_payment_intent_status(status: Option<&PaymentIntentStatus>) -> &'static str {
    match status {
        Some(PaymentIntentStatus::Canceled) => "canceled",
        Some(PaymentIntentStatus::RequiresCapture) => "requiresCapture",
        Some(PaymentIntentStatus::RequiresConfirmation) => "requiresConfirmation",
        Some(PaymentIntentStatus::RequiresPaymentMethod) => "requiresPaymentMethod",
        Some(PaymentIntentStatus::Succeeded) => "succeeded",
        Some(PaymentIntentStatus::Other(_)) | None => UNKNOWN,
    }
}

/// The native `CANCELLED` spelling is normalised to "canceled".
pub fn map_from_setup_intent_status(status: Option<&SetupIntentStatus>) -> &'static str {
    match status {
        Some(SetupIntentStatus::Cancelled) => "canceled",
        Some(SetupIntentStatus::RequiresAction) => "requiresAction",
        Some(SetupIntentStatus::RequiresConfirmation) => "requiresConfirmation",
        Some(SetupIntentStatus::RequiresPaymentMethod) => "requiresPaymentMethod",
        Some(SetupIntentStatus::Succeeded) => "succeeded",
        Some(SetupIntentStatus::Other(_)) | None => UNKNOWN,
    }
}

/// Setup attempt status token.
pub fn map_from_setup_attempt_status(status: &SetupAttemptStatus) -> &'static str {
    match status {
        SetupAttemptStatus::Abandoned => "abandoned",
        SetupAttemptStatus::Failed => "failed",
        SetupAttemptStatus::Processing => "processing",
        SetupAttemptStatus::RequiresAction => "requiresAction",
        SetupAttemptStatus::RequiresConfirmation => "requiresConfirmation",
        SetupAttemptStatus::Succeeded => "succeeded",
        SetupAttemptStatus::Other(_) => UNKNOWN,
    }
}

/// Usage is optional on the native side and stays absent when unset.
pub fn map_from_setup_intent_usage(usage: Option<&SetupIntentUsage>) -> Option<&'static str> {
    usage.map(|usage| match usage {
        SetupIntentUsage::OffSession => "offSession",
        SetupIntentUsage::OnSession => "onSession",
        SetupIntentUsage::Other(_) => UNKNOWN,
    })
}

/// Reader connection status token.
pub fn map_from_connection_status(status: &ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connected",
        ConnectionStatus::NotConnected => "notConnected",
        ConnectionStatus::Connecting => "connecting",
        ConnectionStatus::Other(_) => UNKNOWN,
    }
}

/// Reader payment readiness token.
pub fn map_from_payment_status(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::NotReady => "notReady",
        PaymentStatus::Processing => "processing",
        PaymentStatus::Ready => "ready",
        PaymentStatus::WaitingForInput => "waitingForInput",
        PaymentStatus::Other(_) => UNKNOWN,
    }
}

/// Prompt the app should show on behalf of the reader.
pub fn map_from_reader_display_message(message: &ReaderDisplayMessage) -> &'static str {
    match message {
        ReaderDisplayMessage::CheckMobileDevice => "checkMobileDevice",
        ReaderDisplayMessage::InsertCard => "insertCard",
        ReaderDisplayMessage::InsertOrSwipeCard => "insertOrSwipeCard",
        ReaderDisplayMessage::MultipleContactlessCardsDetected => {
            "multipleContactlessCardsDetected"
        }
        ReaderDisplayMessage::RemoveCard => "removeCard",
        ReaderDisplayMessage::RetryCard => "retryCard",
        ReaderDisplayMessage::SwipeCard => "swipeCard",
        ReaderDisplayMessage::TryAnotherCard => "tryAnotherCard",
        ReaderDisplayMessage::TryAnotherReadMethod => "tryAnotherReadMethod",
        ReaderDisplayMessage::Other(_) => UNKNOWN,
    }
}

/// Estimated install time bucket for a software update.
pub fn map_from_update_time_estimate(estimate: &UpdateTimeEstimate) -> &'static str {
    match estimate {
        UpdateTimeEstimate::LessThanOneMinute => "estimateLessThan1Minute",
        UpdateTimeEstimate::OneToTwoMinutes => "estimate1To2Minutes",
        UpdateTimeEstimate::TwoToFiveMinutes => "estimate2To5Minutes",
        UpdateTimeEstimate::FiveToFifteenMinutes => "estimate5To15Minutes",
        UpdateTimeEstimate::Other(_) => UNKNOWN,
    }
}

/// Split the native "Insert / Swipe / Tap" rendering into tokens.
///
/// Order follows the rendering; fragments outside the table are dropped.
pub fn input_option_tokens(rendered: &str) -> Vec<&'static str> {
    rendered
        .split('/')
        .filter_map(|fragment| match fragment.trim() {
            "Insert" => Some("insertCard"),
            "Swipe" => Some("swipeCard"),
            "Tap" => Some("tapCard"),
            _ => None,
        })
        .collect()
}

/// Card entry methods the reader is waiting for.
pub fn map_from_reader_input_options(options: &ReaderInputOptions) -> Vec<&'static str> {
    input_option_tokens(options.as_native_str())
}

// ---------------------------------------------------------------------------
// Inbound: token -> native enum
// ---------------------------------------------------------------------------

/// Unrecognised or absent tokens select internet discovery.
pub fn map_to_discovery_method(token: Option<&str>) -> DiscoveryMethod {
    match token {
        Some("bluetoothScan") => DiscoveryMethod::BluetoothScan,
        Some("internet") => DiscoveryMethod::Internet,
        Some("embedded") => DiscoveryMethod::Embedded,
        Some("localMobile") => DiscoveryMethod::LocalMobile,
        Some("handoff") => DiscoveryMethod::Handoff,
        other => {
            debug!(token = ?other, "unrecognised discovery method, using internet");
            DiscoveryMethod::Internet
        }
    }
}

/// Unrecognised or absent tokens disable SDK logging.
pub fn map_to_log_level(token: Option<&str>) -> LogLevel {
    match token {
        Some("error") => LogLevel::Error,
        Some("info") => LogLevel::Info,
        Some("verbose") => LogLevel::Verbose,
        Some("warning") => LogLevel::Warning,
        Some("none") => LogLevel::None,
        other => {
            debug!(token = ?other, "unrecognised log level, using none");
            LogLevel::None
        }
    }
}

/// Unrecognised or absent tokens disable simulated updates.
pub fn map_to_simulate_reader_update(token: Option<&str>) -> SimulateReaderUpdate {
    match token {
        Some("available") => SimulateReaderUpdate::UpdateAvailable,
        Some("none") => SimulateReaderUpdate::None,
        Some("random") => SimulateReaderUpdate::Random,
        Some("required") => SimulateReaderUpdate::Required,
        other => {
            debug!(token = ?other, "unrecognised simulated update mode, using none");
            SimulateReaderUpdate::None
        }
    }
}
