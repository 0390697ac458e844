// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Domain snapshots produced by the native card-reader SDK.
//
// These are read-only copies of the SDK's object graph taken once per
// callback or response. Fields the SDK may leave unpopulated are `Option`.

use chrono::{DateTime, Utc};

use crate::enums::{
    DeviceType, LocationStatus, NetworkStatus, PaymentIntentStatus, SetupAttemptStatus,
    SetupIntentStatus, SetupIntentUsage, UpdateTimeEstimate,
};

/// A card reader, discovered or connected.
#[derive(Debug, Clone, PartialEq)]
pub struct Reader {
    pub id: Option<String>,
    pub label: Option<String>,
    pub serial_number: Option<String>,
    pub device_type: DeviceType,
    pub software_version: Option<String>,
    pub ip_address: Option<String>,
    pub base_url: Option<String>,
    pub bootloader_version: Option<String>,
    pub config_version: Option<String>,
    pub emv_key_profile_id: Option<String>,
    pub firmware_version: Option<String>,
    pub hardware_version: Option<String>,
    pub mac_key_profile_id: Option<String>,
    pub pin_key_profile_id: Option<String>,
    pub track_key_profile_id: Option<String>,
    pub settings_version: Option<String>,
    pub pin_keyset_id: Option<String>,
    /// Charge level in `0.0..=1.0`; Bluetooth readers only.
    pub battery_level: Option<f32>,
    pub simulated: bool,
    pub location_status: LocationStatus,
    /// Smart readers only.
    pub network_status: Option<NetworkStatus>,
    pub location: Option<Location>,
    pub available_update: Option<ReaderSoftwareUpdate>,
}

impl Reader {
    /// A reader with only the required fields populated.
    pub fn new(device_type: DeviceType, serial_number: impl Into<String>) -> Self {
        Self {
            id: None,
            label: None,
            serial_number: Some(serial_number.into()),
            device_type,
            software_version: None,
            ip_address: None,
            base_url: None,
            bootloader_version: None,
            config_version: None,
            emv_key_profile_id: None,
            firmware_version: None,
            hardware_version: None,
            mac_key_profile_id: None,
            pin_key_profile_id: None,
            track_key_profile_id: None,
            settings_version: None,
            pin_keyset_id: None,
            battery_level: None,
            simulated: false,
            location_status: LocationStatus::Unknown,
            network_status: None,
            location: None,
            available_update: None,
        }
    }
}

/// A software update the reader can install.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSoftwareUpdate {
    pub version: Option<String>,
    pub time_estimate: UpdateTimeEstimate,
    /// Deadline after which the update is installed on connect.
    pub required_at: DateTime<Utc>,
}

/// A business location readers are registered to.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub address: Option<Address>,
    pub livemode: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    pub id: Option<String>,
    /// Minor currency units. Some SDK builds report this as a double.
    pub amount: f64,
    pub currency: Option<String>,
    pub status: Option<PaymentIntentStatus>,
    pub description: Option<String>,
    /// Epoch seconds.
    pub created: i64,
    pub charges: Vec<Charge>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub id: Option<String>,
    /// Free-form; the upstream vocabulary is not closed.
    pub status: Option<String>,
    pub currency: Option<String>,
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupIntent {
    pub id: Option<String>,
    /// Epoch seconds.
    pub created: i64,
    pub status: Option<SetupIntentStatus>,
    pub usage: Option<SetupIntentUsage>,
    pub latest_attempt: Option<SetupAttempt>,
    pub application_id: Option<String>,
    pub client_secret: Option<String>,
    pub description: Option<String>,
    pub mandate_id: Option<String>,
    pub on_behalf_of_id: Option<String>,
    pub payment_method_id: Option<String>,
    pub single_use_mandate_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupAttempt {
    pub id: Option<String>,
    /// Epoch seconds.
    pub created: i64,
    pub status: SetupAttemptStatus,
    pub usage: Option<SetupIntentUsage>,
    pub is_live_mode: bool,
    pub payment_method_details: Option<SetupIntentPaymentMethodDetails>,
    pub customer_id: Option<String>,
    pub setup_intent_id: Option<String>,
    pub on_behalf_of_id: Option<String>,
    pub application_id: Option<String>,
    pub payment_method_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupIntentPaymentMethodDetails {
    pub card_present: Option<SetupIntentCardPresentDetails>,
    pub interac_present: Option<SetupIntentCardPresentDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupIntentCardPresentDetails {
    pub emv_auth_data: Option<String>,
    pub generated_card: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Refund {
    pub id: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
    pub charge_id: Option<String>,
    pub payment_intent_id: Option<String>,
    pub balance_transaction: Option<String>,
    pub failure_balance_transaction: Option<String>,
    pub failure_reason: Option<String>,
    pub receipt_number: Option<String>,
    pub source_transfer_reversal: Option<String>,
    pub transfer_reversal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentMethod {
    pub id: Option<String>,
    pub customer: Option<String>,
    pub livemode: bool,
    pub card_details: Option<CardDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub brand: Option<String>,
    pub country: Option<String>,
    pub exp_month: Option<i32>,
    pub exp_year: Option<i32>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub last4: Option<String>,
}

/// Summary of payments stored on the device while offline.
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineStatus {
    pub network_status: Option<NetworkStatus>,
    pub offline_payments_count: u32,
    pub offline_payment_amounts_by_currency: Vec<CurrencyAmount>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyAmount {
    pub currency: String,
    pub amount: f64,
}
