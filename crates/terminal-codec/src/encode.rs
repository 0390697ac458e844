// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Entity encoders: native SDK snapshots -> boundary value trees.
//
// Encoders are pure and total. Absent optionals always appear as an explicit
// `null` key so the far side can tell "unknown" from "not yet fetched".
// Money is truncated to whole minor units; epoch-second timestamps become
// millisecond strings.

use serde_json::{Value, json};
use terminal_core::types::{
    Address, CardDetails, Charge, Location, OfflineStatus, PaymentIntent, PaymentMethod, Reader,
    ReaderSoftwareUpdate, Refund, SetupAttempt, SetupIntent, SetupIntentCardPresentDetails,
    SetupIntentPaymentMethodDetails,
};

use crate::tokens::{
    map_from_device_type, map_from_location_status, map_from_network_status,
    map_from_payment_intent_status, map_from_setup_attempt_status, map_from_setup_intent_status,
    map_from_setup_intent_usage, map_from_update_time_estimate,
};

// ---------------------------------------------------------------------------
// Numeric and nullable helpers
// ---------------------------------------------------------------------------

/// Encode an optional value, or `null` when any link of the chain is absent.
pub fn or_null<T>(value: Option<T>, encode: impl FnOnce(T) -> Value) -> Value {
    value.map_or(Value::Null, encode)
}

/// Epoch seconds as a millisecond decimal string.
pub fn millis_string(epoch_seconds: i64) -> String {
    epoch_seconds.saturating_mul(1000).to_string()
}

/// Whole minor currency units, truncating toward zero.
///
/// Out-of-range values saturate and NaN becomes 0.
pub fn minor_units(amount: f64) -> i64 {
    amount.trunc() as i64
}

// ---------------------------------------------------------------------------
// Readers
// ---------------------------------------------------------------------------

/// Encode a reader; `status` carries the network status token.
pub fn map_from_reader(reader: &Reader) -> Value {
    let location_id = reader.location.as_ref().and_then(|l| l.id.as_deref());
    json!({
        "label": reader.label,
        "serialNumber": reader.serial_number,
        "id": reader.id,
        "locationId": location_id,
        "deviceSoftwareVersion": reader.software_version,
        "deviceType": map_from_device_type(&reader.device_type),
        "simulated": reader.simulated,
        "locationStatus": map_from_location_status(&reader.location_status),
        "ipAddress": reader.ip_address,
        "baseUrl": reader.base_url,
        "bootloaderVersion": reader.bootloader_version,
        "configVersion": reader.config_version,
        "emvKeyProfileId": reader.emv_key_profile_id,
        "firmwareVersion": reader.firmware_version,
        "hardwareVersion": reader.hardware_version,
        "macKeyProfileId": reader.mac_key_profile_id,
        "pinKeyProfileId": reader.pin_key_profile_id,
        "trackKeyProfileId": reader.track_key_profile_id,
        "settingsVersion": reader.settings_version,
        "pinKeysetId": reader.pin_keyset_id,
        "availableUpdate": map_from_reader_software_update(reader.available_update.as_ref()),
        "location": map_from_location(reader.location.as_ref()),
        // Network status, not a reader lifecycle status.
        "status": map_from_network_status(reader.network_status.as_ref()),
        "batteryLevel": or_null(reader.battery_level, |level| json!(f64::from(level))),
    })
}

/// Encode discovered readers in discovery order.
pub fn map_from_readers(readers: &[Reader]) -> Value {
    Value::Array(readers.iter().map(map_from_reader).collect())
}

/// Encode an available update, or `null` when there is none.
pub fn map_from_reader_software_update(update: Option<&ReaderSoftwareUpdate>) -> Value {
    or_null(update, |update| {
        json!({
            "deviceSoftwareVersion": update.version,
            "estimatedUpdateTime": map_from_update_time_estimate(&update.time_estimate),
            "requiredAt": update.required_at.timestamp_millis().to_string(),
        })
    })
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// Encode a location, or `null` when the reader has none.
pub fn map_from_location(location: Option<&Location>) -> Value {
    or_null(location, |location| {
        json!({
            "id": location.id,
            "displayName": location.display_name,
            "address": map_from_address(location.address.as_ref()),
            "livemode": location.livemode,
        })
    })
}

/// Encode a page of locations; an empty page is an empty array.
pub fn map_from_list_locations(locations: &[Location]) -> Value {
    Value::Array(locations.iter().map(|l| map_from_location(Some(l))).collect())
}

/// Encode an address, or `null` when the location has none.
pub fn map_from_address(address: Option<&Address>) -> Value {
    or_null(address, |address| {
        json!({
            "country": address.country,
            "city": address.city,
            "postalCode": address.postal_code,
            "line1": address.line1,
            "line2": address.line2,
            "state": address.state,
        })
    })
}

// ---------------------------------------------------------------------------
// Payment intents and charges
// ---------------------------------------------------------------------------

/// Encode a payment intent with its charges in SDK order.
pub fn map_from_payment_intent(intent: &PaymentIntent) -> Value {
    json!({
        "amount": minor_units(intent.amount),
        "currency": intent.currency,
        "id": intent.id,
        "description": intent.description,
        "status": map_from_payment_intent_status(intent.status.as_ref()),
        "charges": map_from_charges_list(&intent.charges),
        "created": millis_string(intent.created),
    })
}

/// Encode a charge. Its status is passed through as-is.
pub fn map_from_charge(charge: &Charge) -> Value {
    json!({
        "id": charge.id,
        "status": charge.status,
        "currency": charge.currency,
        "amount": minor_units(charge.amount),
        "description": charge.description,
    })
}

/// Encode charges in SDK order.
pub fn map_from_charges_list(charges: &[Charge]) -> Value {
    Value::Array(charges.iter().map(map_from_charge).collect())
}

// ---------------------------------------------------------------------------
// Setup intents
// ---------------------------------------------------------------------------

/// Encode a setup intent with its latest attempt.
pub fn map_from_setup_intent(intent: &SetupIntent) -> Value {
    json!({
        "created": millis_string(intent.created),
        "id": intent.id,
        "status": map_from_setup_intent_status(intent.status.as_ref()),
        "latestAttempt": map_from_setup_attempt(intent.latest_attempt.as_ref()),
        "usage": map_from_setup_intent_usage(intent.usage.as_ref()),
        "applicationId": intent.application_id,
        "clientSecret": intent.client_secret,
        "description": intent.description,
        "mandateId": intent.mandate_id,
        "onBehalfOfId": intent.on_behalf_of_id,
        "paymentMethodId": intent.payment_method_id,
        "singleUseMandateId": intent.single_use_mandate_id,
    })
}

/// Encode a setup attempt, or `null` before the first attempt.
pub fn map_from_setup_attempt(attempt: Option<&SetupAttempt>) -> Value {
    or_null(attempt, |attempt| {
        json!({
            "created": millis_string(attempt.created),
            "id": attempt.id,
            "status": map_from_setup_attempt_status(&attempt.status),
            "usage": map_from_setup_intent_usage(attempt.usage.as_ref()),
            "isLiveMode": attempt.is_live_mode,
            "paymentMethodDetails": or_null(
                attempt.payment_method_details.as_ref(),
                map_from_setup_intent_payment_method_details,
            ),
            "customer": attempt.customer_id,
            "setupIntentId": attempt.setup_intent_id,
            "onBehalfOfId": attempt.on_behalf_of_id,
            "applicationId": attempt.application_id,
            "paymentMethodId": attempt.payment_method_id,
        })
    })
}

/// Encode the card-present and Interac-present details of an attempt.
pub fn map_from_setup_intent_payment_method_details(
    details: &SetupIntentPaymentMethodDetails,
) -> Value {
    json!({
        "cardPresent": map_from_setup_intent_card_present_details(details.card_present.as_ref()),
        "interacPresent": map_from_setup_intent_card_present_details(details.interac_present.as_ref()),
    })
}

/// Encode card-present details, or `null` when absent.
pub fn map_from_setup_intent_card_present_details(
    details: Option<&SetupIntentCardPresentDetails>,
) -> Value {
    or_null(details, |details| {
        json!({
            "emvAuthData": details.emv_auth_data,
            "generatedCard": details.generated_card,
        })
    })
}

// ---------------------------------------------------------------------------
// Refunds and payment methods
// ---------------------------------------------------------------------------

/// Encode a refund; an absent amount stays `null`.
pub fn map_from_refund(refund: &Refund) -> Value {
    json!({
        "amount": refund.amount.map(minor_units),
        "balanceTransaction": refund.balance_transaction,
        "chargeId": refund.charge_id,
        "currency": refund.currency,
        "paymentIntentId": refund.payment_intent_id,
        "description": refund.description,
        "failureBalanceTransaction": refund.failure_balance_transaction,
        "failureReason": refund.failure_reason,
        "id": refund.id,
        "reason": refund.reason,
        "receiptNumber": refund.receipt_number,
        "status": refund.status,
        "sourceTransferReversal": refund.source_transfer_reversal,
        "transferReversal": refund.transfer_reversal,
    })
}

/// Absent card details still encode as an object: null strings and a zero
/// expiry month and year.
pub fn map_from_card_details(details: Option<&CardDetails>) -> Value {
    let empty = CardDetails::default();
    let details = details.unwrap_or(&empty);
    json!({
        "brand": details.brand,
        "country": details.country,
        "expMonth": details.exp_month.unwrap_or(0),
        "expYear": details.exp_year.unwrap_or(0),
        "fingerprint": details.fingerprint,
        "funding": details.funding,
        "last4": details.last4,
    })
}

/// Encode a payment method with its card details.
pub fn map_from_payment_method(method: &PaymentMethod) -> Value {
    json!({
        "id": method.id,
        "customer": method.customer,
        "livemode": method.livemode,
        "cardDetails": map_from_card_details(method.card_details.as_ref()),
    })
}

// ---------------------------------------------------------------------------
// Offline queue
// ---------------------------------------------------------------------------

/// Encode the offline payment summary.
pub fn map_from_offline_status(status: &OfflineStatus) -> Value {
    let amounts: Vec<Value> = status
        .offline_payment_amounts_by_currency
        .iter()
        .map(|entry| {
            json!({
                "currency": entry.currency,
                "amount": minor_units(entry.amount),
            })
        })
        .collect();
    json!({
        "networkStatus": map_from_network_status(status.network_status.as_ref()),
        "offlinePaymentsCount": status.offline_payments_count,
        "offlinePaymentAmountsByCurrency": amounts,
    })
}
