// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request values built from boundary input and handed to the native SDK.

use crate::enums::{DiscoveryMethod, SimulateReaderUpdate};

/// One line shown on a smart reader's cart display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineItem {
    pub display_name: String,
    pub quantity: u64,
    /// Minor currency units.
    pub amount: i64,
}

/// Cart shown on the reader while a payment is collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub currency: String,
    pub tax: i64,
    pub total: i64,
    pub line_items: Vec<CartLineItem>,
}

/// Parameters for a reader discovery run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryConfiguration {
    pub discovery_method: DiscoveryMethod,
    pub simulated: bool,
    /// Seconds; zero means the SDK default.
    pub timeout: u32,
}

impl Default for DiscoveryConfiguration {
    fn default() -> Self {
        Self {
            discovery_method: DiscoveryMethod::Internet,
            simulated: false,
            timeout: 0,
        }
    }
}

/// Parameters for creating a payment intent on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentIntentParameters {
    pub amount: i64,
    pub currency: String,
    pub description: Option<String>,
}

/// Parameters for creating a setup intent on the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupIntentParameters {
    pub customer_id: Option<String>,
    pub description: Option<String>,
}

/// Parameters for an in-person refund of a charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundParameters {
    pub charge_id: String,
    pub amount: i64,
    pub currency: String,
}

/// Settings passed to the native SDK's simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatorConfiguration {
    pub update: SimulateReaderUpdate,
}
