// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enumerations reported by the native card-reader SDK.
//
// The SDK hands enum values across JNI / Objective-C as their constant names
// (e.g. "CHIPPER_2X"). Newer SDK releases add constants without notice, so
// every native enum carries an `Other` variant holding the raw name instead
// of failing to convert.

use std::fmt;

/// Declare a native enum together with its constant-name table.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $native:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A constant this crate does not know about (raw native name).
            Other(String),
        }

        impl $name {
            /// Convert a native constant name into the enum.
            pub fn from_native_name(name: &str) -> Self {
                match name {
                    $( $native => Self::$variant, )+
                    other => Self::Other(other.to_owned()),
                }
            }

            /// The native constant name for this value.
            pub fn native_name(&self) -> &str {
                match self {
                    $( Self::$variant => $native, )+
                    Self::Other(name) => name,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.native_name())
            }
        }
    };
}

native_enum! {
    /// Hardware model of a card reader.
    DeviceType {
        Chipper2X => "CHIPPER_2X",
        CotsDevice => "COTS_DEVICE",
        StripeM2 => "STRIPE_M2",
        /// The SDK itself could not identify the hardware.
        Unknown => "UNKNOWN",
        VerifoneP400 => "VERIFONE_P400",
        WisePad3 => "WISEPAD_3",
        WisePosE => "WISEPOS_E",
    }
}

native_enum! {
    /// Whether a reader has been registered to a location.
    LocationStatus {
        NotSet => "NOT_SET",
        Set => "SET",
        Unknown => "UNKNOWN",
    }
}

native_enum! {
    /// Network reachability of a smart reader.
    NetworkStatus {
        Offline => "OFFLINE",
        Online => "ONLINE",
    }
}

native_enum! {
    /// How the SDK looks for readers.
    DiscoveryMethod {
        BluetoothScan => "BLUETOOTH_SCAN",
        Internet => "INTERNET",
        Embedded => "EMBEDDED",
        LocalMobile => "LOCAL_MOBILE",
        Handoff => "HANDOFF",
    }
}

native_enum! {
    PaymentIntentStatus {
        Canceled => "CANCELED",
        RequiresCapture => "REQUIRES_CAPTURE",
        RequiresConfirmation => "REQUIRES_CONFIRMATION",
        RequiresPaymentMethod => "REQUIRES_PAYMENT_METHOD",
        Succeeded => "SUCCEEDED",
    }
}

native_enum! {
    /// Note the native spelling `CANCELLED` (payment intents use `CANCELED`).
    SetupIntentStatus {
        Cancelled => "CANCELLED",
        RequiresAction => "REQUIRES_ACTION",
        RequiresConfirmation => "REQUIRES_CONFIRMATION",
        RequiresPaymentMethod => "REQUIRES_PAYMENT_METHOD",
        Succeeded => "SUCCEEDED",
    }
}

native_enum! {
    SetupAttemptStatus {
        Abandoned => "ABANDONED",
        Failed => "FAILED",
        Processing => "PROCESSING",
        RequiresAction => "REQUIRES_ACTION",
        RequiresConfirmation => "REQUIRES_CONFIRMATION",
        Succeeded => "SUCCEEDED",
    }
}

native_enum! {
    /// Intended future use of a payment method saved through a setup intent.
    SetupIntentUsage {
        OffSession => "OFF_SESSION",
        OnSession => "ON_SESSION",
    }
}

native_enum! {
    /// Connection state between the SDK and a reader.
    ConnectionStatus {
        Connected => "CONNECTED",
        NotConnected => "NOT_CONNECTED",
        Connecting => "CONNECTING",
    }
}

native_enum! {
    /// Readiness of the SDK to collect a payment.
    PaymentStatus {
        NotReady => "NOT_READY",
        Processing => "PROCESSING",
        Ready => "READY",
        WaitingForInput => "WAITING_FOR_INPUT",
    }
}

native_enum! {
    /// Prompt the reader asks the app to show to the cardholder.
    ReaderDisplayMessage {
        CheckMobileDevice => "CHECK_MOBILE_DEVICE",
        InsertCard => "INSERT_CARD",
        InsertOrSwipeCard => "INSERT_OR_SWIPE_CARD",
        MultipleContactlessCardsDetected => "MULTIPLE_CONTACTLESS_CARDS_DETECTED",
        RemoveCard => "REMOVE_CARD",
        RetryCard => "RETRY_CARD",
        SwipeCard => "SWIPE_CARD",
        TryAnotherCard => "TRY_ANOTHER_CARD",
        TryAnotherReadMethod => "TRY_ANOTHER_READ_METHOD",
    }
}

native_enum! {
    /// Bucketed duration of a reader software update.
    UpdateTimeEstimate {
        LessThanOneMinute => "LESS_THAN_ONE_MINUTE",
        OneToTwoMinutes => "ONE_TO_TWO_MINUTES",
        TwoToFiveMinutes => "TWO_TO_FIVE_MINUTES",
        FiveToFifteenMinutes => "FIVE_TO_FIFTEEN_MINUTES",
    }
}

/// Verbosity of the native SDK's own logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    #[default]
    None,
    Error,
    Warning,
    Info,
    Verbose,
}

/// Software-update behaviour of simulated readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SimulateReaderUpdate {
    /// Update available but not required.
    UpdateAvailable,
    #[default]
    None,
    /// Pick one of the other behaviours at random on each connect.
    Random,
    /// Connecting installs a required update first.
    Required,
}

/// Card-entry methods a reader is currently accepting.
///
/// The native layer renders its flag set as a slash-delimited string, e.g.
/// `"Insert / Swipe / Tap"`; that rendering is the only form it exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderInputOptions(String);

impl ReaderInputOptions {
    pub fn from_native_rendering(rendered: impl Into<String>) -> Self {
        Self(rendered.into())
    }

    /// Render a flag set the way the native SDK does.
    pub fn from_flags(insert: bool, swipe: bool, tap: bool) -> Self {
        let parts: Vec<&str> = [(insert, "Insert"), (swipe, "Swipe"), (tap, "Tap")]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect();
        Self(parts.join(" / "))
    }

    pub fn as_native_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReaderInputOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
