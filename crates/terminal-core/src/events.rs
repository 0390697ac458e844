// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Callbacks the native SDK delivers outside of any request/response pair.

use crate::enums::{ConnectionStatus, PaymentStatus, ReaderDisplayMessage, ReaderInputOptions};
use crate::types::{OfflineStatus, ReaderSoftwareUpdate};

#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    /// The reader wants the app to show a prompt.
    RequestReaderDisplayMessage(ReaderDisplayMessage),
    /// The reader is waiting for a card and accepts these entry methods.
    RequestReaderInput(ReaderInputOptions),
    ConnectionStatusChanged(ConnectionStatus),
    PaymentStatusChanged(PaymentStatus),
    /// Reported on connect when the reader has an optional update.
    AvailableUpdate(ReaderSoftwareUpdate),
    OfflineStatusChanged(OfflineStatus),
}

impl TerminalEvent {
    /// Event name listeners subscribe to on the far side of the boundary.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestReaderDisplayMessage(_) => "didRequestReaderDisplayMessage",
            Self::RequestReaderInput(_) => "didRequestReaderInput",
            Self::ConnectionStatusChanged(_) => "didChangeConnectionStatus",
            Self::PaymentStatusChanged(_) => "didChangePaymentStatus",
            Self::AvailableUpdate(_) => "didReportAvailableUpdate",
            Self::OfflineStatusChanged(_) => "didChangeOfflineStatus",
        }
    }
}
