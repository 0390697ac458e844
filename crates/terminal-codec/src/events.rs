// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SDK callback events -> named boundary payloads.

use serde_json::{Value, json};
use terminal_core::events::TerminalEvent;

use crate::encode::{map_from_offline_status, map_from_reader_software_update};
use crate::response::create_result;
use crate::tokens::{
    map_from_connection_status, map_from_payment_status, map_from_reader_display_message,
    map_from_reader_input_options,
};

/// Encode an event as its listener name and a `{ "result": ... }` payload.
pub fn map_from_event(event: &TerminalEvent) -> (&'static str, Value) {
    let node = match event {
        TerminalEvent::RequestReaderDisplayMessage(message) => {
            json!(map_from_reader_display_message(message))
        }
        TerminalEvent::RequestReaderInput(options) => json!(map_from_reader_input_options(options)),
        TerminalEvent::ConnectionStatusChanged(status) => json!(map_from_connection_status(status)),
        TerminalEvent::PaymentStatusChanged(status) => json!(map_from_payment_status(status)),
        TerminalEvent::AvailableUpdate(update) => map_from_reader_software_update(Some(update)),
        TerminalEvent::OfflineStatusChanged(status) => map_from_offline_status(status),
    };
    (event.name(), create_result("result", node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminal_core::enums::{ConnectionStatus, ReaderDisplayMessage, ReaderInputOptions};

    #[test]
    fn display_message_event() {
        let (name, payload) = map_from_event(&TerminalEvent::RequestReaderDisplayMessage(
            ReaderDisplayMessage::RemoveCard,
        ));
        assert_eq!(name, "didRequestReaderDisplayMessage");
        assert_eq!(payload, json!({ "result": "removeCard" }));
    }

    #[test]
    fn reader_input_event_lists_tokens() {
        let event = TerminalEvent::RequestReaderInput(ReaderInputOptions::from_native_rendering(
            "Insert / Swipe / Tap",
        ));
        let (name, payload) = map_from_event(&event);
        assert_eq!(name, "didRequestReaderInput");
        assert_eq!(payload, json!({ "result": ["insertCard", "swipeCard", "tapCard"] }));
    }

    #[test]
    fn unrecognised_status_event_is_unknown() {
        let event = TerminalEvent::ConnectionStatusChanged(ConnectionStatus::from_native_name(
            "DISCOVERING",
        ));
        assert_eq!(map_from_event(&event).1["result"], "unknown");
    }
}
