// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Entity decoders: boundary value trees -> SDK request values.
//
// Line items are validated one by one and malformed ones are dropped; the
// rest of the batch still goes through.

use serde_json::{Map, Value};
use terminal_core::error::Result;
use terminal_core::request::{Cart, CartLineItem, DiscoveryConfiguration};
use tracing::debug;

use crate::access::{
    Field, as_integer, get_array_or, get_boolean, get_int_or, get_string_or, lookup, require_int,
    require_string,
};
use crate::tokens::map_to_discovery_method;

/// Decode every well-formed line item, preserving input order.
pub fn map_to_cart_line_items(items: &[Value]) -> Vec<CartLineItem> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let decoded = map_to_cart_line_item(item);
            if decoded.is_none() {
                debug!(index, "dropping malformed cart line item");
            }
            decoded
        })
        .collect()
}

/// Decode one line item, or `None` if any field is missing or mistyped.
pub fn map_to_cart_line_item(item: &Value) -> Option<CartLineItem> {
    let map = item.as_object()?;

    let display_name = match lookup(map, "displayName") {
        Field::Present(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => return None,
    };
    let quantity = match lookup(map, "quantity") {
        Field::Present(value) => u64::try_from(as_integer(value)?).ok()?,
        Field::Absent => return None,
    };
    let amount = match lookup(map, "amount") {
        Field::Present(value) => as_integer(value)?,
        Field::Absent => return None,
    };

    Some(CartLineItem {
        display_name,
        quantity,
        amount,
    })
}

/// Decode the cart shown on a reader during collection.
///
/// `currency`, `tax` and `total` are required; `lineItems` may be omitted.
pub fn map_to_cart(map: &Map<String, Value>) -> Result<Cart> {
    let currency = require_string(map, "currency")?.to_owned();
    let tax = require_int(map, "tax")?;
    let total = require_int(map, "total")?;
    let line_items = get_array_or(map, "lineItems", None)?
        .map(map_to_cart_line_items)
        .unwrap_or_default();

    Ok(Cart {
        currency,
        tax,
        total,
        line_items,
    })
}

/// Decode reader discovery parameters.
pub fn map_to_discovery_configuration(map: &Map<String, Value>) -> Result<DiscoveryConfiguration> {
    let discovery_method = map_to_discovery_method(get_string_or(map, "discoveryMethod", None)?);
    let simulated = get_boolean(map, "simulated")?;
    let timeout = get_int_or(map, "timeout", Some(0))?.map_or(0, |t| {
        u32::try_from(t).unwrap_or_else(|_| {
            debug!(timeout = t, "out-of-range discovery timeout, using the SDK default");
            0
        })
    });

    Ok(DiscoveryConfiguration {
        discovery_method,
        simulated,
        timeout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use terminal_core::enums::DiscoveryMethod;
    use terminal_core::error::TerminalError;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn valid_item_kept_invalid_item_dropped() {
        let items = json!([
            { "displayName": "Coffee", "quantity": 2, "amount": 350 },
            { "displayName": "Muffin", "quantity": 1 },
        ]);
        let decoded = map_to_cart_line_items(items.as_array().unwrap());
        assert_eq!(
            decoded,
            vec![CartLineItem {
                display_name: "Coffee".into(),
                quantity: 2,
                amount: 350,
            }]
        );
    }

    #[test]
    fn doubles_with_integer_values_are_accepted() {
        let item = json!({ "displayName": "Tea", "quantity": 3.0, "amount": 275.0 });
        let decoded = map_to_cart_line_item(&item).unwrap();
        assert_eq!(decoded.quantity, 3);
        assert_eq!(decoded.amount, 275);
    }

    #[test]
    fn each_bad_field_drops_the_item() {
        let bad = [
            json!("Coffee"),
            json!({ "displayName": "", "quantity": 1, "amount": 100 }),
            json!({ "displayName": 7, "quantity": 1, "amount": 100 }),
            json!({ "displayName": "Coffee", "quantity": "1", "amount": 100 }),
            json!({ "displayName": "Coffee", "quantity": 1.5, "amount": 100 }),
            json!({ "displayName": "Coffee", "quantity": -1, "amount": 100 }),
            json!({ "displayName": "Coffee", "quantity": 1, "amount": null }),
            json!({ "quantity": 1, "amount": 100 }),
        ];
        for item in &bad {
            assert!(map_to_cart_line_item(item).is_none(), "accepted {item}");
        }
    }

    #[test]
    fn order_of_survivors_is_preserved() {
        let items = json!([
            { "displayName": "A", "quantity": 1, "amount": 1 },
            42,
            { "displayName": "B", "quantity": 1, "amount": 2 },
            { "displayName": "C", "quantity": 1, "amount": 3 },
        ]);
        let names: Vec<String> = map_to_cart_line_items(items.as_array().unwrap())
            .into_iter()
            .map(|item| item.display_name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn cart_decodes_with_line_items() {
        let map = object(json!({
            "currency": "usd",
            "tax": 50,
            "total": 750,
            "lineItems": [
                { "displayName": "Coffee", "quantity": 2, "amount": 350 },
                { "displayName": "Broken" },
            ],
        }));
        let cart = map_to_cart(&map).unwrap();
        assert_eq!(cart.currency, "usd");
        assert_eq!(cart.total, 750);
        assert_eq!(cart.line_items.len(), 1);
    }

    #[test]
    fn cart_without_line_items_is_empty() {
        let map = object(json!({ "currency": "usd", "tax": 0, "total": 0 }));
        assert!(map_to_cart(&map).unwrap().line_items.is_empty());
    }

    #[test]
    fn cart_missing_currency_fails() {
        let map = object(json!({ "tax": 0, "total": 0 }));
        assert!(matches!(map_to_cart(&map), Err(TerminalError::MissingKey(_))));
    }

    #[test]
    fn cart_line_items_of_wrong_type_fail() {
        let map = object(json!({ "currency": "usd", "tax": 0, "total": 0, "lineItems": {} }));
        assert!(matches!(map_to_cart(&map), Err(TerminalError::TypeMismatch { .. })));
    }

    #[test]
    fn discovery_configuration_defaults() {
        let config = map_to_discovery_configuration(&Map::new()).unwrap();
        assert_eq!(config, DiscoveryConfiguration::default());
    }

    #[test]
    fn discovery_configuration_reads_fields() {
        let map = object(json!({
            "discoveryMethod": "bluetoothScan",
            "simulated": true,
            "timeout": 30,
        }));
        let config = map_to_discovery_configuration(&map).unwrap();
        assert_eq!(config.discovery_method, DiscoveryMethod::BluetoothScan);
        assert!(config.simulated);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn discovery_configuration_bogus_method_is_internet() {
        let map = object(json!({ "discoveryMethod": "bogus" }));
        let config = map_to_discovery_configuration(&map).unwrap();
        assert_eq!(config.discovery_method, DiscoveryMethod::Internet);
    }

    #[test]
    fn out_of_range_timeout_uses_sdk_default() {
        for timeout in [json!(-5), json!(4_294_967_296_i64)] {
            let map = object(json!({ "timeout": timeout }));
            assert_eq!(map_to_discovery_configuration(&map).unwrap().timeout, 0);
        }
        let map = object(json!({ "timeout": 30 }));
        assert_eq!(map_to_discovery_configuration(&map).unwrap().timeout, 30);
    }

    #[test]
    fn discovery_configuration_mistyped_flag_fails() {
        let map = object(json!({ "simulated": "yes" }));
        assert!(map_to_discovery_configuration(&map).is_err());
    }
}
