//! Checkout payload to Printful order translation.
//!
//! Pure functions: every call builds a fresh [`FulfillmentOrder`] from the
//! validated pieces of the webhook body. Defaults applied here are part of
//! the wire contract with Printful:
//!
//! - recipient name is the trimmed `"{first} {last}"` concatenation
//! - `address2` and `phone` default to the empty string
//! - `state_code` defaults to [`DEFAULT_STATE_CODE`] when the address has
//!   neither `province` nor `state`
//! - `external_id` prefers the invoice number over the order token

use crate::catalog;
use crate::types::{
    FulfillmentOrder, ItemFile, LineItem, OrderItem, Recipient, ShippingAddress, SnipcartOrder,
};

/// State code used when the checkout address carries neither `province`
/// nor `state`.
pub const DEFAULT_STATE_CODE: &str = "CA";

/// Build the Printful order for a validated checkout payload.
#[must_use]
pub fn build_fulfillment_order(
    order: &SnipcartOrder,
    items: &[LineItem],
    address: &ShippingAddress,
) -> FulfillmentOrder {
    FulfillmentOrder {
        recipient: build_recipient(order, address),
        items: items.iter().map(build_item).collect(),
        external_id: order.invoice_number.clone().or_else(|| order.token.clone()),
    }
}

/// Translate one line item, resolving its variant through the catalog.
fn build_item(item: &LineItem) -> OrderItem {
    OrderItem {
        variant_id: catalog::variant_id(&item.id),
        quantity: item.quantity,
        files: vec![ItemFile {
            url: catalog::DESIGN_FILE_URL.to_string(),
        }],
        name: item.name.clone(),
    }
}

/// Assemble the recipient block from the address and buyer email.
fn build_recipient(order: &SnipcartOrder, address: &ShippingAddress) -> Recipient {
    Recipient {
        name: full_name(&address.first_name, &address.last_name),
        address1: address.address1.clone(),
        address2: address.address2.clone().unwrap_or_default(),
        city: address.city.clone(),
        state_code: address
            .province
            .clone()
            .or_else(|| address.state.clone())
            .unwrap_or_else(|| DEFAULT_STATE_CODE.to_string()),
        country_code: address.country.clone(),
        zip: address.postal_code.clone(),
        phone: address.phone.clone().unwrap_or_default(),
        email: order.email.clone().unwrap_or_default(),
    }
}

/// Concatenate first and last name with a single space, trimmed.
fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> SnipcartOrder {
        SnipcartOrder {
            invoice_number: Some("INV-001".to_string()),
            token: Some("tok_abc".to_string()),
            email: Some("buyer@example.com".to_string()),
        }
    }

    fn address() -> ShippingAddress {
        ShippingAddress {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            address1: "1 Main St".to_string(),
            address2: None,
            city: "Los Angeles".to_string(),
            province: None,
            state: None,
            country: "US".to_string(),
            postal_code: "90001".to_string(),
            phone: None,
        }
    }

    fn items() -> Vec<LineItem> {
        vec![
            LineItem {
                id: "ceramic-mug-11oz".to_string(),
                quantity: 2,
                name: "Mug".to_string(),
            },
            LineItem {
                id: "not-in-catalog".to_string(),
                quantity: 1,
                name: "Mystery".to_string(),
            },
        ]
    }

    #[test]
    fn maps_items_and_keeps_unknown_ids_via_fallback() {
        let built = build_fulfillment_order(&order(), &items(), &address());

        assert_eq!(built.items.len(), 2);
        assert_eq!(built.items[0].variant_id, 1003);
        assert_eq!(built.items[0].quantity, 2);
        assert_eq!(built.items[0].name, "Mug");
        // Unknown ids are never dropped; they ship the default variant.
        assert_eq!(built.items[1].variant_id, catalog::DEFAULT_VARIANT_ID);
        for item in &built.items {
            assert_eq!(item.files.len(), 1);
            assert_eq!(item.files[0].url, catalog::DESIGN_FILE_URL);
        }
    }

    #[test]
    fn full_name_is_trimmed() {
        assert_eq!(full_name("Jane", "Doe"), "Jane Doe");
        assert_eq!(full_name("Jane", ""), "Jane");
        assert_eq!(full_name("", "Doe"), "Doe");
        assert_eq!(full_name("", ""), "");
    }

    #[test]
    fn state_code_defaults_when_province_and_state_absent() {
        let built = build_fulfillment_order(&order(), &items(), &address());
        assert_eq!(built.recipient.state_code, DEFAULT_STATE_CODE);
    }

    #[test]
    fn province_wins_over_state() {
        let mut addr = address();
        addr.province = Some("BC".to_string());
        addr.state = Some("WA".to_string());
        let built = build_fulfillment_order(&order(), &items(), &addr);
        assert_eq!(built.recipient.state_code, "BC");

        addr.province = None;
        let built = build_fulfillment_order(&order(), &items(), &addr);
        assert_eq!(built.recipient.state_code, "WA");
    }

    #[test]
    fn optional_address_fields_default_to_empty() {
        let built = build_fulfillment_order(&order(), &items(), &address());
        assert_eq!(built.recipient.address2, "");
        assert_eq!(built.recipient.phone, "");

        let mut addr = address();
        addr.address2 = Some("Apt 4".to_string());
        addr.phone = Some("+1 555 0100".to_string());
        let built = build_fulfillment_order(&order(), &items(), &addr);
        assert_eq!(built.recipient.address2, "Apt 4");
        assert_eq!(built.recipient.phone, "+1 555 0100");
    }

    #[test]
    fn external_id_prefers_invoice_number_over_token() {
        let built = build_fulfillment_order(&order(), &items(), &address());
        assert_eq!(built.external_id.as_deref(), Some("INV-001"));

        let mut ord = order();
        ord.invoice_number = None;
        let built = build_fulfillment_order(&ord, &items(), &address());
        assert_eq!(built.external_id.as_deref(), Some("tok_abc"));

        ord.token = None;
        let built = build_fulfillment_order(&ord, &items(), &address());
        assert!(built.external_id.is_none());
    }

    #[test]
    fn recipient_email_comes_from_order() {
        let built = build_fulfillment_order(&order(), &items(), &address());
        assert_eq!(built.recipient.email, "buyer@example.com");

        let mut ord = order();
        ord.email = None;
        let built = build_fulfillment_order(&ord, &items(), &address());
        assert_eq!(built.recipient.email, "");
    }
}
