//! Inbound checkout payload types.
//!
//! These mirror the JSON posted by the storefront when a Snipcart checkout
//! completes. The three top-level fields are `Option` on purpose: their
//! absence is a validation failure the webhook reports as a 400, not a
//! deserialization error.

use serde::{Deserialize, Serialize};

/// Body of a checkout-completed webhook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// The Snipcart order record (invoice/token and buyer email).
    pub snipcart_order: Option<SnipcartOrder>,
    /// Purchased line items, in cart order.
    pub items: Option<Vec<LineItem>>,
    /// Where to ship the order.
    pub shipping_address: Option<ShippingAddress>,
}

/// The storefront's own record of the completed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnipcartOrder {
    /// Human-facing invoice number, preferred as the external reference.
    pub invoice_number: Option<String>,
    /// Snipcart order token, used as the external reference when no
    /// invoice number is present.
    pub token: Option<String>,
    /// Buyer email, forwarded to Printful as the recipient email.
    pub email: Option<String>,
}

/// One purchased product/quantity pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Storefront product id, resolved against the variant catalog.
    pub id: String,
    pub quantity: u32,
    /// Display name, passed through to Printful unchanged.
    pub name: String,
}

/// Structured postal address from checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    /// Province code. Wins over `state` when both are set.
    pub province: Option<String>,
    /// State code, checked after `province`.
    pub state: Option<String>,
    pub country: String,
    pub postal_code: String,
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_request_tolerates_missing_top_level_fields() {
        let request: OrderRequest = serde_json::from_str("{}").expect("empty object parses");
        assert!(request.snipcart_order.is_none());
        assert!(request.items.is_none());
        assert!(request.shipping_address.is_none());
    }

    #[test]
    fn order_request_parses_camel_case_payload() {
        let request: OrderRequest = serde_json::from_value(serde_json::json!({
            "snipcartOrder": {
                "invoiceNumber": "INV-001",
                "token": "tok_abc",
                "email": "buyer@example.com"
            },
            "items": [{"id": "ceramic-mug-11oz", "quantity": 2, "name": "Mug"}],
            "shippingAddress": {
                "firstName": "Jane",
                "lastName": "Doe",
                "address1": "1 Main St",
                "city": "Los Angeles",
                "country": "US",
                "postalCode": "90001"
            }
        }))
        .expect("payload parses");

        let order = request.snipcart_order.expect("order present");
        assert_eq!(order.invoice_number.as_deref(), Some("INV-001"));
        assert_eq!(order.email.as_deref(), Some("buyer@example.com"));

        let items = request.items.expect("items present");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);

        let address = request.shipping_address.expect("address present");
        assert_eq!(address.first_name, "Jane");
        assert!(address.province.is_none());
        assert!(address.phone.is_none());
    }
}
