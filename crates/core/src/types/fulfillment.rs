//! Outbound Printful order types.
//!
//! Field names match Printful's order-creation API exactly, so these
//! serialize without renames.

use serde::{Deserialize, Serialize};

/// An order as submitted to Printful's `POST /orders` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOrder {
    pub recipient: Recipient,
    pub items: Vec<OrderItem>,
    /// Storefront invoice number or token. Omitted from the JSON when the
    /// checkout carried neither, so Printful never sees a null reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Name, address, and contact details for the parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state_code: String,
    pub country_code: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

/// One item on the fulfillment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub variant_id: u32,
    pub quantity: u32,
    pub files: Vec<ItemFile>,
    pub name: String,
}

/// A print file attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFile {
    pub url: String,
}
