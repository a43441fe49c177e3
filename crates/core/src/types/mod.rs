//! Order types for the Dystynkt fulfillment pipeline.
//!
//! Inbound types mirror the Snipcart webhook JSON (camelCase); outbound
//! types mirror Printful's order-creation API (snake_case).

pub mod checkout;
pub mod fulfillment;

pub use checkout::{LineItem, OrderRequest, ShippingAddress, SnipcartOrder};
pub use fulfillment::{FulfillmentOrder, ItemFile, OrderItem, Recipient};
