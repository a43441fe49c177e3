//! Dystynkt Core - Shared types library.
//!
//! This crate provides the order types shared across Dystynkt components:
//! - `webhook` - Snipcart checkout webhook that forwards orders to Printful
//!
//! # Architecture
//!
//! The core crate contains only types and pure translation logic - no I/O,
//! no HTTP clients, no async. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Inbound checkout payload and outbound Printful order types
//! - [`catalog`] - Static storefront-product-id to Printful-variant-id map
//! - [`translate`] - Checkout payload to Printful order translation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod translate;
pub mod types;

pub use types::*;
