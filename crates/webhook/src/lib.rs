//! Dystynkt Printful Webhook library.
//!
//! This crate provides the webhook functionality as a library, allowing
//! the HTTP surface to be tested in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
