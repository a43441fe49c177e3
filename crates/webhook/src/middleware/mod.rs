//! HTTP middleware for the webhook.

pub mod cors;
