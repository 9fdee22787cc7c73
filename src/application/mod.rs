//! Application layer containing the gateway client.
//!
//! `PaytrailClient` is the entry point for submitting payments and checking
//! callback signatures. It owns the merchant credentials and a boxed
//! transport, so tests can swap the HTTPS adapter for an in-memory one.

pub mod client;
