//! # Pulse Core
//!
//! The domain layer of the TrendPulse gateway.
//! This crate contains the typed analytics records, the ports onto the
//! cache store and the analyzer backend, and the caching facade itself.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::GatewayError;
