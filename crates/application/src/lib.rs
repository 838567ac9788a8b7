//! Ferrous Resolv Application Layer
//!
//! Ports implemented by the infrastructure crate, and the resolver
//! compatibility entry points built on top of them.
pub mod ports;
pub mod services;
pub mod use_cases;
