#![allow(dead_code)]
mod mock_resolver;

pub use mock_resolver::MockAddressResolver;
