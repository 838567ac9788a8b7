//! Ferrous Resolv Domain Layer
pub mod addr_info;
pub mod config;
pub mod errors;
pub mod host_entry;

pub use addr_info::{AddrInfo, AddrInfoFlags, AddrInfoHints, AddressFamily, SocketType};
pub use config::{CliOverrides, Config, ConfigError, DnsConfig, LogFormat, LoggingConfig};
pub use errors::DomainError;
pub use host_entry::{HostEntry, HostEntrySlot};
