use ferrous_resolv_domain::DomainError;
use std::net::Ipv4Addr;

/// Blocking forward lookup of a single IPv4 address for a hostname.
pub trait AddressResolver: Send + Sync {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError>;
}
