use ferrous_resolv_domain::DomainError;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::AddressResolver;

/// Turns a host string into an IPv4 address: dotted-decimal literals are
/// parsed in place, everything else goes to the resolver.
pub struct HostLookupService {
    resolver: Arc<dyn AddressResolver>,
}

impl HostLookupService {
    pub fn new(resolver: Arc<dyn AddressResolver>) -> Self {
        Self { resolver }
    }

    #[instrument(skip(self))]
    pub fn lookup(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        if let Some(addr) = parse_numeric_host(host) {
            debug!(addr = %addr, "Numeric host, skipping DNS query");
            return Ok(addr);
        }

        self.resolver.resolve_ipv4(host)
    }
}

/// Strict dotted-decimal form (`a.b.c.d`, each part 0-255).
pub fn parse_numeric_host(host: &str) -> Option<Ipv4Addr> {
    host.parse::<Ipv4Addr>().ok()
}
