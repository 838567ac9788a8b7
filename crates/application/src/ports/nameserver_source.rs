use std::net::Ipv4Addr;

/// Supplies the DNS server address from the host's network configuration.
pub trait NameserverSource: Send + Sync {
    /// `None` when no server is configured. Implementations never return `0.0.0.0`.
    fn nameserver(&self) -> Option<Ipv4Addr>;

    /// Short label for logs (e.g. "config", "resolv.conf").
    fn source_name(&self) -> &'static str;
}
