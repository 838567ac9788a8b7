//! UDP stub resolver for A records (RFC 1035 §4.2.1)
//!
//! One query datagram to one configured server per lookup, no retries. The
//! socket lives only for the duration of the call.

use super::query_id::QueryIdGenerator;
use super::socket::{DatagramConnector, DatagramSocket, SystemDatagramConnector};
use super::DNS_PORT;
use crate::dns::wire::{encode_query, parse_a_response, PacketBuf, WireError};
use ferrous_resolv_application::ports::{AddressResolver, NameserverSource};
use ferrous_resolv_domain::DomainError;
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Time budget for one lookup, from send to accepted reply.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

pub struct UdpStubResolver {
    nameserver: Arc<dyn NameserverSource>,
    connector: Arc<dyn DatagramConnector>,
    ids: QueryIdGenerator,
    port: u16,
    timeout: Duration,
    verify_source: bool,
}

impl UdpStubResolver {
    pub fn new(nameserver: Arc<dyn NameserverSource>) -> Self {
        Self {
            nameserver,
            connector: Arc::new(SystemDatagramConnector::new()),
            ids: QueryIdGenerator::new(),
            port: DNS_PORT,
            timeout: DEFAULT_QUERY_TIMEOUT,
            verify_source: true,
        }
    }

    pub fn with_connector(mut self, connector: Arc<dyn DatagramConnector>) -> Self {
        self.connector = connector;
        self
    }

    pub fn with_ids(mut self, ids: QueryIdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// When enabled, replies from any address other than the configured
    /// server are dropped and the wait continues.
    pub fn with_source_verification(mut self, verify_source: bool) -> Self {
        self.verify_source = verify_source;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Performs one A lookup for `host`.
    pub fn query_a(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        let server_ip = match self.nameserver.nameserver() {
            Some(ip) if !ip.is_unspecified() => ip,
            _ => {
                warn!(host = host, "No DNS server configured");
                return Err(DomainError::NoNameserver);
            }
        };
        let server = SocketAddrV4::new(server_ip, self.port);

        debug!(
            host = host,
            server = %server,
            source = self.nameserver.source_name(),
            "Resolving A record"
        );

        let id = self.ids.next_id();
        let mut query = PacketBuf::new();
        encode_query(host, id, &mut query)?;

        let socket = self
            .connector
            .open()
            .map_err(|e| DomainError::SocketCreate(e.to_string()))?;

        let result = self.exchange(socket.as_ref(), server, &query, id);
        drop(socket);

        match &result {
            Ok(addr) => info!(host = host, addr = %addr, server = %server, "A record resolved"),
            Err(e) => warn!(host = host, server = %server, error = %e, "A lookup failed"),
        }

        result
    }

    fn exchange(
        &self,
        socket: &dyn DatagramSocket,
        server: SocketAddrV4,
        query: &PacketBuf,
        id: u16,
    ) -> Result<Ipv4Addr, DomainError> {
        let bytes_sent = socket
            .send_to(query.as_slice(), server)
            .map_err(|e| DomainError::Send {
                server: server.to_string(),
                reason: e.to_string(),
            })?;

        debug!(server = %server, bytes_sent = bytes_sent, id = id, "UDP query sent");

        let deadline = Instant::now() + self.timeout;
        let mut response = PacketBuf::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DomainError::QueryTimeout {
                    server: server.to_string(),
                });
            }

            let (bytes_received, from) = socket
                .recv_from(response.capacity_mut(), remaining)
                .map_err(|e| Self::receive_error(e, server))?;
            response.set_len(bytes_received);

            debug!(
                server = %server,
                from = %from,
                bytes_received = bytes_received,
                "UDP response received"
            );

            if self.verify_source && from != SocketAddr::V4(server) {
                warn!(
                    expected = %server,
                    received_from = %from,
                    "Discarding UDP response from unexpected source"
                );
                continue;
            }

            match parse_a_response(response.as_slice(), id) {
                Err(WireError::IdMismatch { expected, actual }) => {
                    debug!(expected = expected, actual = actual, "Discarding stale DNS response");
                    continue;
                }
                other => return other.map_err(DomainError::from),
            }
        }
    }

    fn receive_error(error: io::Error, server: SocketAddrV4) -> DomainError {
        match error.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => DomainError::QueryTimeout {
                server: server.to_string(),
            },
            _ => DomainError::Receive {
                server: server.to_string(),
                reason: error.to_string(),
            },
        }
    }
}

impl AddressResolver for UdpStubResolver {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        self.query_a(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNameserver(Option<Ipv4Addr>);

    impl NameserverSource for FixedNameserver {
        fn nameserver(&self) -> Option<Ipv4Addr> {
            self.0
        }

        fn source_name(&self) -> &'static str {
            "test"
        }
    }

    #[test]
    fn test_defaults() {
        let resolver = UdpStubResolver::new(Arc::new(FixedNameserver(None)));
        assert_eq!(resolver.port, 53);
        assert_eq!(resolver.timeout(), Duration::from_secs(2));
        assert!(resolver.verify_source);
    }

    #[test]
    fn test_no_nameserver() {
        let resolver = UdpStubResolver::new(Arc::new(FixedNameserver(None)));
        assert_eq!(
            resolver.query_a("example.com"),
            Err(DomainError::NoNameserver)
        );
    }

    #[test]
    fn test_unspecified_nameserver_is_unset() {
        let resolver =
            UdpStubResolver::new(Arc::new(FixedNameserver(Some(Ipv4Addr::UNSPECIFIED))));
        assert_eq!(
            resolver.query_a("example.com"),
            Err(DomainError::NoNameserver)
        );
    }

    #[test]
    fn test_invalid_name_fails_before_socket() {
        let resolver = UdpStubResolver::new(Arc::new(FixedNameserver(Some(Ipv4Addr::new(
            192, 0, 2, 53,
        )))));
        let result = resolver.query_a("bad..name");
        assert!(matches!(result, Err(DomainError::InvalidDomainName(_))));
    }

    #[test]
    fn test_receive_error_mapping() {
        let server = SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, 53), 53);
        let timeout = UdpStubResolver::receive_error(io::ErrorKind::WouldBlock.into(), server);
        assert!(timeout.is_transport_error());
        assert!(matches!(timeout, DomainError::QueryTimeout { .. }));

        let refused =
            UdpStubResolver::receive_error(io::ErrorKind::ConnectionRefused.into(), server);
        assert!(matches!(refused, DomainError::Receive { .. }));
    }
}
