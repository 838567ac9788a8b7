use ferrous_resolv_domain::{AddrInfo, AddrInfoFlags, AddrInfoHints, AddressFamily};
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::errors::AddrInfoError;
use crate::services::{service_to_port, HostLookupService};

/// Use case: resolve a host/service pair into an address-info list
///
/// IPv4 only. The returned list always holds exactly one entry.
pub struct GetAddrInfoUseCase {
    lookup: Arc<HostLookupService>,
}

impl GetAddrInfoUseCase {
    pub fn new(lookup: Arc<HostLookupService>) -> Self {
        Self { lookup }
    }

    pub fn execute(
        &self,
        host: Option<&str>,
        service: Option<&str>,
        hints: Option<&AddrInfoHints>,
    ) -> Result<Box<AddrInfo>, AddrInfoError> {
        debug!(
            host = host.unwrap_or("(null)"),
            service = service.unwrap_or("(null)"),
            "getaddrinfo called"
        );

        let result = self.resolve(host, service, hints);

        match &result {
            Ok(entry) => info!(
                host = host.unwrap_or("(null)"),
                addr = %entry.addr,
                "getaddrinfo succeeded"
            ),
            Err(e) => warn!(
                host = host.unwrap_or("(null)"),
                code = e.code(),
                error = %e,
                "getaddrinfo failed"
            ),
        }

        result
    }

    fn resolve(
        &self,
        host: Option<&str>,
        service: Option<&str>,
        hints: Option<&AddrInfoHints>,
    ) -> Result<Box<AddrInfo>, AddrInfoError> {
        let family = hints.map_or(AddressFamily::Unspecified, |h| h.family);
        if !matches!(family, AddressFamily::Unspecified | AddressFamily::Inet) {
            return Err(AddrInfoError::Family);
        }

        let port = service_to_port(service).ok_or(AddrInfoError::Service)?;

        let addr = match host {
            None => Ipv4Addr::UNSPECIFIED,
            Some(host) => self
                .lookup
                .lookup(host)
                .map_err(|e| AddrInfoError::from(&e))?,
        };

        let mut entry = AddrInfo::new(SocketAddrV4::new(addr, port));
        if let Some(hints) = hints {
            entry.flags = hints.flags;
            entry.socket_type = hints.socket_type;
            entry.protocol = hints.protocol;
            if hints.flags.contains(AddrInfoFlags::CANONNAME) {
                entry.canonical_name = host.map(str::to_string);
            }
        }

        Ok(Box::new(entry))
    }
}
