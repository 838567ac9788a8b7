use ferrous_resolv_application::ports::NameserverSource;
use std::net::Ipv4Addr;
use std::path::PathBuf;
use tracing::{debug, warn};

/// A fixed server address, typically from the config file or command line.
#[derive(Debug, Clone, Copy)]
pub struct StaticNameserver {
    addr: Option<Ipv4Addr>,
}

impl StaticNameserver {
    pub fn new(addr: Option<Ipv4Addr>) -> Self {
        Self {
            addr: addr.filter(|a| !a.is_unspecified()),
        }
    }

    pub fn unset() -> Self {
        Self { addr: None }
    }
}

impl NameserverSource for StaticNameserver {
    fn nameserver(&self) -> Option<Ipv4Addr> {
        self.addr
    }

    fn source_name(&self) -> &'static str {
        "config"
    }
}

/// Reads the first IPv4 `nameserver` entry from a resolv.conf-style file.
///
/// The file is re-read on every lookup so DHCP updates are picked up.
pub struct ResolvConfNameserver {
    path: PathBuf,
}

impl ResolvConfNameserver {
    pub fn new() -> Self {
        Self::with_path("/etc/resolv.conf")
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(content: &str) -> Option<Ipv4Addr> {
        // Format:
        // # comment
        // nameserver 192.168.1.1
        // nameserver fe80::1%eth0
        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let mut fields = line.split_whitespace();
            if fields.next() != Some("nameserver") {
                continue;
            }

            match fields.next().map(str::parse::<Ipv4Addr>) {
                Some(Ok(addr)) if !addr.is_unspecified() => return Some(addr),
                Some(Ok(_)) => continue,
                Some(Err(_)) => {
                    debug!(line = line, "Skipping non-IPv4 nameserver entry");
                }
                None => continue,
            }
        }

        None
    }
}

impl Default for ResolvConfNameserver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameserverSource for ResolvConfNameserver {
    fn nameserver(&self) -> Option<Ipv4Addr> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read resolver configuration");
                None
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "resolv.conf"
    }
}
