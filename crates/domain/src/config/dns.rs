use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Resolver settings.
///
/// `nameserver = "0.0.0.0"` is treated the same as leaving it out.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default)]
    pub nameserver: Option<Ipv4Addr>,

    /// Fall back to the first IPv4 `nameserver` line of the system resolver
    /// configuration when no server is set explicitly.
    #[serde(default = "default_true")]
    pub use_system_resolv_conf: bool,

    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,

    #[serde(default = "default_dns_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Discard replies that do not come from the configured server.
    #[serde(default = "default_true")]
    pub verify_source: bool,

    #[serde(default = "default_self_test_host")]
    pub self_test_host: String,

    #[serde(default = "default_self_test_service")]
    pub self_test_service: String,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameserver: None,
            use_system_resolv_conf: default_true(),
            resolv_conf_path: default_resolv_conf_path(),
            port: default_dns_port(),
            query_timeout_ms: default_query_timeout_ms(),
            verify_source: default_true(),
            self_test_host: default_self_test_host(),
            self_test_service: default_self_test_service(),
        }
    }
}

impl DnsConfig {
    pub fn configured_nameserver(&self) -> Option<Ipv4Addr> {
        self.nameserver.filter(|addr| !addr.is_unspecified())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_resolv_conf_path() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_self_test_host() -> String {
    "dns.flyca.st".to_string()
}

fn default_self_test_service() -> String {
    "80".to_string()
}
