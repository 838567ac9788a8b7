use ferrous_resolv_application::ports::{AddressResolver, NameserverSource};
use ferrous_resolv_application::services::HostLookupService;
use ferrous_resolv_application::use_cases::{GetAddrInfoUseCase, GetHostByNameUseCase};
use ferrous_resolv_domain::Config;
use ferrous_resolv_infrastructure::dns::UdpStubResolver;
use ferrous_resolv_infrastructure::system::{ResolvConfNameserver, StaticNameserver};
use std::sync::Arc;
use tracing::{info, warn};

pub struct Resolver {
    pub get_addr_info: Arc<GetAddrInfoUseCase>,
    pub get_host_by_name: Arc<GetHostByNameUseCase>,
    pub nameserver: Arc<dyn NameserverSource>,
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        let nameserver = Self::setup_nameserver(config);

        let resolver: Arc<dyn AddressResolver> = Arc::new(
            UdpStubResolver::new(nameserver.clone())
                .with_port(config.dns.port)
                .with_timeout(config.dns.query_timeout())
                .with_source_verification(config.dns.verify_source),
        );

        info!(
            port = config.dns.port,
            timeout_ms = config.dns.query_timeout_ms,
            verify_source = config.dns.verify_source,
            "Stub resolver ready"
        );

        let lookup = Arc::new(HostLookupService::new(resolver));

        Self {
            get_addr_info: Arc::new(GetAddrInfoUseCase::new(lookup.clone())),
            get_host_by_name: Arc::new(GetHostByNameUseCase::new(lookup)),
            nameserver,
        }
    }

    fn setup_nameserver(config: &Config) -> Arc<dyn NameserverSource> {
        let source: Arc<dyn NameserverSource> =
            if let Some(addr) = config.dns.configured_nameserver() {
                Arc::new(StaticNameserver::new(Some(addr)))
            } else if config.dns.use_system_resolv_conf {
                Arc::new(ResolvConfNameserver::with_path(&config.dns.resolv_conf_path))
            } else {
                Arc::new(StaticNameserver::unset())
            };

        match source.nameserver() {
            Some(addr) => info!(
                nameserver = %addr,
                source = source.source_name(),
                "DNS server selected"
            ),
            None => warn!(
                source = source.source_name(),
                "No DNS server available; name lookups will fail"
            ),
        }

        source
    }
}
