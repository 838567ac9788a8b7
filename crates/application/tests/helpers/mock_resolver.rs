use ferrous_resolv_application::ports::AddressResolver;
use ferrous_resolv_domain::DomainError;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory resolver: answers from a fixed table, fails everything else
/// with the configured error, and counts every call.
pub struct MockAddressResolver {
    records: Mutex<HashMap<String, Ipv4Addr>>,
    failure: DomainError,
    calls: AtomicUsize,
}

impl MockAddressResolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(HashMap::new()),
            failure: DomainError::QueryTimeout {
                server: "192.0.2.53:53".to_string(),
            },
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing_with(failure: DomainError) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(HashMap::new()),
            failure,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn with_record(self: Arc<Self>, host: &str, addr: Ipv4Addr) -> Arc<Self> {
        self.records
            .lock()
            .unwrap()
            .insert(host.to_string(), addr);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressResolver for MockAddressResolver {
    fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .unwrap()
            .get(host)
            .copied()
            .ok_or_else(|| self.failure.clone())
    }
}
