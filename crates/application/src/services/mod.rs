mod host_lookup_service;
mod service_port;

pub use host_lookup_service::{parse_numeric_host, HostLookupService};
pub use service_port::service_to_port;
