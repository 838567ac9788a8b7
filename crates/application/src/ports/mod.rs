mod address_resolver;
mod nameserver_source;

pub use address_resolver::AddressResolver;
pub use nameserver_source::NameserverSource;
