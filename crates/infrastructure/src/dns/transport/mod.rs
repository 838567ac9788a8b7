pub mod query_id;
pub mod socket;
pub mod udp;

pub use query_id::QueryIdGenerator;
pub use socket::{DatagramConnector, DatagramSocket, SystemDatagramConnector};
pub use udp::UdpStubResolver;

/// Standard DNS server port.
pub const DNS_PORT: u16 = 53;
