pub mod transport;
pub mod wire;

pub use transport::{
    DatagramConnector, DatagramSocket, QueryIdGenerator, SystemDatagramConnector,
    UdpStubResolver,
};
pub use wire::{encode_query, parse_a_response, skip_name, PacketBuf, WireError};
