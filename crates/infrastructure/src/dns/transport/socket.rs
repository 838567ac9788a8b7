//! Blocking UDP datagram primitive used by the stub resolver.
//!
//! The resolver only talks to these traits, so tests can swap in sockets that
//! count opens and closes or never answer.

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::time::Duration;
use tracing::debug;

pub trait DatagramSocket: Send {
    fn send_to(&self, buf: &[u8], target: SocketAddrV4) -> io::Result<usize>;

    /// Waits at most `timeout` (non-zero) for one datagram.
    fn recv_from(&self, buf: &mut [u8], timeout: Duration) -> io::Result<(usize, SocketAddr)>;

    fn local_addr(&self) -> io::Result<SocketAddr>;
}

/// Opens a fresh socket per lookup. The socket is closed when the box drops.
pub trait DatagramConnector: Send + Sync {
    fn open(&self) -> io::Result<Box<dyn DatagramSocket>>;
}

/// IPv4 UDP sockets from the operating system, bound to an ephemeral port.
#[derive(Debug, Clone, Copy)]
pub struct SystemDatagramConnector {
    bind_addr: Ipv4Addr,
}

impl SystemDatagramConnector {
    pub fn new() -> Self {
        Self {
            bind_addr: Ipv4Addr::UNSPECIFIED,
        }
    }

    pub fn with_bind_addr(bind_addr: Ipv4Addr) -> Self {
        Self { bind_addr }
    }
}

impl Default for SystemDatagramConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl DatagramConnector for SystemDatagramConnector {
    fn open(&self) -> io::Result<Box<dyn DatagramSocket>> {
        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

        let bind_addr = SocketAddr::V4(SocketAddrV4::new(self.bind_addr, 0));
        socket.bind(&bind_addr.into())?;

        let socket: UdpSocket = socket.into();
        debug!(local = ?socket.local_addr().ok(), "UDP socket created");

        Ok(Box::new(SystemDatagramSocket { socket }))
    }
}

struct SystemDatagramSocket {
    socket: UdpSocket,
}

impl DatagramSocket for SystemDatagramSocket {
    fn send_to(&self, buf: &[u8], target: SocketAddrV4) -> io::Result<usize> {
        self.socket.send_to(buf, target)
    }

    fn recv_from(&self, buf: &mut [u8], timeout: Duration) -> io::Result<(usize, SocketAddr)> {
        self.socket.set_read_timeout(Some(timeout))?;
        self.socket.recv_from(buf)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}
