#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use super::builders::ResponseBuilder;

#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Reply with one A record.
    Answer(Ipv4Addr),
    /// Never reply.
    Silent,
    /// Reply with the given response code and an A record anyway.
    Rcode(u8),
    /// First a reply carrying the wrong transaction ID, then the real one.
    StaleThenAnswer { stale: Ipv4Addr, real: Ipv4Addr },
    /// First a forged reply from a different port, then the real one.
    SpoofThenAnswer { spoofed: Ipv4Addr, real: Ipv4Addr },
}

/// Blocking UDP DNS server on 127.0.0.1 running in a background thread.
pub struct MockDnsServer {
    addr: SocketAddrV4,
    shutdown: Arc<AtomicBool>,
    queries: Arc<AtomicUsize>,
    handle: Option<JoinHandle<()>>,
}

impl MockDnsServer {
    pub fn start(behavior: MockBehavior) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0))?;
        socket.set_read_timeout(Some(Duration::from_millis(20)))?;
        let addr = match socket.local_addr()? {
            SocketAddr::V4(v4) => v4,
            SocketAddr::V6(_) => unreachable!("bound to an IPv4 address"),
        };

        let shutdown = Arc::new(AtomicBool::new(false));
        let queries = Arc::new(AtomicUsize::new(0));

        let handle = {
            let shutdown = shutdown.clone();
            let queries = queries.clone();
            std::thread::spawn(move || {
                let mut buf = [0u8; 512];
                while !shutdown.load(Ordering::SeqCst) {
                    let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                        continue;
                    };
                    queries.fetch_add(1, Ordering::SeqCst);
                    Self::respond(&socket, &buf[..len], peer, behavior);
                }
            })
        };

        Ok(Self {
            addr,
            shutdown,
            queries,
            handle: Some(handle),
        })
    }

    pub fn addr(&self) -> SocketAddrV4 {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn respond(socket: &UdpSocket, query: &[u8], peer: SocketAddr, behavior: MockBehavior) {
        if query.len() < 12 {
            return;
        }
        let id = u16::from_be_bytes([query[0], query[1]]);

        let reply = |id: u16, addr: Ipv4Addr, rcode: u8| {
            ResponseBuilder::new(id)
                .rcode(rcode)
                .question("mock.test")
                .answer_ptr(12, 1, 1, &addr.octets())
                .build()
        };

        match behavior {
            MockBehavior::Answer(addr) => {
                let _ = socket.send_to(&reply(id, addr, 0), peer);
            }
            MockBehavior::Silent => {}
            MockBehavior::Rcode(rcode) => {
                let _ = socket.send_to(&reply(id, Ipv4Addr::new(6, 6, 6, 6), rcode), peer);
            }
            MockBehavior::StaleThenAnswer { stale, real } => {
                let _ = socket.send_to(&reply(id.wrapping_sub(1), stale, 0), peer);
                let _ = socket.send_to(&reply(id, real, 0), peer);
            }
            MockBehavior::SpoofThenAnswer { spoofed, real } => {
                if let Ok(forger) = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0)) {
                    let _ = forger.send_to(&reply(id, spoofed, 0), peer);
                }
                std::thread::sleep(Duration::from_millis(20));
                let _ = socket.send_to(&reply(id, real, 0), peer);
            }
        }
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        self.stop();
    }
}
