#![allow(dead_code)]
use ferrous_resolv_application::ports::NameserverSource;
use ferrous_resolv_infrastructure::dns::{
    DatagramConnector, DatagramSocket, SystemDatagramConnector,
};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub struct FixedNameserver(pub Option<Ipv4Addr>);

impl FixedNameserver {
    pub fn localhost() -> Arc<Self> {
        Arc::new(Self(Some(Ipv4Addr::LOCALHOST)))
    }

    pub fn unset() -> Arc<Self> {
        Arc::new(Self(None))
    }

    pub fn all_zeros() -> Arc<Self> {
        Arc::new(Self(Some(Ipv4Addr::UNSPECIFIED)))
    }
}

impl NameserverSource for FixedNameserver {
    fn nameserver(&self) -> Option<Ipv4Addr> {
        self.0
    }

    fn source_name(&self) -> &'static str {
        "test"
    }
}

/// Wraps the system connector and keeps count of opened and still-open sockets.
pub struct CountingConnector {
    inner: SystemDatagramConnector,
    opened: AtomicUsize,
    live: Arc<AtomicUsize>,
}

impl CountingConnector {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: SystemDatagramConnector::with_bind_addr(Ipv4Addr::LOCALHOST),
            opened: AtomicUsize::new(0),
            live: Arc::new(AtomicUsize::new(0)),
        })
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl DatagramConnector for CountingConnector {
    fn open(&self) -> io::Result<Box<dyn DatagramSocket>> {
        let inner = self.inner.open()?;
        self.opened.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(CountedSocket {
            inner,
            live: self.live.clone(),
        }))
    }
}

struct CountedSocket {
    inner: Box<dyn DatagramSocket>,
    live: Arc<AtomicUsize>,
}

impl DatagramSocket for CountedSocket {
    fn send_to(&self, buf: &[u8], target: SocketAddrV4) -> io::Result<usize> {
        self.inner.send_to(buf, target)
    }

    fn recv_from(&self, buf: &mut [u8], timeout: Duration) -> io::Result<(usize, SocketAddr)> {
        self.inner.recv_from(buf, timeout)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }
}

impl Drop for CountedSocket {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Hand-assembled DNS responses.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Vec<u8>>,
    answers: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x8180,
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags = (self.flags & 0xFFF0) | (rcode as u16 & 0x000F);
        self
    }

    pub fn question(mut self, name: &str) -> Self {
        let mut q = encode_name(name);
        q.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        self.questions.push(q);
        self
    }

    /// Answer whose owner name is a compression pointer to `pointer`.
    pub fn answer_ptr(self, pointer: u16, rtype: u16, rclass: u16, rdata: &[u8]) -> Self {
        let name = (0xC000 | pointer).to_be_bytes().to_vec();
        self.answer_raw(name, rtype, rclass, rdata)
    }

    pub fn answer_a(self, name: &str, addr: Ipv4Addr) -> Self {
        self.answer_raw(encode_name(name), 1, 1, &addr.octets())
    }

    pub fn answer_raw(mut self, name: Vec<u8>, rtype: u16, rclass: u16, rdata: &[u8]) -> Self {
        let mut rr = name;
        rr.extend_from_slice(&rtype.to_be_bytes());
        rr.extend_from_slice(&rclass.to_be_bytes());
        rr.extend_from_slice(&60u32.to_be_bytes());
        rr.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        rr.extend_from_slice(rdata);
        self.answers.push(rr);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut msg = Vec::with_capacity(512);
        msg.extend_from_slice(&self.id.to_be_bytes());
        msg.extend_from_slice(&self.flags.to_be_bytes());
        msg.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        msg.extend_from_slice(&(self.answers.len() as u16).to_be_bytes());
        msg.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        for q in &self.questions {
            msg.extend_from_slice(q);
        }
        for a in &self.answers {
            msg.extend_from_slice(a);
        }
        msg
    }
}

fn encode_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Reads the uncompressed question name that starts right after the header.
pub fn decode_question_name(msg: &[u8]) -> Vec<String> {
    let mut labels = Vec::new();
    let mut pos = 12;
    while msg[pos] != 0 {
        let len = msg[pos] as usize;
        labels.push(String::from_utf8(msg[pos + 1..pos + 1 + len].to_vec()).unwrap());
        pos += 1 + len;
    }
    labels
}
