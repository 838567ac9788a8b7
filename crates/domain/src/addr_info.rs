//! Address-info result structures handed to callers of the compatibility layer.
//!
//! Raw family and socket-type codes are translated through `socket2` so the
//! numeric values always match the host's `AF_*` / `SOCK_*` constants.

use socket2::{Domain, Type};
use std::net::{Ipv4Addr, SocketAddrV4};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    #[default]
    Unspecified,
    Inet,
    Inet6,
    Other(i32),
}

impl AddressFamily {
    pub fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            AddressFamily::Unspecified
        } else if raw == i32::from(Domain::IPV4) {
            AddressFamily::Inet
        } else if raw == i32::from(Domain::IPV6) {
            AddressFamily::Inet6
        } else {
            AddressFamily::Other(raw)
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            AddressFamily::Unspecified => 0,
            AddressFamily::Inet => i32::from(Domain::IPV4),
            AddressFamily::Inet6 => i32::from(Domain::IPV6),
            AddressFamily::Other(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AddressFamily::Unspecified => "AF_UNSPEC",
            AddressFamily::Inet => "AF_INET",
            AddressFamily::Inet6 => "AF_INET6",
            AddressFamily::Other(_) => "AF_OTHER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SocketType {
    #[default]
    Any,
    Stream,
    Datagram,
    Other(i32),
}

impl SocketType {
    pub fn from_raw(raw: i32) -> Self {
        if raw == 0 {
            SocketType::Any
        } else if raw == i32::from(Type::STREAM) {
            SocketType::Stream
        } else if raw == i32::from(Type::DGRAM) {
            SocketType::Datagram
        } else {
            SocketType::Other(raw)
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            SocketType::Any => 0,
            SocketType::Stream => i32::from(Type::STREAM),
            SocketType::Datagram => i32::from(Type::DGRAM),
            SocketType::Other(raw) => raw,
        }
    }
}

/// Request flags carried in the hints. Only the bits this resolver acts on are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AddrInfoFlags(u32);

impl AddrInfoFlags {
    pub const NONE: AddrInfoFlags = AddrInfoFlags(0);
    pub const PASSIVE: AddrInfoFlags = AddrInfoFlags(0x0001);
    pub const CANONNAME: AddrInfoFlags = AddrInfoFlags(0x0002);

    pub const fn from_bits(bits: u32) -> Self {
        AddrInfoFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: AddrInfoFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AddrInfoFlags {
    type Output = AddrInfoFlags;

    fn bitor(self, rhs: AddrInfoFlags) -> AddrInfoFlags {
        AddrInfoFlags(self.0 | rhs.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddrInfoHints {
    pub flags: AddrInfoFlags,
    pub family: AddressFamily,
    pub socket_type: SocketType,
    pub protocol: i32,
}

impl AddrInfoHints {
    pub fn inet_stream() -> Self {
        Self {
            family: AddressFamily::Inet,
            socket_type: SocketType::Stream,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: AddrInfoFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// One entry of an address-info list.
///
/// Lists produced by this resolver hold at most one entry, but `next` keeps
/// the conventional linked shape so callers can walk them generically.
#[derive(Debug, PartialEq, Eq)]
pub struct AddrInfo {
    pub flags: AddrInfoFlags,
    pub family: AddressFamily,
    pub socket_type: SocketType,
    pub protocol: i32,
    pub addr: SocketAddrV4,
    pub canonical_name: Option<String>,
    pub next: Option<Box<AddrInfo>>,
}

impl AddrInfo {
    pub fn new(addr: SocketAddrV4) -> Self {
        Self {
            flags: AddrInfoFlags::NONE,
            family: AddressFamily::Inet,
            socket_type: SocketType::Any,
            protocol: 0,
            addr,
            canonical_name: None,
            next: None,
        }
    }

    pub fn ip(&self) -> Ipv4Addr {
        *self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn iter(&self) -> AddrInfoIter<'_> {
        AddrInfoIter {
            current: Some(self),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

// Unlink iteratively so arbitrarily long lists never recurse on drop.
impl Drop for AddrInfo {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut entry) = next {
            next = entry.next.take();
        }
    }
}

pub struct AddrInfoIter<'a> {
    current: Option<&'a AddrInfo>,
}

impl<'a> Iterator for AddrInfoIter<'a> {
    type Item = &'a AddrInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        self.current = entry.next.as_deref();
        Some(entry)
    }
}
