use crate::addr_info::AddressFamily;
use std::net::Ipv4Addr;

/// Legacy host-entry record: one canonical name, no aliases, one IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub aliases: Vec<String>,
    pub addr_type: AddressFamily,
    pub length: usize,
    pub addr_list: Vec<Ipv4Addr>,
}

impl HostEntry {
    pub fn new(name: &str, addr: Ipv4Addr) -> Self {
        Self {
            name: name.to_string(),
            aliases: Vec::new(),
            addr_type: AddressFamily::Inet,
            length: addr.octets().len(),
            addr_list: vec![addr],
        }
    }

    pub fn first_addr(&self) -> Option<Ipv4Addr> {
        self.addr_list.first().copied()
    }
}

/// Caller-owned storage for the legacy host-entry lookup.
///
/// Each lookup overwrites whatever the slot held, so at most one result is
/// live per slot. A failed lookup leaves the slot empty.
#[derive(Debug, Default)]
pub struct HostEntrySlot {
    entry: Option<HostEntry>,
}

impl HostEntrySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&HostEntry> {
        self.entry.as_ref()
    }

    pub fn store(&mut self, name: &str, addr: Ipv4Addr) -> &HostEntry {
        self.entry.insert(HostEntry::new(name, addr))
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}
