/// Largest message exchanged over UDP without EDNS(0).
pub const MAX_PACKET_SIZE: usize = 512;
pub const HEADER_LEN: usize = 12;
pub const MAX_LABEL_LEN: usize = 63;

pub const FLAGS_RECURSION_DESIRED: u16 = 0x0100;
pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

/// Fixed-capacity DNS message buffer with an explicit fill length.
#[derive(Clone)]
pub struct PacketBuf {
    data: [u8; MAX_PACKET_SIZE],
    len: usize,
}

impl PacketBuf {
    pub fn new() -> Self {
        Self {
            data: [0u8; MAX_PACKET_SIZE],
            len: 0,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn remaining(&self) -> usize {
        MAX_PACKET_SIZE - self.len
    }

    /// Whole backing array, for receiving a datagram; follow with `set_len`.
    pub fn capacity_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn set_len(&mut self, len: usize) {
        self.len = len.min(MAX_PACKET_SIZE);
    }

    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.len == MAX_PACKET_SIZE {
            return false;
        }
        self.data[self.len] = byte;
        self.len += 1;
        true
    }

    pub(crate) fn push_u16(&mut self, value: u16) -> bool {
        self.extend(&value.to_be_bytes())
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) -> bool {
        if bytes.len() > self.remaining() {
            return false;
        }
        self.data[self.len..self.len + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len();
        true
    }
}

impl Default for PacketBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PacketBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PacketBuf").field("len", &self.len).finish()
    }
}
