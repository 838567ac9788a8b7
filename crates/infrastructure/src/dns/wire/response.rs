use super::error::WireError;
use super::name::skip_name;
use super::packet::{CLASS_IN, HEADER_LEN, TYPE_A};
use std::net::Ipv4Addr;

const RCODE_MASK: u16 = 0x000F;

/// Fixed part of an answer record after its name: TYPE, CLASS, TTL, RDLENGTH.
const RR_FIXED_LEN: usize = 10;

fn read_u16(msg: &[u8], pos: usize) -> Result<u16, WireError> {
    match msg.get(pos..pos + 2) {
        Some(bytes) => Ok(u16::from_be_bytes([bytes[0], bytes[1]])),
        None => Err(WireError::OutOfBounds(pos + 2)),
    }
}

/// Transaction ID of a message, if it is long enough to carry one.
pub fn response_id(msg: &[u8]) -> Option<u16> {
    read_u16(msg, 0).ok()
}

/// Extracts the first A/IN address from a DNS response.
///
/// Rejects short messages, foreign transaction IDs and non-zero response
/// codes before looking at any record. Answers of other types are skipped by
/// their declared length without being interpreted.
pub fn parse_a_response(msg: &[u8], expected_id: u16) -> Result<Ipv4Addr, WireError> {
    if msg.len() < HEADER_LEN {
        return Err(WireError::Truncated { len: msg.len() });
    }

    let id = read_u16(msg, 0)?;
    if id != expected_id {
        return Err(WireError::IdMismatch {
            expected: expected_id,
            actual: id,
        });
    }

    let flags = read_u16(msg, 2)?;
    let rcode = (flags & RCODE_MASK) as u8;
    if rcode != 0 {
        return Err(WireError::ServerFailure(rcode));
    }

    let qdcount = read_u16(msg, 4)?;
    let ancount = read_u16(msg, 6)?;

    let mut pos = HEADER_LEN;

    for _ in 0..qdcount {
        skip_name(msg, &mut pos)?;
        if pos + 4 > msg.len() {
            return Err(WireError::OutOfBounds(pos + 4));
        }
        pos += 4; // QTYPE + QCLASS
    }

    for _ in 0..ancount {
        skip_name(msg, &mut pos)?;
        if pos + RR_FIXED_LEN > msg.len() {
            return Err(WireError::OutOfBounds(pos + RR_FIXED_LEN));
        }

        let rtype = read_u16(msg, pos)?;
        let rclass = read_u16(msg, pos + 2)?;
        pos += 8; // TYPE + CLASS + TTL
        let rdlen = read_u16(msg, pos)? as usize;
        pos += 2;

        if pos + rdlen > msg.len() {
            return Err(WireError::OutOfBounds(pos + rdlen));
        }

        if rtype == TYPE_A && rclass == CLASS_IN && rdlen == 4 {
            return Ok(Ipv4Addr::new(
                msg[pos],
                msg[pos + 1],
                msg[pos + 2],
                msg[pos + 3],
            ));
        }

        pos += rdlen;
    }

    Err(WireError::NoAddress)
}
