use super::error::WireError;
use super::packet::{
    PacketBuf, CLASS_IN, FLAGS_RECURSION_DESIRED, HEADER_LEN, MAX_LABEL_LEN, MAX_PACKET_SIZE,
    TYPE_A,
};

/// Encodes a recursive A/IN query for `host` into `buf`.
///
/// Every label is validated and the total size checked before the first byte
/// is written, so on error `buf` is left empty. A single trailing dot is
/// accepted as the fully-qualified spelling of the same name. No compression
/// is emitted.
///
/// Returns the encoded length.
pub fn encode_query(host: &str, id: u16, buf: &mut PacketBuf) -> Result<usize, WireError> {
    buf.clear();

    let name = host.strip_suffix('.').unwrap_or(host);

    let mut name_len = 1; // root terminator
    for label in name.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(WireError::InvalidLabel(label.len()));
        }
        name_len += 1 + label.len();
    }

    let total = HEADER_LEN + name_len + 4;
    if total > MAX_PACKET_SIZE {
        return Err(WireError::PacketTooLarge(MAX_PACKET_SIZE));
    }

    let mut ok = buf.push_u16(id)
        && buf.push_u16(FLAGS_RECURSION_DESIRED)
        && buf.push_u16(1) // QDCOUNT
        && buf.push_u16(0) // ANCOUNT
        && buf.push_u16(0) // NSCOUNT
        && buf.push_u16(0); // ARCOUNT

    for label in name.split('.') {
        ok = ok && buf.push(label.len() as u8) && buf.extend(label.as_bytes());
    }

    ok = ok && buf.push(0) && buf.push_u16(TYPE_A) && buf.push_u16(CLASS_IN);

    if !ok {
        buf.clear();
        return Err(WireError::PacketTooLarge(MAX_PACKET_SIZE));
    }

    debug_assert_eq!(buf.len(), total);
    Ok(buf.len())
}
