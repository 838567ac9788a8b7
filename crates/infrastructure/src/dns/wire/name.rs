use super::error::WireError;
use super::packet::MAX_LABEL_LEN;

/// Upper bound on labels walked per name; guards against hostile label chains.
pub const MAX_NAME_STEPS: usize = 64;

const POINTER_MASK: u8 = 0xC0;

/// Advances `pos` past one encoded domain name.
///
/// A compression pointer ends the name after exactly two bytes; its target is
/// never read. On error `pos` is left unchanged.
pub fn skip_name(msg: &[u8], pos: &mut usize) -> Result<(), WireError> {
    let mut cursor = *pos;

    for _ in 0..MAX_NAME_STEPS {
        let len_byte = *msg.get(cursor).ok_or(WireError::OutOfBounds(cursor))?;

        if len_byte == 0 {
            *pos = cursor + 1;
            return Ok(());
        }

        if len_byte & POINTER_MASK == POINTER_MASK {
            if cursor + 1 >= msg.len() {
                return Err(WireError::OutOfBounds(cursor + 1));
            }
            *pos = cursor + 2;
            return Ok(());
        }

        let label_len = len_byte as usize;
        if label_len > MAX_LABEL_LEN {
            return Err(WireError::InvalidLabel(label_len));
        }
        if cursor + 1 + label_len > msg.len() {
            return Err(WireError::OutOfBounds(cursor + 1 + label_len));
        }
        cursor += 1 + label_len;
    }

    Err(WireError::NameTooLong(MAX_NAME_STEPS))
}
