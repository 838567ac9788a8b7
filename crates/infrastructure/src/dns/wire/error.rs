use ferrous_resolv_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("message too short: {len} bytes")]
    Truncated { len: usize },

    #[error("transaction id mismatch: expected {expected:#06x}, got {actual:#06x}")]
    IdMismatch { expected: u16, actual: u16 },

    #[error("server returned response code {0}")]
    ServerFailure(u8),

    #[error("label length {0} outside 1..=63")]
    InvalidLabel(usize),

    #[error("encoded query exceeds {0} bytes")]
    PacketTooLarge(usize),

    #[error("name has more than {0} labels")]
    NameTooLong(usize),

    #[error("read past end of message at offset {0}")]
    OutOfBounds(usize),

    #[error("no A record in answer section")]
    NoAddress,
}

impl From<WireError> for DomainError {
    fn from(error: WireError) -> Self {
        match error {
            WireError::InvalidLabel(_) | WireError::PacketTooLarge(_) => {
                DomainError::InvalidDomainName(error.to_string())
            }
            _ => DomainError::InvalidDnsResponse(error.to_string()),
        }
    }
}
