use ferrous_resolv_domain::DomainError;
use thiserror::Error;

pub const EAI_FAMILY: i32 = 1;
pub const EAI_FAIL: i32 = 4;
pub const EAI_NONAME: i32 = 8;
pub const EAI_SERVICE: i32 = 9;

pub const HOST_NOT_FOUND: i32 = 1;
pub const NO_RECOVERY: i32 = 3;

/// Failures of the address-info entry point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrInfoError {
    #[error("name or service not known")]
    NoName,

    #[error("non-recoverable failure")]
    Fail,

    #[error("ai_family not supported")]
    Family,

    #[error("service not supported")]
    Service,
}

impl AddrInfoError {
    pub const fn code(self) -> i32 {
        match self {
            AddrInfoError::NoName => EAI_NONAME,
            AddrInfoError::Fail => EAI_FAIL,
            AddrInfoError::Family => EAI_FAMILY,
            AddrInfoError::Service => EAI_SERVICE,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            EAI_NONAME => Some(AddrInfoError::NoName),
            EAI_FAIL => Some(AddrInfoError::Fail),
            EAI_FAMILY => Some(AddrInfoError::Family),
            EAI_SERVICE => Some(AddrInfoError::Service),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            AddrInfoError::NoName => "name or service not known",
            AddrInfoError::Fail => "non-recoverable failure",
            AddrInfoError::Family => "ai_family not supported",
            AddrInfoError::Service => "service not supported",
        }
    }
}

impl From<&DomainError> for AddrInfoError {
    fn from(error: &DomainError) -> Self {
        if error.is_configuration_error() {
            AddrInfoError::Fail
        } else {
            AddrInfoError::NoName
        }
    }
}

/// Fixed text for an address-info status code, `0` included.
pub fn gai_strerror(code: i32) -> &'static str {
    match code {
        0 => "success",
        other => AddrInfoError::from_code(other)
            .map(AddrInfoError::message)
            .unwrap_or("unknown error"),
    }
}

/// Failures of the legacy host-entry entry point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLookupError {
    #[error("host not found")]
    HostNotFound,

    #[error("non-recoverable name server error")]
    NoRecovery,
}

impl HostLookupError {
    /// Conventional `h_errno` value.
    pub const fn h_errno(self) -> i32 {
        match self {
            HostLookupError::HostNotFound => HOST_NOT_FOUND,
            HostLookupError::NoRecovery => NO_RECOVERY,
        }
    }
}

impl From<&DomainError> for HostLookupError {
    fn from(error: &DomainError) -> Self {
        if error.is_configuration_error() {
            HostLookupError::NoRecovery
        } else {
            HostLookupError::HostNotFound
        }
    }
}
