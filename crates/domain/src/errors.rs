use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No DNS server configured")]
    NoNameserver,

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Failed to create UDP socket: {0}")]
    SocketCreate(String),

    #[error("Failed to send DNS query to {server}: {reason}")]
    Send { server: String, reason: String },

    #[error("Failed to receive DNS response from {server}: {reason}")]
    Receive { server: String, reason: String },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),
}

impl DomainError {
    /// Socket-level failures: nothing came back, or the socket itself broke.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::SocketCreate(_)
                | DomainError::Send { .. }
                | DomainError::Receive { .. }
                | DomainError::QueryTimeout { .. }
        )
    }

    pub fn is_protocol_error(&self) -> bool {
        matches!(self, DomainError::InvalidDnsResponse(_))
    }

    /// Failures that no amount of retrying fixes until the host is reconfigured.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, DomainError::NoNameserver)
    }
}
