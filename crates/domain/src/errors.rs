use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Failed to load filter file {path}: {reason}")]
    FilterLoad { path: String, reason: String },

    #[error("Failed to bind DNS socket on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("DNS server already started")]
    AlreadyStarted,

    #[error("DNS server was stopped and cannot be restarted")]
    ServerStopped,
}

/// Why a raw datagram could not be read as a DNS query.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Packet too short for DNS header: {0} bytes")]
    HeaderTooShort(usize),

    #[error("Question section truncated")]
    Truncated,

    #[error("Compressed or extended label type in question name: 0x{0:02x}")]
    UnsupportedLabel(u8),

    #[error("Non-ASCII byte in question label")]
    NonAsciiLabel,
}
