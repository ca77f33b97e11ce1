use thiserror::Error;

/// Why a single SNMP GET did not produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("agent returned error-status {status}")]
    Agent { status: u32 },

    #[error("no such object on agent")]
    NoSuchObject,

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl QueryError {
    /// Transport failures mean nothing came back from the agent; only these
    /// are retried and only these count toward an unreachable host.
    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Timeout | QueryError::Transport(_))
    }
}

/// Errors raised while turning user input into scan targets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    #[error("invalid IP range: {0}")]
    InvalidRange(String),

    #[error("range start {start} is greater than range end {end}")]
    InvertedRange { start: String, end: String },

    #[error("invalid CIDR prefix: {0}")]
    InvalidPrefix(String),
}
