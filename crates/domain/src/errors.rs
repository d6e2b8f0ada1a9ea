use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("No upstream DNS servers configured")]
    NoUpstreamServers,

    #[error("Invalid upstream address: {0}")]
    InvalidUpstreamAddress(String),

    #[error("Domain not found (NXDOMAIN)")]
    NameNotFound,

    #[error("Upstream answered with {0}")]
    UpstreamFailure(String),

    #[error("Transport failure talking to {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Malformed record after rewrite: {0}")]
    MalformedRecord(String),
}

impl DomainError {
    /// The only outcome that warrants a second, stripped qualification attempt.
    pub fn is_name_not_found(&self) -> bool {
        matches!(self, DomainError::NameNotFound)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, DomainError::Transport { .. })
    }

    pub fn transport(server: impl ToString, reason: impl ToString) -> Self {
        DomainError::Transport {
            server: server.to_string(),
            reason: reason.to_string(),
        }
    }
}
