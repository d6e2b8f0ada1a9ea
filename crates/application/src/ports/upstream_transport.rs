use async_trait::async_trait;
use dnsproxy_domain::{DomainError, RecordType};
use hickory_proto::op::Message;

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Send one recursive query for `domain` to `server` (`host:port`) and
    /// return the decoded response.
    ///
    /// Implementations must give up within a bounded time; a missing,
    /// late or undecodable response is `DomainError::Transport`.
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError>;
}
