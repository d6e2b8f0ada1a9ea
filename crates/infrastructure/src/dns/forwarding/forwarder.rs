use super::message_builder::MessageBuilder;
use super::response_parser::ResponseParser;
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use dnsproxy_application::ports::UpstreamTransport;
use dnsproxy_domain::{DomainError, RecordType};
use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Sends one recursive query per exchange over plain UDP.
pub struct DnsForwarder {
    timeout: Duration,
}

impl DnsForwarder {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl UpstreamTransport for DnsForwarder {
    async fn exchange(
        &self,
        server: &str,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Message, DomainError> {
        let server_addr: SocketAddr = server
            .parse()
            .map_err(|_| DomainError::InvalidUpstreamAddress(server.to_string()))?;

        let (id, request_bytes) = MessageBuilder::build_query_with_id(domain, &record_type)?;
        debug!(server = %server_addr, domain = %domain, id, "Forwarding query");

        let transport = UdpTransport::new(server_addr);
        let response_bytes = transport.send(&request_bytes, self.timeout).await?;

        ResponseParser::parse(server, &response_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unparseable_server_is_rejected_before_sending() {
        let forwarder = DnsForwarder::new(Duration::from_millis(200));
        let result = forwarder
            .exchange("not-an-address", "example.com.", RecordType::A)
            .await;
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvalidUpstreamAddress("not-an-address".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_port_is_rejected() {
        let forwarder = DnsForwarder::new(Duration::from_millis(200));
        let result = forwarder
            .exchange("10.96.0.10", "example.com.", RecordType::A)
            .await;
        assert!(matches!(result, Err(DomainError::InvalidUpstreamAddress(_))));
    }
}
