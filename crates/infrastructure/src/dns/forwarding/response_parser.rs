use dnsproxy_domain::DomainError;
use hickory_proto::op::{Message, MessageType};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode an upstream reply. Anything that is not a well-formed
    /// response message counts as a transport failure against `server`.
    pub fn parse(server: &str, response_bytes: &[u8]) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::transport(server, format!("Failed to parse DNS response: {}", e))
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::transport(
                server,
                "Upstream sent a query instead of a response",
            ));
        }

        debug!(
            server = %server,
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(message)
    }
}
