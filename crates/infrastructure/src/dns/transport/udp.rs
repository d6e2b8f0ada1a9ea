//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). A truncated reply is handed back
//! unchanged; there is no TCP fallback.

use dnsproxy_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn transport_error(&self, reason: impl ToString) -> DomainError {
        DomainError::transport(self.server_addr, reason)
    }

    /// Send one query and wait for the reply carrying the same id.
    ///
    /// The whole exchange, including any discarded stale replies, is bounded
    /// by `timeout`.
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("Failed to bind UDP socket: {}", e)))?;

        // Connected socket: the kernel drops datagrams from any other source
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.transport_error(format!("Failed to connect UDP socket: {}", e)))?;

        let exchange = async {
            let bytes_sent = socket
                .send(message_bytes)
                .await
                .map_err(|e| self.transport_error(format!("Failed to send UDP query: {}", e)))?;

            debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

            let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
            loop {
                let bytes_received = socket.recv(&mut recv_buf).await.map_err(|e| {
                    self.transport_error(format!("Failed to receive UDP response: {}", e))
                })?;

                let response = &recv_buf[..bytes_received];
                match validate_response_id(message_bytes, response, self.server_addr) {
                    Ok(()) => {
                        recv_buf.truncate(bytes_received);
                        return Ok::<_, DomainError>(recv_buf);
                    }
                    Err(e) => {
                        // A stale reply to an earlier query; keep waiting
                        warn!(server = %self.server_addr, error = %e, "Discarding UDP response");
                    }
                }
            }
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| {
                self.transport_error(format!("Timed out after {}ms", timeout.as_millis()))
            })??;

        debug!(
            server = %self.server_addr,
            bytes_received = bytes.len(),
            "UDP response received"
        );

        Ok(bytes)
    }
}

/// Check that a reply carries the id of the query it answers.
fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::transport(server, "DNS message too short to carry an id"));
    }

    let query_id = u16::from_be_bytes([query[0], query[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);
    if query_id != response_id {
        return Err(DomainError::transport(
            server,
            format!("DNS id mismatch: sent {}, received {}", query_id, response_id),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
