use super::AnswerRewriter;
use crate::ports::UpstreamTransport;
use dnsproxy_domain::{DomainError, RecordType, ResolverConfig};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use std::sync::Arc;
use tracing::{debug, error, info};

/// One upstream round trip plus classification of its outcome.
///
/// `Ok(records)` carries the answer section with owner names already
/// rewritten back to the client's name. NXDOMAIN is reported as
/// `DomainError::NameNotFound` so the caller can decide to retry.
pub struct UpstreamExchanger {
    config: Arc<ResolverConfig>,
    transport: Arc<dyn UpstreamTransport>,
}

impl UpstreamExchanger {
    pub fn new(config: Arc<ResolverConfig>, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self { config, transport }
    }

    pub async fn exchange(
        &self,
        qualified_domain: &str,
        record_type: RecordType,
        original_name: &str,
    ) -> Result<Vec<Record>, DomainError> {
        info!(domain = %qualified_domain, record_type = %record_type, "Received DNS query");

        let server = self.config.upstream_address().inspect_err(|e| {
            error!(error = %e, domain = %qualified_domain, "Cannot pick an upstream server");
        })?;

        info!(domain = %qualified_domain, server = %server, "Exchanging message with upstream");

        let response = self
            .transport
            .exchange(&server, qualified_domain, record_type)
            .await
            .inspect_err(|e| {
                error!(
                    error = %e,
                    domain = %qualified_domain,
                    server = %server,
                    "Upstream exchange failed"
                );
            })?;

        match response.response_code() {
            ResponseCode::NoError => {}
            ResponseCode::NXDomain => {
                debug!(domain = %qualified_domain, "Upstream reported NXDOMAIN");
                return Err(DomainError::NameNotFound);
            }
            rcode => {
                error!(
                    name = %original_name,
                    record_type = %record_type,
                    domain = %qualified_domain,
                    rcode = ?rcode,
                    "Upstream failed to answer"
                );
                return Err(DomainError::UpstreamFailure(format!("{:?}", rcode)));
            }
        }

        // All or nothing: one bad record fails the whole exchange.
        response
            .answers()
            .iter()
            .map(|record| {
                info!(response = %record, "Upstream answer");
                AnswerRewriter::rewrite(original_name, qualified_domain, record.clone())
            })
            .collect()
    }
}
