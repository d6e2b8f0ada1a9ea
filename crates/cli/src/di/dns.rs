use dnsproxy_application::services::UpstreamExchanger;
use dnsproxy_application::use_cases::HandleDnsQueryUseCase;
use dnsproxy_domain::{Config, ResolverConfig};
use dnsproxy_infrastructure::dns::{DnsForwarder, DnsServerHandler};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub resolver_config: Arc<ResolverConfig>,
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config, resolver_config: ResolverConfig) -> Self {
        let timeout = Duration::from_millis(config.upstream.query_timeout_ms);
        info!(timeout_ms = config.upstream.query_timeout_ms, "Initializing DNS services");

        let resolver_config = Arc::new(resolver_config);
        let forwarder = Arc::new(DnsForwarder::new(timeout));
        let exchanger = UpstreamExchanger::new(Arc::clone(&resolver_config), forwarder);
        let use_case = Arc::new(HandleDnsQueryUseCase::new(
            Arc::clone(&resolver_config),
            exchanger,
        ));

        Self {
            resolver_config,
            handler: DnsServerHandler::new(use_case),
        }
    }
}
