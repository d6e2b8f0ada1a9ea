use dnsproxy_domain::{CliOverrides, Config, ResolverConfig};
use dnsproxy_infrastructure::system::ResolvConfReader;
use tracing::{info, warn};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Read the system resolver configuration once and lay the TOML overrides
/// over it. The result is immutable for the life of the process.
pub async fn load_resolver_config(config: &Config) -> ResolverConfig {
    let snapshot = ResolvConfReader::new(&config.upstream.resolv_conf)
        .read()
        .await;
    let resolver = config.upstream.apply_overrides(snapshot);

    for (index, server) in resolver.servers.iter().enumerate() {
        info!(index, server = %server, port = resolver.port, "Loaded nameserver");
    }
    for (index, domain) in resolver.search_domains.iter().enumerate() {
        info!(index, search_domain = %domain, "Loaded search domain");
    }

    if resolver.servers.is_empty() {
        warn!(
            path = %config.upstream.resolv_conf,
            "No nameservers configured, every query will get an empty answer"
        );
    } else if resolver.servers.len() > 1 {
        warn!(
            using = ?resolver.primary_server(),
            ignored = resolver.servers.len() - 1,
            "Only the first nameserver is used"
        );
    }
    if resolver.search_domains.len() > 1 {
        warn!(
            using = ?resolver.primary_search_domain(),
            ignored = resolver.search_domains.len() - 1,
            "Only the first search domain is used"
        );
    }

    resolver
}
