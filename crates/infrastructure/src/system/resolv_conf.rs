use dnsproxy_domain::ResolverConfig;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// System resolver configuration reader (reads resolv.conf(5))
pub struct ResolvConfReader {
    path: PathBuf,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file once.
    ///
    /// A missing or unreadable file yields an empty snapshot; every query
    /// then fails with `NoUpstreamServers` instead of the process refusing
    /// to start.
    pub async fn read(&self) -> ResolverConfig {
        match fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let config = ResolverConfig::parse_resolv_conf(&contents);
                debug!(
                    path = %self.path.display(),
                    servers = config.servers.len(),
                    search_domains = config.search_domains.len(),
                    "Loaded resolver configuration"
                );
                config
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Cannot read resolver configuration, starting without upstream servers"
                );
                ResolverConfig::default()
            }
        }
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLV_CONF)
    }
}
