use super::resolver::ResolverConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Where the system resolver configuration is read from at startup.
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Replaces the nameservers found in `resolv_conf`.
    #[serde(default)]
    pub servers: Option<Vec<String>>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Replaces the search list found in `resolv_conf`.
    #[serde(default)]
    pub search_domains: Option<Vec<String>>,
}

impl UpstreamConfig {
    pub fn apply_overrides(&self, mut snapshot: ResolverConfig) -> ResolverConfig {
        if let Some(servers) = &self.servers {
            snapshot.servers = servers.clone();
        }
        if let Some(port) = self.port {
            snapshot.port = port;
        }
        if let Some(search) = &self.search_domains {
            snapshot.search_domains = search.clone();
        }
        snapshot
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            query_timeout_ms: default_query_timeout_ms(),
            servers: None,
            port: None,
            search_domains: None,
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_query_timeout_ms() -> u64 {
    2000
}
