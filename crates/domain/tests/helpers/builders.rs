#![allow(dead_code)]
use dnsproxy_domain::ResolverConfig;

pub struct ResolverConfigBuilder {
    servers: Vec<String>,
    port: u16,
    search_domains: Vec<String>,
}

impl ResolverConfigBuilder {
    pub fn new() -> Self {
        Self {
            servers: vec!["10.96.0.10".to_string()],
            port: 53,
            search_domains: vec!["cluster.local".to_string()],
        }
    }

    pub fn kubernetes() -> Self {
        Self::new().search_domains(&[
            "default.svc.cluster.local",
            "svc.cluster.local",
            "cluster.local",
        ])
    }

    pub fn servers(mut self, servers: &[&str]) -> Self {
        self.servers = servers.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn no_servers(mut self) -> Self {
        self.servers.clear();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn search_domains(mut self, domains: &[&str]) -> Self {
        self.search_domains = domains.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn no_search_domains(mut self) -> Self {
        self.search_domains.clear();
        self
    }

    pub fn build(self) -> ResolverConfig {
        ResolverConfig::new(self.servers, self.port, self.search_domains)
    }
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
