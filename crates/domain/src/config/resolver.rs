use crate::DomainError;
use std::net::IpAddr;

pub const DEFAULT_RESOLVER_PORT: u16 = 53;

/// Immutable snapshot of the system resolver configuration.
///
/// Only the first server and the first search domain take part in
/// resolution; the remaining entries are kept so they can be reported at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub servers: Vec<String>,
    pub port: u16,
    pub search_domains: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            port: DEFAULT_RESOLVER_PORT,
            search_domains: Vec::new(),
        }
    }
}

impl ResolverConfig {
    pub fn new(servers: Vec<String>, port: u16, search_domains: Vec<String>) -> Self {
        Self {
            servers,
            port,
            search_domains,
        }
    }

    pub fn primary_server(&self) -> Option<&str> {
        self.servers.first().map(String::as_str)
    }

    pub fn primary_search_domain(&self) -> Option<&str> {
        self.search_domains.first().map(String::as_str)
    }

    /// `host:port` of the upstream every exchange is sent to.
    pub fn upstream_address(&self) -> Result<String, DomainError> {
        let server = self
            .primary_server()
            .ok_or(DomainError::NoUpstreamServers)?;
        Ok(join_host_port(server, self.port))
    }

    /// Parse resolv.conf(5) text.
    ///
    /// `nameserver` entries that are not IP literals are skipped, `domain`
    /// and `search` both replace the search list (last one wins) and every
    /// other directive is ignored. The port is always 53.
    pub fn parse_resolv_conf(contents: &str) -> Self {
        let mut config = Self::default();

        for line in contents.lines() {
            let mut fields = line.split_whitespace();
            let Some(keyword) = fields.next() else {
                continue;
            };
            if keyword.starts_with('#') || keyword.starts_with(';') {
                continue;
            }

            match keyword {
                "nameserver" => {
                    if let Some(server) = fields.next() {
                        if server.parse::<IpAddr>().is_ok() {
                            config.servers.push(server.to_string());
                        }
                    }
                }
                "domain" => {
                    if let Some(domain) = fields.next() {
                        config.search_domains = vec![domain.to_string()];
                    }
                }
                "search" => {
                    config.search_domains = fields.map(str::to_string).collect();
                }
                _ => {}
            }
        }

        config
    }
}

/// Join a host and a port, bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
