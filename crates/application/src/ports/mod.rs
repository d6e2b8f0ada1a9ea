mod upstream_transport;

pub use upstream_transport::UpstreamTransport;

// Re-export for convenience
pub use dnsproxy_domain::DnsQuery;
