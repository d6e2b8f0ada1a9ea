use clap::Parser;
use dnsproxy_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsproxy")]
#[command(version)]
#[command(about = "dnsproxy - forwarding DNS proxy with search-domain qualification")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Resolver configuration file (resolv.conf format)
    #[arg(long, value_name = "FILE")]
    resolv_conf: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        resolv_conf: cli.resolv_conf,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting dnsproxy v{}", env!("CARGO_PKG_VERSION"));

    let resolver_config = bootstrap::load_resolver_config(&config).await;
    let dns_services = di::DnsServices::new(&config, resolver_config);

    info!(
        upstream = ?dns_services.resolver_config.upstream_address().ok(),
        search_domain = ?dns_services.resolver_config.primary_search_domain(),
        "Resolver configuration ready"
    );

    let dns_addr = config.server.listen_address();
    server::start_dns_server(dns_addr, dns_services.handler).await
}
