use anyhow::Context;
use clap::Parser;
use ironzone_domain::CliOverrides;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod jobs;
mod server;

#[derive(Parser)]
#[command(name = "ironzone")]
#[command(version)]
#[command(about = "Ironzone - authoritative and recursive DNS resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Zone file this instance is authoritative for
    #[arg(short = 'z', long, value_name = "FILE")]
    zone: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Root server IPv4 address recursion starts from
    #[arg(short = 'r', long)]
    root: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        zone_path: cli.zone,
        root_server: cli.root,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ironzone v{}", env!("CARGO_PKG_VERSION"));
    info!(
        zone = ?config.zone.path,
        root_server = %config.recursion.root_server,
        max_hops = config.recursion.max_hops,
        query_timeout_ms = config.recursion.query_timeout_ms,
        "Configuration loaded"
    );

    let dns_services = di::DnsServices::new(&config)?;

    if config.cache.compaction_interval_secs > 0 {
        Arc::new(jobs::CacheCompactionJob::new(
            dns_services.cache_maintenance.clone(),
            config.cache.compaction_interval_secs,
        ))
        .start();
    }

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind_address))?;
    let dns_addr = SocketAddr::new(bind_ip, config.server.dns_port);

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_services.handler) => result?,
        _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
    }

    info!(
        cached_responses = dns_services.cache.len(),
        "Server shutdown complete"
    );
    Ok(())
}
