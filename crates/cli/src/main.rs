use clap::Parser;
use custom_dns_domain::CliOverrides;
use custom_dns_infrastructure::dns::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "custom-dns")]
#[command(version)]
#[command(about = "Authoritative DNS server for custom A, AAAA and TXT records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind,
        database_path: cli.database,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting custom-dns v{}", env!("CARGO_PKG_VERSION"));
    info!(
        dns_port = config.server.dns_port,
        web_port = config.server.web_port,
        store = ?config.store.kind,
        unanswered_rcode = ?config.dns.unanswered_rcode,
        "Configuration loaded"
    );

    let store = bootstrap::init_store(&config.store).await?;
    let use_cases = di::UseCases::new(store);

    let dns_addr = config.server.dns_socket_addr()?;
    let web_addr = config.server.web_socket_addr()?;

    let dns_handler = DnsServerHandler::new(use_cases.resolve.clone(), config.dns.unanswered_rcode);

    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler).await {
            error!(error = %e, "DNS server error");
        }
    });

    server::start_web_server(web_addr, use_cases.app_state()).await?;

    info!("Server shutdown complete");
    Ok(())
}
