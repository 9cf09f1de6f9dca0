use adfilter_dns_domain::CliOverrides;
use clap::Parser;
use tracing::info;

mod bootstrap;
mod di;
mod report;
mod server;

#[derive(Parser)]
#[command(name = "adfilter-dns")]
#[command(version)]
#[command(about = "DNS validation server for AdGuard-style domain blocklists")]
struct Cli {
    /// Path to the AdGuard filter file (`||domain^` rules)
    #[arg(value_name = "FILTER_FILE")]
    filter_file: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Resolve a fixed set of sample domains and exit without opening a socket
    #[arg(long)]
    test: bool,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.host.clone(),
        filter_file: cli.filter_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    info!("Starting AdFilter DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config);

    if cli.test {
        self_test::run(&services, cli.json)?;
        return Ok(());
    }

    server::run_dns_server(&config, &services, cli.json).await
}
