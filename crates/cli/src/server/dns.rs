use crate::di::DnsServices;
use crate::report::print_stats;
use adfilter_dns_domain::Config;
use adfilter_dns_infrastructure::dns::UdpDnsServer;
use tracing::info;

pub async fn run_dns_server(
    config: &Config,
    services: &DnsServices,
    json: bool,
) -> anyhow::Result<()> {
    let server = UdpDnsServer::new(config.server.clone(), services.handler_use_case.clone());
    let local_addr = server.start().await?;

    println!("DNS validation server listening on {local_addr}");
    println!(
        "Try: dig @{} -p {} ad.kakao.com",
        local_addr.ip(),
        local_addr.port()
    );
    println!("Press Ctrl-C to stop.");

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop().await;

    let snapshot = server.snapshot();
    print_stats("Final statistics", &snapshot.stats, &snapshot, json);
    Ok(())
}
