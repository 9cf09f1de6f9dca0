use adfilter_dns_application::services::{DomainMatcher, StatsCollector};
use adfilter_dns_application::use_cases::{GetQueryStatsUseCase, HandleDnsQueryUseCase};
use adfilter_dns_domain::Config;
use adfilter_dns_infrastructure::dns::load_filter_file;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
    pub get_stats: Arc<GetQueryStatsUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        let loaded = load_filter_file(&config.blocking.filter_file);
        let matcher = DomainMatcher::new(Arc::new(loaded.store));
        info!(
            blocked_domains = matcher.blocklist_len(),
            degraded = loaded.warning.is_some(),
            "Blocklist ready"
        );

        let stats = Arc::new(StatsCollector::new());

        Self {
            handler_use_case: Arc::new(HandleDnsQueryUseCase::new(
                matcher,
                stats.clone(),
                config.blocking.allowed_address,
            )),
            get_stats: Arc::new(GetQueryStatsUseCase::new(stats)),
        }
    }
}
