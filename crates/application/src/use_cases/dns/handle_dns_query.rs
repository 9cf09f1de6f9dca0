use crate::services::{DomainMatcher, StatsCollector};
use adfilter_dns_domain::DnsDecision;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Decides one queried name and records the verdict.
pub struct HandleDnsQueryUseCase {
    matcher: DomainMatcher,
    stats: Arc<StatsCollector>,
    allowed_address: Ipv4Addr,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        matcher: DomainMatcher,
        stats: Arc<StatsCollector>,
        allowed_address: Ipv4Addr,
    ) -> Self {
        Self {
            matcher,
            stats,
            allowed_address,
        }
    }

    pub fn execute(&self, domain: &str) -> DnsDecision {
        if self.matcher.is_blocked(domain) {
            self.stats.record_blocked();
            DnsDecision::Blocked
        } else {
            self.stats.record_allowed();
            DnsDecision::Allowed(self.allowed_address)
        }
    }

    /// `None` when blocked, the placeholder address otherwise.
    pub fn resolve(&self, domain: &str) -> Option<Ipv4Addr> {
        self.execute(domain).address()
    }

    pub fn stats(&self) -> &Arc<StatsCollector> {
        &self.stats
    }
}
