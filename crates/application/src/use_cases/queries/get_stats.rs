use crate::services::StatsCollector;
use adfilter_dns_domain::QueryStats;
use std::sync::Arc;

pub struct GetQueryStatsUseCase {
    stats: Arc<StatsCollector>,
}

impl GetQueryStatsUseCase {
    pub fn new(stats: Arc<StatsCollector>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) -> QueryStats {
        self.stats.snapshot()
    }
}
