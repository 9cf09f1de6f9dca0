use crate::services::StatsCollector;
use std::sync::Arc;
use tracing::info;

pub struct ResetQueryStatsUseCase {
    stats: Arc<StatsCollector>,
}

impl ResetQueryStatsUseCase {
    pub fn new(stats: Arc<StatsCollector>) -> Self {
        Self { stats }
    }

    pub fn execute(&self) {
        self.stats.reset();
        info!("Query statistics reset");
    }
}
