use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Point-in-time read of the query counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryStats {
    pub total_queries: u64,
    pub blocked_queries: u64,
    pub allowed_queries: u64,
    /// Percentage in `[0, 100]`.
    pub block_rate: f64,
    pub uptime_seconds: f64,
    pub started_at: DateTime<Utc>,
}

impl QueryStats {
    pub fn from_counters(
        blocked_queries: u64,
        allowed_queries: u64,
        started_at: DateTime<Utc>,
        uptime: Duration,
    ) -> Self {
        let total_queries = blocked_queries + allowed_queries;
        Self {
            total_queries,
            blocked_queries,
            allowed_queries,
            block_rate: block_rate(blocked_queries, total_queries),
            uptime_seconds: uptime.as_secs_f64(),
            started_at,
        }
    }
}

/// Blocked share of all queries as a percentage; 0.0 when nothing was counted.
pub fn block_rate(blocked: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    blocked as f64 / total as f64 * 100.0
}

/// Operator-facing view of a running (or finished) server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSnapshot {
    #[serde(flatten)]
    pub stats: QueryStats,
    pub server_running: bool,
    pub server_address: String,
}
