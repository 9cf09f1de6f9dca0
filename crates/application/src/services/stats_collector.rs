use adfilter_dns_domain::QueryStats;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::Instant;

struct Epoch {
    started: Instant,
    started_at: DateTime<Utc>,
}

impl Epoch {
    fn now() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Query counters shared by every packet handler.
///
/// The total is never stored: it is the sum of the blocked and allowed
/// counters, so `blocked + allowed == total` holds for every read.
pub struct StatsCollector {
    blocked: AtomicU64,
    allowed: AtomicU64,
    epoch: RwLock<Epoch>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self {
            blocked: AtomicU64::new(0),
            allowed: AtomicU64::new(0),
            epoch: RwLock::new(Epoch::now()),
        }
    }

    pub fn record_blocked(&self) {
        self.blocked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_allowed(&self) {
        self.allowed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QueryStats {
        let epoch = self.epoch.read().unwrap_or_else(|e| e.into_inner());
        QueryStats::from_counters(
            self.blocked.load(Ordering::Relaxed),
            self.allowed.load(Ordering::Relaxed),
            epoch.started_at,
            epoch.started.elapsed(),
        )
    }

    /// Zero all counters and restart the uptime clock.
    ///
    /// Increments racing with a reset may land on either side of it.
    pub fn reset(&self) {
        let mut epoch = self.epoch.write().unwrap_or_else(|e| e.into_inner());
        self.blocked.store(0, Ordering::Relaxed);
        self.allowed.store(0, Ordering::Relaxed);
        *epoch = Epoch::now();
    }
}

impl Default for StatsCollector {
    fn default() -> Self {
        Self::new()
    }
}
