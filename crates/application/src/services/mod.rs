pub mod domain_matcher;
pub mod stats_collector;

pub use domain_matcher::DomainMatcher;
pub use stats_collector::StatsCollector;
