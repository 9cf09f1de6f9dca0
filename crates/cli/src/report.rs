use adfilter_dns_domain::QueryStats;
use serde::Serialize;

/// Prints a statistics block, or the whole value as JSON when `json` is set.
pub fn print_stats<T: Serialize>(title: &str, stats: &QueryStats, value: &T, json: bool) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize statistics"),
        }
        return;
    }

    println!();
    println!("{title}");
    println!("  Total queries:   {}", stats.total_queries);
    println!("  Blocked queries: {}", stats.blocked_queries);
    println!("  Allowed queries: {}", stats.allowed_queries);
    println!("  Block rate:      {:.1}%", stats.block_rate);
    println!("  Uptime:          {:.1}s", stats.uptime_seconds);
}
