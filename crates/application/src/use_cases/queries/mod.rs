pub mod get_stats;
pub mod reset_stats;

pub use get_stats::GetQueryStatsUseCase;
pub use reset_stats::ResetQueryStatsUseCase;
