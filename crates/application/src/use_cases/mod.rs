pub mod dns;
pub mod queries;

pub use dns::HandleDnsQueryUseCase;
pub use queries::{GetQueryStatsUseCase, ResetQueryStatsUseCase};
