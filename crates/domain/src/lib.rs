//! AdFilter DNS Domain Layer
pub mod config;
pub mod dns_decision;
pub mod dns_query;
pub mod errors;
pub mod query_stats;
pub mod record_type;
pub mod server_state;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_decision::DnsDecision;
pub use dns_query::DnsQuery;
pub use errors::{DecodeError, DomainError};
pub use query_stats::{QueryStats, ServerSnapshot};
pub use record_type::RecordType;
pub use server_state::ServerLifecycleState;
