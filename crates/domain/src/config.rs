pub mod blocking;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use blocking::BlockingConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
