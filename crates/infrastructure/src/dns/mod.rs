pub mod block_filter;
pub mod query_parser;
pub mod server;
pub mod udp_server;
pub mod wire_response;

pub use block_filter::{load_filter_file, BlocklistStore, FilterLoad};
pub use query_parser::decode;
pub use server::DnsServerHandler;
pub use udp_server::UdpDnsServer;
pub use wire_response::encode;
