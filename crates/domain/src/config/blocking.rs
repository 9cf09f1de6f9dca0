use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// AdGuard-style filter list (`||domain^` rules).
    #[serde(default = "default_filter_file")]
    pub filter_file: String,

    /// Address returned in the A record for every allowed domain.
    #[serde(default = "default_allowed_address")]
    pub allowed_address: Ipv4Addr,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            filter_file: default_filter_file(),
            allowed_address: default_allowed_address(),
        }
    }
}

fn default_filter_file() -> String {
    "kakao-adblock-filter.txt".to_string()
}

fn default_allowed_address() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}
