#![allow(dead_code, unused_imports)]

pub mod builders;
pub mod dns_client;

pub use builders::{build_query, QueryBuilder};
pub use dns_client::TestDnsClient;
