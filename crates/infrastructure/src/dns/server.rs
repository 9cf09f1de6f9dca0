use super::query_parser::decode;
use super::wire_response::encode;
use adfilter_dns_application::use_cases::HandleDnsQueryUseCase;
use adfilter_dns_domain::{DecodeError, DnsDecision};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

/// Turns one raw query datagram into its response datagram.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decode, decide, encode. A decode failure means the packet must be
    /// dropped without a reply.
    pub fn handle_raw_udp(&self, buf: &[u8], client: SocketAddr) -> Result<Vec<u8>, DecodeError> {
        let query = decode(buf)?;
        let decision = self.use_case.execute(&query.question_name);
        let qtype = query.record_type().map_or("UNKNOWN", |t| t.as_str());

        match decision {
            DnsDecision::Blocked => {
                info!(client = %client.ip(), domain = %query.question_name, qtype, "BLOCKED");
            }
            DnsDecision::Allowed(ip) => {
                info!(client = %client.ip(), domain = %query.question_name, qtype, address = %ip, "ALLOWED");
            }
        }

        Ok(encode(&query, decision))
    }
}
