use std::net::Ipv4Addr;

/// Verdict for one queried name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsDecision {
    Blocked,
    Allowed(Ipv4Addr),
}

impl DnsDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, DnsDecision::Blocked)
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            DnsDecision::Blocked => None,
            DnsDecision::Allowed(ip) => Some(*ip),
        }
    }
}
