use crate::RecordType;
use std::sync::Arc;

/// A single-question DNS query as read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub transaction_id: u16,
    /// Labels joined by dots, exactly as received (no case folding).
    pub question_name: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
    /// Bytes from offset 12 through QCLASS, echoed verbatim in the response.
    pub question: Arc<[u8]>,
}

impl DnsQuery {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
