use super::query_parser::HEADER_LEN;
use adfilter_dns_domain::{DnsDecision, DnsQuery};
use std::net::Ipv4Addr;

/// QR | RD | RA, RCODE 3 (NXDOMAIN).
const FLAGS_NXDOMAIN: [u8; 2] = [0x81, 0x83];
/// QR | RD | RA, RCODE 0.
const FLAGS_NOERROR: [u8; 2] = [0x81, 0x80];

/// Pointer to offset 12, where the question name starts.
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const TYPE_A: u16 = 1;
const CLASS_IN: u16 = 1;
pub const ANSWER_TTL: u32 = 60;

const A_RECORD_LEN: usize = 16;

/// Builds the response datagram for `query`.
///
/// Blocked names get NXDOMAIN with the question echoed and no records.
/// Allowed names get NOERROR with one A record pointing back at the
/// question name.
pub fn encode(query: &DnsQuery, decision: DnsDecision) -> Vec<u8> {
    match decision {
        DnsDecision::Blocked => build_nxdomain(query),
        DnsDecision::Allowed(ip) => build_a_response(query, ip),
    }
}

fn write_header(buf: &mut Vec<u8>, query: &DnsQuery, flags: [u8; 2], ancount: u16) {
    buf.extend_from_slice(&query.transaction_id.to_be_bytes());
    buf.extend_from_slice(&flags);
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ancount.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
}

fn build_nxdomain(query: &DnsQuery) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + query.question.len());
    write_header(&mut buf, query, FLAGS_NXDOMAIN, 0);
    buf.extend_from_slice(&query.question);
    buf
}

fn build_a_response(query: &DnsQuery, ip: Ipv4Addr) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + query.question.len() + A_RECORD_LEN);
    write_header(&mut buf, query, FLAGS_NOERROR, 1);
    buf.extend_from_slice(&query.question);

    buf.extend_from_slice(&NAME_POINTER);
    buf.extend_from_slice(&TYPE_A.to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&ANSWER_TTL.to_be_bytes());
    buf.extend_from_slice(&4u16.to_be_bytes());
    buf.extend_from_slice(&ip.octets());
    buf
}
