use adfilter_dns_domain::{DecodeError, DnsDecision, RecordType};
use adfilter_dns_infrastructure::dns::{decode, encode};
use std::net::Ipv4Addr;

mod helpers;
use helpers::{build_query, QueryBuilder};

#[test]
fn test_decode_simple_query() {
    let buf = build_query(0xBEEF, "ad.kakao.com");

    let query = decode(&buf).unwrap();

    assert_eq!(query.transaction_id, 0xBEEF);
    assert_eq!(&*query.question_name, "ad.kakao.com");
    assert_eq!(query.qtype, 1);
    assert_eq!(query.qclass, 1);
    assert_eq!(query.record_type(), Some(RecordType::A));
    assert_eq!(&*query.question, &buf[12..]);
}

#[test]
fn test_decode_keeps_case_and_other_qtypes() {
    let buf = QueryBuilder::new("Ads.Daum.NET").qtype(28).build();

    let query = decode(&buf).unwrap();

    assert_eq!(&*query.question_name, "Ads.Daum.NET");
    assert_eq!(query.record_type(), Some(RecordType::AAAA));
}

#[test]
fn test_decode_root_name() {
    let buf = QueryBuilder::new("").build();

    let query = decode(&buf).unwrap();

    assert_eq!(&*query.question_name, "");
    assert_eq!(query.question.len(), 5);
}

#[test]
fn test_decode_ignores_bytes_after_question() {
    let mut buf = build_query(1, "kakao.com");
    let question_len = buf.len() - 12;
    buf.extend_from_slice(&[0x00, 0x00, 0x29, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

    let query = decode(&buf).unwrap();

    assert_eq!(query.question.len(), question_len);
}

#[test]
fn test_decode_short_header() {
    assert_eq!(decode(&[]), Err(DecodeError::HeaderTooShort(0)));
    assert_eq!(decode(&[0u8; 11]), Err(DecodeError::HeaderTooShort(11)));
}

#[test]
fn test_decode_header_only_is_truncated() {
    assert_eq!(decode(&[0u8; 12]), Err(DecodeError::Truncated));
}

#[test]
fn test_decode_label_longer_than_buffer() {
    let mut buf = build_query(1, "kakao.com")[..12].to_vec();
    buf.push(10);
    buf.extend_from_slice(b"short");

    assert_eq!(decode(&buf), Err(DecodeError::Truncated));
}

#[test]
fn test_decode_missing_terminator() {
    let mut buf = build_query(1, "kakao.com")[..12].to_vec();
    buf.push(5);
    buf.extend_from_slice(b"kakao");

    assert_eq!(decode(&buf), Err(DecodeError::Truncated));
}

#[test]
fn test_decode_missing_qtype_qclass() {
    let full = build_query(1, "kakao.com");
    for cut in 1..=4 {
        let buf = &full[..full.len() - cut];
        assert_eq!(decode(buf), Err(DecodeError::Truncated), "cut {}", cut);
    }
}

#[test]
fn test_decode_rejects_compression_pointer() {
    let mut buf = build_query(1, "kakao.com")[..12].to_vec();
    buf.extend_from_slice(&[0xC0, 0x0C, 0x00, 0x01, 0x00, 0x01]);

    assert_eq!(decode(&buf), Err(DecodeError::UnsupportedLabel(0xC0)));
}

#[test]
fn test_decode_rejects_non_ascii_label() {
    let buf = QueryBuilder::new("").raw_label(&[0xEC, 0xB9, 0xB4]).build();

    assert_eq!(decode(&buf), Err(DecodeError::NonAsciiLabel));
}

#[test]
fn test_encode_blocked_is_nxdomain() {
    let buf = build_query(0xABCD, "ad.kakao.com");
    let query = decode(&buf).unwrap();

    let response = encode(&query, DnsDecision::Blocked);

    let mut expected = vec![
        0xAB, 0xCD, // ID
        0x81, 0x83, // QR RD RA, RCODE 3
        0x00, 0x01, // QDCOUNT
        0x00, 0x00, // ANCOUNT
        0x00, 0x00, // NSCOUNT
        0x00, 0x00, // ARCOUNT
    ];
    expected.extend_from_slice(&buf[12..]);
    assert_eq!(response, expected);
}

#[test]
fn test_encode_allowed_has_single_a_record() {
    let buf = build_query(0x0102, "kakao.com");
    let query = decode(&buf).unwrap();

    let response = encode(&query, DnsDecision::Allowed(Ipv4Addr::new(127, 0, 0, 1)));

    let mut expected = vec![
        0x01, 0x02, // ID
        0x81, 0x80, // QR RD RA, RCODE 0
        0x00, 0x01, // QDCOUNT
        0x00, 0x01, // ANCOUNT
        0x00, 0x00, // NSCOUNT
        0x00, 0x00, // ARCOUNT
    ];
    expected.extend_from_slice(&buf[12..]);
    expected.extend_from_slice(&[
        0xC0, 0x0C, // name pointer
        0x00, 0x01, // TYPE A
        0x00, 0x01, // CLASS IN
        0x00, 0x00, 0x00, 0x3C, // TTL 60
        0x00, 0x04, // RDLENGTH
        127, 0, 0, 1,
    ]);
    assert_eq!(response, expected);
}

#[test]
fn test_encode_does_not_echo_trailing_sections() {
    let mut buf = build_query(7, "kakao.com");
    let plain_len = buf.len();
    buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let query = decode(&buf).unwrap();

    assert_eq!(encode(&query, DnsDecision::Blocked).len(), plain_len);
}

#[test]
fn test_response_decodes_back_to_same_question() {
    for (id, domain) in [(0u16, "a.b"), (0xFFFF, "sub.ad.kakao.com"), (42, "x")] {
        let query = decode(&build_query(id, domain)).unwrap();

        for decision in [DnsDecision::Blocked, DnsDecision::Allowed(Ipv4Addr::LOCALHOST)] {
            let reparsed = decode(&encode(&query, decision)).unwrap();
            assert_eq!(reparsed.transaction_id, id);
            assert_eq!(reparsed.question_name, query.question_name);
            assert_eq!(reparsed.qtype, query.qtype);
        }
    }
}
