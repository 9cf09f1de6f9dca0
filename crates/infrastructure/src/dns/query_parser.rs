use adfilter_dns_domain::{DecodeError, DnsQuery};
use std::sync::Arc;

/// Fixed DNS header size; the question name starts right after it.
pub const HEADER_LEN: usize = 12;

/// Largest classic (non-EDNS0) UDP DNS payload.
pub const MAX_UDP_PAYLOAD: usize = 512;

/// Reads the header and the first question of a raw query.
///
/// Flags and section counts are not interpreted. The question name must be a
/// plain label sequence: compression pointers and extended label types are
/// rejected, as is any label byte outside ASCII.
pub fn decode(buf: &[u8]) -> Result<DnsQuery, DecodeError> {
    if buf.len() < HEADER_LEN {
        return Err(DecodeError::HeaderTooShort(buf.len()));
    }

    let transaction_id = u16::from_be_bytes([buf[0], buf[1]]);

    let mut pos = HEADER_LEN;
    let mut name = String::new();

    loop {
        let label_len = *buf.get(pos).ok_or(DecodeError::Truncated)?;
        pos += 1;
        if label_len == 0 {
            break;
        }
        if label_len & 0xC0 != 0 {
            return Err(DecodeError::UnsupportedLabel(label_len));
        }

        let label_len = label_len as usize;
        let label = buf
            .get(pos..pos + label_len)
            .ok_or(DecodeError::Truncated)?;
        if !label.is_ascii() {
            return Err(DecodeError::NonAsciiLabel);
        }

        if !name.is_empty() {
            name.push('.');
        }
        // ASCII was checked above, so every byte is a char.
        name.extend(label.iter().map(|&b| b as char));
        pos += label_len;
    }

    let fixed = buf.get(pos..pos + 4).ok_or(DecodeError::Truncated)?;
    let qtype = u16::from_be_bytes([fixed[0], fixed[1]]);
    let qclass = u16::from_be_bytes([fixed[2], fixed[3]]);
    let question_end = pos + 4;

    Ok(DnsQuery {
        transaction_id,
        question_name: Arc::from(name),
        qtype,
        qclass,
        question: Arc::from(&buf[HEADER_LEN..question_end]),
    })
}
