#![allow(dead_code)]

/// Raw DNS query bytes, built field by field.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    qtype: u16,
    qclass: u16,
    labels: Vec<Vec<u8>>,
}

impl QueryBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100, // RD
            qtype: 1,
            qclass: 1,
            labels: domain
                .split('.')
                .filter(|l| !l.is_empty())
                .map(|l| l.as_bytes().to_vec())
                .collect(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn qtype(mut self, qtype: u16) -> Self {
        self.qtype = qtype;
        self
    }

    pub fn qclass(mut self, qclass: u16) -> Self {
        self.qclass = qclass;
        self
    }

    pub fn raw_label(mut self, label: &[u8]) -> Self {
        self.labels.push(label.to_vec());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
        buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT = 0
        buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT = 0
        buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT = 0
        for label in &self.labels {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label);
        }
        buf.push(0x00); // root label
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
        buf
    }
}

pub fn build_query(id: u16, domain: &str) -> Vec<u8> {
    QueryBuilder::new(domain).id(id).build()
}
