use crate::dns_record::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

pub const DNS_CLASS_IN: u16 = 1;

/// One question as received, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Name exactly as asked, original case and trailing dot included.
    pub name: String,
    pub query_type: u16,
    pub query_class: u16,
}

impl DnsQuestion {
    pub fn new(name: impl Into<String>, query_type: u16, query_class: u16) -> Self {
        Self {
            name: name.into(),
            query_type,
            query_class,
        }
    }

    pub fn in_class(name: impl Into<String>, record_type: RecordType) -> Self {
        Self::new(name, record_type.to_u16(), DNS_CLASS_IN)
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.query_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDnsQuery {
    pub id: u16,
    pub questions: Vec<DnsQuestion>,
}

impl CustomDnsQuery {
    pub fn new(id: u16, questions: Vec<DnsQuestion>) -> Self {
        Self { id, questions }
    }

    pub fn single(id: u16, question: DnsQuestion) -> Self {
        Self::new(id, vec![question])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Txt(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub dns_class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

/// Answer to a query, keyed to it by id and question.
///
/// Header flags and wire encoding belong to the protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDnsResponse {
    pub id: u16,
    pub question: DnsQuestion,
    pub answers: Vec<ResourceRecord>,
}
