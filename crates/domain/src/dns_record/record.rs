use super::RecordType;
use crate::address_codec::{ipv4_to_text, ipv6_to_text, text_to_ipv4, text_to_ipv6, Ipv6Parts};
use crate::errors::DomainError;

/// Protocol limit on a single TXT character-string.
pub const MAX_TXT_LEN: usize = 255;

/// The values of a record, tagged by record type.
///
/// Order is insertion order; it carries no meaning for answers, which are
/// shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValues {
    A(Vec<u32>),
    Aaaa(Vec<Ipv6Parts>),
    Txt(Vec<String>),
}

impl RecordValues {
    pub fn empty(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => RecordValues::A(Vec::new()),
            RecordType::AAAA => RecordValues::Aaaa(Vec::new()),
            RecordType::TXT => RecordValues::Txt(Vec::new()),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            RecordValues::A(_) => RecordType::A,
            RecordValues::Aaaa(_) => RecordType::AAAA,
            RecordValues::Txt(_) => RecordType::TXT,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordValues::A(v) => v.len(),
            RecordValues::Aaaa(v) => v.len(),
            RecordValues::Txt(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parses values coming from the management layer.
    ///
    /// The whole set is rejected on the first invalid value.
    pub fn parse(record_type: RecordType, values: &[String]) -> Result<Self, DomainError> {
        match record_type {
            RecordType::A => values
                .iter()
                .map(|v| text_to_ipv4(v))
                .collect::<Result<Vec<_>, _>>()
                .map(RecordValues::A),
            RecordType::AAAA => values
                .iter()
                .map(|v| text_to_ipv6(v).map(|(hi, lo)| Ipv6Parts::new(hi, lo)))
                .collect::<Result<Vec<_>, _>>()
                .map(RecordValues::Aaaa),
            RecordType::TXT => {
                if let Some(oversized) = values.iter().find(|v| v.len() > MAX_TXT_LEN) {
                    return Err(DomainError::InvalidTxtValue(format!(
                        "txt value larger than {} bytes ({} bytes)",
                        MAX_TXT_LEN,
                        oversized.len()
                    )));
                }
                Ok(RecordValues::Txt(values.to_vec()))
            }
        }
    }

    pub fn to_text(&self) -> Vec<String> {
        match self {
            RecordValues::A(v) => v.iter().map(|ip| ipv4_to_text(*ip)).collect(),
            RecordValues::Aaaa(v) => v.iter().map(|p| ipv6_to_text(p.hi, p.lo)).collect(),
            RecordValues::Txt(v) => v.clone(),
        }
    }
}

/// One stored record: a key pattern, a TTL and its typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRecord {
    pub key: String,
    pub ttl: u32,
    pub values: RecordValues,
}

impl CustomRecord {
    pub fn new(key: impl Into<String>, ttl: u32, values: RecordValues) -> Self {
        Self {
            key: key.into(),
            ttl,
            values,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.values.record_type()
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            key: self.key.clone(),
            record_type: self.record_type(),
            ttl: self.ttl,
            value_count: self.values.len(),
        }
    }
}

/// A record without its values, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    pub key: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub value_count: usize,
}
