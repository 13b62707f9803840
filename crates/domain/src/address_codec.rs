//! Conversions between textual addresses and the integer encodings used for
//! storage.
//!
//! IPv4 addresses are stored as a big-endian `u32`. IPv6 addresses are stored
//! as two `i64` halves; the signed type is only a storage artifact, the halves
//! are raw big-endian bytes and are never interpreted arithmetically.

use crate::errors::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};

/// High and low halves of a 128-bit IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv6Parts {
    pub hi: i64,
    pub lo: i64,
}

impl Ipv6Parts {
    pub fn new(hi: i64, lo: i64) -> Self {
        Self { hi, lo }
    }

    pub fn to_addr(self) -> Ipv6Addr {
        let mut octets = [0u8; 16];
        octets[..8].copy_from_slice(&self.hi.to_be_bytes());
        octets[8..].copy_from_slice(&self.lo.to_be_bytes());
        Ipv6Addr::from(octets)
    }

    pub fn from_addr(addr: Ipv6Addr) -> Self {
        let octets = addr.octets();
        let mut hi = [0u8; 8];
        let mut lo = [0u8; 8];
        hi.copy_from_slice(&octets[..8]);
        lo.copy_from_slice(&octets[8..]);
        Self {
            hi: i64::from_be_bytes(hi),
            lo: i64::from_be_bytes(lo),
        }
    }
}

pub fn ipv4_to_text(ip: u32) -> String {
    Ipv4Addr::from(ip).to_string()
}

/// Parses four dot-separated decimal octets.
///
/// Unlike `Ipv4Addr::from_str`, leading zeros are accepted (`010` is `10`),
/// matching what the management layer has always stored.
pub fn text_to_ipv4(text: &str) -> Result<u32, DomainError> {
    let invalid = || DomainError::InvalidFormat(format!("invalid IP address: {}", text));

    let mut segments = text.split('.');
    let mut ip: u32 = 0;
    for _ in 0..4 {
        let segment = segments.next().ok_or_else(invalid)?;
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let octet: u8 = segment.parse().map_err(|_| invalid())?;
        ip = (ip << 8) | u32::from(octet);
    }
    if segments.next().is_some() {
        return Err(invalid());
    }

    Ok(ip)
}

pub fn ipv6_to_text(hi: i64, lo: i64) -> String {
    Ipv6Parts::new(hi, lo).to_addr().to_string()
}

/// Parses compressed or expanded IPv6 notation, including IPv4-embedded
/// forms such as `::ffff:192.0.2.1`.
pub fn text_to_ipv6(text: &str) -> Result<(i64, i64), DomainError> {
    let addr: Ipv6Addr = text
        .parse()
        .map_err(|_| DomainError::InvalidFormat(format!("invalid IPv6 address: {}", text)))?;
    let parts = Ipv6Parts::from_addr(addr);
    Ok((parts.hi, parts.lo))
}
