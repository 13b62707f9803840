use crate::errors::DomainError;
use crate::fqdn::check_fqdn;
use std::fmt;

pub const WILDCARD_PREFIX: &str = "*.";
pub const CATCH_ALL_PREFIX: &str = "domain:";

/// A persisted record key.
///
/// The string forms are shared with the management layer and must stay
/// bit-exact: a literal hostname, `*.` + suffix, or `domain:` + suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Exact(String),
    /// Answers direct children of the suffix only.
    Wildcard(String),
    /// Answers the suffix itself and every name below it.
    CatchAll(String),
}

impl RecordKey {
    pub fn parse(key: &str) -> Self {
        if let Some(suffix) = key.strip_prefix(CATCH_ALL_PREFIX) {
            RecordKey::CatchAll(suffix.to_string())
        } else if let Some(suffix) = key.strip_prefix(WILDCARD_PREFIX) {
            RecordKey::Wildcard(suffix.to_string())
        } else {
            RecordKey::Exact(key.to_string())
        }
    }

    pub fn wildcard(suffix: &str) -> Self {
        RecordKey::Wildcard(suffix.to_string())
    }

    pub fn catch_all(suffix: &str) -> Self {
        RecordKey::CatchAll(suffix.to_string())
    }

    /// The hostname part of the key, without any structural prefix.
    pub fn fqdn_part(&self) -> &str {
        match self {
            RecordKey::Exact(name) | RecordKey::Wildcard(name) | RecordKey::CatchAll(name) => name,
        }
    }

    /// Parses a key from the write path and validates its hostname part.
    pub fn parse_validated(key: &str) -> Result<Self, DomainError> {
        let parsed = Self::parse(key);
        check_fqdn(parsed.fqdn_part())?;
        Ok(parsed)
    }

    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Exact(name) => write!(f, "{}", name),
            RecordKey::Wildcard(suffix) => write!(f, "{}{}", WILDCARD_PREFIX, suffix),
            RecordKey::CatchAll(suffix) => write!(f, "{}{}", CATCH_ALL_PREFIX, suffix),
        }
    }
}
