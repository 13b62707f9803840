use custom_dns_domain::{
    parent_domain, CustomRecord, DomainError, RecordKey, RecordType, SuffixScanner,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Wildcard,
    CatchAll,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::Wildcard => "wildcard",
            MatchTier::CatchAll => "catch_all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    pub record: CustomRecord,
    pub tier: MatchTier,
}

/// Three-tier lookup of the record answering a normalized name.
///
/// Tiers run in order and stop at the first hit:
/// 1. the name itself,
/// 2. `*.` + the immediate parent (one level only, never further up),
/// 3. `domain:` + each suffix from the full name up to the top label.
pub struct DomainMatcher {
    store: Arc<dyn RecordStore>,
}

impl DomainMatcher {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn find(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> Result<Option<RecordMatch>, DomainError> {
        if let Some(record) = self.lookup(hostname, record_type).await? {
            return Ok(Some(RecordMatch {
                record,
                tier: MatchTier::Exact,
            }));
        }

        if let Some(parent) = parent_domain(hostname).filter(|p| !p.is_empty()) {
            let key = RecordKey::wildcard(parent).as_key();
            if let Some(record) = self.lookup(&key, record_type).await? {
                return Ok(Some(RecordMatch {
                    record,
                    tier: MatchTier::Wildcard,
                }));
            }
        }

        for suffix in SuffixScanner::new(hostname) {
            let key = RecordKey::catch_all(suffix).as_key();
            if let Some(record) = self.lookup(&key, record_type).await? {
                return Ok(Some(RecordMatch {
                    record,
                    tier: MatchTier::CatchAll,
                }));
            }
        }

        Ok(None)
    }

    async fn lookup(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<CustomRecord>, DomainError> {
        let record = self.store.find_by_key_and_type(key, record_type).await?;
        if record.is_some() {
            debug!(key = %key, record_type = %record_type, "Custom record hit");
        }
        Ok(record)
    }
}
