use async_trait::async_trait;
use custom_dns_domain::{CustomRecord, DomainError, RecordSummary, RecordType, RecordValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Persistent set of custom records, one per (key, record type).
///
/// Implementations own their I/O bounds (timeouts, pool limits); callers never
/// retry. Failures are reported as `DomainError::StoreError`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Point-in-time snapshot of the record stored under exactly `key`.
    async fn find_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<CustomRecord>, DomainError>;

    /// Creates the record, or replaces the TTL and the whole value set of the
    /// existing one. The record type is taken from `values`.
    async fn upsert(
        &self,
        key: &str,
        ttl: u32,
        values: RecordValues,
    ) -> Result<UpsertOutcome, DomainError>;

    /// Returns `false` when nothing was stored under (key, type).
    async fn delete_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<bool, DomainError>;

    async fn list_all(&self) -> Result<Vec<RecordSummary>, DomainError>;
}
