use custom_dns_domain::{DomainError, RecordKey, RecordType, RecordValues};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{RecordStore, UpsertOutcome};

pub struct SetRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl SetRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Creates the record or replaces its TTL and values.
    ///
    /// Key and values are fully validated before the store is touched.
    #[instrument(skip(self, values))]
    pub async fn execute(
        &self,
        hostname: &str,
        record_type: RecordType,
        values: Vec<String>,
        ttl: u32,
    ) -> Result<UpsertOutcome, DomainError> {
        let key = RecordKey::parse_validated(hostname)?;
        let values = RecordValues::parse(record_type, &values)?;
        let value_count = values.len();

        let outcome = self.store.upsert(&key.as_key(), ttl, values).await?;

        info!(
            key = %key,
            record_type = %record_type,
            ttl,
            values = value_count,
            outcome = ?outcome,
            "Custom record saved"
        );

        Ok(outcome)
    }
}
