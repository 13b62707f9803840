use async_trait::async_trait;
use custom_dns_application::ports::{RecordStore, UpsertOutcome};
use custom_dns_domain::{CustomRecord, DomainError, RecordSummary, RecordType, RecordValues};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Volatile record store, used when no database is configured.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: DashMap<(String, RecordType), CustomRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<CustomRecord>, DomainError> {
        Ok(self
            .records
            .get(&(key.to_string(), record_type))
            .map(|entry| entry.value().clone()))
    }

    async fn upsert(
        &self,
        key: &str,
        ttl: u32,
        values: RecordValues,
    ) -> Result<UpsertOutcome, DomainError> {
        let record = CustomRecord::new(key, ttl, values);

        match self.records.entry((key.to_string(), record.record_type())) {
            Entry::Occupied(mut entry) => {
                entry.insert(record);
                Ok(UpsertOutcome::Updated)
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
                Ok(UpsertOutcome::Created)
            }
        }
    }

    async fn delete_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<bool, DomainError> {
        Ok(self.records.remove(&(key.to_string(), record_type)).is_some())
    }

    async fn list_all(&self) -> Result<Vec<RecordSummary>, DomainError> {
        let mut summaries: Vec<RecordSummary> = self
            .records
            .iter()
            .map(|entry| entry.value().summary())
            .collect();
        summaries.sort_by(|a, b| {
            a.key
                .cmp(&b.key)
                .then_with(|| a.record_type.as_str().cmp(b.record_type.as_str()))
        });
        Ok(summaries)
    }
}
