#![allow(dead_code)]

use async_trait::async_trait;
use custom_dns_application::ports::{RecordStore, UpsertOutcome};
use custom_dns_domain::{CustomRecord, DomainError, RecordSummary, RecordType, RecordValues};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory record store that records every key it is asked for.
#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<(String, RecordType), CustomRecord>>>,
    lookups: Arc<RwLock<Vec<String>>>,
    should_fail: Arc<AtomicBool>,
    writes: Arc<RwLock<usize>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<CustomRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    pub fn insert(&self, record: CustomRecord) {
        self.records
            .write()
            .unwrap()
            .insert((record.key.clone(), record.record_type()), record);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.read().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.read().unwrap()
    }

    pub fn get(&self, key: &str, record_type: RecordType) -> Option<CustomRecord> {
        self.records
            .read()
            .unwrap()
            .get(&(key.to_string(), record_type))
            .cloned()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreError("mock store failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn find_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<Option<CustomRecord>, DomainError> {
        self.lookups.write().unwrap().push(key.to_string());
        self.check_failure()?;
        Ok(self.get(key, record_type))
    }

    async fn upsert(
        &self,
        key: &str,
        ttl: u32,
        values: RecordValues,
    ) -> Result<UpsertOutcome, DomainError> {
        self.check_failure()?;
        *self.writes.write().unwrap() += 1;

        let record = CustomRecord::new(key, ttl, values);
        let previous = self
            .records
            .write()
            .unwrap()
            .insert((key.to_string(), record.record_type()), record);

        Ok(if previous.is_some() {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        })
    }

    async fn delete_by_key_and_type(
        &self,
        key: &str,
        record_type: RecordType,
    ) -> Result<bool, DomainError> {
        self.check_failure()?;
        *self.writes.write().unwrap() += 1;
        Ok(self
            .records
            .write()
            .unwrap()
            .remove(&(key.to_string(), record_type))
            .is_some())
    }

    async fn list_all(&self) -> Result<Vec<RecordSummary>, DomainError> {
        self.check_failure()?;
        let mut summaries: Vec<RecordSummary> = self
            .records
            .read()
            .unwrap()
            .values()
            .map(CustomRecord::summary)
            .collect();
        summaries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(summaries)
    }
}

pub fn a_record(key: &str, ips: &[&str]) -> CustomRecord {
    let values: Vec<String> = ips.iter().map(|s| s.to_string()).collect();
    CustomRecord::new(key, 300, RecordValues::parse(RecordType::A, &values).unwrap())
}

pub fn aaaa_record(key: &str, ips: &[&str]) -> CustomRecord {
    let values: Vec<String> = ips.iter().map(|s| s.to_string()).collect();
    CustomRecord::new(
        key,
        300,
        RecordValues::parse(RecordType::AAAA, &values).unwrap(),
    )
}

pub fn txt_record(key: &str, texts: &[&str]) -> CustomRecord {
    CustomRecord::new(
        key,
        300,
        RecordValues::Txt(texts.iter().map(|s| s.to_string()).collect()),
    )
}
