use custom_dns_domain::{DomainError, RecordType};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordStore;

/// Textual values stored under one exact key.
///
/// `None` means no record of that type exists; `Some(vec![])` means the record
/// exists without values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLookup {
    pub a: Option<Vec<String>>,
    pub aaaa: Option<Vec<String>>,
    pub txt: Option<Vec<String>>,
}

pub struct LookupRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl LookupRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Looks up the key as written, without wildcard or catch-all matching.
    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str) -> Result<RecordLookup, DomainError> {
        let mut lookup = RecordLookup::default();

        for record_type in RecordType::ALL {
            let values = self
                .store
                .find_by_key_and_type(hostname, record_type)
                .await?
                .map(|record| record.values.to_text());

            match record_type {
                RecordType::A => lookup.a = values,
                RecordType::AAAA => lookup.aaaa = values,
                RecordType::TXT => lookup.txt = values,
            }
        }

        Ok(lookup)
    }
}
