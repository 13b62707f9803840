use custom_dns_domain::{DomainError, RecordSummary, RecordType};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::RecordStore;

/// Stored records grouped by type, values omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordListing {
    pub a: Vec<RecordSummary>,
    pub aaaa: Vec<RecordSummary>,
    pub txt: Vec<RecordSummary>,
}

pub struct ListRecordsUseCase {
    store: Arc<dyn RecordStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<RecordListing, DomainError> {
        let mut listing = RecordListing::default();

        for summary in self.store.list_all().await? {
            match summary.record_type {
                RecordType::A => listing.a.push(summary),
                RecordType::AAAA => listing.aaaa.push(summary),
                RecordType::TXT => listing.txt.push(summary),
            }
        }

        Ok(listing)
    }
}
