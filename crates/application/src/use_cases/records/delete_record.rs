use custom_dns_domain::{DomainError, RecordType};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RecordStore;

pub struct DeleteRecordUseCase {
    store: Arc<dyn RecordStore>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, hostname: &str, record_type: RecordType) -> Result<(), DomainError> {
        if !self.store.delete_by_key_and_type(hostname, record_type).await? {
            return Err(DomainError::NotFound(format!(
                "{} record for {} not found",
                record_type, hostname
            )));
        }

        info!(key = %hostname, record_type = %record_type, "Custom record deleted");
        Ok(())
    }
}
