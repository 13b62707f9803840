use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid address format: {0}")]
    InvalidFormat(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("Invalid TXT value: {0}")]
    InvalidTxtValue(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Record store error: {0}")]
    StoreError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Errors caused by caller input rather than by the store or the process.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidFormat(_)
                | DomainError::InvalidDomain(_)
                | DomainError::InvalidTxtValue(_)
                | DomainError::UnsupportedRecordType(_)
        )
    }
}
