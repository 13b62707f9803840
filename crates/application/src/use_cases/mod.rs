pub mod dns;
pub mod records;

pub use dns::ResolveQueryUseCase;
pub use records::{
    DeleteRecordUseCase, ListRecordsUseCase, LookupRecordUseCase, RecordListing, RecordLookup,
    SetRecordUseCase,
};
