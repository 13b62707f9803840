mod delete_record;
mod list_records;
mod lookup_record;
mod set_record;

pub use delete_record::DeleteRecordUseCase;
pub use list_records::{ListRecordsUseCase, RecordListing};
pub use lookup_record::{LookupRecordUseCase, RecordLookup};
pub use set_record::SetRecordUseCase;
