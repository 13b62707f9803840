pub mod record;
pub mod record_type;

pub use record::{CustomRecord, RecordSummary, RecordValues, MAX_TXT_LEN};
pub use record_type::RecordType;
