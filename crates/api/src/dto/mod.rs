pub mod record;

pub use record::{
    LookupRecordQuery, RecordListResponse, RecordLookupResponse, RecordSummaryResponse,
    SetRecordRequest,
};
