use custom_dns_application::use_cases::{
    DeleteRecordUseCase, ListRecordsUseCase, LookupRecordUseCase, SetRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: RecordUseCases,
}

#[derive(Clone)]
pub struct RecordUseCases {
    pub set: Arc<SetRecordUseCase>,
    pub delete: Arc<DeleteRecordUseCase>,
    pub list: Arc<ListRecordsUseCase>,
    pub lookup: Arc<LookupRecordUseCase>,
}
