use custom_dns_api::{state::RecordUseCases, AppState};
use custom_dns_application::ports::RecordStore;
use custom_dns_application::use_cases::{
    DeleteRecordUseCase, ListRecordsUseCase, LookupRecordUseCase, ResolveQueryUseCase,
    SetRecordUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub resolve: Arc<ResolveQueryUseCase>,
    pub set_record: Arc<SetRecordUseCase>,
    pub delete_record: Arc<DeleteRecordUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub lookup_record: Arc<LookupRecordUseCase>,
}

impl UseCases {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            resolve: Arc::new(ResolveQueryUseCase::new(store.clone())),
            set_record: Arc::new(SetRecordUseCase::new(store.clone())),
            delete_record: Arc::new(DeleteRecordUseCase::new(store.clone())),
            list_records: Arc::new(ListRecordsUseCase::new(store.clone())),
            lookup_record: Arc::new(LookupRecordUseCase::new(store)),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            records: RecordUseCases {
                set: self.set_record.clone(),
                delete: self.delete_record.clone(),
                list: self.list_records.clone(),
                lookup: self.lookup_record.clone(),
            },
        }
    }
}
