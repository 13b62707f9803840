pub mod memory_record_store;
pub mod record_repository;

pub use memory_record_store::InMemoryRecordStore;
pub use record_repository::SqliteRecordStore;
