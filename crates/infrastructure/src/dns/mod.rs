pub mod record_map;
pub mod server;

pub use record_map::{
    response_header, to_custom_query, to_hickory_record, unanswered_response_code,
};
pub use server::DnsServerHandler;
