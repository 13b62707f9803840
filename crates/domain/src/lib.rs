//! Custom DNS Domain Layer
pub mod address_codec;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod fqdn;
pub mod record_key;

pub use address_codec::{ipv4_to_text, ipv6_to_text, text_to_ipv4, text_to_ipv6, Ipv6Parts};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::{CustomDnsQuery, CustomDnsResponse, DnsQuestion, RecordData, ResourceRecord};
pub use dns_record::{CustomRecord, RecordSummary, RecordType, RecordValues};
pub use domain_name::{normalize_domain, parent_domain, SuffixScanner};
pub use errors::DomainError;
pub use fqdn::check_fqdn;
pub use record_key::RecordKey;
