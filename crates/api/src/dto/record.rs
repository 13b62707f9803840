use custom_dns_application::use_cases::{RecordListing, RecordLookup};
use custom_dns_domain::RecordSummary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummaryResponse {
    pub hostname: String,
    pub ttl: u32,
    pub value_count: usize,
}

impl RecordSummaryResponse {
    pub fn from_summary(summary: RecordSummary) -> Self {
        Self {
            hostname: summary.key,
            ttl: summary.ttl,
            value_count: summary.value_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordListResponse {
    pub a: Vec<RecordSummaryResponse>,
    pub aaaa: Vec<RecordSummaryResponse>,
    pub txt: Vec<RecordSummaryResponse>,
}

impl RecordListResponse {
    pub fn from_listing(listing: RecordListing) -> Self {
        let convert = |summaries: Vec<RecordSummary>| {
            summaries
                .into_iter()
                .map(RecordSummaryResponse::from_summary)
                .collect()
        };
        Self {
            a: convert(listing.a),
            aaaa: convert(listing.aaaa),
            txt: convert(listing.txt),
        }
    }
}

/// `null` for a type with no record, a list (possibly empty) otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordLookupResponse {
    pub hostname: String,
    pub a: Option<Vec<String>>,
    pub aaaa: Option<Vec<String>>,
    pub txt: Option<Vec<String>>,
}

impl RecordLookupResponse {
    pub fn from_lookup(hostname: String, lookup: RecordLookup) -> Self {
        Self {
            hostname,
            a: lookup.a,
            aaaa: lookup.aaaa,
            txt: lookup.txt,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupRecordQuery {
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetRecordRequest {
    pub hostname: String,
    pub record_type: String,
    #[serde(default)]
    pub values: Vec<String>,
    pub ttl: u32,
}
