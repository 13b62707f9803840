use serde::{Deserialize, Serialize};

/// Response code sent by the standalone server when no custom record answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnansweredRcode {
    #[default]
    Refused,
    NxDomain,
    NoError,
    ServFail,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DnsConfig {
    pub unanswered_rcode: UnansweredRcode,
}
