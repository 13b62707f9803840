//! Mapping between hickory wire types and the engine's query and answer types.

use custom_dns_domain::config::UnansweredRcode;
use custom_dns_domain::{CustomDnsQuery, DnsQuestion, RecordData, ResourceRecord};
use hickory_proto::op::{Header, Query, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::ProtoError;

/// Builds the engine query from the request's questions.
///
/// Names keep their original case and trailing dot; type and class are
/// passed through numerically so unsupported types reach the engine as-is.
pub fn to_custom_query<'a>(id: u16, queries: impl IntoIterator<Item = &'a Query>) -> CustomDnsQuery {
    let questions = queries
        .into_iter()
        .map(|query| {
            DnsQuestion::new(
                query.name().to_ascii(),
                u16::from(query.query_type()),
                u16::from(query.query_class()),
            )
        })
        .collect();

    CustomDnsQuery::new(id, questions)
}

pub fn to_hickory_record(rr: &ResourceRecord) -> Result<Record, ProtoError> {
    let name = Name::from_ascii(&rr.name)?;
    let rdata = match &rr.data {
        RecordData::A(ip) => RData::A(A(*ip)),
        RecordData::Aaaa(ip) => RData::AAAA(AAAA(*ip)),
        RecordData::Txt(text) => RData::TXT(TXT::new(vec![text.clone()])),
    };

    let mut record = Record::from_rdata(name, rr.ttl, rdata);
    record.set_dns_class(DNSClass::from(rr.dns_class));
    Ok(record)
}

pub fn unanswered_response_code(rcode: UnansweredRcode) -> ResponseCode {
    match rcode {
        UnansweredRcode::Refused => ResponseCode::Refused,
        UnansweredRcode::NxDomain => ResponseCode::NXDomain,
        UnansweredRcode::NoError => ResponseCode::NoError,
        UnansweredRcode::ServFail => ResponseCode::ServFail,
    }
}

/// Response header for a request; negative answers about the custom record
/// set carry the AA bit just like positive ones.
pub fn response_header(request: &Header, code: ResponseCode, authoritative: bool) -> Header {
    let mut header = Header::response_from_request(request);
    header.set_response_code(code);
    header.set_authoritative(authoritative);
    header
}
