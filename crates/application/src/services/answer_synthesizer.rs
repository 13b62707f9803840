use custom_dns_domain::{CustomRecord, RecordData, RecordValues, ResourceRecord};
use std::net::Ipv4Addr;

/// Turns a matched record into answer records in random order.
///
/// The shuffle is a simple load-spreading measure; callers must not rely on
/// any order. Each synthesizer owns its generator, so concurrent queries never
/// share random state.
pub struct AnswerSynthesizer {
    rng: fastrand::Rng,
}

impl AnswerSynthesizer {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// One answer per stored value, named exactly as the query asked.
    ///
    /// A record without values yields no answers.
    pub fn synthesize(
        &mut self,
        record: &CustomRecord,
        query_name: &str,
        dns_class: u16,
    ) -> Vec<ResourceRecord> {
        let mut answers: Vec<ResourceRecord> = Self::record_data(&record.values)
            .into_iter()
            .map(|data| ResourceRecord {
                name: query_name.to_string(),
                dns_class,
                ttl: record.ttl,
                data,
            })
            .collect();

        self.rng.shuffle(&mut answers);
        answers
    }

    fn record_data(values: &RecordValues) -> Vec<RecordData> {
        match values {
            RecordValues::A(ips) => ips
                .iter()
                .map(|ip| RecordData::A(Ipv4Addr::from(*ip)))
                .collect(),
            RecordValues::Aaaa(parts) => parts
                .iter()
                .map(|p| RecordData::Aaaa(p.to_addr()))
                .collect(),
            RecordValues::Txt(texts) => texts.iter().cloned().map(RecordData::Txt).collect(),
        }
    }
}

impl Default for AnswerSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_dns_domain::address_codec::Ipv6Parts;
    use custom_dns_domain::dns_query::DNS_CLASS_IN;

    #[test]
    fn test_same_seed_same_order() {
        let record = CustomRecord::new(
            "example.com",
            60,
            RecordValues::A((1..=16).collect()),
        );

        let first = AnswerSynthesizer::with_seed(7).synthesize(&record, "example.com.", DNS_CLASS_IN);
        let second = AnswerSynthesizer::with_seed(7).synthesize(&record, "example.com.", DNS_CLASS_IN);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aaaa_decoding() {
        let record = CustomRecord::new(
            "v6.example.com",
            120,
            RecordValues::Aaaa(vec![Ipv6Parts::new(0x2001_0db8_0000_0000, 1)]),
        );

        let answers = AnswerSynthesizer::new().synthesize(&record, "V6.Example.com.", DNS_CLASS_IN);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].name, "V6.Example.com.");
        assert_eq!(answers[0].ttl, 120);
        assert_eq!(
            answers[0].data,
            RecordData::Aaaa("2001:db8::1".parse().unwrap())
        );
    }
}
