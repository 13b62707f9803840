use custom_dns_domain::{normalize_domain, CustomDnsQuery, CustomDnsResponse};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::ports::RecordStore;
use crate::services::{AnswerSynthesizer, DomainMatcher};

/// Answers A, AAAA and TXT questions from the custom record set.
///
/// Stateless between calls; everything it reads comes from the injected
/// store. `None` means the query is left unanswered for whoever handles it
/// next: wrong question count, unsupported type, no matching record, a record
/// without values, or a store failure.
pub struct ResolveQueryUseCase {
    matcher: DomainMatcher,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            matcher: DomainMatcher::new(store),
        }
    }

    #[instrument(
        skip(self, query),
        fields(
            query_id = query.id,
            name = query.questions.first().map(|q| q.name.as_str())
        )
    )]
    pub async fn execute(&self, query: &CustomDnsQuery) -> Option<CustomDnsResponse> {
        let [question] = query.questions.as_slice() else {
            debug!(
                questions = query.questions.len(),
                "Query does not carry exactly one question, passing through"
            );
            return None;
        };

        let Some(record_type) = question.record_type() else {
            debug!(query_type = question.query_type, "Unsupported query type, passing through");
            return None;
        };

        let hostname = normalize_domain(&question.name);

        let matched = match self.matcher.find(&hostname, record_type).await {
            Ok(Some(matched)) => matched,
            Ok(None) => {
                debug!(domain = %hostname, record_type = %record_type, "No custom record");
                return None;
            }
            Err(e) => {
                error!(
                    error = %e,
                    domain = %hostname,
                    record_type = %record_type,
                    "Record store lookup failed, leaving query unanswered"
                );
                return None;
            }
        };

        let answers = AnswerSynthesizer::new().synthesize(
            &matched.record,
            &question.name,
            question.query_class,
        );

        if answers.is_empty() {
            debug!(key = %matched.record.key, "Matched record has no values");
            return None;
        }

        debug!(
            domain = %hostname,
            record_type = %record_type,
            key = %matched.record.key,
            tier = matched.tier.as_str(),
            answers = answers.len(),
            "Answered from custom records"
        );

        Some(CustomDnsResponse {
            id: query.id,
            question: question.clone(),
            answers,
        })
    }
}
