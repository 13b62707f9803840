pub mod answer_synthesizer;
pub mod domain_matcher;

pub use answer_synthesizer::AnswerSynthesizer;
pub use domain_matcher::{DomainMatcher, MatchTier, RecordMatch};
