mod handle_dns_query;

pub use handle_dns_query::{AnswerSet, HandleDnsQueryUseCase, ResolutionOutcome};
