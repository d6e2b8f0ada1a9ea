use crate::services::UpstreamExchanger;
use dnsproxy_domain::{DnsQuery, DomainError, QualificationAttempt, ResolverConfig};
use hickory_proto::rr::Record;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Why an answer set looks the way it does.
///
/// Every failure still reaches the client as an empty answer section; this
/// keeps the distinction visible to callers, logs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Answered,
    NoQuestion,
    Failed(DomainError),
}

#[derive(Debug, Clone)]
pub struct AnswerSet {
    pub records: Vec<Record>,
    pub outcome: ResolutionOutcome,
    /// Qualification attempts made; never more than two.
    pub attempts: usize,
}

impl AnswerSet {
    fn answered(records: Vec<Record>, attempts: usize) -> Self {
        Self {
            records,
            outcome: ResolutionOutcome::Answered,
            attempts,
        }
    }

    fn failed(error: DomainError, attempts: usize) -> Self {
        Self {
            records: Vec::new(),
            outcome: ResolutionOutcome::Failed(error),
            attempts,
        }
    }

    fn no_question() -> Self {
        Self {
            records: Vec::new(),
            outcome: ResolutionOutcome::NoQuestion,
            attempts: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn error(&self) -> Option<&DomainError> {
        match &self.outcome {
            ResolutionOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Qualify, forward, retry once on NXDOMAIN with the name stripped to its
/// first label, and hand back the rewritten answers.
pub struct HandleDnsQueryUseCase {
    config: Arc<ResolverConfig>,
    exchanger: UpstreamExchanger,
}

impl HandleDnsQueryUseCase {
    pub fn new(config: Arc<ResolverConfig>, exchanger: UpstreamExchanger) -> Self {
        Self { config, exchanger }
    }

    /// Resolve the first of `questions`. Never fails: errors end up in
    /// `AnswerSet::outcome` with no records.
    pub async fn execute(&self, questions: &[DnsQuery]) -> AnswerSet {
        let Some(query) = questions.first() else {
            error!("DNS message carries no question");
            return AnswerSet::no_question();
        };

        if questions.len() > 1 {
            debug!(count = questions.len(), "Only the first question is resolved");
        }

        let start = Instant::now();
        let answer = self.resolve(query).await;

        match &answer.outcome {
            ResolutionOutcome::Answered => info!(
                name = %query.name,
                record_type = %query.record_type,
                answers = answer.records.len(),
                attempts = answer.attempts,
                elapsed_us = start.elapsed().as_micros() as u64,
                "Query answered"
            ),
            ResolutionOutcome::Failed(e) => warn!(
                name = %query.name,
                record_type = %query.record_type,
                error = %e,
                attempts = answer.attempts,
                elapsed_us = start.elapsed().as_micros() as u64,
                "Query failed, replying with an empty answer"
            ),
            ResolutionOutcome::NoQuestion => {}
        }

        answer
    }

    async fn resolve(&self, query: &DnsQuery) -> AnswerSet {
        let first = QualificationAttempt::first(&query.name, &self.config);
        if first.qualified_domain != *query.name {
            info!(from = %query.name, to = %first.qualified_domain, "Qualified domain");
        }

        match self.attempt(query, &first).await {
            Ok(records) => AnswerSet::answered(records, 1),
            Err(e) if e.is_name_not_found() => {
                let retry = QualificationAttempt::retry(&query.name, &self.config);
                info!(
                    name = %query.name,
                    retry = %retry.qualified_domain,
                    "Retry with domain postfix stripped"
                );

                match self.attempt(query, &retry).await {
                    Ok(records) => AnswerSet::answered(records, 2),
                    Err(e) => AnswerSet::failed(e, 2),
                }
            }
            Err(e) => AnswerSet::failed(e, 1),
        }
    }

    async fn attempt(
        &self,
        query: &DnsQuery,
        attempt: &QualificationAttempt,
    ) -> Result<Vec<Record>, DomainError> {
        self.exchanger
            .exchange(&attempt.qualified_domain, query.record_type, &query.name)
            .await
    }
}
