use dnsproxy_domain::DomainError;
use hickory_proto::rr::{Name, Record};
use tracing::debug;

/// Puts upstream answers back under the name the client asked for.
pub struct AnswerRewriter;

impl AnswerRewriter {
    /// Return `record` with its owner name replaced by `original_name`.
    ///
    /// Records for a name that went upstream unchanged are passed through
    /// untouched. Type, class, TTL and record data are always preserved.
    pub fn rewrite(
        original_name: &str,
        queried_domain: &str,
        record: Record,
    ) -> Result<Record, DomainError> {
        if original_name == queried_domain {
            return Ok(record);
        }

        debug!(
            original = %original_name,
            queried = %queried_domain,
            record = %record,
            "Rewriting answer owner name"
        );

        let mut owner = Name::from_ascii(original_name).map_err(|e| {
            DomainError::MalformedRecord(format!(
                "cannot use '{}' as owner of {}: {}",
                original_name, record, e
            ))
        })?;
        owner.set_fqdn(true);

        let mut rewritten = record;
        rewritten.set_name(owner);

        debug!(record = %rewritten, "Answer rewritten");
        Ok(rewritten)
    }
}
