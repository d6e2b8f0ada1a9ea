//! Domain qualification
//!
//! Turns the name a client asked for into the name sent upstream. A short,
//! single-label name (`"web."`) is expanded with the primary search suffix
//! (`"web.cluster.local."`); a multi-label name is forwarded as-is unless the
//! caller asks for it to be stripped back to its first label first.

use crate::config::ResolverConfig;

const SEPARATOR: char = '.';

/// A candidate name to send upstream for one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualificationAttempt {
    pub qualified_domain: String,
    pub stripped: bool,
}

impl QualificationAttempt {
    /// The first attempt keeps whatever suffix the client supplied.
    pub fn first(original_name: &str, config: &ResolverConfig) -> Self {
        Self::new(original_name, config, false)
    }

    /// The retry after NXDOMAIN discards everything past the first label.
    pub fn retry(original_name: &str, config: &ResolverConfig) -> Self {
        Self::new(original_name, config, true)
    }

    fn new(original_name: &str, config: &ResolverConfig, stripped: bool) -> Self {
        Self {
            qualified_domain: qualify(original_name, config.primary_search_domain(), stripped),
            stripped,
        }
    }
}

/// Qualify `original_name` against `search_suffix`.
///
/// Total over any input: a name without a separator gets a trailing one and
/// the root (or empty) name comes back as `"."`. A missing suffix leaves
/// single-label names unqualified.
pub fn qualify(
    original_name: &str,
    search_suffix: Option<&str>,
    strip_to_first_label: bool,
) -> String {
    if original_name.is_empty() || original_name == "." {
        return ".".to_string();
    }

    let mut domain = original_name.to_string();
    if !domain.contains(SEPARATOR) {
        domain.push(SEPARATOR);
    }

    // Index just past the first separator; always in bounds after the push above.
    let first_label_end = domain.find(SEPARATOR).map_or(domain.len(), |idx| idx + 1);
    if strip_to_first_label {
        domain.truncate(first_label_end);
    }

    if first_label_end == domain.len() {
        let suffix = search_suffix
            .map(|s| s.trim_matches(SEPARATOR))
            .filter(|s| !s.is_empty());
        if let Some(suffix) = suffix {
            domain.push_str(suffix);
            domain.push(SEPARATOR);
        }
    }

    domain
}
