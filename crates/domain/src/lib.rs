//! dnsproxy Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod qualifier;

pub use config::{CliOverrides, Config, ConfigError, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use qualifier::{qualify, QualificationAttempt};
