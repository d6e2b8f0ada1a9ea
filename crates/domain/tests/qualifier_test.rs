use dnsproxy_domain::{qualify, QualificationAttempt};

mod helpers;
use helpers::ResolverConfigBuilder;

const SUFFIXES: [&str; 3] = ["cluster.local", "svc.cluster.local", "corp.example"];

#[test]
fn test_fully_qualified_names_are_idempotent() {
    let names = ["example.com.", "foo.bar.", "a.b.c.d.", "api.default.svc.cluster.local."];

    for suffix in SUFFIXES {
        for name in names {
            assert_eq!(qualify(name, Some(suffix), false), name, "suffix {}", suffix);
        }
    }
}

#[test]
fn test_unqualified_names_get_the_suffix() {
    for suffix in SUFFIXES {
        for label in ["a", "web", "redis-master"] {
            let name = format!("{}.", label);
            assert_eq!(
                qualify(&name, Some(suffix), false),
                format!("{}.{}.", label, suffix)
            );
        }
    }
}

#[test]
fn test_strip_keeps_only_first_label() {
    for suffix in SUFFIXES {
        assert_eq!(
            qualify("a.b.", Some(suffix), true),
            format!("a.{}.", suffix)
        );
        assert_eq!(
            qualify("db.prod.internal.", Some(suffix), true),
            format!("db.{}.", suffix)
        );
    }
}

#[test]
fn test_first_attempt_uses_primary_search_domain() {
    let config = ResolverConfigBuilder::kubernetes().build();

    let attempt = QualificationAttempt::first("web.", &config);

    assert_eq!(attempt.qualified_domain, "web.default.svc.cluster.local.");
    assert!(!attempt.stripped);
}

#[test]
fn test_retry_attempt_strips_before_qualifying() {
    let config = ResolverConfigBuilder::new().build();

    let attempt = QualificationAttempt::retry("foo.bar.", &config);

    assert_eq!(attempt.qualified_domain, "foo.cluster.local.");
    assert!(attempt.stripped);
}

#[test]
fn test_attempts_without_search_domains() {
    let config = ResolverConfigBuilder::new().no_search_domains().build();

    assert_eq!(QualificationAttempt::first("web", &config).qualified_domain, "web.");
    assert_eq!(QualificationAttempt::retry("web.corp.", &config).qualified_domain, "web.");
}
