use pipe_backend_application::services::{FnRule, ResolverRegistry};
use pipe_backend_domain::{Answer, DomainError, QueryType};
use std::sync::Arc;

mod helpers;
use helpers::*;

#[test]
fn test_empty_registry_matches_nothing() {
    let registry = ResolverRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.first_match(&lookup("foo.my.net", QueryType::A)).is_none());
}

#[test]
fn test_first_registered_rule_wins() {
    let registry = ResolverRegistry::new();
    registry.register(a_record("foo.my.net", "1.1.1.1"));
    registry.register(a_record("foo.my.net", "2.2.2.2"));

    let request = lookup("foo.my.net", QueryType::A);
    let answer = registry.resolve(&request).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(answer.response(), vec!["DATA\tfoo.my.net\tIN\tA\t3600\t1\t1.1.1.1"]);
}

#[test]
fn test_matching_is_case_insensitive_and_ignores_root_dot() {
    let registry = ResolverRegistry::new();
    registry.register(a_record("foo.my.net", "1.1.1.1"));

    assert!(registry.first_match(&lookup("FOO.My.Net.", QueryType::A)).is_some());
    assert!(registry.first_match(&lookup("bar.my.net", QueryType::A)).is_none());
}

#[test]
fn test_clear_empties_registry() {
    let registry = ResolverRegistry::new();
    registry.register(a_record("foo.my.net", "1.1.1.1"));
    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.first_match(&lookup("foo.my.net", QueryType::A)).is_none());
}

#[test]
fn test_replace_all_swaps_complete_set() {
    let registry = ResolverRegistry::new();
    registry.register(a_record("old.my.net", "1.1.1.1"));

    registry.replace_all(vec![
        a_record("new.my.net", "2.2.2.2"),
        a_record("other.my.net", "3.3.3.3"),
    ]);

    assert_eq!(registry.rule_names(), vec!["new.my.net", "other.my.net"]);
    assert!(registry.first_match(&lookup("old.my.net", QueryType::A)).is_none());
}

#[test]
fn test_dispatch_maps_not_found() {
    let registry = ResolverRegistry::new();
    let rule = not_found_rule("foo.my.net");
    let request = lookup("foo.my.net", QueryType::A);

    let result = registry.dispatch(&rule, &request);
    assert_eq!(result.unwrap_err(), DomainError::RecordNotFound("foo.my.net".to_string()));
}

#[test]
fn test_dispatch_maps_handler_failure() {
    let registry = ResolverRegistry::new();
    let rule = failing_rule("foo.my.net");

    match registry.dispatch(&rule, &lookup("foo.my.net", QueryType::A)) {
        Err(DomainError::HandlerFailed { rule, reason }) => {
            assert_eq!(rule, "foo.my.net");
            assert_eq!(reason, "backend unreachable");
        }
        other => panic!("unexpected dispatch result: {:?}", other),
    }
}

#[test]
fn test_dispatch_contains_panics() {
    let registry = ResolverRegistry::new();
    let rule = panicking_rule("foo.my.net");

    match registry.dispatch(&rule, &lookup("foo.my.net", QueryType::A)) {
        Err(DomainError::HandlerFailed { reason, .. }) => {
            assert!(reason.contains("record blew up"));
        }
        other => panic!("unexpected dispatch result: {:?}", other),
    }
}

#[test]
fn test_resolve_unknown_name_is_not_found() {
    let registry = ResolverRegistry::new();
    let result = registry.resolve(&lookup("nowhere.my.net", QueryType::ANY));
    assert!(matches!(result, Err(DomainError::RecordNotFound(_))));
}

#[test]
fn test_custom_matcher_sees_whole_request() {
    let registry = ResolverRegistry::new();
    registry.register(Arc::new(FnRule::new(
        "txt-only",
        |request| request.qtype == QueryType::TXT,
        |request| Ok(Answer::for_request(request).record(QueryType::TXT, "\"hi\"")),
    )));

    assert!(registry.first_match(&lookup("a.my.net", QueryType::TXT)).is_some());
    assert!(registry.first_match(&lookup("a.my.net", QueryType::A)).is_none());
}
