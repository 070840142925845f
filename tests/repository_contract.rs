//! Facade contract invariants.
//!
//! For a predicate matching zero rows the whole facade agrees: absent
//! optional, empty list, zero count, exists false. Empty predicates are
//! rejected before anything executes, and collaborator failures surface
//! unchanged with their cause attached.

use prismdb::{
    CountStatement, DirectPathResolver, DocumentTranslator, EntityRepository, PageRequest,
    Predicate, PredicateSearch, QueryErrorKind, Row, SelectStatement, Session, SessionError,
    SortKey,
};
use serde::Deserialize;
use serde_json::json;
use std::error::Error as _;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct Case {
    id: u64,
    name: String,
}

impl prismdb::Entity for Case {
    const NAME: &'static str = "cases";
}

fn seeded() -> prismdb::MemorySession {
    let mut session = prismdb::MemorySession::new();
    session.insert_all(
        "cases",
        [
            json!({"id": 1, "name": "a"}),
            json!({"id": 2, "name": "b"}),
            json!({"id": 3, "name": "c"}),
        ],
    );
    session
}

fn repository<'s>(session: &'s dyn Session) -> EntityRepository<'s, Case> {
    static TRANSLATOR: DocumentTranslator = DocumentTranslator;
    EntityRepository::open(session, &TRANSLATOR, &TRANSLATOR, &DirectPathResolver)
        .expect("repository opens against a resolvable entity")
}

#[test]
fn zero_match_predicate_agrees_across_the_facade() {
    let session = seeded();
    let repository = repository(&session);
    let nothing = Predicate::eq("name", json!("zzz"));

    assert_eq!(repository.find_one(&nothing).unwrap(), None);
    assert!(repository.find_all(&nothing).unwrap().is_empty());
    assert_eq!(repository.count(&nothing).unwrap(), 0);
    assert!(!repository.exists(&nothing).unwrap());

    let page = repository
        .find_page(&nothing, &PageRequest::first(10))
        .unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total(), 0);
}

#[test]
fn find_one_is_first_of_possibly_many() {
    let session = seeded();
    let repository = repository(&session);

    // Three rows match; absence of a uniqueness failure is the contract.
    let found = repository
        .find_one(&Predicate::gte("id", json!(1)))
        .unwrap()
        .expect("some row matches");
    assert_eq!(found.id, 1);
}

#[test]
fn ordered_find_applies_keys_in_sequence() {
    let mut session = prismdb::MemorySession::new();
    session.insert_all(
        "cases",
        [
            json!({"id": 1, "name": "b", "rank": 1}),
            json!({"id": 2, "name": "a", "rank": 1}),
            json!({"id": 3, "name": "a", "rank": 2}),
        ],
    );
    let repository = repository(&session);

    let cases = repository
        .find_all_ordered(
            &Predicate::gte("id", json!(1)),
            &[SortKey::asc("name"), SortKey::desc("rank")],
        )
        .unwrap();
    let ids: Vec<u64> = cases.iter().map(|case| case.id).collect();
    assert_eq!(ids, [3, 2, 1]);
}

#[test]
fn empty_predicate_fails_fast_instead_of_matching_all_rows() {
    let session = seeded();
    let repository = repository(&session);

    // Folding only absent branches leaves no condition at all.
    let empty = Predicate::any_of([None, None]);
    let err = repository.find_all(&empty).unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::InvalidArgument);
}

#[test]
fn optional_branch_folds_keep_present_conditions() {
    let session = seeded();
    let repository = repository(&session);

    let by_name = |name: Option<&str>| name.map(|n| Predicate::eq("name", json!(n)));
    let predicate = Predicate::any_of([by_name(Some("a")), by_name(None), by_name(Some("c"))]);

    assert_eq!(repository.count(&predicate).unwrap(), 2);
}

#[test]
fn invalid_page_request_is_rejected_before_execution() {
    let session = seeded();
    let repository = repository(&session);

    let err = repository
        .find_page(&Predicate::gte("id", json!(1)), &PageRequest::first(0))
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::InvalidArgument);
}

#[test]
fn page_size_above_the_limit_is_rejected() {
    let session = seeded();
    let repository = repository(&session).with_limits(prismdb::PageLimits {
        default_size: 10,
        max_size: 100,
    });

    let err = repository
        .find_page(&Predicate::gte("id", json!(1)), &PageRequest::first(101))
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::InvalidArgument);
}

/// Session whose statements always fail
struct BrokenSession;

impl Session for BrokenSession {
    fn fetch(&self, _statement: &SelectStatement) -> Result<Vec<Row>, SessionError> {
        Err(SessionError::Unavailable("connection reset".to_string()))
    }

    fn count(&self, _statement: &CountStatement) -> Result<u64, SessionError> {
        Err(SessionError::Unavailable("connection reset".to_string()))
    }
}

#[test]
fn session_failures_surface_as_execution_errors_with_their_cause() {
    let session = BrokenSession;
    let repository = repository(&session);

    let err = repository
        .find_all(&Predicate::eq("name", json!("a")))
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::Execution);

    let cause = err.source().expect("the session failure is preserved");
    assert!(cause.to_string().contains("connection reset"));
}

#[test]
fn count_failures_are_not_treated_differently_from_fetch_failures() {
    let session = BrokenSession;
    let repository = repository(&session);

    let err = repository
        .count(&Predicate::eq("name", json!("a")))
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::Execution);
}
