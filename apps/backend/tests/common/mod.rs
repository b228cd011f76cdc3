#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{assert_problem_details_from_parts, ProblemDetailsLike};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

// Every test owns a fresh in-memory database, so requests commit by default.
// `SCORELANE_TXN_POLICY=rollback` flips a binary to rollback-on-ok.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = match std::env::var("SCORELANE_TXN_POLICY") {
        Ok(value) => scorelane::db::txn_policy::policy_from_env_value(Some(&value)),
        Err(_) => scorelane::db::txn_policy::TxnPolicy::CommitOnOk,
    };

    scorelane::db::txn_policy::set_txn_policy(policy);
}

/// Consume an error response and check it against the problem+json contract.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        None,
    )
}
