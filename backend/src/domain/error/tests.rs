//! Tests for error construction, detail merging and serialisation.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::store_error("failed to update pet status")
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::unauthorized("nope"), ErrorCode::Unauthorized)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::conflict("dup"), ErrorCode::Conflict)]
#[case(Error::store_error("db"), ErrorCode::StoreError)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_replaces_blank_message_with_fallback() {
    let err = Error::new(ErrorCode::NotFound, "  ");
    assert_eq!(err.message(), "not found");
}

#[rstest]
fn try_with_trace_id_rejects_empty_values(base_error: Error) {
    let result = base_error.try_with_trace_id("   ");
    assert_eq!(result, Err(ErrorValidationError::EmptyTraceId));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope(base_error: Error) {
    assert!(base_error.trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_detail_builds_object(base_error: Error) {
    let err = base_error
        .with_detail("step", json!("update_pet_status"))
        .with_detail("petId", json!(7));
    assert_eq!(
        err.details(),
        Some(&json!({ "step": "update_pet_status", "petId": 7 }))
    );
}

#[rstest]
fn with_detail_wraps_non_object_details(base_error: Error) {
    let err = base_error
        .with_details(json!("raw"))
        .with_detail("step", json!("delete_pet"));
    assert_eq!(
        err.details(),
        Some(&json!({ "details": "raw", "step": "delete_pet" }))
    );
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let err = Error::conflict("category already exists");
    let value = serde_json::to_value(&err).expect("serialise error");
    assert_eq!(
        value,
        json!({ "code": "conflict", "message": "category already exists" })
    );
}

#[rstest]
fn deserialise_rejects_blank_message() {
    let result: Result<Error, _> =
        serde_json::from_value(json!({ "code": "not_found", "message": " " }));
    assert!(result.is_err());
}

#[rstest]
fn deserialise_round_trips_trace_id() {
    let err = Error::not_found("missing").with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&err).expect("serialise");
    let back: Error = serde_json::from_value(value).expect("deserialise");
    assert_eq!(back.trace_id(), Some(TRACE_ID));
}
