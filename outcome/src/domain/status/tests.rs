//! Tests for status codes, priority order and wire decoding.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(Status::Unknown, 0)]
#[case(Status::Success, 200)]
#[case(Status::Exist, 202)]
#[case(Status::NotExist, 404)]
#[case(Status::Failed, 400)]
#[case(Status::Forbidden, 403)]
#[case(Status::Unauthorized, 401)]
#[case(Status::Fault, 500)]
fn code_matches_external_table(#[case] status: Status, #[case] code: u16) {
    assert_eq!(status.code(), code);
}

#[rstest]
fn every_name_round_trips_ignoring_case() {
    for status in Status::ALL {
        let name = status.to_string();
        assert_eq!(Status::from_name(&name), Ok(status));
        assert_eq!(Status::from_name(&name.to_lowercase()), Ok(status));
        assert_eq!(Status::from_name(&name.to_uppercase()), Ok(status));
    }
}

#[rstest]
fn unknown_string_decodes_to_unknown() {
    assert_eq!("Unknown".parse::<Status>(), Ok(Status::Unknown));
}

#[rstest]
#[case("")]
#[case("Exception")]
#[case("Success ")]
fn unmatched_names_are_rejected(#[case] name: &str) {
    assert_eq!(
        Status::from_name(name),
        Err(OutcomeError::UnknownStatusName {
            name: name.to_owned()
        })
    );
}

#[rstest]
fn fault_outranks_every_other_status() {
    for status in Status::ALL {
        if status != Status::Fault {
            assert!(Status::Fault > status, "Fault should outrank {status}");
        }
    }
}

#[rstest]
fn failure_class_ties_break_by_code() {
    assert!(Status::Forbidden > Status::Unauthorized);
    assert!(Status::Unauthorized > Status::Failed);
    assert_eq!(
        [Status::Failed, Status::Forbidden, Status::Unauthorized]
            .into_iter()
            .max(),
        Some(Status::Forbidden)
    );
}

#[rstest]
fn failure_class_outranks_success_class() {
    for failure in [Status::Failed, Status::Forbidden, Status::Unauthorized] {
        for success in [Status::Success, Status::Exist, Status::NotExist] {
            assert!(failure > success, "{failure} should outrank {success}");
        }
        assert!(failure > Status::Unknown);
    }
}

#[rstest]
fn class_predicates_partition_known_statuses() {
    assert!(Status::Exist.is_success_class());
    assert!(Status::Exist.is_content_class());
    assert!(!Status::Success.is_content_class());
    assert!(Status::Unauthorized.is_failure_class());
    assert!(!Status::Fault.is_failure_class());
    assert!(!Status::Fault.is_success_class());
    assert!(!Status::Unknown.is_success_class());
    assert!(!Status::Unknown.is_failure_class());
}

#[rstest]
fn serializes_to_variant_name() {
    let value = serde_json::to_value(Status::NotExist).expect("status serializes");
    assert_eq!(value, json!("NotExist"));
}

#[rstest]
fn deserializes_case_insensitively() {
    let status: Status = serde_json::from_value(json!("forbidden")).expect("known name decodes");
    assert_eq!(status, Status::Forbidden);
}

#[rstest]
fn null_deserializes_to_unknown() {
    let status: Status = serde_json::from_value(json!(null)).expect("null decodes");
    assert_eq!(status, Status::Unknown);
}

#[rstest]
fn deserialization_error_names_the_token() {
    let err = serde_json::from_value::<Status>(json!("Pending"))
        .expect_err("unknown name must fail");
    assert!(err.to_string().contains("Pending"), "got: {err}");
}
