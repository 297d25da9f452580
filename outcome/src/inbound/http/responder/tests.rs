//! Tests for the Actix responder.

use super::*;
use crate::domain::{Fault, Status};
use crate::inbound::http::options::{self, ResponseOptions};
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::{Mutex, PoisonError};

// Serialises tests that touch the process-wide options.
static GLOBAL_OPTIONS_LOCK: Mutex<()> = Mutex::new(());

async fn respond<R: Responder<Body = BoxBody>>(responder: R) -> (StatusCode, Option<String>, String) {
    let request = TestRequest::default().to_http_request();
    let response = responder.respond_to(&request);
    let status = response.status();
    let content_type = response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = String::from_utf8(bytes.to_vec()).expect("body is UTF-8");
    (status, content_type, body)
}

fn explicit(options: ResponseOptions) -> ResponseProjector {
    ResponseProjector::new(options)
}

#[rstest]
#[actix_web::test]
async fn success_responds_with_payload_json() {
    let responder = Outcome::success(json!({ "id": 7 }))
        .into_response()
        .with_projector(explicit(ResponseOptions::new()));

    let (status, content_type, body) = respond(responder).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(body, r#"{"id":7}"#);
}

#[rstest]
#[case(Outcome::<Value>::failed("bad"), StatusCode::BAD_REQUEST, r#""bad""#)]
#[case(
    Outcome::<Value>::content(Status::NotExist, Some("gone".to_owned())).expect("content kind"),
    StatusCode::NOT_FOUND,
    r#""gone""#
)]
#[case(
    Outcome::<Value>::failed("teapot").with_external_code(418),
    StatusCode::IM_A_TEAPOT,
    r#""teapot""#
)]
#[actix_web::test]
async fn codes_map_to_http_statuses(
    #[case] outcome: Outcome<Value>,
    #[case] expected_status: StatusCode,
    #[case] expected_body: &str,
) {
    let responder = outcome
        .into_response()
        .with_projector(explicit(ResponseOptions::new()));
    let (status, _, body) = respond(responder).await;
    assert_eq!(status, expected_status);
    assert_eq!(body, expected_body);
}

#[rstest]
#[actix_web::test]
async fn invalid_code_falls_back_to_internal_error() {
    let responder = Outcome::<Value>::empty()
        .into_response_with(true)
        .with_projector(explicit(ResponseOptions::new()));

    let (status, _, body) = respond(responder).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let envelope: Value = serde_json::from_str(&body).expect("envelope JSON");
    assert_eq!(envelope["status"], json!("Unknown"));
    assert_eq!(envelope["statusCode"], json!(0));
}

#[rstest]
#[actix_web::test]
async fn pretty_serializer_indents_body() {
    let responder = Outcome::success(json!({ "id": 7 }))
        .into_response()
        .with_projector(explicit(
            ResponseOptions::new().with_serializer_config(Some(SerializerConfig::pretty())),
        ));

    let (_, _, body) = respond(responder).await;
    assert_eq!(body, "{\n  \"id\": 7\n}");
}

#[rstest]
#[actix_web::test]
async fn projection_failure_is_redacted() {
    let mut payload = std::collections::HashMap::new();
    payload.insert((1, 2), "secret");
    let responder = Outcome::success(payload)
        .into_response()
        .with_projector(explicit(ResponseOptions::new()));

    let (status, _, body) = respond(responder).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn global_options_apply_when_no_projector_is_given() {
    let _guard = GLOBAL_OPTIONS_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    options::install_global(ResponseOptions::new());
    options::set_envelope_default(Some(true));
    options::set_envelope_transform(Some(|outcome: Outcome<Value>| {
        json!({ "wrapped": outcome.message() })
    }));

    let (status, _, body) = respond(Outcome::<Value>::failed("nope")).await;
    options::install_global(ResponseOptions::new());

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, r#"{"wrapped":"nope"}"#);
}

#[rstest]
#[actix_web::test]
async fn explicit_mode_beats_global_default() {
    let _guard = GLOBAL_OPTIONS_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    options::install_global(ResponseOptions::new().with_envelope_default(Some(true)));

    let (_, _, body) = respond(Outcome::<Value>::failed("plain").into_response_with(false)).await;
    options::install_global(ResponseOptions::new());

    assert_eq!(body, r#""plain""#);
}

#[rstest]
#[actix_web::test]
async fn fault_responds_with_internal_error_detail() {
    let fault = Fault::msg("db down");
    let expected = serde_json::to_string(&fault.full_message()).expect("string encodes");
    let responder = Outcome::<Value>::faulted(fault)
        .into_response()
        .with_projector(explicit(ResponseOptions::new()));

    let (status, _, body) = respond(responder).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, expected);
}

#[rstest]
#[actix_web::test]
async fn applied_settings_drive_default_responses() {
    let _guard = GLOBAL_OPTIONS_LOCK
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    options::install_global(ResponseOptions::new());
    crate::inbound::http::ResponseSettings {
        envelope: true,
        pretty: true,
    }
    .apply_globally();

    let (status, _, body) = respond(Outcome::<Value>::failed("")).await;
    options::install_global(ResponseOptions::new());

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains('\n'), "pretty output spans lines");
    let envelope: Value = serde_json::from_str(&body).expect("envelope JSON");
    assert_eq!(
        envelope,
        json!({ "status": "Failed", "message": "Failed", "statusCode": 400, "data": null })
    );
}
