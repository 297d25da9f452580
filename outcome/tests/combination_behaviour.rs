//! End-to-end behaviour: combine outcomes from several lookups and serve the
//! merged result through an Actix handler.

use actix_web::http::StatusCode;
use actix_web::{App, get, web};
use outcome::inbound::http::{IntoOutcomeResponse, OutcomeResponse, ResponseOptions};
use outcome::{CollectAsync, Fault, Outcome, Reduce, ResponseProjector, Status, collect};
use rstest::rstest;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct Profile {
    name: String,
    orders: usize,
}

async fn load_name(id: u32) -> Outcome<String> {
    match id {
        0 => Outcome::failed_as(Status::Unauthorized, Some("who are you".to_owned()))
            .unwrap_or_else(|err| Outcome::faulted(Fault::new(err))),
        13 => Outcome::faulted(std::io::Error::other("name store offline")),
        _ => Outcome::from_value_with_message(format!("user-{id}"), "name"),
    }
}

async fn load_orders(id: u32) -> Outcome<usize> {
    if id == 7 {
        Outcome::content(Status::NotExist, Some("no orders".to_owned()))
            .unwrap_or_else(|err| Outcome::faulted(Fault::new(err)))
    } else {
        Outcome::from_value_with_message(3, "orders")
    }
}

async fn load_profile(id: u32) -> Outcome<Profile> {
    (load_name(id), load_orders(id))
        .reduce_async(|(name, orders)| Profile {
            name: name.payload().cloned().unwrap_or_default(),
            orders: orders.payload().copied().unwrap_or_default(),
        })
        .await
}

/// Serves a merged profile in value mode.
#[get("/profiles/{id}")]
async fn profile(path: web::Path<u32>) -> OutcomeResponse<Profile> {
    load_profile(path.into_inner())
        .await
        .into_response()
        .with_projector(ResponseProjector::new(ResponseOptions::new()))
}

/// Serves a merged profile wrapped in the envelope.
#[get("/envelope/profiles/{id}")]
async fn profile_envelope(path: web::Path<u32>) -> OutcomeResponse<Profile> {
    load_profile(path.into_inner())
        .await
        .into_response_with(true)
        .with_projector(ResponseProjector::new(ResponseOptions::new()))
}

#[rstest]
fn mixed_inputs_resolve_to_worst_failure() {
    let merged = collect!(
        Outcome::success(1),
        Outcome::<i32>::content(Status::NotExist, Some("gone".to_owned())).expect("content kind"),
        Outcome::<i32>::failed("bad"),
    )
    .reduce(|_| 0);

    assert_eq!(merged.status(), Status::Failed);
    assert_eq!(
        merged.message(),
        Some("Result 0 not contain Message or Success,gone,bad")
    );
    assert!(merged.payload().is_none());
}

#[rstest]
#[tokio::test]
async fn async_merge_matches_sync_merge() {
    let merged = load_profile(7).await;
    assert_eq!(merged.status(), Status::Success);
    assert_eq!(merged.message(), Some("name,no orders"));
    assert_eq!(
        merged.payload(),
        Some(&Profile {
            name: "user-7".to_owned(),
            orders: 0,
        })
    );
}

#[rstest]
#[case(1, StatusCode::OK, json!({ "name": "user-1", "orders": 3 }))]
#[case(0, StatusCode::UNAUTHORIZED, json!("who are you,orders"))]
#[actix_web::test]
async fn handler_serves_value_bodies(
    #[case] id: u32,
    #[case] expected_status: StatusCode,
    #[case] expected_body: Value,
) {
    let app = actix_web::test::init_service(App::new().service(profile)).await;
    let request = actix_web::test::TestRequest::get()
        .uri(&format!("/profiles/{id}"))
        .to_request();
    let response = actix_web::test::call_service(&app, request).await;

    assert_eq!(response.status(), expected_status);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(body, expected_body);
}

#[rstest]
#[actix_web::test]
async fn handler_reports_faults_as_internal_errors() {
    let app = actix_web::test::init_service(App::new().service(profile)).await;
    let request = actix_web::test::TestRequest::get().uri("/profiles/13").to_request();
    let response = actix_web::test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_web::test::read_body_json(response).await;
    let text = body.as_str().expect("fault body is a string");
    assert!(text.contains("name store offline"));
}

#[rstest]
#[actix_web::test]
async fn handler_serves_envelopes() {
    let app = actix_web::test::init_service(App::new().service(profile_envelope)).await;
    let request = actix_web::test::TestRequest::get()
        .uri("/envelope/profiles/13")
        .to_request();
    let response = actix_web::test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_web::test::read_body_json(response).await;
    assert_eq!(
        body,
        json!({
            "status": "Fault",
            "message": "Fault",
            "statusCode": 500,
            "data": null
        })
    );
}
