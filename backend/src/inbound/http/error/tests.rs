//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::http::header::CONTENT_TYPE;
use rstest::rstest;

use crate::middleware::trace::TraceId;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Raise a store fault inside a request scope so it carries `TRACE_ID`.
async fn store_down() -> Error {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    TraceId::scope(trace_id, async {
        Error::service_unavailable("review store not found at data/reviews.csv")
    })
    .await
}

async fn body_text(response: HttpResponse) -> String {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[rstest]
#[case(Error::invalid_request("bad date"))]
#[case(Error::invalid_location("Invalid location"))]
#[case(Error::service_unavailable("store down"))]
#[case(Error::internal("boom"))]
fn listing_failures_are_always_server_errors(#[case] error: Error) {
    assert_eq!(
        ListingFailure::from(error).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[rstest]
#[case(Error::invalid_request("Missing required parameters"))]
#[case(Error::invalid_location("Invalid location"))]
#[case(Error::service_unavailable("store down"))]
#[case(Error::internal("boom"))]
fn submission_failures_are_always_client_errors(#[case] error: Error) {
    assert_eq!(
        SubmissionFailure::from(error).status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[rstest]
#[actix_web::test]
async fn listing_failure_renders_plain_text() {
    let response = ListingFailure::from(store_down().await).error_response();

    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
        Some(TRACE_ID)
    );
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(
        body_text(response).await,
        "An error occurred: review store not found at data/reviews.csv"
    );
}

#[rstest]
#[actix_web::test]
async fn submission_failure_renders_error_envelope() {
    let response = SubmissionFailure::from(store_down().await).error_response();

    assert_eq!(
        response.headers().get(TRACE_ID_HEADER).and_then(|v| v.to_str().ok()),
        Some(TRACE_ID)
    );
    let body: SubmissionErrorBody =
        serde_json::from_str(&body_text(response).await).expect("error envelope");
    assert_eq!(
        body,
        SubmissionErrorBody {
            error: "review store not found at data/reviews.csv".to_owned(),
        }
    );
}

#[rstest]
#[actix_web::test]
async fn missing_trace_id_omits_header() {
    let response = SubmissionFailure::from(Error::invalid_location("Invalid location")).error_response();
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}
