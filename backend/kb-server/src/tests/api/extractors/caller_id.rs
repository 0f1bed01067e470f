use crate::tests::create_test_state;
use crate::{ApiError, CALLER_ID_HEADER, CallerId};

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(CALLER_ID_HEADER, "12345678-1234-1234-1234-123456789abc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerId::from_request_parts(&mut parts, &state).await;

    let caller = result.unwrap();
    assert_eq!(caller.0.to_string(), "12345678-1234-1234-1234-123456789abc");
}

#[tokio::test]
async fn test_extractor_trims_whitespace() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(CALLER_ID_HEADER, " 12345678-1234-1234-1234-123456789abc ")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerId::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_extractor_missing_header_is_unauthenticated() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerId::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_uuid() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(CALLER_ID_HEADER, "desktop-user")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CallerId::from_request_parts(&mut parts, &state).await;

    match result {
        Err(error) => assert_that!(error.code(), eq("UNAUTHENTICATED")),
        Ok(_) => panic!("non-UUID caller id was accepted"),
    }
}
