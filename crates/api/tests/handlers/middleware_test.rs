use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pretty_assertions::assert_eq;

use academy_api::handlers;
use academy_api::middleware::error_handling::AppError;
use academy_core::errors::AcademyError;
use academy_store::MockEntityStore;

use crate::test_utils::{register_payload, TestContext};

#[test]
fn test_error_status_mapping() {
    let cases = [
        (
            AcademyError::Validation("missing".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AcademyError::DuplicateAccount("taken".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            AcademyError::AccountNotFound("ghost".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (AcademyError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (
            AcademyError::Backend(eyre::eyre!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = AppError(error).into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_store_failure_surfaces_as_internal_error() {
    let mut store = MockEntityStore::new();
    store
        .expect_list_students()
        .returning(|| Err(AcademyError::Backend(eyre::eyre!("table unreachable"))));

    let ctx = TestContext::with_store(Arc::new(store));
    let err = handlers::auth::register(
        State(ctx.state.clone()),
        Json(register_payload("Alice", "alice@example.com")),
    )
    .await
    .unwrap_err();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
