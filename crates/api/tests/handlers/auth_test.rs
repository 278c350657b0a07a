use axum::extract::State;
use axum::Json;
use pretty_assertions::assert_eq;

use academy_api::gate::{LoginRequest, StaffLoginRequest};
use academy_api::handlers;
use academy_core::errors::AcademyError;
use academy_core::models::identity::{Faculty, Identity};

use crate::test_utils::{register_payload, TestContext};

#[tokio::test]
async fn test_register_then_case_insensitive_login() {
    let ctx = TestContext::new();

    // Register student A.
    let Json(identity) = handlers::auth::register(
        State(ctx.state.clone()),
        Json(register_payload("Alice", "alice@example.com")),
    )
    .await
    .unwrap();
    match &identity {
        Identity::Student(s) => {
            assert_eq!(s.email, "alice@example.com");
            assert_eq!(s.age, 21);
        }
        other => panic!("expected student, got {other:?}"),
    }

    // Log out.
    handlers::auth::logout(State(ctx.state.clone())).await.unwrap();
    assert_eq!(ctx.state.session.load().await, None);

    // Log back in with a differently-cased email: same stored record.
    let Json(logged_in) = handlers::auth::login(
        State(ctx.state.clone()),
        Json(LoginRequest {
            email: "ALICE@EXAMPLE.COM".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(logged_in, identity);
}

#[tokio::test]
async fn test_duplicate_registration_rejected() {
    let ctx = TestContext::new();

    handlers::auth::register(
        State(ctx.state.clone()),
        Json(register_payload("Alice", "alice@example.com")),
    )
    .await
    .unwrap();

    // Same email, different case: rejected, collection size unchanged.
    let err = handlers::auth::register(
        State(ctx.state.clone()),
        Json(register_payload("Alice Again", "Alice@Example.com")),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::DuplicateAccount(_)));

    let students = ctx.state.store.list_students().await.unwrap();
    assert_eq!(students.len(), 1);
}

#[tokio::test]
async fn test_registration_requires_all_fields() {
    let ctx = TestContext::new();

    let mut missing_email = register_payload("Alice", "  ");
    missing_email.email = "  ".to_string();
    let err = handlers::auth::register(State(ctx.state.clone()), Json(missing_email))
        .await
        .unwrap_err();
    assert!(matches!(err.0, AcademyError::Validation(_)));

    let mut no_proof = register_payload("Alice", "alice@example.com");
    no_proof.fee_screenshot = None;
    let err = handlers::auth::register(State(ctx.state.clone()), Json(no_proof))
        .await
        .unwrap_err();
    assert!(matches!(err.0, AcademyError::Validation(_)));

    assert!(ctx.state.store.list_students().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_not_found() {
    let ctx = TestContext::new();

    let err = handlers::auth::login(
        State(ctx.state.clone()),
        Json(LoginRequest {
            email: "ghost@example.com".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::AccountNotFound(_)));
}

#[tokio::test]
async fn test_admin_short_circuit() {
    let ctx = TestContext::new();

    let Json(identity) = handlers::auth::staff_login(
        State(ctx.state.clone()),
        Json(StaffLoginRequest {
            username: "noor".to_string(),
            password: "noor123".to_string(),
        }),
    )
    .await
    .unwrap();
    assert!(identity.is_admin());

    let err = handlers::auth::staff_login(
        State(ctx.state.clone()),
        Json(StaffLoginRequest {
            username: "noor".to_string(),
            password: "wrong".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::InvalidCredentials));
}

#[tokio::test]
async fn test_faculty_login_matches_username_or_display_name() {
    let ctx = TestContext::new();
    ctx.state
        .store
        .insert_faculty(&Faculty::new(
            "Dr. Smith".to_string(),
            "smith".to_string(),
            "secret".to_string(),
        ))
        .await
        .unwrap();

    // By username.
    let Json(by_username) = handlers::auth::staff_login(
        State(ctx.state.clone()),
        Json(StaffLoginRequest {
            username: "smith".to_string(),
            password: "secret".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(by_username.name(), "Dr. Smith");

    // The widened lookup also accepts the display name.
    let Json(by_name) = handlers::auth::staff_login(
        State(ctx.state.clone()),
        Json(StaffLoginRequest {
            username: "Dr. Smith".to_string(),
            password: "secret".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(by_name, by_username);

    // Password must still match exactly.
    let err = handlers::auth::staff_login(
        State(ctx.state.clone()),
        Json(StaffLoginRequest {
            username: "smith".to_string(),
            password: "Secret".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::InvalidCredentials));
}

#[tokio::test]
async fn test_session_cache_holds_trimmed_identity() {
    let ctx = TestContext::new();

    handlers::auth::register(
        State(ctx.state.clone()),
        Json(register_payload("Alice", "alice@example.com")),
    )
    .await
    .unwrap();

    // The cached copy is the student without the fee screenshot.
    match ctx.state.session.load().await.unwrap() {
        Identity::Student(s) => {
            assert_eq!(s.email, "alice@example.com");
            assert_eq!(s.fee_screenshot, None);
        }
        other => panic!("expected student, got {other:?}"),
    }

    // The stored record keeps the full payload.
    let students = ctx.state.store.list_students().await.unwrap();
    assert!(students[0].fee_screenshot.is_some());
}
