use axum::extract::{Path, State};
use axum::Json;
use pretty_assertions::assert_eq;

use academy_api::handlers;
use academy_api::handlers::faculty::CreateFacultyRequest;
use academy_core::errors::AcademyError;

use crate::test_utils::TestContext;

fn request(name: &str, username: &str) -> CreateFacultyRequest {
    CreateFacultyRequest {
        name: name.to_string(),
        username: username.to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_add_faculty_applies_fixed_labels() {
    let ctx = TestContext::new();

    let Json(faculty) = handlers::faculty::add_faculty(
        State(ctx.state.clone()),
        Json(request("Dr. Smith", "smith")),
    )
    .await
    .unwrap();

    assert_eq!(faculty.len(), 1);
    assert_eq!(faculty[0].qualification, "Faculty Member");
    assert_eq!(faculty[0].location, "Campus");
}

#[tokio::test]
async fn test_add_faculty_rejects_taken_username() {
    let ctx = TestContext::new();

    handlers::faculty::add_faculty(State(ctx.state.clone()), Json(request("Dr. Smith", "smith")))
        .await
        .unwrap();

    let err = handlers::faculty::add_faculty(
        State(ctx.state.clone()),
        Json(request("Another Smith", "smith")),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::DuplicateAccount(_)));
    assert_eq!(ctx.state.store.list_faculty().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_faculty_requires_all_fields() {
    let ctx = TestContext::new();

    let err = handlers::faculty::add_faculty(
        State(ctx.state.clone()),
        Json(CreateFacultyRequest {
            name: "Dr. Smith".to_string(),
            username: " ".to_string(),
            password: "secret".to_string(),
        }),
    )
    .await
    .unwrap_err();
    assert!(matches!(err.0, AcademyError::Validation(_)));
}

#[tokio::test]
async fn test_delete_faculty_removes_exactly_one() {
    let ctx = TestContext::new();

    for (name, username) in [("Dr. Smith", "smith"), ("Dr. Jones", "jones")] {
        handlers::faculty::add_faculty(State(ctx.state.clone()), Json(request(name, username)))
            .await
            .unwrap();
    }

    let Json(remaining) =
        handlers::faculty::delete_faculty(State(ctx.state.clone()), Path("smith".to_string()))
            .await
            .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].username, "jones");

    // Deleting a non-existent username is a no-op, not an error.
    let Json(unchanged) =
        handlers::faculty::delete_faculty(State(ctx.state.clone()), Path("nobody".to_string()))
            .await
            .unwrap();
    assert_eq!(unchanged.len(), 1);
}
