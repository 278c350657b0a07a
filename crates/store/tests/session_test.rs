use pretty_assertions::assert_eq;
use tempfile::tempdir;

use academy_core::models::identity::{Admin, Identity, Student};
use academy_store::SessionCache;

fn student_identity() -> Identity {
    Identity::Student(Student {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone_number: "555-0101".to_string(),
        qualification: "BSc".to_string(),
        location: "Springfield".to_string(),
        age: 21,
        fee_screenshot: Some("data:image/png;base64,AAAA".to_string()),
    })
}

#[tokio::test]
async fn test_session_round_trip_strips_student_screenshot() {
    let dir = tempdir().unwrap();
    let cache = SessionCache::new(dir.path());

    assert_eq!(cache.load().await, None);

    cache.save(&student_identity()).await.unwrap();
    match cache.load().await.unwrap() {
        Identity::Student(s) => {
            assert_eq!(s.email, "alice@example.com");
            // The cached copy drops the fee screenshot payload.
            assert_eq!(s.fee_screenshot, None);
        }
        other => panic!("expected student, got {other:?}"),
    }
}

#[tokio::test]
async fn test_session_keeps_full_non_student_identity() {
    let dir = tempdir().unwrap();
    let cache = SessionCache::new(dir.path());

    let admin = Identity::Admin(Admin::default());
    cache.save(&admin).await.unwrap();
    assert_eq!(cache.load().await, Some(admin));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let dir = tempdir().unwrap();
    let cache = SessionCache::new(dir.path());

    cache.save(&student_identity()).await.unwrap();
    cache.clear().await.unwrap();
    assert_eq!(cache.load().await, None);

    // Clearing an absent session is fine.
    cache.clear().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_session_reads_as_no_session() {
    let dir = tempdir().unwrap();
    let cache = SessionCache::new(dir.path());

    tokio::fs::write(dir.path().join("academy_user_session.json"), b"{not json")
        .await
        .unwrap();
    assert_eq!(cache.load().await, None);
}
