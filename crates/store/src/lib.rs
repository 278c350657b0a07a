//! # Academy Store
//!
//! The entity store shim: a uniform `list`/`insert`/`delete` interface over
//! the four portal collections (students, faculty, timetable sessions,
//! notifications), backed by either a local JSON-file store or a remote
//! tabular backend selected once at startup.
//!
//! The shim does not enforce uniqueness and does not retry; those policies
//! belong to the session gate and the callers. Deleting an absent key is a
//! success, not an error.

pub mod local;
pub mod memory;
pub mod remote;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use academy_core::errors::AcademyResult;
use academy_core::models::identity::{Faculty, Student};
use academy_core::models::notification::Notification;
use academy_core::models::timetable::ClassSession;

pub use local::LocalStore;
pub use memory::MemoryStore;
pub use remote::{RemoteConfig, RemoteStore};
pub use session::SessionCache;

/// Uniform persistence interface over the four portal collections.
///
/// Constructed once at startup and injected as `Arc<dyn EntityStore>` so
/// tests can substitute [`MemoryStore`] or the generated `MockEntityStore`.
#[automock]
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn list_students(&self) -> AcademyResult<Vec<Student>>;
    async fn insert_student(&self, student: &Student) -> AcademyResult<()>;

    async fn list_faculty(&self) -> AcademyResult<Vec<Faculty>>;
    async fn insert_faculty(&self, member: &Faculty) -> AcademyResult<()>;
    /// Removes all faculty entries with the given username. No-op when absent.
    async fn delete_faculty(&self, username: &str) -> AcademyResult<()>;

    async fn list_classes(&self) -> AcademyResult<Vec<ClassSession>>;
    async fn insert_class(&self, session: &ClassSession) -> AcademyResult<()>;
    /// Removes all sessions with the given id. No-op when absent.
    async fn delete_class(&self, id: &str) -> AcademyResult<()>;

    /// Newest-first, capped at [`academy_core::models::notification::FEED_CAP`].
    async fn list_notifications(&self) -> AcademyResult<Vec<Notification>>;
    async fn insert_notification(&self, notification: &Notification) -> AcademyResult<()>;
}

/// Picks the backing store once, from the presence of remote configuration.
pub fn select_store(remote: Option<RemoteConfig>, data_dir: &Path) -> Arc<dyn EntityStore> {
    match remote {
        Some(config) => {
            tracing::info!("Using remote tabular backend at {}", config.url);
            Arc::new(RemoteStore::new(config))
        }
        None => {
            tracing::info!("Using local store in {}", data_dir.display());
            Arc::new(LocalStore::new(data_dir))
        }
    }
}
