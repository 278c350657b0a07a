//! In-memory store with the same collection semantics as [`crate::LocalStore`].
//!
//! Used as the fake store in handler tests and for throwaway demo runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use academy_core::errors::AcademyResult;
use academy_core::models::identity::{Faculty, Student};
use academy_core::models::notification::{Notification, FEED_CAP};
use academy_core::models::timetable::ClassSession;

use crate::EntityStore;

#[derive(Default)]
struct Collections {
    students: Vec<Student>,
    faculty: Vec<Faculty>,
    classes: Vec<ClassSession>,
    notifications: Vec<Notification>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_students(&self) -> AcademyResult<Vec<Student>> {
        Ok(self.inner.read().await.students.clone())
    }

    async fn insert_student(&self, student: &Student) -> AcademyResult<()> {
        self.inner.write().await.students.push(student.clone());
        Ok(())
    }

    async fn list_faculty(&self) -> AcademyResult<Vec<Faculty>> {
        Ok(self.inner.read().await.faculty.clone())
    }

    async fn insert_faculty(&self, member: &Faculty) -> AcademyResult<()> {
        self.inner.write().await.faculty.push(member.clone());
        Ok(())
    }

    async fn delete_faculty(&self, username: &str) -> AcademyResult<()> {
        self.inner
            .write()
            .await
            .faculty
            .retain(|f| f.username != username);
        Ok(())
    }

    async fn list_classes(&self) -> AcademyResult<Vec<ClassSession>> {
        Ok(self.inner.read().await.classes.clone())
    }

    async fn insert_class(&self, session: &ClassSession) -> AcademyResult<()> {
        self.inner.write().await.classes.push(session.clone());
        Ok(())
    }

    async fn delete_class(&self, id: &str) -> AcademyResult<()> {
        self.inner.write().await.classes.retain(|s| s.id != id);
        Ok(())
    }

    async fn list_notifications(&self) -> AcademyResult<Vec<Notification>> {
        Ok(self.inner.read().await.notifications.clone())
    }

    async fn insert_notification(&self, notification: &Notification) -> AcademyResult<()> {
        let mut inner = self.inner.write().await;
        inner.notifications.insert(0, notification.clone());
        inner.notifications.truncate(FEED_CAP);
        Ok(())
    }
}
