//! Durable local key-value store.
//!
//! One JSON file per fixed collection key inside the data directory, each
//! holding a serialized array. Every mutation re-reads and rewrites the
//! whole array, which is O(n) per write and fine at the dozens-to-hundreds
//! scale this portal serves.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use eyre::WrapErr;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;

use academy_core::errors::AcademyResult;
use academy_core::models::identity::{Faculty, Student};
use academy_core::models::notification::{Notification, FEED_CAP};
use academy_core::models::timetable::ClassSession;

use crate::EntityStore;

pub const USERS_KEY: &str = "academy_registered_users";
pub const FACULTY_KEY: &str = "academy_faculty_users";
pub const TIMETABLE_KEY: &str = "academy_timetable";
pub const NOTIF_KEY: &str = "academy_notifications";

pub struct LocalStore {
    dir: PathBuf,
    // Serializes read-modify-write cycles against the same file.
    write_lock: Mutex<()>,
}

impl LocalStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Reads a collection; a missing file is an empty collection.
    async fn read<T: DeserializeOwned>(&self, key: &str) -> AcademyResult<Vec<T>> {
        let path = self.path_for(key);
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let items = serde_json::from_slice(&bytes)
                    .wrap_err_with(|| format!("Corrupt collection file {}", path.display()))?;
                Ok(items)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(eyre::Report::new(err)
                .wrap_err(format!("Failed to read {}", path.display()))
                .into()),
        }
    }

    async fn write<T: Serialize>(&self, key: &str, items: &[T]) -> AcademyResult<()> {
        let path = self.path_for(key);
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(eyre::Report::new)?;
        let bytes = serde_json::to_vec(items).map_err(eyre::Report::new)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|err| {
                eyre::Report::new(err).wrap_err(format!("Failed to write {}", path.display()))
            })?;
        Ok(())
    }

    async fn append<T: Serialize + DeserializeOwned + Send>(
        &self,
        key: &str,
        item: T,
    ) -> AcademyResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<T> = self.read(key).await?;
        items.push(item);
        self.write(key, &items).await
    }

    async fn retain<T, F>(&self, key: &str, keep: F) -> AcademyResult<()>
    where
        T: Serialize + DeserializeOwned + Send,
        F: Fn(&T) -> bool + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<T> = self.read(key).await?;
        items.retain(|item| keep(item));
        self.write(key, &items).await
    }
}

#[async_trait]
impl EntityStore for LocalStore {
    async fn list_students(&self) -> AcademyResult<Vec<Student>> {
        self.read(USERS_KEY).await
    }

    async fn insert_student(&self, student: &Student) -> AcademyResult<()> {
        self.append(USERS_KEY, student.clone()).await
    }

    async fn list_faculty(&self) -> AcademyResult<Vec<Faculty>> {
        self.read(FACULTY_KEY).await
    }

    async fn insert_faculty(&self, member: &Faculty) -> AcademyResult<()> {
        self.append(FACULTY_KEY, member.clone()).await
    }

    async fn delete_faculty(&self, username: &str) -> AcademyResult<()> {
        self.retain(FACULTY_KEY, |f: &Faculty| f.username != username)
            .await
    }

    async fn list_classes(&self) -> AcademyResult<Vec<ClassSession>> {
        self.read(TIMETABLE_KEY).await
    }

    async fn insert_class(&self, session: &ClassSession) -> AcademyResult<()> {
        self.append(TIMETABLE_KEY, session.clone()).await
    }

    async fn delete_class(&self, id: &str) -> AcademyResult<()> {
        self.retain(TIMETABLE_KEY, |s: &ClassSession| s.id != id).await
    }

    async fn list_notifications(&self) -> AcademyResult<Vec<Notification>> {
        // Stored newest-first by insert_notification, already capped.
        self.read(NOTIF_KEY).await
    }

    async fn insert_notification(&self, notification: &Notification) -> AcademyResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items: Vec<Notification> = self.read(NOTIF_KEY).await?;
        items.insert(0, notification.clone());
        items.truncate(FEED_CAP);
        self.write(NOTIF_KEY, &items).await
    }
}
