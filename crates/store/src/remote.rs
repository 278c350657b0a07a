//! Remote tabular backend.
//!
//! Four named tables behind a PostgREST-style API, reached with generic
//! select-all / insert-row / delete-by-equality requests. A failed remote
//! call is logged and treated as a no-op: lists come back empty and
//! mutations report success without a durable effect. Callers proceed and
//! pick the truth back up on their next full re-read.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use academy_core::errors::AcademyResult;
use academy_core::models::identity::{Faculty, Student};
use academy_core::models::notification::{Notification, FEED_CAP};
use academy_core::models::timetable::ClassSession;

use crate::EntityStore;

pub const USERS_TABLE: &str = "users";
pub const FACULTY_TABLE: &str = "faculty";
pub const TIMETABLE_TABLE: &str = "timetable";
pub const NOTIF_TABLE: &str = "notifications";

/// Connection details for the hosted backend. Presence of both values at
/// startup is what routes the portal away from the local store.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub url: String,
    pub key: String,
}

pub struct RemoteStore {
    client: reqwest::Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url.trim_end_matches('/'), table)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
    }

    /// Select-all against one table; `query` carries extra request
    /// parameters such as ordering. Errors resolve to an empty collection.
    async fn select<T: DeserializeOwned>(&self, table: &str, query: &[(&str, &str)]) -> Vec<T> {
        let request = self
            .authorize(self.client.get(self.endpoint(table)))
            .query(&[("select", "*")])
            .query(query);

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Select from {table} failed: {err}");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::error!("Select from {table} failed: HTTP {}", response.status());
            return Vec::new();
        }

        match response.json().await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!("Select from {table} returned bad rows: {err}");
                Vec::new()
            }
        }
    }

    /// Inserts one row. Failures are logged and swallowed; the caller's
    /// next full fetch simply won't include the row.
    async fn insert_row<T: Serialize + Sync>(&self, table: &str, row: &T) {
        let request = self
            .authorize(self.client.post(self.endpoint(table)))
            .json(&[row]);

        match request.send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::error!("Insert into {table} failed: HTTP {}", response.status());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!("Insert into {table} failed: {err}");
            }
        }
    }

    /// Delete-by-equality on one column. Absent rows are a success.
    async fn delete_eq(&self, table: &str, column: &str, value: &str) {
        let url = format!(
            "{}?{}=eq.{}",
            self.endpoint(table),
            column,
            urlencoding::encode(value)
        );
        let request = self.authorize(self.client.delete(url));

        match request.send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::error!("Delete from {table} failed: HTTP {}", response.status());
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!("Delete from {table} failed: {err}");
            }
        }
    }
}

#[async_trait]
impl EntityStore for RemoteStore {
    async fn list_students(&self) -> AcademyResult<Vec<Student>> {
        Ok(self.select(USERS_TABLE, &[]).await)
    }

    async fn insert_student(&self, student: &Student) -> AcademyResult<()> {
        self.insert_row(USERS_TABLE, student).await;
        Ok(())
    }

    async fn list_faculty(&self) -> AcademyResult<Vec<Faculty>> {
        Ok(self.select(FACULTY_TABLE, &[]).await)
    }

    async fn insert_faculty(&self, member: &Faculty) -> AcademyResult<()> {
        self.insert_row(FACULTY_TABLE, member).await;
        Ok(())
    }

    async fn delete_faculty(&self, username: &str) -> AcademyResult<()> {
        self.delete_eq(FACULTY_TABLE, "username", username).await;
        Ok(())
    }

    async fn list_classes(&self) -> AcademyResult<Vec<ClassSession>> {
        Ok(self.select(TIMETABLE_TABLE, &[]).await)
    }

    async fn insert_class(&self, session: &ClassSession) -> AcademyResult<()> {
        self.insert_row(TIMETABLE_TABLE, session).await;
        Ok(())
    }

    async fn delete_class(&self, id: &str) -> AcademyResult<()> {
        self.delete_eq(TIMETABLE_TABLE, "id", id).await;
        Ok(())
    }

    async fn list_notifications(&self) -> AcademyResult<Vec<Notification>> {
        // The cap and ordering come from the server here, not from client
        // truncation as in the local path.
        let limit = FEED_CAP.to_string();
        Ok(self
            .select(
                NOTIF_TABLE,
                &[("order", "timestamp.desc"), ("limit", limit.as_str())],
            )
            .await)
    }

    async fn insert_notification(&self, notification: &Notification) -> AcademyResult<()> {
        self.insert_row(NOTIF_TABLE, notification).await;
        Ok(())
    }
}
