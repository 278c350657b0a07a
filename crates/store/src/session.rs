//! Lightweight session cache.
//!
//! One JSON object under a fixed key in the data directory, holding the
//! last-authenticated identity so a restart can restore the session
//! without re-authentication. Student identities are cached without the
//! fee screenshot to bound the cache size; logout clears the key entirely.

use std::path::{Path, PathBuf};

use academy_core::errors::AcademyResult;
use academy_core::models::identity::Identity;

pub const SESSION_KEY: &str = "academy_user_session";

#[derive(Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{SESSION_KEY}.json")),
        }
    }

    /// Restores the cached identity, if any. An unreadable or corrupt
    /// cache is treated as no session rather than an error.
    pub async fn load(&self) -> Option<Identity> {
        let bytes = tokio::fs::read(&self.path).await.ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(identity) => Some(identity),
            Err(err) => {
                tracing::warn!("Failed to recover session: {err}");
                None
            }
        }
    }

    /// Persists the trimmed copy of an identity as the active session.
    pub async fn save(&self, identity: &Identity) -> AcademyResult<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(eyre::Report::new)?;
        }
        let bytes =
            serde_json::to_vec(&identity.for_session_cache()).map_err(eyre::Report::new)?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(eyre::Report::new)?;
        Ok(())
    }

    /// Clears the session on logout. Already-absent is fine.
    pub async fn clear(&self) -> AcademyResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(eyre::Report::new(err).into()),
        }
    }
}
