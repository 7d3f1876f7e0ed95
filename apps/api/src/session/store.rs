use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::models::Session;

/// In-memory session map. Nothing is persisted; a restart forgets everyone.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.inner
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Applies `f` under the write lock and bumps `updated_at`.
    /// Returns `None` when the session does not exist.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut guard = self.inner.write().await;
        let session = guard.get_mut(&id)?;
        let result = f(session);
        session.updated_at = Utc::now();
        Some(result)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Like `get`, but maps a miss to a 404.
    pub async fn require(&self, id: Uuid) -> Result<Session, AppError> {
        self.get(id).await.ok_or_else(|| not_found(id))
    }

    /// Like `update`, but maps a miss to a 404.
    pub async fn require_update<F, R>(&self, id: Uuid, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Session) -> R,
    {
        self.update(id, f).await.ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
