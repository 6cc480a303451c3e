//! In-memory session store
//!
//! Each dashboard session owns one AQI history. Histories live only as long
//! as the process and are never shared between sessions.

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{AqiHistory, PollutantReadings};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// A dashboard session
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub history: AqiHistory,
    /// Readings used for the most recent next-day prediction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_readings: Option<PollutantReadings>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new(seed_aqi: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            history: AqiHistory::seeded_with(seed_aqi),
            last_readings: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a freshly seeded history
    pub async fn create(&self, seed_aqi: f64) -> Session {
        let session = Session::new(seed_aqi);
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        tracing::info!(session_id = %session.id, "session created");
        session
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Session> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))
    }

    /// Run `f` against a session while holding the write lock.
    ///
    /// Requests on the same session are serialized through this lock.
    pub async fn update<F, R>(&self, id: Uuid, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Session) -> AppResult<R>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))?;
        let result = f(session)?;
        session.updated_at = Utc::now();
        Ok(result)
    }

    /// Discard all predictions and reseed the history
    pub async fn reset(&self, id: Uuid, seed_aqi: f64) -> AppResult<Session> {
        self.update(id, |session| {
            session.history = AqiHistory::seeded_with(seed_aqi);
            session.last_readings = None;
            Ok(session.clone())
        })
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| tracing::info!(session_id = %id, "session deleted"))
            .ok_or_else(|| AppError::NotFound(format!("Session {}", id)))
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        tokio_test::block_on(async {
            let store = SessionStore::new();
            let session = store.create(150.0).await;
            let fetched = store.get(session.id).await.unwrap();
            assert_eq!(fetched.history, AqiHistory::seeded());
            assert_eq!(store.len().await, 1);
        });
    }

    #[test]
    fn test_failed_update_keeps_session() {
        tokio_test::block_on(async {
            let store = SessionStore::new();
            let session = store.create(150.0).await;
            let result: AppResult<()> = store
                .update(session.id, |_| Err(AppError::Model("boom".to_string())))
                .await;
            assert!(result.is_err());
            let fetched = store.get(session.id).await.unwrap();
            assert_eq!(fetched.updated_at, session.updated_at);
        });
    }

    #[test]
    fn test_unknown_session_not_found() {
        tokio_test::block_on(async {
            let store = SessionStore::new();
            let err = store.get(Uuid::new_v4()).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
            assert!(store.delete(Uuid::new_v4()).await.is_err());
        });
    }

    #[test]
    fn test_reset_reseeds() {
        tokio_test::block_on(async {
            let store = SessionStore::new();
            let session = store.create(80.0).await;
            let reset = store.reset(session.id, 150.0).await.unwrap();
            assert_eq!(reset.history, AqiHistory::seeded());
        });
    }
}
