//! In-memory resume store keyed by upload session.
//!
//! Each upload gets its own id, so concurrent uploads never overwrite each
//! other. The map is bounded: expired entries are dropped on insert and the
//! oldest entry is evicted once capacity is reached.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct StoredResume {
    pub session_id: Uuid,
    pub text: String,
    pub uploaded_at: DateTime<Utc>,
    #[serde(skip)]
    stored_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ResumeStore {
    entries: Arc<RwLock<HashMap<Uuid, StoredResume>>>,
    capacity: usize,
    ttl: Duration,
}

impl ResumeStore {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Stores `text` under a fresh session id and returns the id.
    pub async fn insert(&self, text: String) -> Uuid {
        let session_id = Uuid::new_v4();
        let mut entries = self.entries.write().await;

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored_at.elapsed() <= ttl);

        while entries.len() >= self.capacity {
            let oldest = entries
                .values()
                .min_by_key(|entry| entry.stored_at)
                .map(|entry| entry.session_id);
            match oldest {
                Some(id) => {
                    debug!(session_id = %id, "Evicting oldest stored resume");
                    entries.remove(&id);
                }
                None => break,
            }
        }

        entries.insert(
            session_id,
            StoredResume {
                session_id,
                text,
                uploaded_at: Utc::now(),
                stored_at: Instant::now(),
            },
        );
        session_id
    }

    /// Returns the stored resume unless it is unknown or expired.
    pub async fn get(&self, session_id: Uuid) -> Option<StoredResume> {
        let entries = self.entries.read().await;
        entries
            .get(&session_id)
            .filter(|entry| entry.stored_at.elapsed() <= self.ttl)
            .cloned()
    }

    pub async fn session_count(&self) -> usize {
        self.entries.read().await.len()
    }
}
