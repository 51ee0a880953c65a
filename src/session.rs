//! Session store: sessions bind ingested documents to an index and summary
//!
//! State is process memory only; sessions are lost on restart. The store is an
//! explicit abstraction (rather than ambient globals) so tests and alternative
//! backends can swap it out.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::index::DocumentIndex;
use crate::types::Document;

/// Generate a fresh opaque session identifier
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// A server-side Q&A context: the ingested documents, the index built from
/// exactly those documents, and the latest summary.
#[derive(Clone)]
pub struct Session {
    /// Opaque unique identifier
    pub id: String,
    /// All documents ingested into this session, in upload order
    pub documents: Vec<Document>,
    /// Retrieval index, always rebuilt from the full document list
    pub index: DocumentIndex,
    /// Latest summary of the session's content
    pub summary: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Total characters across all documents
    pub fn total_characters(&self) -> usize {
        self.documents.iter().map(|d| d.content.chars().count()).sum()
    }
}

/// Per-session metadata for listings
#[derive(Debug, Clone)]
pub struct SessionMeta {
    pub session_id: String,
    pub document_count: usize,
    pub has_summary: bool,
}

/// Session storage abstraction.
///
/// `extend` always replaces the index wholesale: there is no incremental
/// update path, the caller rebuilds from the complete accumulated document
/// list. Two concurrent extends of the same session can interleave their
/// rebuild steps and lose an update; the store only guarantees per-entry
/// consistency. This is an accepted limitation.
pub trait SessionStore: Send + Sync {
    /// Store a new session
    fn insert(&self, session: Session);

    /// Fetch a session by id
    fn get(&self, id: &str) -> Result<Session>;

    /// Append documents and swap in the rebuilt index and regenerated summary
    fn extend(
        &self,
        id: &str,
        new_documents: Vec<Document>,
        index: DocumentIndex,
        summary: String,
    ) -> Result<()>;

    /// Remove a session; returns false if it did not exist
    fn delete(&self, id: &str) -> bool;

    /// Whether a session exists
    fn contains(&self, id: &str) -> bool;

    /// Metadata for all live sessions
    fn list(&self) -> Vec<SessionMeta>;
}

/// In-memory session store backed by a concurrent map
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Session) {
        self.sessions.insert(session.id.clone(), session);
    }

    fn get(&self, id: &str) -> Result<Session> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))
    }

    fn extend(
        &self,
        id: &str,
        new_documents: Vec<Document>,
        index: DocumentIndex,
        summary: String,
    ) -> Result<()> {
        let mut entry = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| Error::SessionNotFound(id.to_string()))?;

        let session = entry.value_mut();
        session.documents.extend(new_documents);
        session.index = index;
        session.summary = summary;
        Ok(())
    }

    fn delete(&self, id: &str) -> bool {
        self.sessions.remove(id).is_some()
    }

    fn contains(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    fn list(&self) -> Vec<SessionMeta> {
        self.sessions
            .iter()
            .map(|entry| SessionMeta {
                session_id: entry.key().clone(),
                document_count: entry.value().documents.len(),
                has_summary: !entry.value().summary.is_empty(),
            })
            .collect()
    }
}
