//! Application state for the Q&A server

use std::sync::Arc;

use crate::answer::{self, NotFoundClassifier, PhraseClassifier};
use crate::config::AppConfig;
use crate::error::Result;
use crate::index::{DocumentIndex, TextChunker};
use crate::loader::Loader;
use crate::providers::{EmbeddingProvider, GeminiClient, LlmProvider, SearchProvider};
use crate::session::{InMemorySessionStore, Session, SessionStore};
use crate::types::{ContentKind, Document};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    loader: Loader,
    embedder: Arc<dyn EmbeddingProvider>,
    llm: Arc<dyn LlmProvider>,
    search: Arc<dyn SearchProvider>,
    classifier: Arc<dyn NotFoundClassifier>,
    sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Create state with the Gemini backend for all three provider seams
    pub fn new(config: AppConfig) -> Result<Self> {
        let gemini = Arc::new(GeminiClient::new(&config.gemini)?);
        Self::with_providers(
            config,
            gemini.clone() as Arc<dyn EmbeddingProvider>,
            gemini.clone() as Arc<dyn LlmProvider>,
            gemini as Arc<dyn SearchProvider>,
        )
    }

    /// Create state with explicit providers (used by tests to inject stubs)
    pub fn with_providers(
        config: AppConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        llm: Arc<dyn LlmProvider>,
        search: Arc<dyn SearchProvider>,
    ) -> Result<Self> {
        let loader = Loader::new(Arc::clone(&llm))?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                loader,
                embedder,
                llm,
                search,
                classifier: Arc::new(PhraseClassifier),
                sessions: Arc::new(InMemorySessionStore::new()),
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get content loader
    pub fn loader(&self) -> &Loader {
        &self.inner.loader
    }

    /// Get embedding provider
    pub fn embedder(&self) -> &dyn EmbeddingProvider {
        self.inner.embedder.as_ref()
    }

    /// Get LLM provider
    pub fn llm(&self) -> &dyn LlmProvider {
        self.inner.llm.as_ref()
    }

    /// Get web search provider
    pub fn search(&self) -> &dyn SearchProvider {
        self.inner.search.as_ref()
    }

    /// Get not-found classifier
    pub fn classifier(&self) -> &dyn NotFoundClassifier {
        self.inner.classifier.as_ref()
    }

    /// Get session store
    pub fn sessions(&self) -> &dyn SessionStore {
        self.inner.sessions.as_ref()
    }

    /// Chunker built from the configured window and overlap
    fn chunker(&self) -> TextChunker {
        TextChunker::new(
            self.inner.config.chunking.chunk_size,
            self.inner.config.chunking.chunk_overlap,
        )
    }

    /// Build a session from freshly loaded documents: index, summary, store.
    /// Returns the summary.
    pub async fn create_session(
        &self,
        session_id: String,
        documents: Vec<Document>,
        kind: ContentKind,
    ) -> Result<String> {
        let index = DocumentIndex::build(self.embedder(), &self.chunker(), &documents).await?;
        let summary = answer::summarize(self.llm(), &documents, kind).await;

        self.sessions().insert(Session {
            id: session_id,
            documents,
            index,
            summary: summary.clone(),
            created_at: chrono::Utc::now(),
        });

        Ok(summary)
    }

    /// Append documents to an existing session, rebuilding the index from the
    /// full accumulated list and regenerating the summary as mixed content.
    /// Returns the new summary.
    ///
    /// Concurrent extends of the same session can interleave between the
    /// snapshot read and the store update, losing one side's documents; this
    /// mirrors the store's documented limitation.
    pub async fn extend_session(
        &self,
        session_id: &str,
        new_documents: Vec<Document>,
    ) -> Result<String> {
        let existing = self.sessions().get(session_id)?;

        let mut all = existing.documents;
        all.extend(new_documents.iter().cloned());

        let index = DocumentIndex::build(self.embedder(), &self.chunker(), &all).await?;
        let summary = answer::summarize(self.llm(), &all, ContentKind::Mixed).await;

        self.sessions()
            .extend(session_id, new_documents, index, summary.clone())?;

        Ok(summary)
    }
}
