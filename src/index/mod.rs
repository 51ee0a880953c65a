//! In-memory similarity index over chunked documents

pub mod chunker;

pub use chunker::TextChunker;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::Document;

/// A chunk stored in the index with its embedding
#[derive(Debug, Clone)]
struct IndexedChunk {
    content: String,
    source: String,
    embedding: Vec<f32>,
}

/// A retrieved chunk with its similarity to the query
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// Chunk text
    pub content: String,
    /// Source of the document the chunk came from
    pub source: String,
    /// Cosine similarity to the query (higher is better)
    pub similarity: f32,
}

/// Similarity-searchable index over a session's documents.
///
/// Built all-or-nothing: any embedding failure aborts the build and no partial
/// index is exposed. Sessions are small, so search is brute-force cosine over
/// the chunk rows rather than an ANN structure.
#[derive(Clone, Debug)]
pub struct DocumentIndex {
    chunks: Vec<IndexedChunk>,
}

impl DocumentIndex {
    /// Chunk, embed, and index the given documents.
    ///
    /// Fails with `EmptyContent` when there are no documents or no non-empty
    /// chunks, and with `IndexBuild` when any embedding call fails.
    pub async fn build(
        embedder: &dyn EmbeddingProvider,
        chunker: &TextChunker,
        documents: &[Document],
    ) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyContent("No documents to index".to_string()));
        }

        let mut rows: Vec<(String, String)> = Vec::new();
        for doc in documents {
            for chunk in chunker.split(&doc.content) {
                rows.push((chunk, doc.source.clone()));
            }
        }

        if rows.is_empty() {
            return Err(Error::EmptyContent(
                "Documents contain no indexable text".to_string(),
            ));
        }

        let mut chunks = Vec::with_capacity(rows.len());
        for (content, source) in rows {
            let embedding = embedder
                .embed(&content)
                .await
                .map_err(|e| Error::IndexBuild(e.to_string()))?;
            chunks.push(IndexedChunk {
                content,
                source,
                embedding,
            });
        }

        Ok(Self { chunks })
    }

    /// Return the top-k chunks by cosine similarity to the query embedding
    pub fn search(&self, query_embedding: &[f32], top_k: usize) -> Vec<ScoredChunk> {
        let mut scored: Vec<ScoredChunk> = self
            .chunks
            .iter()
            .map(|chunk| ScoredChunk {
                content: chunk.content.clone(),
                source: chunk.source.clone(),
                similarity: cosine_similarity(query_embedding, &chunk.embedding),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_k);
        scored
    }

    /// Number of indexed chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Cosine similarity between two vectors; 0.0 for mismatched or zero vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
