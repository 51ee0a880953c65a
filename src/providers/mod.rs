//! Provider abstractions for embeddings, generation, and web search
//!
//! Trait-based seams so handlers and tests can swap the Gemini backend for
//! stubs without touching the orchestration code.

pub mod gemini;

use async_trait::async_trait;

use crate::error::Result;

pub use gemini::GeminiClient;

/// Text embedding backend
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single piece of text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Text generation backend
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate text from a prompt plus an inline image (vision OCR)
    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String>;
}

/// Web-search-augmented answer backend
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Answer a question using live web search results
    async fn search_answer(&self, question: &str) -> Result<String>;
}
