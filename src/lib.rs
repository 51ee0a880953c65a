//! docqa-rag: Document Q&A service with grounded answers and web-search fallback
//!
//! Ingests PDFs, images (via OCR), web pages, and raw text into in-memory
//! sessions, indexes the content with Gemini embeddings, and answers questions
//! grounded in the retrieved chunks. When the documents do not contain the
//! answer, the API offers a Google-Search-backed fallback, degrading to the
//! model's general knowledge when search is unavailable.

pub mod answer;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod providers;
pub mod server;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use server::ApiServer;
pub use types::{
    document::{ContentKind, Document, InputKind},
    response::{AnswerResult, AnswerSource, ContentPreview},
};
