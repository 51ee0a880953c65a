//! Content loading: turns raw inputs into normalized text documents
//!
//! PDF parsing, webpage fetching, and image OCR are delegated to external
//! libraries and the vision model; this module only normalizes their output.

pub mod pdf;
pub mod web;

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::providers::LlmProvider;
use crate::types::{Document, InputKind};

/// Fixed instruction for vision OCR
const IMAGE_OCR_PROMPT: &str = "Extract all readable text from this image.";

/// Source tag for literal text input
const TEXT_INPUT_SOURCE: &str = "text_input";

/// Content loader for all supported input kinds
pub struct Loader {
    http: reqwest::Client,
    llm: Arc<dyn LlmProvider>,
}

impl Loader {
    /// Create a new loader. The LLM provider is used for image OCR only.
    pub fn new(llm: Arc<dyn LlmProvider>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("docqa-rag/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, llm })
    }

    /// Load documents for the given input kind.
    ///
    /// `value` is a file path for `Pdf`/`Image`, a URL for `Url`, and the
    /// literal content for `Text`. Failures from the underlying fetch, parse,
    /// or OCR call are propagated as `Error::Load`, never retried here.
    pub async fn load(&self, kind: InputKind, value: &str) -> Result<Vec<Document>> {
        match kind {
            InputKind::Pdf => pdf::load_pdf(value),
            InputKind::Image => self.load_image(value).await,
            InputKind::Url => web::load_url(&self.http, value).await,
            InputKind::Text => Ok(vec![Document::new(value, TEXT_INPUT_SOURCE)]),
        }
    }

    /// Extract text from an image via the vision model
    async fn load_image(&self, path: &str) -> Result<Vec<Document>> {
        let data = std::fs::read(path).map_err(|e| Error::load(path, e.to_string()))?;

        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        let text = self
            .llm
            .generate_with_image(IMAGE_OCR_PROMPT, &data, &mime)
            .await
            .map_err(|e| Error::load(path, e.to_string()))?;

        Ok(vec![Document::new(text, path)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct OcrStub;

    #[async_trait]
    impl LlmProvider for OcrStub {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(Error::llm("not used in this test"))
        }

        async fn generate_with_image(
            &self,
            prompt: &str,
            _image: &[u8],
            mime_type: &str,
        ) -> Result<String> {
            Ok(format!("{} ({})", prompt, mime_type))
        }
    }

    #[tokio::test]
    async fn text_input_wraps_literal_string() {
        let loader = Loader::new(Arc::new(OcrStub)).unwrap();
        let docs = loader
            .load(InputKind::Text, "Paris is the capital of France.")
            .await
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].content, "Paris is the capital of France.");
        assert_eq!(docs[0].source, "text_input");
    }

    #[tokio::test]
    async fn image_load_guesses_mime_and_tags_path() {
        let dir = std::env::temp_dir().join("docqa-rag-loader-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scan.png");
        std::fs::write(&path, b"not-a-real-png").unwrap();

        let loader = Loader::new(Arc::new(OcrStub)).unwrap();
        let docs = loader
            .load(InputKind::Image, path.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(docs.len(), 1);
        assert!(docs[0].content.contains("image/png"));
        assert_eq!(docs[0].source, path.to_str().unwrap());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn missing_image_file_is_a_load_error() {
        let loader = Loader::new(Arc::new(OcrStub)).unwrap();
        let err = loader
            .load(InputKind::Image, "/nonexistent/scan.png")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }
}
