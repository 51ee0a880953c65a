//! Answer generation: grounded QA, fallbacks, summaries, and previews

pub mod not_found;
pub mod prompt;

pub use not_found::{NotFoundClassifier, PhraseClassifier};

use crate::error::Result;
use crate::index::DocumentIndex;
use crate::providers::{EmbeddingProvider, LlmProvider, SearchProvider};
use crate::types::{AnswerResult, AnswerSource, ContentKind, ContentPreview, Document};

/// Sentinel returned by [`search_web`] when the search backend reports quota
/// or rate-limit exhaustion.
pub const QUOTA_EXCEEDED: &str = "quota_exceeded";

/// Prefix on [`search_web`] results that carry a non-quota error message.
pub const SEARCH_ERROR_PREFIX: &str = "search_error: ";

/// Maximum characters of combined content fed into the summary prompt
const SUMMARY_INPUT_LIMIT: usize = 2000;

/// Combined content shorter than this is returned verbatim as its own summary
const SUMMARY_MIN_CHARS: usize = 100;

/// Characters shown in a content preview
const PREVIEW_CHARS: usize = 300;

/// Answer a question against a session's index.
///
/// Retrieves the top-k chunks by similarity, asks the LLM to answer strictly
/// from that context, and runs the not-found classifier over the verbatim
/// response.
pub async fn answer(
    index: &DocumentIndex,
    embedder: &dyn EmbeddingProvider,
    llm: &dyn LlmProvider,
    classifier: &dyn NotFoundClassifier,
    question: &str,
    top_k: usize,
) -> Result<AnswerResult> {
    let query_embedding = embedder.embed(question).await?;
    let chunks = index.search(&query_embedding, top_k);

    let grounded = prompt::grounded_prompt(question, &chunks);
    let text = llm.generate(&grounded).await?;

    let not_found = classifier.is_not_found(&text);

    Ok(AnswerResult {
        text,
        source: AnswerSource::Document,
        not_found,
    })
}

/// Answer a question through the web-search-augmented backend.
///
/// Never fails: quota exhaustion collapses to the `"quota_exceeded"` sentinel
/// and any other error to a `"search_error: ..."` string, so callers can
/// branch into the LLM-knowledge fallback.
pub async fn search_web(search: &dyn SearchProvider, question: &str) -> String {
    match search.search_answer(question).await {
        Ok(answer) => answer,
        Err(e) => {
            let message = e.to_string();
            if is_quota_error(&message) {
                QUOTA_EXCEEDED.to_string()
            } else {
                format!("{}{}", SEARCH_ERROR_PREFIX, message)
            }
        }
    }
}

/// Answer a question from the LLM's general knowledge, with no retrieval
/// context. Errors degrade to a describing string.
pub async fn answer_with_llm_knowledge(llm: &dyn LlmProvider, question: &str) -> String {
    match llm.generate(question).await {
        Ok(answer) => answer,
        Err(e) => format!("Gemini search failed: {}", e),
    }
}

/// Generate a brief summary of the documents.
///
/// Content under 100 characters is returned verbatim without an LLM call.
/// Failures degrade to an error-describing string; a broken summary must
/// never abort the surrounding upload flow.
pub async fn summarize(llm: &dyn LlmProvider, documents: &[Document], kind: ContentKind) -> String {
    let combined = combine_content(documents);

    if combined.chars().count() < SUMMARY_MIN_CHARS {
        return combined;
    }

    let truncated: String = combined.chars().take(SUMMARY_INPUT_LIMIT).collect();
    let full_prompt = format!("{}\n\n{}...", prompt::summary_prompt(kind), truncated);

    match llm.generate(&full_prompt).await {
        Ok(summary) => summary,
        Err(e) => format!("Could not generate summary: {}", e),
    }
}

/// Build a local preview of document content for display. No LLM call; always
/// success-shaped.
pub fn preview(documents: &[Document], label: &str) -> ContentPreview {
    let combined = combine_content(documents);

    let mut text_preview: String = combined.chars().take(PREVIEW_CHARS).collect();
    if combined.chars().count() > PREVIEW_CHARS {
        text_preview.push_str("...");
    }

    ContentPreview {
        source: label.to_string(),
        text_preview,
        character_count: combined.chars().count(),
        document_count: documents.len(),
    }
}

/// Concatenate document contents, trimmed
fn combine_content(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string()
}

/// Quota/rate-limit classification over backend error text
fn is_quota_error(message: &str) -> bool {
    if message.contains("429") && message.contains("RESOURCE_EXHAUSTED") {
        return true;
    }
    let lower = message.to_lowercase();
    lower.contains("quota") || lower.contains("limit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::index::TextChunker;
    use async_trait::async_trait;

    /// LLM stub returning a fixed response
    struct FixedLlm(&'static str);

    #[async_trait]
    impl LlmProvider for FixedLlm {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.0.to_string())
        }

        async fn generate_with_image(
            &self,
            _prompt: &str,
            _image: &[u8],
            _mime_type: &str,
        ) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// LLM stub that panics if invoked; used to prove no call happens
    struct PanickingLlm;

    #[async_trait]
    impl LlmProvider for PanickingLlm {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            panic!("LLM must not be invoked for trivial input");
        }

        async fn generate_with_image(
            &self,
            _prompt: &str,
            _image: &[u8],
            _mime_type: &str,
        ) -> Result<String> {
            panic!("LLM must not be invoked for trivial input");
        }
    }

    /// LLM stub that always fails
    struct FailingLlm;

    #[async_trait]
    impl LlmProvider for FailingLlm {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Err(Error::llm("model overloaded"))
        }

        async fn generate_with_image(
            &self,
            _prompt: &str,
            _image: &[u8],
            _mime_type: &str,
        ) -> Result<String> {
            Err(Error::llm("model overloaded"))
        }
    }

    /// Search stub controlled by the error it returns
    struct FailingSearch(&'static str);

    #[async_trait]
    impl SearchProvider for FailingSearch {
        async fn search_answer(&self, _question: &str) -> Result<String> {
            Err(Error::Search(self.0.to_string()))
        }
    }

    struct OkSearch;

    #[async_trait]
    impl SearchProvider for OkSearch {
        async fn search_answer(&self, _question: &str) -> Result<String> {
            Ok("The capital of Germany is Berlin.".to_string())
        }
    }

    struct UnitEmbedder;

    #[async_trait]
    impl EmbeddingProvider for UnitEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            Ok(vec![1.0, 0.0])
        }
    }

    fn docs(content: &str) -> Vec<Document> {
        vec![Document::new(content, "text_input")]
    }

    #[tokio::test]
    async fn answer_marks_refusals_as_not_found() {
        let documents = docs("Paris is the capital of France.");
        let index = DocumentIndex::build(&UnitEmbedder, &TextChunker::new(1000, 200), &documents)
            .await
            .unwrap();

        let llm = FixedLlm("The provided text does not contain information to answer this question.");
        let result = answer(
            &index,
            &UnitEmbedder,
            &llm,
            &PhraseClassifier,
            "What is the capital of Germany?",
            3,
        )
        .await
        .unwrap();

        assert!(result.not_found);
        assert_eq!(result.source, AnswerSource::Document);
    }

    #[tokio::test]
    async fn answer_returns_llm_text_verbatim() {
        let documents = docs("Paris is the capital of France.");
        let index = DocumentIndex::build(&UnitEmbedder, &TextChunker::new(1000, 200), &documents)
            .await
            .unwrap();

        let llm = FixedLlm("Paris is the capital of France.");
        let result = answer(
            &index,
            &UnitEmbedder,
            &llm,
            &PhraseClassifier,
            "What is the capital of France?",
            3,
        )
        .await
        .unwrap();

        assert_eq!(result.text, "Paris is the capital of France.");
        assert!(!result.not_found);
    }

    #[tokio::test]
    async fn short_content_summary_is_verbatim_with_no_llm_call() {
        let documents = docs("A short note.");
        let summary = summarize(&PanickingLlm, &documents, ContentKind::Text).await;
        assert_eq!(summary, "A short note.");
    }

    #[tokio::test]
    async fn long_content_summary_uses_llm() {
        let documents = docs(&"All work and no play makes Jack a dull boy. ".repeat(10));
        let summary = summarize(&FixedLlm("A repeated proverb."), &documents, ContentKind::Text).await;
        assert_eq!(summary, "A repeated proverb.");
    }

    #[tokio::test]
    async fn summary_failure_degrades_to_string() {
        let documents = docs(&"All work and no play makes Jack a dull boy. ".repeat(10));
        let summary = summarize(&FailingLlm, &documents, ContentKind::Mixed).await;
        assert!(summary.starts_with("Could not generate summary:"));
    }

    #[tokio::test]
    async fn search_web_classifies_quota_errors() {
        let result = search_web(
            &FailingSearch("Gemini generation failed (429): RESOURCE_EXHAUSTED"),
            "anything",
        )
        .await;
        assert_eq!(result, QUOTA_EXCEEDED);

        let result = search_web(&FailingSearch("daily quota reached"), "anything").await;
        assert_eq!(result, QUOTA_EXCEEDED);
    }

    #[tokio::test]
    async fn search_web_prefixes_generic_errors() {
        let result = search_web(&FailingSearch("connection refused"), "anything").await;
        assert!(result.starts_with(SEARCH_ERROR_PREFIX));
        assert!(result.contains("connection refused"));
    }

    #[tokio::test]
    async fn search_web_passes_through_answers() {
        let result = search_web(&OkSearch, "What is the capital of Germany?").await;
        assert_eq!(result, "The capital of Germany is Berlin.");
    }

    #[tokio::test]
    async fn llm_knowledge_fallback_degrades_on_error() {
        let result = answer_with_llm_knowledge(&FailingLlm, "anything").await;
        assert!(result.starts_with("Gemini search failed:"));
    }

    #[test]
    fn preview_truncates_at_300_chars() {
        let documents = docs(&"x".repeat(500));
        let p = preview(&documents, "Text content");
        assert_eq!(p.text_preview.chars().count(), 303);
        assert!(p.text_preview.ends_with("..."));
        assert_eq!(p.character_count, 500);
        assert_eq!(p.document_count, 1);
        assert_eq!(p.source, "Text content");
    }

    #[test]
    fn short_preview_has_no_ellipsis() {
        let documents = docs("hello");
        let p = preview(&documents, "Text content");
        assert_eq!(p.text_preview, "hello");
        assert_eq!(p.character_count, 5);
    }
}
