//! Prompt templates for grounded answering and summarization

use crate::index::ScoredChunk;
use crate::types::ContentKind;

/// Refusal sentence the grounding prompt instructs the model to emit when the
/// context is insufficient.
pub const NOT_FOUND_SENTENCE: &str =
    "The provided text does not contain information to answer this question.";

/// Build the grounded QA prompt: answer strictly from the supplied context,
/// refuse with the fixed sentence otherwise.
pub fn grounded_prompt(question: &str, chunks: &[ScoredChunk]) -> String {
    let context = chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Use the following pieces of context to answer the question at the end. \n\
         If you don't know the answer or if the information is not in the context, \
         say \"{}\"\n\n\
         Context: {}\n\n\
         Question: {}\n\n\
         Answer:",
        NOT_FOUND_SENTENCE, context, question
    )
}

/// Summary prompt template for a given content kind
pub fn summary_prompt(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Image => {
            "Provide a brief 2-3 sentence summary of the text extracted from this image:"
        }
        ContentKind::Pdf => "Provide a brief 2-3 sentence summary of this PDF document:",
        ContentKind::Url => "Provide a brief 2-3 sentence summary of this webpage content:",
        ContentKind::Mixed => {
            "Provide a brief 2-3 sentence summary of this combined content from multiple sources:"
        }
        ContentKind::Text | ContentKind::Other => {
            "Provide a brief 2-3 sentence summary of this text:"
        }
    }
}

/// Instruction wrapper for the web-search fallback
pub fn search_prompt(question: &str) -> String {
    format!(
        "Search the web for: {}. Provide a concise answer based on the search results.",
        question
    )
}
