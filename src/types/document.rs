//! Document and input kind types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A normalized text document produced by the content loader.
///
/// Immutable once created; the indexer and answerer only read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Extracted text content
    pub content: String,
    /// Where the content came from (file path, URL, or "text_input")
    pub source: String,
}

impl Document {
    /// Create a new document
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }
}

/// Supported input kinds for content loading.
///
/// Closed enum so adding a kind is a compile-time-checked change; the wire
/// format stays the lowercase tag ("pdf", "image", "url", "text").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Pdf,
    Image,
    Url,
    Text,
}

impl InputKind {
    /// Parse a kind tag, failing on anything outside the four supported kinds
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "pdf" => Ok(Self::Pdf),
            "image" => Ok(Self::Image),
            "url" => Ok(Self::Url),
            "text" => Ok(Self::Text),
            other => Err(Error::UnsupportedInput(other.to_string())),
        }
    }

    /// Content kind this input produces
    pub fn content_kind(&self) -> ContentKind {
        match self {
            Self::Pdf => ContentKind::Pdf,
            Self::Image => ContentKind::Image,
            Self::Url => ContentKind::Url,
            Self::Text => ContentKind::Text,
        }
    }

    /// Lowercase tag used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Url => "url",
            Self::Text => "text",
        }
    }
}

/// Kind of content in a session, used for summary prompt selection.
///
/// `Mixed` is used after additional context has been appended to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Pdf,
    Image,
    Url,
    Text,
    Mixed,
    Other,
}

impl ContentKind {
    /// Lowercase tag used in API responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Image => "image",
            Self::Url => "url",
            Self::Text => "text",
            Self::Mixed => "mixed",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_kinds() {
        assert_eq!(InputKind::parse("pdf").unwrap(), InputKind::Pdf);
        assert_eq!(InputKind::parse("image").unwrap(), InputKind::Image);
        assert_eq!(InputKind::parse("url").unwrap(), InputKind::Url);
        assert_eq!(InputKind::parse("text").unwrap(), InputKind::Text);
    }

    #[test]
    fn parse_rejects_unknown_kind() {
        let err = InputKind::parse("csv").unwrap_err();
        assert!(matches!(err, Error::UnsupportedInput(ref k) if k == "csv"));
    }

    #[test]
    fn input_kind_serde_uses_lowercase_tags() {
        let kind: InputKind = serde_json::from_str("\"url\"").unwrap();
        assert_eq!(kind, InputKind::Url);
        assert!(serde_json::from_str::<InputKind>("\"docx\"").is_err());
    }
}
