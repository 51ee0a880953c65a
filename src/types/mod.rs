//! Core data types

pub mod document;
pub mod response;

pub use document::{ContentKind, Document, InputKind};
pub use response::{AnswerResult, AnswerSource, ContentPreview};
