//! Configuration for the document Q&A service

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini API configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file, then apply environment
    /// overrides. `GEMINI_API_KEY` always wins over the file value.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("Failed to parse {}: {}", p.display(), e)))?
            }
            None => Self::default(),
        };

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.gemini.api_key = key;
        }

        Ok(config)
    }

    /// Fail early if no API key is configured
    pub fn validate(&self) -> Result<()> {
        if self.gemini.api_key.is_empty() {
            return Err(Error::Config(
                "Gemini API key is not set (set GEMINI_API_KEY or gemini.api_key)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 50MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            enable_cors: true,
            max_upload_size: 50 * 1024 * 1024,
        }
    }
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key (usually injected via GEMINI_API_KEY)
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Text generation model
    pub generate_model: String,
    /// Vision model for image OCR and search grounding
    pub vision_model: String,
    /// Embedding model
    pub embed_model: String,
    /// Temperature for generation
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            generate_model: "gemini-2.0-flash-lite".to_string(),
            vision_model: "gemini-1.5-flash".to_string(),
            embed_model: "gemini-embedding-001".to_string(),
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}

/// Text chunking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target chunk size in characters
    pub chunk_size: usize,
    /// Overlap between chunks in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

/// Retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Number of chunks retrieved per question
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_k: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_constants() {
        let config = AppConfig::default();
        assert_eq!(config.chunking.chunk_size, 1000);
        assert_eq!(config.chunking.chunk_overlap, 200);
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000
            enable_cors = false
            max_upload_size = 1024
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.gemini.generate_model, "gemini-2.0-flash-lite");
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());
    }
}
