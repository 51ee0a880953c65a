//! Gemini API client for generation, vision OCR, embeddings, and grounded search
//!
//! Talks to the Generative Language API with API-key authentication. All three
//! provider traits are implemented by the one client so the server can share a
//! single connection pool.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GeminiConfig;
use crate::error::{Error, Result};
use crate::providers::{EmbeddingProvider, LlmProvider, SearchProvider};

/// Gemini API client
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<Tool>>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize)]
struct Tool {
    google_search: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

#[derive(Serialize)]
struct EmbedRequest {
    model: String,
    content: EmbedContent,
}

#[derive(Serialize)]
struct EmbedContent {
    parts: Vec<EmbedPart>,
}

#[derive(Serialize)]
struct EmbedPart {
    text: String,
}

#[derive(Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

impl GeminiClient {
    /// Create a new client from configuration
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        )
    }

    fn embed_url(&self) -> String {
        format!(
            "{}/models/{}:embedContent?key={}",
            self.config.base_url, self.config.embed_model, self.config.api_key
        )
    }

    async fn send_generate(&self, model: &str, request: &GenerateRequest) -> Result<String> {
        let response = self
            .client
            .post(self.generate_url(model))
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        gen_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::Llm("No text in Gemini response".to_string()))
    }

    fn user_content(parts: Vec<Part>) -> Vec<Content> {
        vec![Content {
            role: "user".to_string(),
            parts,
        }]
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            contents: Self::user_content(vec![Part::Text {
                text: prompt.to_string(),
            }]),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
            tools: None,
        };

        self.send_generate(&self.config.generate_model, &request)
            .await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(image);

        let request = GenerateRequest {
            contents: Self::user_content(vec![
                Part::Text {
                    text: prompt.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: encoded,
                    },
                },
            ]),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
            tools: None,
        };

        self.send_generate(&self.config.vision_model, &request)
            .await
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = EmbedRequest {
            model: format!("models/{}", self.config.embed_model),
            content: EmbedContent {
                parts: vec![EmbedPart {
                    text: text.to_string(),
                }],
            },
        };

        let response = self
            .client
            .post(self.embed_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Embedding(format!("Embedding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Embedding(format!(
                "Embedding failed ({}): {}",
                status, body
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| Error::Embedding(format!("Failed to parse embedding response: {}", e)))?;

        Ok(embed_response.embedding.values)
    }
}

#[async_trait]
impl SearchProvider for GeminiClient {
    async fn search_answer(&self, question: &str) -> Result<String> {
        let prompt = crate::answer::prompt::search_prompt(question);

        let request = GenerateRequest {
            contents: Self::user_content(vec![Part::Text { text: prompt }]),
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
            tools: Some(vec![Tool {
                google_search: serde_json::json!({}),
            }]),
        };

        self.send_generate(&self.config.vision_model, &request)
            .await
            .map_err(|e| Error::Search(e.to_string()))
    }
}
