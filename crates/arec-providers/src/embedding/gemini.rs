//! Gemini Embedding Provider
//!
//! Implements the EmbeddingProvider port using Google's Gemini embedding API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::EmbeddingProvider;
use arec_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_GEMINI, GEMINI_BASE_URL, GEMINI_EMBEDDING_MODEL,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Gemini embedding provider
///
/// Receives its HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use arec_providers::embedding::GeminiEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let provider = GeminiEmbeddingProvider::new(
///         "AIza-your-api-key".to_string(),
///         None,
///         "text-embedding-004".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct GeminiEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    task_type: Option<String>,
    http_client: Client,
}

impl GeminiEmbeddingProvider {
    /// Create a new Gemini embedding provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = constructor::validate_api_key(&api_key);
        let base_url = constructor::validate_url(base_url);
        Self {
            api_key,
            base_url,
            model,
            timeout,
            task_type: None,
            http_client,
        }
    }

    /// Set the `taskType` sent with each request (e.g. `RETRIEVAL_QUERY`)
    pub fn with_task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    fn effective_base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_BASE_URL)
    }

    /// Model name for API calls, without a `models/` prefix
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Effective base URL
    pub fn base_url(&self) -> String {
        self.effective_base_url()
    }

    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let mut payload = serde_json::json!({
            "content": { "parts": [{ "text": text }] }
        });
        if let Some(task_type) = &self.task_type {
            payload["taskType"] = serde_json::json!(task_type);
        }

        let url = format!(
            "{}/v1beta/models/{}:embedContent",
            self.effective_base_url(),
            self.api_model_name()
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error(&e, self.timeout, Error::embedding_service))?;

        HttpResponseUtils::check_and_parse(response, "Gemini", Error::embedding_service).await
    }

    fn parse_embedding(&self, response_data: &serde_json::Value) -> Result<Embedding> {
        let values = response_data["embedding"]["values"]
            .as_array()
            .ok_or_else(|| {
                Error::embedding_service("Invalid response format: missing embedding values")
            })?;

        let vector = values
            .iter()
            .map(|v| {
                v.as_f64().map(|f| f as f32).ok_or_else(|| {
                    Error::embedding_service("Invalid response format: non-numeric value")
                })
            })
            .collect::<Result<Vec<f32>>>()?;

        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for GeminiEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // embedContent takes one text per request
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            let response_data = self.fetch_single_embedding(text).await?;
            results.push(self.parse_embedding(&response_data)?);
        }

        Ok(results)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_GEMINI
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use arec_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static GEMINI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "gemini",
    description: "Google Gemini embedding provider (text-embedding-004)",
    factory: |config: &EmbeddingProviderConfig| {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| "Gemini requires api_key (or GEMINI_API_KEY)".to_string())?;
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| GEMINI_EMBEDDING_MODEL.to_string());
        let timeout = constructor::timeout_or_default(config.timeout_secs);
        let http_client = constructor::http_client(timeout)?;

        let mut provider = GeminiEmbeddingProvider::new(
            api_key,
            config.base_url.clone(),
            model,
            timeout,
            http_client,
        );
        if let Some(task_type) = config.extra.get("task_type") {
            provider = provider.with_task_type(task_type.clone());
        }
        Ok(std::sync::Arc::new(provider))
    },
};
