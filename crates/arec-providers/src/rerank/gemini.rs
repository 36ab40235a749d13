//! Gemini Rerank Provider
//!
//! Asks a Gemini text model to order a numbered candidate list and maps the
//! answer back to candidate ids.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use arec_domain::RerankCandidate;
use arec_domain::error::{Error, Result};
use arec_domain::ports::providers::RerankProvider;

use super::prompt::{RankingParser, build_prompt};
use crate::constants::{CONTENT_TYPE_JSON, GEMINI_BASE_URL, GEMINI_RERANK_MODEL};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Gemini `generateContent` rerank provider
pub struct GeminiRerankProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    parser: RankingParser,
    http_client: Client,
}

impl GeminiRerankProvider {
    /// Create a new Gemini rerank provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Result<Self> {
        Ok(Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            parser: RankingParser::new()?,
            http_client,
        })
    }

    /// Model name for API calls, without a `models/` prefix
    pub fn api_model_name(&self) -> &str {
        self.model.strip_prefix("models/").unwrap_or(&self.model)
    }

    /// Effective base URL
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), GEMINI_BASE_URL)
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.0 }
        });
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url(),
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
            .map_err(|e| {
                if e.is_timeout() {
                    Error::rerank_timeout(self.timeout)
                } else {
                    Error::rerank_service_with_source("Gemini request failed", e)
                }
            })?;

        let body =
            HttpResponseUtils::check_and_parse(response, "Gemini", Error::rerank_service).await?;
        extract_text(&body)
    }
}

/// Concatenated text parts of the first candidate
fn extract_text(body: &serde_json::Value) -> Result<String> {
    let parts = body["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or_else(|| Error::rerank_malformed("response has no content parts"))?;
    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join("");
    if text.trim().is_empty() {
        return Err(Error::rerank_malformed("response text is empty"));
    }
    Ok(text)
}

#[async_trait]
impl RerankProvider for GeminiRerankProvider {
    async fn rank(&self, query: &str, candidates: &[RerankCandidate]) -> Result<Vec<String>> {
        let prompt = build_prompt(query, candidates);
        let text = self.generate(&prompt).await?;
        debug!(response = %text.trim(), "Gemini ranking received");
        self.parser.parse_ids(&text, candidates)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use arec_application::ports::registry::{
    RERANK_PROVIDERS, RerankProviderConfig, RerankProviderEntry,
};

#[linkme::distributed_slice(RERANK_PROVIDERS)]
static GEMINI_PROVIDER: RerankProviderEntry = RerankProviderEntry {
    name: "gemini",
    description: "Google Gemini generateContent reordering (gemini-1.5-flash)",
    factory: |config: &RerankProviderConfig| {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| "Gemini requires api_key (or GEMINI_API_KEY)".to_string())?;
        let model = config
            .model
            .clone()
            .unwrap_or_else(|| GEMINI_RERANK_MODEL.to_string());
        let timeout = constructor::timeout_or_default(config.timeout_secs);
        let http_client = constructor::http_client(timeout)?;

        let provider =
            GeminiRerankProvider::new(api_key, config.base_url.clone(), model, timeout, http_client)
                .map_err(|e| e.to_string())?;
        Ok(std::sync::Arc::new(provider))
    },
};
