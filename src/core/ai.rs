//! Generative-AI collaborators: medical-report summarization and free-text
//! search-intent parsing.
//!
//! Both calls are best-effort and informational only. The [`CareAssistant`]
//! contract is "always returns a value, never fails": transport or parse
//! errors degrade to fixed fallback strings / an empty intent, and running
//! without an API key yields deterministic canned behavior.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::config::AiConfig;

/// Canned summary returned when no API key is configured.
const SIMULATED_SUMMARY: &str = "Simulated AI Summary: The patient has a history of CKD Stage 5. \
     Last hemodialysis session was 3 days ago. Access via left AV fistula. \
     Pre-dialysis BP 140/90. No recent complications reported.";

/// Returned when the API responds but carries no usable text.
const EMPTY_SUMMARY: &str = "Could not generate summary.";

/// Returned when the summarization call fails outright.
const SUMMARY_FALLBACK: &str = "Error generating summary. Please consult original document.";

/// Structured result of parsing a free-text search query.
///
/// Fields feed directly into the clinic search filter; both absent means
/// the parser could not extract anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIntent {
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub clinic_type: Option<String>,
}

/// Capability interface over the two AI collaborators.
///
/// Implementations must not fail: a single attempt is made and any internal
/// error is swallowed into a fallback value.
#[async_trait]
pub trait CareAssistant: Send + Sync {
    /// Condense a medical report into a short clinical summary (~50 words
    /// by prompt convention, not enforced).
    async fn summarize_report(&self, report_text: &str) -> String;

    /// Extract an intended city and service type from a search query.
    async fn parse_search_intent(&self, query: &str) -> SearchIntent;
}

/// Production adapter for the Gemini `generateContent` REST API.
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: AiConfig) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key,
            model: config.model,
            endpoint: config.endpoint,
        }
    }

    async fn generate(&self, key: &str, prompt: &str, json_response: bool) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, key
        );
        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if json_response {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.trim().to_string())
            .context("response carried no candidate text")
    }
}

#[async_trait]
impl CareAssistant for GeminiClient {
    async fn summarize_report(&self, report_text: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return SIMULATED_SUMMARY.to_string();
        };

        let prompt = format!(
            "Analyze the following medical report segment for a dialysis/thalassemia \
             patient and provide a concise clinical summary (max 50 words) focusing on \
             vital parameters and recent treatment history: {report_text}"
        );
        match self.generate(key, &prompt, false).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => EMPTY_SUMMARY.to_string(),
            Err(error) => {
                warn!(%error, "report summarization failed, returning fallback");
                SUMMARY_FALLBACK.to_string()
            }
        }
    }

    async fn parse_search_intent(&self, query: &str) -> SearchIntent {
        let Some(key) = self.api_key.as_deref() else {
            return keyword_intent(query);
        };

        let prompt = format!(
            "Extract the intended Indian city and medical service type (Dialysis or \
             Thalassemia) from this search query: \"{query}\". Return strictly valid \
             JSON format: {{\"city\": \"string\", \"type\": \"string\"}}. If not found, \
             return null values."
        );
        let parsed = self
            .generate(key, &prompt, true)
            .await
            .and_then(|text| serde_json::from_str(&text).context("intent response was not JSON"));
        match parsed {
            Ok(intent) => intent,
            Err(error) => {
                warn!(%error, "search intent parsing failed, returning empty intent");
                SearchIntent::default()
            }
        }
    }
}

/// Keyword fallback used when no API key is configured: substring checks
/// for a handful of known cities.
fn keyword_intent(query: &str) -> SearchIntent {
    let q = query.to_lowercase();
    if q.contains("mumbai") {
        return SearchIntent {
            city: Some("Mumbai".into()),
            clinic_type: Some(if q.contains("blood") { "Thalassemia" } else { "Dialysis" }.into()),
        };
    }
    if q.contains("bangalore") {
        return SearchIntent {
            city: Some("Bangalore".into()),
            clinic_type: Some("Dialysis".into()),
        };
    }
    if q.contains("goa") {
        return SearchIntent {
            city: Some("Goa".into()),
            clinic_type: Some("Dialysis".into()),
        };
    }
    SearchIntent::default()
}
