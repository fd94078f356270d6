use reqwest::Client;
use std::time::Duration;

use super::types::{GenerateContentRequest, GenerateContentResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Thin client for the Gemini `generateContent` endpoint.
///
/// Key resolution order: explicit key, then `GEMINI_API_KEY`, then
/// `GOOGLE_API_KEY`. A missing key is not an error until a call is made.
pub struct GeminiClient {
    pub(super) api_key: Option<String>,
    base_url: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(api_key: Option<&str>) -> Self {
        let resolved_key = api_key
            .map(String::from)
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok());

        Self {
            api_key: resolved_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Point the client at a different endpoint. Used by tests against a
    /// mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    /// POST a `generateContent` request and return the first candidate's
    /// concatenated text parts.
    pub(super) async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> anyhow::Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Gemini API key not set"))?;

        let url = format!(
            "{}/v1beta/{}:generateContent?key={key}",
            self.base_url,
            Self::model_name(model),
        );

        let response = self.client.post(url).json(request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error ({status}): {error_text}");
        }

        let result: GenerateContentResponse = response.json().await?;
        if let Some(error) = result.error {
            anyhow::bail!("Gemini API error: {}", error.message);
        }

        Self::extract_text(&result)
    }

    fn extract_text(result: &GenerateContentResponse) -> anyhow::Result<String> {
        let text = result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .map(|candidate| {
                let mut out = String::new();
                for part in &candidate.content.parts {
                    if let Some(t) = &part.text {
                        if !out.is_empty() {
                            out.push('\n');
                        }
                        out.push_str(t);
                    }
                }
                out
            })
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!("No response from Gemini");
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_explicit_key() {
        let client = GeminiClient::new(Some("test-api-key"));
        assert_eq!(client.api_key.as_deref(), Some("test-api-key"));
    }

    #[test]
    fn model_name_prefixing() {
        assert_eq!(
            GeminiClient::model_name("gemini-2.5-flash"),
            "models/gemini-2.5-flash"
        );
        assert_eq!(
            GeminiClient::model_name("models/gemini-2.5-pro"),
            "models/gemini-2.5-pro"
        );
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let client = GeminiClient::new(Some("k")).with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(GeminiClient::extract_text(&response).unwrap(), "{\"a\":\n1}");
    }

    #[test]
    fn extract_text_fails_on_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(GeminiClient::extract_text(&response).is_err());
    }
}
