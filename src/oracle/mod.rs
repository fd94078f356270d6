//! The attestation oracle: formats evidence into a prompt, calls Gemini with
//! a strict output schema, and parses the reply into an [`Attestation`].
//!
//! Each invocation is independent: no caching, no retry, no partial results.

mod gemini;
mod types;

pub use gemini::GeminiClient;

use serde_json::{Value, json};

use crate::attestation::Attestation;
use crate::config::WalletConfig;
use crate::error::OracleError;
use crate::evidence::EvidenceSource;

use types::{Content, GenerateContentRequest, GenerationConfig, Part};

const MAX_OUTPUT_TOKENS: u32 = 8192;

const PROMPT_PREAMBLE: &str = "You are an expert technical skills evaluator for a system called \
CVWallet. Your task is to analyze the provided evidence sources and generate a skills \
attestation for a software engineering candidate.";

const PROMPT_INSTRUCTIONS: &str = "Based on this evidence, generate a professional, \
evidence-based skills attestation. The output must be a JSON object that strictly adheres to \
the provided schema. Do not include any markdown formatting like ```json.\n\nYour response must \
contain a 'summary' and a 'skills' array. The summary should be a concise, professional \
paragraph. Each item in the skills array should include the 'skill' name, a 'score' from 0-100, \
and a brief 'evidence' string citing where the skill was observed.";

/// Generates skills attestations from evidence lists.
pub struct AttestationOracle {
    client: GeminiClient,
    model: String,
    temperature: f64,
}

impl AttestationOracle {
    pub fn new(client: GeminiClient, model: &str, temperature: f64) -> Self {
        Self {
            client,
            model: model.to_string(),
            temperature,
        }
    }

    /// Build an oracle from config. The credential is resolved from the
    /// environment here, at call-site construction, not at config load.
    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(
            GeminiClient::new(config.api_key.as_deref()),
            &config.model,
            config.temperature,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Produce an attestation for a non-empty evidence list, or fail.
    ///
    /// Failures collapse to three cases: credential absent (no call is
    /// attempted), the request itself failing, and a reply that does not
    /// parse into the attestation shape. The underlying cause is logged;
    /// callers surface one generic message.
    pub async fn attest(&self, evidence: &[EvidenceSource]) -> Result<Attestation, OracleError> {
        if evidence.is_empty() {
            return Err(OracleError::EmptyEvidence);
        }
        if !self.client.has_key() {
            tracing::error!("attestation refused: no API key in environment or config");
            return Err(OracleError::MissingCredential);
        }

        let request = self.build_request(evidence);
        let raw = self.client.generate(&self.model, &request).await.map_err(|e| {
            tracing::error!(error = %e, model = %self.model, "attestation request failed");
            OracleError::Request {
                model: self.model.clone(),
                message: e.to_string(),
            }
        })?;

        let attestation: Attestation = serde_json::from_str(raw.trim()).map_err(|e| {
            tracing::error!(error = %e, "attestation reply did not match the declared schema");
            OracleError::Malformed(e.to_string())
        })?;

        Ok(attestation)
    }

    fn build_request(&self, evidence: &[EvidenceSource]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: build_prompt(evidence),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        }
    }
}

/// Fixed instruction preamble plus one line per evidence item.
fn build_prompt(evidence: &[EvidenceSource]) -> String {
    let evidence_lines = evidence
        .iter()
        .map(|e| format!("- {}: {}", e.kind, e.identifier))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{PROMPT_PREAMBLE}\n\nThe evidence sources are:\n{evidence_lines}\n\n{PROMPT_INSTRUCTIONS}")
}

/// Declared output shape: required `summary` string and `skills` array of
/// required `{skill, score, evidence}` objects.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A concise, professional paragraph summarizing the candidate's skills."
            },
            "skills": {
                "type": "ARRAY",
                "description": "An array of skills with scores and evidence.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "skill": {
                            "type": "STRING",
                            "description": "The name of the technical skill."
                        },
                        "score": {
                            "type": "INTEGER",
                            "description": "The assessed score for the skill, from 0 to 100."
                        },
                        "evidence": {
                            "type": "STRING",
                            "description": "A brief sentence explaining the evidence for the skill assessment."
                        }
                    },
                    "required": ["skill", "score", "evidence"]
                }
            }
        },
        "required": ["summary", "skills"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::EvidenceSource;

    fn keyless_oracle() -> AttestationOracle {
        // Bypass env resolution so the test is deterministic regardless of
        // GEMINI_API_KEY being set on the host.
        let mut client = GeminiClient::new(Some("placeholder"));
        client.api_key = None;
        AttestationOracle::new(client, "gemini-2.5-flash", 0.2)
    }

    #[test]
    fn prompt_lists_each_evidence_item() {
        let evidence = vec![
            EvidenceSource::repository("https://github.com/user/repo"),
            EvidenceSource::file("performance-review.pdf"),
        ];
        let prompt = build_prompt(&evidence);
        assert!(prompt.contains("- GitHub Repository: https://github.com/user/repo"));
        assert!(prompt.contains("- Local File: performance-review.pdf"));
        assert!(prompt.starts_with(PROMPT_PREAMBLE));
    }

    #[test]
    fn schema_declares_required_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"][0], "summary");
        assert_eq!(schema["required"][1], "skills");
        let item = &schema["properties"]["skills"]["items"];
        assert_eq!(item["required"].as_array().unwrap().len(), 3);
        assert_eq!(item["properties"]["score"]["type"], "INTEGER");
    }

    #[test]
    fn request_serializes_structured_output_config() {
        let oracle = keyless_oracle();
        let request = oracle.build_request(&[EvidenceSource::file("cv.pdf")]);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(json.contains("\"maxOutputTokens\":8192"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[tokio::test]
    async fn empty_evidence_fails_before_credential_check() {
        let oracle = keyless_oracle();
        let err = oracle.attest(&[]).await.unwrap_err();
        assert!(matches!(err, OracleError::EmptyEvidence));
    }

    #[tokio::test]
    async fn missing_credential_fails_fast() {
        let oracle = keyless_oracle();
        let evidence = vec![EvidenceSource::file("cv.pdf")];
        let err = oracle.attest(&evidence).await.unwrap_err();
        assert!(matches!(err, OracleError::MissingCredential));
    }
}
