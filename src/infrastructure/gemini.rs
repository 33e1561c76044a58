//! Blocking client for the generative-language endpoint.
//!
//! One POST per analysis, no retries, no timeout override beyond the
//! transport default. The wire shapes mirror the generateContent API:
//! a `contents`/`parts`/`text` request and a `candidates` (or `error`)
//! response.

use crate::domain::AnalysisError;
use crate::infrastructure::Config;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Sends the prompt and returns the single free-text payload from the
    /// response.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Transport`] when the request itself fails,
    /// - [`AnalysisError::Application`] when the API reports an error payload,
    /// - [`AnalysisError::MalformedResponse`] when the expected nested
    ///   shape is missing.
    ///
    /// Error details are stripped of the request URL so the credential in
    /// the query string can never reach the log.
    pub fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(|e| AnalysisError::Transport(e.without_url().to_string()))?;

        debug!(status = %response.status(), "generateContent response received");

        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| AnalysisError::MalformedResponse(e.without_url().to_string()))?;
        extract_text(body)
    }
}

/// Validates the response envelope and pulls out the candidate text.
fn extract_text(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    if let Some(error) = response.error {
        return Err(AnalysisError::Application(error.message));
    }

    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            AnalysisError::MalformedResponse("no candidate text in response".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extracts_candidate_text() {
        let body = response(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"a\":\"b\"}"}]}}]}"#,
        );
        assert_eq!(extract_text(body).unwrap(), "{\"a\":\"b\"}");
    }

    #[test]
    fn test_first_candidate_wins() {
        let body = response(
            r#"{"candidates": [
                {"content": {"parts": [{"text": "first"}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]}"#,
        );
        assert_eq!(extract_text(body).unwrap(), "first");
    }

    #[test]
    fn test_error_payload_is_application_error() {
        let body = response(r#"{"error": {"message": "quota exceeded", "code": 429}}"#);
        assert_eq!(
            extract_text(body).unwrap_err(),
            AnalysisError::Application("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_empty_candidate_list_is_malformed() {
        let body = response(r#"{"candidates": []}"#);
        assert!(matches!(
            extract_text(body).unwrap_err(),
            AnalysisError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_candidate_without_parts_is_malformed() {
        let body = response(r#"{"candidates": [{"content": {"parts": []}}]}"#);
        assert!(matches!(
            extract_text(body).unwrap_err(),
            AnalysisError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_completely_empty_body_is_malformed() {
        let body = response("{}");
        assert!(matches!(
            extract_text(body).unwrap_err(),
            AnalysisError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_request_body_matches_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: "hello".to_string(),
                }],
            }],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"contents":[{"parts":[{"text":"hello"}]}]}"#
        );
    }
}
