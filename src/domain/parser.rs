//! Best-effort JSON salvage for model responses.
//!
//! The generative API is asked for a raw JSON object, but the reply is free
//! text and frequently arrives wrapped in markdown code fences or padded
//! with prose. This module recovers the JSON object from that text without
//! touching the network or the terminal, so it can be tested in isolation.

use crate::domain::errors::AnalysisError;
use serde_json::Value;
use tracing::debug;

/// Parses a model reply into the report JSON value.
///
/// The reply is first narrowed with [`extract_json`], then parsed with
/// serde. A reply that still is not valid JSON yields
/// [`AnalysisError::Parse`]; this function never panics.
pub fn parse_report(raw: &str) -> Result<Value, AnalysisError> {
    let candidate = extract_json(raw);
    debug!(
        raw_len = raw.len(),
        candidate_len = candidate.len(),
        "salvaging report JSON"
    );
    serde_json::from_str(&candidate).map_err(|e| AnalysisError::Parse(e.to_string()))
}

/// Narrows free text down to the JSON object it most likely contains.
///
/// Strips any ```json / ``` fence markers, then slices from the first `{`
/// to the last `}` inclusive. When either brace is missing the stripped
/// text is returned unchanged so the caller can attempt to parse it as-is.
pub fn extract_json(raw: &str) -> String {
    let stripped = raw.replace("```json", "").replace("```", "");
    let stripped = stripped.trim();

    match (stripped.find('{'), stripped.rfind('}')) {
        (Some(first), Some(last)) if first <= last => stripped[first..=last].to_string(),
        _ => stripped.to_string(),
    }
}
