use crate::utils::error::{ProspectError, Result};
use serde_json::Value;

/// Locates a JSON payload embedded in free-form model output.
///
/// The model is instructed to answer with bare JSON, but in practice the
/// payload arrives wrapped in prose or code fences. The scan takes the first
/// occurrence of the opening bracket and the last occurrence of the closing
/// one, inclusive. Known limitation: an unrelated bracket inside a string
/// value before the real terminator would defeat this; the prompts forbid
/// such output and the failure mode is a parse error, not silence.
fn payload(raw: &str, open: char, close: char) -> Result<&str> {
    let start = raw.find(open).ok_or_else(|| {
        ProspectError::extraction(format!("response contains no '{}'", open))
    })?;
    let end = raw.rfind(close).ok_or_else(|| {
        ProspectError::extraction(format!("response contains no '{}'", close))
    })?;
    if end <= start {
        return Err(ProspectError::extraction(format!(
            "closing '{}' does not follow opening '{}'",
            close, open
        )));
    }
    Ok(&raw[start..=end])
}

/// Extracts and parses the JSON array embedded in `raw`.
pub fn array_payload(raw: &str) -> Result<Value> {
    let text = payload(raw, '[', ']')?;
    serde_json::from_str(text).map_err(ProspectError::Parse)
}

/// Extracts and parses the JSON object embedded in `raw`.
pub fn object_payload(raw: &str) -> Result<Value> {
    let text = payload(raw, '{', '}')?;
    serde_json::from_str(text).map_err(ProspectError::Parse)
}
