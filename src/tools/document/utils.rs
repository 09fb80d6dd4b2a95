use crate::error::{Result, SelectorError};
use crate::patterns::WHITESPACE;
use serde_json::Value;
use url::Url;

/// Trim and fold whitespace runs into single spaces.
pub(super) fn collapse(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Accept only absolute http(s) URLs given as JSON strings.
pub(super) fn parse_url(value: &Value) -> Result<Url> {
    let Some(raw) = value.as_str() else {
        return Err(SelectorError::InvalidUrl(format!(
            "expected a string, found {value}"
        )));
    };
    let url = Url::parse(raw.trim())
        .map_err(|e| SelectorError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SelectorError::InvalidUrl(format!(
            "{raw}: unsupported scheme `{other}`"
        ))),
    }
}
