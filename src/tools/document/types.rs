use serde::{Deserialize, Serialize};

/// Extracted text: a single string for one match, a list for several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Single(String),
    Multiple(Vec<String>),
}

impl Content {
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Content::Single(text) => vec![text.as_str()],
            Content::Multiple(texts) => texts.iter().map(String::as_str).collect(),
        }
    }
}

/// Outcome of applying one selector to one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub found: bool,
    pub content: Option<Content>,
    pub count: usize,
}

impl MatchResult {
    /// The zero-match result, also reported for selectors that were never run.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_texts(mut texts: Vec<String>) -> Self {
        let count = texts.len();
        let content = match count {
            0 => None,
            1 => texts.pop().map(Content::Single),
            _ => Some(Content::Multiple(texts)),
        };
        Self {
            found: count > 0,
            content,
            count,
        }
    }
}
