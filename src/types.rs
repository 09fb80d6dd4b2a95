use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The syntax family a selector string belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Id,
    Class,
    Tag,
    Xpath,
    Css,
}

impl SelectorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Id => "id",
            SelectorKind::Class => "class",
            SelectorKind::Tag => "tag",
            SelectorKind::Xpath => "xpath",
            SelectorKind::Css => "css",
        }
    }

    /// ID, Class and Tag shorthands are queried through the CSS engine.
    pub fn is_css_family(&self) -> bool {
        !matches!(self, SelectorKind::Xpath)
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Plain HTTP GET; no script execution.
    #[default]
    Http,
    /// Headless Chrome (requires the `headless` feature).
    Headless,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub renderer: RendererKind,
    pub timeout_ms: u64,
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            renderer: RendererKind::Http,
            timeout_ms: 30_000,
            user_agent: concat!("selector-parser/", env!("CARGO_PKG_VERSION")).to_string(),
            max_redirects: 10,
        }
    }
}

/// Configuration handed to [`crate::SelectorParser`] at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Trim extracted text and collapse internal whitespace runs.
    pub collapse_whitespace: bool,
    pub fetch: FetchConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            collapse_whitespace: true,
            fetch: FetchConfig::default(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.fetch.timeout_ms = timeout_ms;
        self
    }

    pub fn with_renderer(mut self, renderer: RendererKind) -> Self {
        self.fetch.renderer = renderer;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.fetch.user_agent = user_agent.into();
        self
    }

    pub fn with_collapse_whitespace(mut self, collapse: bool) -> Self {
        self.collapse_whitespace = collapse;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
