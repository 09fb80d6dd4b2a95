use thiserror::Error;

pub type Result<T> = std::result::Result<T, SelectorError>;

/// Whole-call failures. Any of these means no report was produced.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("invalid json: {0}")]
    InvalidJson(String),
    #[error("missing input: supply markup or a `url` field")]
    MissingInput,
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The dynamic adapter could not produce markup for a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error fetching {url}: {message}")]
    Network { url: String, message: String },
    #[error("timed out fetching {url}")]
    Timeout { url: String },
    #[error("HTTP status {status} fetching {url}")]
    Status { url: String, status: u16 },
    #[error("failed to render {url}: {message}")]
    Render { url: String, message: String },
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    pub fn network(url: &str, message: impl ToString) -> Self {
        FetchError::Network {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    pub fn render(url: &str, message: impl ToString) -> Self {
        FetchError::Render {
            url: url.to_string(),
            message: message.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<serde_json::Error> for SelectorError {
    fn from(e: serde_json::Error) -> Self {
        SelectorError::InvalidJson(e.to_string())
    }
}

/// Per-field failures. These are recorded in the field's report entry and
/// never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
}

impl FieldError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        FieldError::InvalidSelector(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        FieldError::UnsupportedSelector(msg.into())
    }
}
