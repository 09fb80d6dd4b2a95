use crate::error::{FieldError, Result, SelectorError};
use crate::tools::classify::{classify, normalize_selector};
use crate::tools::document::{Adapter, Document, DocumentAdapter, MatchResult};
use crate::tools::fetch::{renderer_for, Renderer};
use crate::tools::specificity::{specificity_for, SpecificityScore};
use crate::tools::validate::validate;
use crate::types::{ParserConfig, SelectorKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Reserved input key naming the page to fetch. Never treated as a selector.
pub const URL_KEY: &str = "url";

/// Selector mapping as supplied by the caller: raw JSON text or decoded JSON.
#[derive(Debug, Clone)]
pub enum SelectorInput {
    Json(String),
    Value(Value),
}

impl From<&str> for SelectorInput {
    fn from(raw: &str) -> Self {
        SelectorInput::Json(raw.to_string())
    }
}

impl From<String> for SelectorInput {
    fn from(raw: String) -> Self {
        SelectorInput::Json(raw)
    }
}

impl From<Value> for SelectorInput {
    fn from(value: Value) -> Self {
        SelectorInput::Value(value)
    }
}

impl From<Map<String, Value>> for SelectorInput {
    fn from(map: Map<String, Value>) -> Self {
        SelectorInput::Value(Value::Object(map))
    }
}

impl From<HashMap<String, String>> for SelectorInput {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect::<BTreeMap<_, _>>().into()
    }
}

impl From<BTreeMap<String, String>> for SelectorInput {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect::<Map<_, _>>()
            .into()
    }
}

impl SelectorInput {
    fn into_fields(self) -> Result<Map<String, Value>> {
        let value = match self {
            SelectorInput::Json(raw) => serde_json::from_str(&raw)?,
            SelectorInput::Value(value) => value,
        };
        match value {
            Value::Object(fields) => Ok(fields),
            other => Err(SelectorError::InvalidJson(format!(
                "expected a JSON object, found {}",
                json_type(&other)
            ))),
        }
    }
}

/// Classification, validation and specificity for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorEntry {
    /// The value as supplied.
    pub raw: String,
    /// Normalized form; this is what was classified, validated and matched.
    pub selector: String,
    pub kind: Option<SelectorKind>,
    pub is_valid: bool,
    pub error: Option<String>,
    /// Present only for valid CSS selectors.
    pub specificity: Option<SpecificityScore>,
}

impl SelectorEntry {
    /// Classify, validate and score one input value. Never fails; problems
    /// are recorded in `error`.
    pub fn analyze(value: &Value) -> Self {
        let Some(raw) = value.as_str() else {
            return Self::rejected(
                value.to_string(),
                String::new(),
                None,
                FieldError::unsupported(format!(
                    "selector must be a string, found {}",
                    json_type(value)
                )),
            );
        };

        let selector = normalize_selector(raw);
        let kind = match classify(raw) {
            Ok(kind) => kind,
            Err(err) => return Self::rejected(raw.to_string(), selector, None, err),
        };
        if let Err(err) = validate(&selector, kind) {
            return Self::rejected(raw.to_string(), selector, Some(kind), err);
        }

        Self {
            raw: raw.to_string(),
            specificity: specificity_for(&selector, kind),
            selector,
            kind: Some(kind),
            is_valid: true,
            error: None,
        }
    }

    fn rejected(
        raw: String,
        selector: String,
        kind: Option<SelectorKind>,
        err: FieldError,
    ) -> Self {
        Self {
            raw,
            selector,
            kind,
            is_valid: false,
            error: Some(err.to_string()),
            specificity: None,
        }
    }

    /// Record a match-time failure. A grammatical selector the engine cannot
    /// evaluate stays valid and keeps its specificity.
    fn record(&mut self, err: FieldError) {
        if matches!(err, FieldError::InvalidSelector(_)) {
            self.is_valid = false;
            self.specificity = None;
        }
        self.error = Some(err.to_string());
    }
}

/// Everything reported for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    #[serde(flatten)]
    pub entry: SelectorEntry,
    #[serde(rename = "match")]
    pub result: MatchResult,
}

/// Field name → report, one entry per non-`url` input key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionReport {
    fields: BTreeMap<String, FieldReport>,
}

impl ExtractionReport {
    pub fn get(&self, name: &str) -> Option<&FieldReport> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldReport)> {
        self.fields.iter()
    }

    /// True when every field classified and validated cleanly.
    pub fn all_valid(&self) -> bool {
        self.fields.values().all(|f| f.entry.is_valid)
    }
}

impl FromIterator<(String, FieldReport)> for ExtractionReport {
    fn from_iter<I: IntoIterator<Item = (String, FieldReport)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Runs classify → validate → match → extract for a selector mapping.
pub struct SelectorParser {
    config: ParserConfig,
    renderer: Box<dyn Renderer>,
}

impl SelectorParser {
    /// Build a parser whose dynamic adapter uses the renderer named in
    /// `config.fetch`.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let renderer = renderer_for(&config.fetch)?;
        Ok(Self { config, renderer })
    }

    /// Build a parser around a caller-supplied renderer.
    pub fn with_renderer(config: ParserConfig, renderer: impl Renderer + 'static) -> Self {
        Self {
            config,
            renderer: Box::new(renderer),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Validate every selector and match the valid ones against `markup`, or
    /// against the page named by the input's `url` when no markup is given.
    ///
    /// Bad selectors are reported per field. Only malformed input, a missing
    /// document source, an unusable URL or a failed fetch abort the call.
    ///
    /// # Examples
    /// ```
    /// use selector_parser::{ParserConfig, SelectorParser};
    ///
    /// let parser = SelectorParser::new(ParserConfig::default()).unwrap();
    /// let report = parser
    ///     .parse_and_validate(r#"{"title": "h1.title"}"#, Some(r#"<h1 class="title">Hello</h1>"#))
    ///     .unwrap();
    /// let title = report.get("title").unwrap();
    /// assert!(title.result.found);
    /// assert_eq!(title.result.count, 1);
    /// ```
    pub fn parse_and_validate(
        &self,
        input: impl Into<SelectorInput>,
        markup: Option<&str>,
    ) -> Result<ExtractionReport> {
        let mut fields = input.into().into_fields()?;
        let url = fields.remove(URL_KEY);
        let entries = analyze_fields(&fields);

        if entries.is_empty() {
            tracing::info!("no selector fields; nothing to match");
            return Ok(ExtractionReport::default());
        }

        let adapter = Adapter::select(markup, url.as_ref(), self.renderer.as_ref())?;
        let document = adapter.resolve()?;
        tracing::info!(
            adapter = adapter.name(),
            fields = entries.len(),
            "matching selectors"
        );

        Ok(entries
            .into_iter()
            .map(|(name, mut entry)| {
                let result = self.match_entry(&document, &mut entry);
                tracing::debug!(
                    field = %name,
                    valid = entry.is_valid,
                    count = result.count,
                    "field processed"
                );
                (name, FieldReport { entry, result })
            })
            .collect())
    }

    /// Classification, validation and specificity only; no document is
    /// resolved and the `url` key is ignored.
    pub fn inspect(&self, input: impl Into<SelectorInput>) -> Result<BTreeMap<String, SelectorEntry>> {
        inspect(input)
    }

    /// [`Self::parse_and_validate`] with the selector mapping read from a file.
    pub fn parse_json_file(
        &self,
        path: impl AsRef<Path>,
        markup: Option<&str>,
    ) -> Result<ExtractionReport> {
        let raw = std::fs::read_to_string(path)?;
        self.parse_and_validate(raw, markup)
    }

    fn match_entry(&self, document: &Document, entry: &mut SelectorEntry) -> MatchResult {
        let Some(kind) = entry.kind.filter(|_| entry.is_valid) else {
            return MatchResult::none();
        };
        match document.select(&entry.selector, kind, self.config.collapse_whitespace) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(selector = %entry.selector, error = %err, "selector not matched");
                entry.record(err);
                MatchResult::none()
            }
        }
    }
}

/// [`SelectorParser::parse_and_validate`] with the default configuration.
pub fn parse_and_validate(
    input: impl Into<SelectorInput>,
    markup: Option<&str>,
) -> Result<ExtractionReport> {
    SelectorParser::new(ParserConfig::default())?.parse_and_validate(input, markup)
}

/// Classify, validate and score every selector without a parser or renderer.
/// The `url` key is ignored.
pub fn inspect(input: impl Into<SelectorInput>) -> Result<BTreeMap<String, SelectorEntry>> {
    let mut fields = input.into().into_fields()?;
    fields.remove(URL_KEY);
    Ok(analyze_fields(&fields))
}

fn analyze_fields(fields: &Map<String, Value>) -> BTreeMap<String, SelectorEntry> {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), SelectorEntry::analyze(value)))
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
