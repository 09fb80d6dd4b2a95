//! Document adapters and selector matching.
//!
//! Both adapters end in the same parsed [`Document`], and all matching goes
//! through [`Document::select`], so a selector reports the same result whether
//! its markup was supplied or fetched.

pub mod types;
mod utils;


pub use types::*;
use utils::*;

use crate::error::{FieldError, Result, SelectorError};
use crate::tools::classify::normalize_selector;
use crate::tools::fetch::Renderer;
use crate::tools::xpath::{self, XmlMirror};
use crate::types::SelectorKind;
use scraper::{Html, Selector};
use serde_json::Value;
use std::cell::OnceCell;
use url::Url;

/// A parsed HTML tree, queried by CSS or XPath.
pub struct Document {
    html: Html,
    xml: OnceCell<XmlMirror>,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
            xml: OnceCell::new(),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Apply a selector already classified as `kind`.
    ///
    /// ID, Class and Tag shorthands are valid CSS and are run through the CSS
    /// engine; XPath runs over an [`XmlMirror`] of the same tree, built on
    /// first use. Grammatical selectors the engines cannot evaluate (CSS
    /// pseudo-elements, XPath that does not yield a node-set) are reported as
    /// [`FieldError::UnsupportedSelector`].
    pub fn select(
        &self,
        raw: &str,
        kind: SelectorKind,
        collapse_whitespace: bool,
    ) -> std::result::Result<MatchResult, FieldError> {
        let selector = normalize_selector(raw);
        let texts = if kind.is_css_family() {
            self.select_css(&selector)?
        } else {
            self.select_xpath(&selector)?
        };
        let texts = texts
            .into_iter()
            .map(|t| if collapse_whitespace { collapse(&t) } else { t })
            .collect();
        Ok(MatchResult::from_texts(texts))
    }

    fn select_css(&self, selector: &str) -> std::result::Result<Vec<String>, FieldError> {
        let parsed = Selector::parse(selector).map_err(|e| {
            FieldError::unsupported(format!("the CSS engine cannot match this selector: {e:?}"))
        })?;
        Ok(self
            .html
            .select(&parsed)
            .map(|el| el.text().collect::<String>())
            .collect())
    }

    fn select_xpath(&self, selector: &str) -> std::result::Result<Vec<String>, FieldError> {
        let expr = xpath::compile(selector)?;
        self.xml
            .get_or_init(|| XmlMirror::from_html(&self.html))
            .select(&expr)
    }
}

/// Something that can produce a [`Document`] to match against.
pub trait DocumentAdapter {
    fn name(&self) -> &'static str;

    fn resolve(&self) -> Result<Document>;
}

/// Markup supplied by the caller; no network activity.
pub struct StaticAdapter<'a> {
    markup: &'a str,
}

impl<'a> StaticAdapter<'a> {
    pub fn new(markup: &'a str) -> Self {
        Self { markup }
    }
}

impl DocumentAdapter for StaticAdapter<'_> {
    fn name(&self) -> &'static str {
        "static"
    }

    fn resolve(&self) -> Result<Document> {
        Ok(Document::parse(self.markup))
    }
}

/// Markup obtained by fetching and rendering a URL.
pub struct DynamicAdapter<'a> {
    url: Url,
    renderer: &'a dyn Renderer,
}

impl<'a> DynamicAdapter<'a> {
    pub fn new(url: Url, renderer: &'a dyn Renderer) -> Self {
        Self { url, renderer }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl DocumentAdapter for DynamicAdapter<'_> {
    fn name(&self) -> &'static str {
        "dynamic"
    }

    fn resolve(&self) -> Result<Document> {
        tracing::debug!(url = %self.url, renderer = self.renderer.name(), "fetching document");
        let markup = self.renderer.fetch_and_render(&self.url).map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "fetch failed");
            SelectorError::Fetch(e)
        })?;
        Ok(Document::parse(&markup))
    }
}

/// The adapter chosen for one call.
pub enum Adapter<'a> {
    Static(StaticAdapter<'a>),
    Dynamic(DynamicAdapter<'a>),
}

impl<'a> Adapter<'a> {
    /// Non-empty markup wins; otherwise a `url` selects the dynamic adapter;
    /// with neither the call fails with [`SelectorError::MissingInput`].
    pub fn select(
        markup: Option<&'a str>,
        url: Option<&Value>,
        renderer: &'a dyn Renderer,
    ) -> Result<Self> {
        if let Some(markup) = markup.filter(|m| !m.trim().is_empty()) {
            return Ok(Adapter::Static(StaticAdapter::new(markup)));
        }
        match url {
            Some(value) => Ok(Adapter::Dynamic(DynamicAdapter::new(
                parse_url(value)?,
                renderer,
            ))),
            None => Err(SelectorError::MissingInput),
        }
    }
}

impl DocumentAdapter for Adapter<'_> {
    fn name(&self) -> &'static str {
        match self {
            Adapter::Static(adapter) => adapter.name(),
            Adapter::Dynamic(adapter) => adapter.name(),
        }
    }

    fn resolve(&self) -> Result<Document> {
        match self {
            Adapter::Static(adapter) => adapter.resolve(),
            Adapter::Dynamic(adapter) => adapter.resolve(),
        }
    }
}
