mod client;
mod headers;
#[cfg(feature = "headless")]
mod headless;


pub use client::HttpRenderer;
#[cfg(feature = "headless")]
pub use headless::ChromeRenderer;

use crate::error::FetchError;
use crate::types::{FetchConfig, RendererKind};
use url::Url;

/// Turns a URL into the markup a browser would show after scripts ran.
///
/// Implementations must be usable from several threads; each call is
/// self-contained and releases whatever it acquired before returning.
pub trait Renderer: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn fetch_and_render(&self, url: &Url) -> Result<String, FetchError>;
}

/// Build the renderer selected by `config`.
///
/// # Examples
/// ```
/// use selector_parser::{renderer_for, FetchConfig};
///
/// let renderer = renderer_for(&FetchConfig::default()).unwrap();
/// assert_eq!(renderer.name(), "http");
/// ```
pub fn renderer_for(config: &FetchConfig) -> Result<Box<dyn Renderer>, FetchError> {
    match config.renderer {
        RendererKind::Http => Ok(Box::new(HttpRenderer::new(config)?)),
        RendererKind::Headless => headless_renderer(config),
    }
}

#[cfg(feature = "headless")]
fn headless_renderer(config: &FetchConfig) -> Result<Box<dyn Renderer>, FetchError> {
    Ok(Box::new(ChromeRenderer::new(config)))
}

#[cfg(not(feature = "headless"))]
fn headless_renderer(_config: &FetchConfig) -> Result<Box<dyn Renderer>, FetchError> {
    Err(FetchError::Unavailable(
        "headless rendering requires the `headless` feature".to_string(),
    ))
}
