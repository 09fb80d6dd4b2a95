use super::Renderer;
use crate::error::FetchError;
use crate::types::FetchConfig;
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;
use url::Url;

/// Headless Chrome. A browser is launched per call and dropped before the
/// call returns, on success and on failure alike.
pub struct ChromeRenderer {
    timeout: Duration,
    user_agent: String,
}

impl ChromeRenderer {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_millis(config.timeout_ms),
            user_agent: config.user_agent.clone(),
        }
    }
}

impl Renderer for ChromeRenderer {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn fetch_and_render(&self, url: &Url) -> Result<String, FetchError> {
        let render_err = |e: &dyn std::fmt::Display| FetchError::render(url.as_str(), e);

        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .idle_browser_timeout(self.timeout)
            .build()
            .map_err(|e| render_err(&e))?;

        let browser = Browser::new(options).map_err(|e| render_err(&e))?;
        let tab = browser.new_tab().map_err(|e| render_err(&e))?;
        tab.set_default_timeout(self.timeout);
        tab.set_user_agent(&self.user_agent, None, None)
            .map_err(|e| render_err(&e))?;

        tab.navigate_to(url.as_str()).map_err(|e| render_err(&e))?;
        tab.wait_until_navigated().map_err(|e| {
            if e.to_string().to_ascii_lowercase().contains("timed out") {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                render_err(&e)
            }
        })?;

        let html = tab.get_content().map_err(|e| render_err(&e))?;
        tracing::debug!(url = %url, bytes = html.len(), "rendered page");
        Ok(html)
    }
}
