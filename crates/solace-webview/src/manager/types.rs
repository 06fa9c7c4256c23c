/// Configuration for creating the WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    pub transparent: bool,
    /// Dev tools are always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Solace/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
        }
    }
}

impl WebViewConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
