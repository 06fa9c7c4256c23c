use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while bringing up the window and its chat view.
#[derive(Debug, thiserror::Error)]
pub enum SolaceError {
    #[error("failed to create window: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}
