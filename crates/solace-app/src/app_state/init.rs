//! Window creation and chat WebView setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use solace_common::SolaceError;
use solace_webview::{ContentProvider, WebViewConfig, WebViewManager};

use super::bounds::full_window_rect;
use super::core::SolaceApp;

/// Directory, relative to the working directory, for extra page assets.
const PANELS_DIR: &str = "assets/panels";

/// Path of the chat page under `solace://localhost/`.
const CHAT_PAGE: &str = "chat/index.html";

const CHAT_URL: &str = "solace://localhost/chat/index.html";

/// The chat page is compiled in so the binary runs from anywhere.
const CHAT_HTML: &str = include_str!("../../../../assets/panels/chat/index.html");

impl SolaceApp {
    /// Create the window and the chat WebView.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SolaceError> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(320.0, 400.0));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| SolaceError::Window(e.to_string()))?;

        let manager = self.initialize_webviews();
        let config = WebViewConfig {
            devtools: self.config.window.devtools || cfg!(debug_assertions),
            ..WebViewConfig::with_url(CHAT_URL)
        };
        let view = manager
            .create(window.as_ref(), full_window_rect(window.inner_size()), config)
            .map_err(|e| SolaceError::WebView(e.to_string()))?;

        self.webviews = Some(manager);
        self.chat_view = Some(view);
        self.window = Some(window);
        tracing::info!("Window and chat view created");
        Ok(())
    }

    /// Set up the WebView manager with the content provider for `solace://`.
    fn initialize_webviews(&self) -> WebViewManager {
        let panels_path = std::env::current_dir().unwrap_or_default().join(PANELS_DIR);

        let mut content_provider = ContentProvider::new(&panels_path);
        content_provider.add_override(CHAT_PAGE, "text/html", CHAT_HTML);

        let mut manager = WebViewManager::new();
        manager.set_content_provider(content_provider);
        tracing::debug!(panels_dir = %panels_path.display(), "WebView manager initialized");
        manager
    }

    /// Keep the chat view covering the window.
    pub(super) fn sync_webview_bounds(&self) {
        let (Some(window), Some(view)) = (&self.window, &self.chat_view) else {
            return;
        };
        if let Err(e) = view.set_bounds(full_window_rect(window.inner_size())) {
            tracing::warn!(error = %e, "Failed to resize chat view");
        }
    }
}
