use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{asset_path, ContentProvider};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::{WebViewError, WebViewManager};

impl WebViewManager {
    /// Create the WebView as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, WebViewError> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;
        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle { webview })
    }

    /// Serve `solace://` requests from `provider`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol("solace".to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            protocol_response(&cp, asset_path(&uri))
        })
    }
}

/// Build the custom-protocol response for one asset path.
fn protocol_response(cp: &ContentProvider, path: &str) -> Response<Cow<'static, [u8]>> {
    match cp.resolve(path) {
        Some((mime, data)) => {
            let mut response = Response::new(Cow::Owned(data.into_owned()));
            let headers = response.headers_mut();
            headers.insert(
                CONTENT_TYPE,
                HeaderValue::from_str(&mime)
                    .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream")),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("solace://localhost"),
            );
            response
        }
        None => {
            warn!(path = %path, "custom protocol: asset not found");
            let mut response = Response::new(Cow::Borrowed(&b"Not Found"[..]));
            *response.status_mut() = StatusCode::NOT_FOUND;
            response
        }
    }
}
