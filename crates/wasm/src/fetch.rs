//! Index source backed by the browser Fetch API.

use kiji_traits::{IndexError, IndexSource, parse_index};
use kiji_types::PostRecord;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Fetches the search index from a URL on every call.
///
/// The browser's HTTP cache decides whether that reaches the network.
#[derive(Debug, Clone)]
pub struct FetchIndexSource {
    url: String,
}

impl FetchIndexSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The GET request for the index, in CORS mode.
    pub fn request(&self) -> Result<web_sys::Request, IndexError> {
        let opts = web_sys::RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(web_sys::RequestMode::Cors);

        web_sys::Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| self.failed(format!("Failed to create request: {:?}", e)))
    }

    fn failed(&self, message: String) -> IndexError {
        IndexError::LoadFailed {
            path: self.url.clone(),
            message,
        }
    }
}

impl IndexSource for FetchIndexSource {
    async fn fetch_index(&self) -> Result<Vec<PostRecord>, IndexError> {
        let window = web_sys::window()
            .ok_or_else(|| self.failed("No window object available".into()))?;
        let request = self.request()?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| self.failed(format!("Fetch failed: {:?}", e)))?;

        let response: web_sys::Response = response_value
            .dyn_into()
            .map_err(|_| self.failed("Failed to convert response".into()))?;

        if response.status() == 404 {
            return Err(IndexError::NotFound(self.url.clone()));
        }
        if !response.ok() {
            return Err(self.failed(format!(
                "HTTP error: {} {}",
                response.status(),
                response.status_text()
            )));
        }

        let array_buffer = JsFuture::from(
            response
                .array_buffer()
                .map_err(|e| self.failed(format!("Failed to get array buffer: {:?}", e)))?,
        )
        .await
        .map_err(|e| self.failed(format!("Failed to read response body: {:?}", e)))?;

        let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();
        parse_index(&bytes)
    }

    fn location(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &'static str {
        "FetchIndexSource"
    }
}
