//! `Kiji` builder for pages that need a non-default configuration.

use crate::error::KijiJsError;
use crate::fetch::FetchIndexSource;
use crate::types::JsQuickResults;
use crate::{dom, navigator, search};
use kiji_core::search as search_query;
use kiji_core::{KijiConfig, QuickResults};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Entry point for mounting kiji from JavaScript.
///
/// # Example
///
/// ```javascript
/// import init, { Kiji } from '@kiji/wasm';
///
/// await init();
///
/// new Kiji()
///   .withConfig({ search: { indexUrl: '/blog/search.json' } })
///   .mount();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct Kiji {
    config: KijiConfig,
}

#[wasm_bindgen]
impl Kiji {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override settings from a JavaScript object. Missing keys keep their defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(mut self, config: JsValue) -> Result<Kiji, JsValue> {
        let config: KijiConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| KijiJsError::config(format!("Invalid config object: {}", e)))?;
        config.validate().map_err(KijiJsError::from)?;
        self.config = config;
        Ok(self)
    }

    /// Override settings from a JSON string.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(mut self, json: &str) -> Result<Kiji, JsValue> {
        self.config = KijiConfig::from_json(json).map_err(KijiJsError::from)?;
        Ok(self)
    }

    /// The effective configuration, defaults included.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.config).map_err(KijiJsError::from)?)
    }

    /// Mount both components, now or once the document has finished parsing.
    #[wasm_bindgen]
    pub fn mount(&self) -> Result<(), JsValue> {
        let document = dom::document()?;
        if document.ready_state() != "loading" {
            mount_now(&self.config);
            return Ok(());
        }

        let config = self.config.clone();
        let done = Rc::new(Cell::new(false));
        dom::listen(&document, "DOMContentLoaded", move |_event: web_sys::Event| {
            if !done.replace(true) {
                mount_now(&config);
            }
        })?;
        Ok(())
    }

    /// Run one quick search outside the widget.
    ///
    /// Resolves to `{ query, results: [{ url, titleHtml, previewHtml }], fullSearchUrl }`.
    /// Queries below `minQueryChars` resolve to no results without loading the index.
    #[wasm_bindgen]
    pub fn search(&self, query: String) -> js_sys::Promise {
        let config = self.config.search.clone();
        future_to_promise(async move {
            let results = if search_query::meets_threshold(&config, &query) {
                let source = FetchIndexSource::new(config.index_url.clone());
                search_query::search(&source, &query, &config)
                    .await
                    .map_err(KijiJsError::from)?
            } else {
                QuickResults::empty(&query, &config)
            };
            Ok(serde_wasm_bindgen::to_value(&JsQuickResults::from(&results))
                .map_err(KijiJsError::from)?)
        })
    }
}

/// Mounts each component on its own; one failing does not stop the others.
fn mount_now(config: &KijiConfig) {
    if let Err(e) = search::mount(config.search.clone()) {
        log::warn!("Quick search not mounted: {e}");
    }
    if let Err(e) = navigator::mount(config.navigator.clone(), &config.stats) {
        log::warn!("Navigator not mounted: {e}");
    }
    match navigator::mount_in_page_links(config.navigator.header_offset) {
        Ok(links) => log::debug!("Smooth scrolling enabled on {links} in-page links"),
        Err(e) => log::warn!("In-page links not mounted: {e}"),
    }
}
