//! Quick-search widget mounted on the sidebar input.

use crate::dom;
use crate::error::KijiJsError;
use crate::fetch::FetchIndexSource;
use kiji_core::{QuickSearch, SearchConfig};
use kiji_traits::{IndexSource, SearchSurface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

const PANEL_CLASS: &str = "quick-search-results";

/// The search input and its result panel.
#[derive(Debug, Clone)]
pub struct DomSearchSurface {
    document: web_sys::Document,
    input: web_sys::HtmlInputElement,
    panel_id: String,
}

impl DomSearchSurface {
    pub fn new(
        document: web_sys::Document,
        input: web_sys::HtmlInputElement,
        panel_id: impl Into<String>,
    ) -> Self {
        Self {
            document,
            input,
            panel_id: panel_id.into(),
        }
    }

    fn panel(&self) -> Option<web_sys::Element> {
        self.document.get_element_by_id(&self.panel_id)
    }

    fn create_panel(&self) -> Result<(), KijiJsError> {
        let parent = self
            .input
            .parent_node()
            .ok_or_else(|| KijiJsError::dom("Search input has no parent"))?;
        let panel = self
            .document
            .create_element("div")
            .map_err(|e| KijiJsError::from_js("Failed to create result panel", e))?;
        panel.set_id(&self.panel_id);
        panel.set_class_name(PANEL_CLASS);
        parent
            .append_child(&panel)
            .map_err(|e| KijiJsError::from_js("Failed to attach result panel", e))?;
        Ok(())
    }
}

impl SearchSurface for DomSearchSurface {
    fn ensure_panel(&mut self) -> bool {
        if self.panel().is_some() {
            return false;
        }
        match self.create_panel() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    fn show_panel(&mut self, html: &str) {
        if let Some(panel) = self.panel() {
            panel.set_inner_html(html);
            dom::set_display(&panel, "block");
        }
    }

    fn hide_panel(&mut self) {
        if let Some(panel) = self.panel() {
            dom::set_display(&panel, "none");
        }
    }

    fn navigate(&mut self, url: &str) {
        let result = dom::window().and_then(|w| {
            w.location()
                .set_href(url)
                .map_err(|e| KijiJsError::from_js("Navigation failed", e))
        });
        if let Err(e) = result {
            log::warn!("{e}");
        }
    }
}

struct SearchHost {
    widget: QuickSearch,
    surface: DomSearchSurface,
}

/// Wires the quick-search widget to the page.
///
/// Returns `Ok(false)` without touching the page when the search input is absent.
pub fn mount(config: SearchConfig) -> Result<bool, KijiJsError> {
    let document = dom::document()?;
    let Some(input) = document
        .get_element_by_id(&config.input_id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        log::debug!("No #{} input; quick search disabled", config.input_id);
        return Ok(false);
    };

    let source = Rc::new(FetchIndexSource::new(config.index_url.clone()));
    let container_selector = config.container_selector.clone();
    let host = Rc::new(RefCell::new(SearchHost {
        surface: DomSearchSurface::new(document.clone(), input.clone(), config.panel_id.clone()),
        widget: QuickSearch::new(config),
    }));

    {
        let host = host.clone();
        let input_ref = input.clone();
        dom::listen(&input, "keypress", move |event: web_sys::Event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key_event.key() != "Enter" {
                return;
            }
            event.prevent_default();
            let mut host = host.borrow_mut();
            let SearchHost { widget, surface } = &mut *host;
            widget.on_key_enter(&input_ref.value(), surface);
        })?;
    }

    {
        let host = host.clone();
        let input_ref = input.clone();
        dom::listen(&input, "input", move |_event: web_sys::Event| {
            let ticket = {
                let mut guard = host.borrow_mut();
                let SearchHost { widget, surface } = &mut *guard;
                widget.on_text_change(&input_ref.value(), surface)
            };
            let Some(ticket) = ticket else {
                return;
            };

            let host = host.clone();
            let source = source.clone();
            spawn_local(async move {
                let outcome = source.fetch_index().await;
                let mut guard = host.borrow_mut();
                let SearchHost { widget, surface } = &mut *guard;
                widget.complete(&ticket, outcome, surface);
            });
        })?;
    }

    {
        let host = host.clone();
        dom::listen(&document, "click", move |event: web_sys::Event| {
            let inside = dom::closest_from_event(&event, &container_selector).is_some();
            let mut guard = host.borrow_mut();
            let SearchHost { widget, surface } = &mut *guard;
            widget.on_click(inside, surface);
        })?;
    }

    log::debug!("Quick search mounted on #{}", input.id());
    Ok(true)
}
