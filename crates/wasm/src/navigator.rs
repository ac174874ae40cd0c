//! Article outline, scroll tracking and reading statistics.

use crate::dom;
use crate::error::KijiJsError;
use kiji_core::outline::{in_page_target, scroll_target};
use kiji_core::{HeadingSource, Navigator, NavigatorConfig, Outline, StatsConfig, stats};
use kiji_traits::NavigatorSurface;
use kiji_types::{AnchorId, HeadingLevel, Rect, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

const LINK_SELECTOR: &str = ".toc-link";
const ACTIVE_LINK_CLASS: &str = "toc-active";
const ACTIVE_ITEM_CLASS: &str = "toc-active-item";

/// The window, the rendered outline and its scrollable nav.
pub struct DomNavigatorSurface {
    window: web_sys::Window,
    document: web_sys::Document,
    container: web_sys::Element,
    nav_id: String,
    on_frame: Option<js_sys::Function>,
}

impl DomNavigatorSurface {
    pub fn new(
        window: web_sys::Window,
        document: web_sys::Document,
        container: web_sys::Element,
        nav_id: impl Into<String>,
    ) -> Self {
        Self {
            window,
            document,
            container,
            nav_id: nav_id.into(),
            on_frame: None,
        }
    }

    fn links(&self) -> Vec<web_sys::Element> {
        dom::query_all(&self.container, LINK_SELECTOR)
    }
}

impl NavigatorSurface for DomNavigatorSurface {
    fn viewport(&self) -> Viewport {
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map(|el| f64::from(el.scroll_height()))
            .unwrap_or(0.0);
        Viewport::new(scroll_top, height, document_height)
    }

    fn heading_rect(&self, anchor: &AnchorId) -> Option<Rect> {
        self.document
            .get_element_by_id(anchor.as_str())
            .map(|el| dom::rect_of(&el))
    }

    fn request_frame(&mut self) -> bool {
        let Some(callback) = &self.on_frame else {
            return false;
        };
        match self.window.request_animation_frame(callback) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }

    fn scroll_window_to(&mut self, top: f64) {
        self.window
            .scroll_to_with_scroll_to_options(&dom::smooth_scroll_options(top));
    }

    fn clear_active(&mut self) {
        for link in self.links() {
            link.class_list().remove_1(ACTIVE_LINK_CLASS).ok();
            if let Some(item) = link.parent_element() {
                item.class_list().remove_1(ACTIVE_ITEM_CLASS).ok();
            }
        }
    }

    fn mark_active(&mut self, anchor: &AnchorId) -> Option<Rect> {
        let href = anchor.fragment();
        let link = self
            .links()
            .into_iter()
            .find(|link| link.get_attribute("href").as_deref() == Some(href.as_str()))?;
        link.class_list().add_1(ACTIVE_LINK_CLASS).ok();
        if let Some(item) = link.parent_element() {
            item.class_list().add_1(ACTIVE_ITEM_CLASS).ok();
        }
        Some(dom::rect_of(&link))
    }

    fn outline_viewport(&self) -> Option<(Rect, f64)> {
        self.document
            .get_element_by_id(&self.nav_id)
            .map(|nav| (dom::rect_of(&nav), f64::from(nav.scroll_top())))
    }

    fn scroll_outline_to(&mut self, top: f64) {
        if let Some(nav) = self.document.get_element_by_id(&self.nav_id) {
            nav.scroll_to_with_scroll_to_options(&dom::smooth_scroll_options(top));
        }
    }
}

struct NavigatorHost {
    navigator: Navigator,
    surface: DomNavigatorSurface,
}

/// Writes character count and reading time into the stat fields that exist.
pub fn write_reading_stats(
    document: &web_sys::Document,
    article: &web_sys::Element,
    config: &StatsConfig,
) {
    let text = article.text_content().unwrap_or_default();
    let reading = stats::reading_stats(&text, config.chars_per_minute);
    let (chars, minutes) = stats::display(&reading, config);

    if let Some(el) = document.get_element_by_id(&config.char_count_id) {
        el.set_text_content(Some(&chars));
    }
    if let Some(el) = document.get_element_by_id(&config.read_time_id) {
        el.set_text_content(Some(&minutes));
    }
    log::debug!("Reading stats: {} chars, {} min", reading.char_count, reading.minutes);
}

/// Reads the article headings, keeping only `h1`..`h3`.
fn collect_headings(
    article: &web_sys::Element,
    selector: &str,
) -> Vec<(web_sys::Element, HeadingSource)> {
    dom::query_all(article, selector)
        .into_iter()
        .filter_map(|el| {
            let level = HeadingLevel::from_tag_name(&el.tag_name())?;
            let text = el.text_content().unwrap_or_default();
            let id = el.id();
            let source = HeadingSource::new(level, text, Some(id.as_str()));
            Some((el, source))
        })
        .collect()
}

/// Builds the outline and starts scroll tracking.
///
/// Returns `Ok(false)` without touching the page when the article body or the
/// outline container is absent.
pub fn mount(config: NavigatorConfig, stats_config: &StatsConfig) -> Result<bool, KijiJsError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let article = document
        .query_selector(&config.article_selector)
        .map_err(|e| KijiJsError::from_js("Invalid article selector", e))?;
    let container = document.get_element_by_id(&config.container_id);
    let (Some(article), Some(container)) = (article, container) else {
        log::debug!("No article body or #{}; navigator disabled", config.container_id);
        return Ok(false);
    };

    let headings = collect_headings(&article, &config.heading_selector);
    let sources: Vec<HeadingSource> = headings.iter().map(|(_, s)| s.clone()).collect();
    let outline = Outline::build(&sources, config.indent_step_px);

    if outline.is_empty() {
        container.set_inner_html(&Outline::placeholder_html(&config.no_headings_label));
        write_reading_stats(&document, &article, stats_config);
        return Ok(true);
    }

    for entry in outline.entries().iter().filter(|e| e.anchor_assigned) {
        if let Some((element, _)) = headings.get(entry.index) {
            element.set_id(entry.anchor_id.as_str());
        }
    }
    container.set_inner_html(&outline.to_html());
    write_reading_stats(&document, &article, stats_config);

    let nav_id = config.nav_id.clone();
    let host = Rc::new(RefCell::new(NavigatorHost {
        navigator: Navigator::new(config, outline),
        surface: DomNavigatorSurface::new(window.clone(), document, container.clone(), nav_id),
    }));

    let frame = {
        let host = host.clone();
        Closure::<dyn FnMut()>::new(move || {
            let mut guard = host.borrow_mut();
            let NavigatorHost { navigator, surface } = &mut *guard;
            navigator.on_frame(surface);
        })
    };
    host.borrow_mut().surface.on_frame = Some(frame.into_js_value().unchecked_into());

    {
        let host = host.clone();
        dom::listen(&container, "click", move |event: web_sys::Event| {
            let Some(link) = dom::closest_from_event(&event, LINK_SELECTOR) else {
                return;
            };
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(anchor) = in_page_target(&href) else {
                return;
            };
            let mut guard = host.borrow_mut();
            let NavigatorHost { navigator, surface } = &mut *guard;
            navigator.on_outline_click(anchor, surface);
        })?;
    }

    {
        let host = host.clone();
        dom::listen(&window, "scroll", move |_event: web_sys::Event| {
            let mut guard = host.borrow_mut();
            let NavigatorHost { navigator, surface } = &mut *guard;
            navigator.on_scroll(surface);
        })?;
    }

    {
        let mut guard = host.borrow_mut();
        let NavigatorHost { navigator, surface } = &mut *guard;
        navigator.start(surface);
        log::debug!("Outline mounted with {} headings", navigator.outline().len());
    }
    Ok(true)
}

/// Gives every other in-page link the same header-offset smooth scrolling.
pub fn mount_in_page_links(header_offset: f64) -> Result<usize, KijiJsError> {
    let document = dom::document()?;
    let Some(root) = document.document_element() else {
        return Ok(0);
    };
    let links = dom::query_all(&root, r##"a[href^="#"]:not(.toc-link)"##);

    for link in &links {
        let link_ref = link.clone();
        dom::listen(link, "click", move |event: web_sys::Event| {
            let href = link_ref.get_attribute("href").unwrap_or_default();
            let Some(id) = in_page_target(&href) else {
                return;
            };
            let Ok(window) = dom::window() else {
                return;
            };
            let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            let top = scroll_target(
                dom::rect_of(&target).top,
                window.scroll_y().unwrap_or(0.0),
                header_offset,
            );
            window.scroll_to_with_scroll_to_options(&dom::smooth_scroll_options(top));
        })?;
    }
    Ok(links.len())
}
