//! Small helpers over `web_sys` shared by both components.

use crate::error::KijiJsError;
use kiji_types::Rect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn window() -> Result<web_sys::Window, KijiJsError> {
    web_sys::window().ok_or_else(|| KijiJsError::dom("No window object available"))
}

pub fn document() -> Result<web_sys::Document, KijiJsError> {
    window()?
        .document()
        .ok_or_else(|| KijiJsError::dom("No document available"))
}

pub fn rect_of(element: &web_sys::Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.height())
}

/// All elements below `root` matching `selector`, in document order.
///
/// An invalid selector yields no elements.
pub fn query_all(root: &web_sys::Element, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("Invalid selector: {selector}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// The closest ancestor-or-self of the event target matching `selector`.
pub fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}

pub fn set_display(element: &web_sys::Element, value: &str) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>()
        && let Err(e) = html.style().set_property("display", value)
    {
        log::warn!("Failed to set display on #{}: {:?}", element.id(), e);
    }
}

pub fn smooth_scroll_options(top: f64) -> web_sys::ScrollToOptions {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), KijiJsError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| KijiJsError::from_js(&format!("Failed to listen for '{event}'"), e))?;
    // Page-lifetime listener: ownership moves to the JS side.
    closure.forget();
    Ok(())
}
