//! Rendering surfaces driven by the components.
//!
//! The components decide *what* the page should show; a surface applies it.
//! In the browser the surfaces are thin wrappers over `web_sys` elements, in
//! tests they record calls.

use kiji_types::{AnchorId, Rect, Viewport};

/// The page around the quick-search input.
pub trait SearchSurface {
    /// Create the result panel if it does not exist yet.
    ///
    /// Returns `true` when a new panel was created by this call.
    fn ensure_panel(&mut self) -> bool;

    /// Replace the panel contents with `html` and make it visible.
    fn show_panel(&mut self, html: &str);

    /// Hide the panel if it exists. Contents are kept.
    fn hide_panel(&mut self);

    /// Send the browser to `url`.
    fn navigate(&mut self, url: &str);
}

/// The page around the article outline.
pub trait NavigatorSurface {
    /// Current window scroll state.
    fn viewport(&self) -> Viewport;

    /// Bounding rect of the heading with the given id, or `None` if it is
    /// no longer in the document.
    fn heading_rect(&self, anchor: &AnchorId) -> Option<Rect>;

    /// Ask for a single animation-frame callback.
    ///
    /// Returns `false` if the request could not be made.
    fn request_frame(&mut self) -> bool;

    /// Smooth-scroll the window so its top lands at `top`.
    fn scroll_window_to(&mut self, top: f64);

    /// Remove the active marker from every outline entry.
    fn clear_active(&mut self);

    /// Mark the outline entry linking to `anchor` as active.
    ///
    /// Returns the entry's rect, or `None` if no entry links there.
    fn mark_active(&mut self, anchor: &AnchorId) -> Option<Rect>;

    /// Visible rect and scroll offset of the scrollable outline nav, if present.
    fn outline_viewport(&self) -> Option<(Rect, f64)>;

    /// Smooth-scroll the outline nav to `top`.
    fn scroll_outline_to(&mut self, top: f64);
}
