//! Active-section tracking for the outline.
//!
//! Scroll events only request an animation frame; the active heading is
//! recomputed in the frame callback, and a second scroll event while a frame
//! is pending is ignored. At most one outline entry is marked at a time.

use super::build::Outline;
use crate::config::NavigatorConfig;
use kiji_traits::NavigatorSurface;
use kiji_types::{HeadingEntry, Rect, Viewport};

/// Picks the heading the reader is in.
///
/// `heading_tops` are viewport-relative top edges in document order; `None`
/// marks a heading that has left the document and is skipped.
pub fn select_active(
    viewport: Viewport,
    heading_tops: &[Option<f64>],
    config: &NavigatorConfig,
) -> Option<usize> {
    if heading_tops.is_empty() {
        return None;
    }
    // Short trailing sections never reach the activation offset.
    if viewport.is_near_bottom(config.bottom_margin) {
        return Some(heading_tops.len() - 1);
    }

    let mut active = None;
    for (index, top) in heading_tops.iter().enumerate() {
        match top {
            Some(top) if *top <= config.activation_offset => active = Some(index),
            Some(_) => break,
            None => continue,
        }
    }
    active
}

/// Window scroll offset that puts an element `header_offset` below the
/// viewport top.
pub fn scroll_target(element_top: f64, scroll_top: f64, header_offset: f64) -> f64 {
    element_top + scroll_top - header_offset
}

/// Element id an in-page link points at, or `None` for links the browser
/// should handle itself (`#`, empty or off-page hrefs).
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that centers `entry` in the outline panel, or `None` when the
/// entry is already fully visible.
pub fn outline_scroll_target(panel: Rect, panel_scroll_top: f64, entry: Rect) -> Option<f64> {
    if !panel.clips(&entry) {
        return None;
    }
    Some(panel_scroll_top + entry.center() - panel.center())
}

#[derive(Debug)]
pub struct Navigator {
    config: NavigatorConfig,
    outline: Outline,
    active: Option<usize>,
    frame_pending: bool,
}

impl Navigator {
    pub fn new(config: NavigatorConfig, outline: Outline) -> Self {
        Self {
            config,
            outline,
            active: None,
            frame_pending: false,
        }
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn active(&self) -> Option<&HeadingEntry> {
        self.active.and_then(|i| self.outline.entries().get(i))
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Computes the initial active heading.
    pub fn start<S: NavigatorSurface>(&mut self, surface: &mut S) {
        self.refresh(surface);
    }

    /// Handles a window scroll event. Returns `true` if a frame was requested.
    ///
    /// A refused request leaves no frame pending, so the next scroll retries.
    pub fn on_scroll<S: NavigatorSurface>(&mut self, surface: &mut S) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = surface.request_frame();
        self.frame_pending
    }

    /// Handles the animation frame requested by [`Navigator::on_scroll`].
    pub fn on_frame<S: NavigatorSurface>(&mut self, surface: &mut S) {
        self.frame_pending = false;
        self.refresh(surface);
    }

    /// Handles a click on the outline entry linking to `anchor`.
    ///
    /// Returns `false` if the anchor is unknown or its heading is gone, in
    /// which case nothing is scrolled.
    pub fn on_outline_click<S: NavigatorSurface>(&mut self, anchor: &str, surface: &mut S) -> bool {
        let Some(index) = self.outline.position(anchor) else {
            return false;
        };
        let Some(rect) = surface.heading_rect(&self.outline.entries()[index].anchor_id) else {
            return false;
        };

        let top = scroll_target(rect.top, surface.viewport().scroll_top, self.config.header_offset);
        surface.scroll_window_to(top);
        self.set_active(Some(index), surface);
        true
    }

    fn refresh<S: NavigatorSurface>(&mut self, surface: &mut S) {
        let tops: Vec<Option<f64>> = self
            .outline
            .entries()
            .iter()
            .map(|entry| surface.heading_rect(&entry.anchor_id).map(|r| r.top))
            .collect();
        let active = select_active(surface.viewport(), &tops, &self.config);
        self.set_active(active, surface);
    }

    fn set_active<S: NavigatorSurface>(&mut self, active: Option<usize>, surface: &mut S) {
        if active == self.active {
            return;
        }
        self.active = active;
        surface.clear_active();

        let Some(entry) = self.active() else {
            return;
        };
        log::debug!("Active heading: {} ({})", entry.text, entry.anchor_id);
        let Some(entry_rect) = surface.mark_active(&entry.anchor_id) else {
            return;
        };
        if let Some((panel, panel_scroll)) = surface.outline_viewport()
            && let Some(target) = outline_scroll_target(panel, panel_scroll, entry_rect)
        {
            surface.scroll_outline_to(target);
        }
    }
}
