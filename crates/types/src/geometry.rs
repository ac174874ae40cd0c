/// A vertical slice of an element's bounding box, relative to the viewport.
///
/// Only the vertical axis matters for outline tracking, so the horizontal
/// fields of a client rect are not carried.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Whether `inner` sticks out above or below `self`.
    pub fn clips(&self, inner: &Rect) -> bool {
        inner.top < self.top || inner.bottom() > self.bottom()
    }
}

/// Scroll state of the window at a single instant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// Current vertical scroll offset of the page.
    pub scroll_top: f64,
    /// Height of the visible area.
    pub height: f64,
    /// Total scrollable height of the document.
    pub document_height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            height,
            document_height,
        }
    }

    /// Whether the bottom edge of the viewport is within `margin` of the end
    /// of the document.
    pub fn is_near_bottom(&self, margin: f64) -> bool {
        self.scroll_top + self.height >= self.document_height - margin
    }
}
