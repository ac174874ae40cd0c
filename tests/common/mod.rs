pub mod fixtures;

use kiji::traits::{NavigatorSurface, SearchSurface};
use kiji::types::{AnchorId, Rect, Viewport};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Records everything the quick-search widget does to the page.
#[derive(Debug, Default)]
pub struct RecordingSearchSurface {
    pub panels_created: usize,
    pub panel_html: Option<String>,
    pub visible: bool,
    pub show_calls: usize,
    pub hide_calls: usize,
    pub navigations: Vec<String>,
}

impl SearchSurface for RecordingSearchSurface {
    fn ensure_panel(&mut self) -> bool {
        if self.panels_created > 0 {
            return false;
        }
        self.panels_created += 1;
        true
    }

    fn show_panel(&mut self, html: &str) {
        assert!(self.panels_created > 0, "panel shown before it was created");
        self.panel_html = Some(html.to_string());
        self.visible = true;
        self.show_calls += 1;
    }

    fn hide_panel(&mut self) {
        self.visible = false;
        self.hide_calls += 1;
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}

impl RecordingSearchSurface {
    /// Number of result items in the current panel markup.
    pub fn result_count(&self) -> usize {
        self.panel_html
            .as_deref()
            .map(|html| html.matches(r#"class="quick-result-item""#).count())
            .unwrap_or(0)
    }
}

/// Height of one outline entry in the fake outline panel.
pub const ENTRY_HEIGHT: f64 = 24.0;

/// A page with fixed heading positions and an instantly scrolling window.
#[derive(Debug)]
pub struct FakePage {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    /// Heading anchors with their absolute document offsets.
    pub headings: Vec<(AnchorId, f64)>,
    pub frames_requested: usize,
    /// Makes every frame request fail.
    pub refuse_frames: bool,
    pub window_scrolls: Vec<f64>,
    pub marked: Vec<AnchorId>,
    pub clear_calls: usize,
    /// Outline nav rect and its scroll offset.
    pub outline: Option<(Rect, f64)>,
    pub outline_scrolls: Vec<f64>,
}

impl FakePage {
    pub fn new(headings: &[(&str, f64)], document_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            viewport_height: 800.0,
            document_height,
            headings: headings
                .iter()
                .map(|(id, top)| (AnchorId::from(*id), *top))
                .collect(),
            frames_requested: 0,
            refuse_frames: false,
            window_scrolls: Vec::new(),
            marked: Vec::new(),
            clear_calls: 0,
            outline: None,
            outline_scrolls: Vec::new(),
        }
    }

    pub fn with_outline(mut self, rect: Rect) -> Self {
        self.outline = Some((rect, 0.0));
        self
    }

    pub fn scroll_to(&mut self, top: f64) {
        self.scroll_top = top;
    }
}

impl NavigatorSurface for FakePage {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_top, self.viewport_height, self.document_height)
    }

    fn heading_rect(&self, anchor: &AnchorId) -> Option<Rect> {
        self.headings
            .iter()
            .find(|(id, _)| id == anchor)
            .map(|(_, top)| Rect::new(top - self.scroll_top, 32.0))
    }

    fn request_frame(&mut self) -> bool {
        if self.refuse_frames {
            return false;
        }
        self.frames_requested += 1;
        true
    }

    fn scroll_window_to(&mut self, top: f64) {
        self.window_scrolls.push(top);
        self.scroll_top = top;
    }

    fn clear_active(&mut self) {
        self.clear_calls += 1;
        self.marked.clear();
    }

    fn mark_active(&mut self, anchor: &AnchorId) -> Option<Rect> {
        let index = self.headings.iter().position(|(id, _)| id == anchor)?;
        self.marked.push(anchor.clone());
        let (panel, panel_scroll) = self.outline.unwrap_or_default();
        Some(Rect::new(
            panel.top + index as f64 * ENTRY_HEIGHT - panel_scroll,
            ENTRY_HEIGHT,
        ))
    }

    fn outline_viewport(&self) -> Option<(Rect, f64)> {
        self.outline
    }

    fn scroll_outline_to(&mut self, top: f64) {
        self.outline_scrolls.push(top);
        if let Some((_, scroll)) = self.outline.as_mut() {
            *scroll = top;
        }
    }
}
