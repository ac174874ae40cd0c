pub mod document;
pub mod geometry;
pub mod ids;
pub mod post;

pub use document::{HeadingEntry, HeadingLevel, ReadingStats};
pub use geometry::{Rect, Viewport};
pub use ids::{AnchorId, PostUrl};
pub use post::PostRecord;
