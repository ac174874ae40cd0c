//! Article outline and scroll tracking.

pub mod build;
pub mod tracker;

pub use build::{HeadingSource, Outline};
pub use tracker::{
    Navigator, in_page_target, outline_scroll_target, scroll_target, select_active,
};
