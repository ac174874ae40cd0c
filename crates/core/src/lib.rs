//! # kiji-core
//!
//! Platform-agnostic logic for kiji's two page components:
//! - **search**: the quick-search widget (matching, highlighting, result panel, request ordering)
//! - **outline**: the article outline and active-section tracking
//! - **stats**: character count and reading time
//! - **config**: runtime configuration shared with the JS side
//! - **error**: error types
//!
//! ## Design Principle
//!
//! Nothing here touches the DOM, the network or a clock. Components receive
//! events as method calls and act through the surfaces defined in
//! `kiji-traits`, so the browser adapter and the tests drive the same code.

pub use kiji_traits as traits;
pub use kiji_types as types;

pub mod config;
pub mod error;
pub mod html;
pub mod outline;
pub mod search;
pub mod stats;

pub use config::{KijiConfig, NavigatorConfig, SearchConfig, SearchLabels, StatsConfig};
pub use error::KijiError;
pub use outline::{HeadingSource, Navigator, Outline};
pub use search::{Completion, QueryPattern, QuickResults, QuickSearch, SearchTicket};

pub use traits::{InMemoryIndexSource, IndexError, IndexSource, NavigatorSurface, SearchSurface};
pub use types::{
    AnchorId, HeadingEntry, HeadingLevel, PostRecord, PostUrl, ReadingStats, Rect, Viewport,
};
