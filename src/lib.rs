//! # kiji
//!
//! Quick search and article navigation for static blogs.
//!
//! The browser build lives in `kiji-wasm`; this crate bundles the
//! platform-agnostic stack with native index sources and the helpers behind
//! the `kiji` preview CLI, which lets a site author check what the quick
//! search and reading statistics will show before deploying.

pub mod error;
pub mod preview;

pub use kiji_core as core;
pub use kiji_resource as resource;
pub use kiji_traits as traits;
pub use kiji_types as types;

pub use error::CliError;
pub use kiji_core::{
    Completion, KijiConfig, KijiError, NavigatorConfig, QuickResults, QuickSearch, SearchConfig, StatsConfig,
};
pub use kiji_resource::FilesystemIndexSource;
pub use kiji_traits::{InMemoryIndexSource, IndexError, IndexSource};
pub use kiji_types::{PostRecord, ReadingStats};
