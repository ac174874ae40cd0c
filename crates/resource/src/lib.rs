//! Index sources for native platforms.
//!
//! ## Available Sources
//!
//! - [`FilesystemIndexSource`]: Reads the index from a built site directory
//!
//! ## Re-exports
//!
//! For convenience, the in-memory source from kiji-traits:
//! - [`InMemoryIndexSource`]: Pre-populated records

mod filesystem;

pub use filesystem::FilesystemIndexSource;

pub use kiji_traits::InMemoryIndexSource;
