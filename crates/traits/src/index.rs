//! IndexSource trait for abstracting where the search index comes from.
//!
//! The quick-search widget never cares whether the index arrives over
//! `fetch`, from a site build on disk, or from memory in a test.

use kiji_types::PostRecord;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for index loading operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Search index not found: {0}")]
    NotFound(String),

    #[error("Failed to load search index '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid search index format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> Self {
        IndexError::Io(err.to_string())
    }
}

/// Parses the raw bytes of a search index document.
///
/// The document must be a JSON array of `{title, content, url}` objects.
pub fn parse_index(bytes: &[u8]) -> Result<Vec<PostRecord>, IndexError> {
    serde_json::from_slice(bytes).map_err(|e| IndexError::InvalidFormat(e.to_string()))
}

/// A source of the static post index.
///
/// Fetched once per quick-search keystroke; implementations must not cache
/// across calls unless the underlying document is known to be immutable.
///
/// # Implementations
///
/// - `InMemoryIndexSource`: pre-populated records (always available)
/// - `FilesystemIndexSource` (kiji-resource): reads a site build directory
/// - `FetchIndexSource` (kiji-wasm): the browser Fetch API
#[allow(async_fn_in_trait)]
pub trait IndexSource: Debug {
    /// Load every record of the index, in index order.
    async fn fetch_index(&self) -> Result<Vec<PostRecord>, IndexError>;

    /// Where the index is read from (URL or path), for logging.
    fn location(&self) -> &str;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory index source.
///
/// Records are stored in memory and must be provided up front.
#[derive(Debug, Default)]
pub struct InMemoryIndexSource {
    posts: RwLock<Vec<PostRecord>>,
}

impl InMemoryIndexSource {
    pub fn new(posts: Vec<PostRecord>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Build a source from the JSON text of an index document.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        Ok(Self::new(parse_index(json.as_bytes())?))
    }

    /// Swap in a new set of records, as a site rebuild would.
    ///
    /// Does nothing if the lock is poisoned.
    pub fn replace(&self, posts: Vec<PostRecord>) {
        if let Ok(mut current) = self.posts.write() {
            *current = posts;
        }
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.posts.read().map(|p| p.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned (safe default).
    pub fn is_empty(&self) -> bool {
        self.posts.read().map(|p| p.is_empty()).unwrap_or(true)
    }
}

impl IndexSource for InMemoryIndexSource {
    async fn fetch_index(&self) -> Result<Vec<PostRecord>, IndexError> {
        let posts = self.posts.read().map_err(|_| IndexError::LoadFailed {
            path: self.location().to_string(),
            message: "index lock poisoned".to_string(),
        })?;
        Ok(posts.clone())
    }

    fn location(&self) -> &str {
        "memory"
    }

    fn name(&self) -> &'static str {
        "InMemoryIndexSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index() {
        let posts = parse_index(br#"[{"title":"A","content":"a","url":"/a/"}]"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "A");
    }

    #[test]
    fn test_parse_index_rejects_object() {
        let result = parse_index(br#"{"posts": []}"#);
        assert!(matches!(result, Err(IndexError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_index_rejects_truncated_document() {
        let result = parse_index(br#"[{"title":"A","#);
        assert!(matches!(result, Err(IndexError::InvalidFormat(_))));
    }

    #[tokio::test]
    async fn test_in_memory_source_returns_posts_in_order() {
        let source = InMemoryIndexSource::new(vec![
            PostRecord::new("First", "", "/1/"),
            PostRecord::new("Second", "", "/2/"),
        ]);

        let posts = source.fetch_index().await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn test_in_memory_source_replace() {
        let source = InMemoryIndexSource::default();
        assert!(source.is_empty());

        source.replace(vec![PostRecord::new("New", "", "/new/")]);
        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch_index().await.unwrap()[0].title, "New");
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(InMemoryIndexSource::from_json("not json").is_err());
    }
}
