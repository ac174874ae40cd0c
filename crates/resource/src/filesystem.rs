//! Filesystem-based index source for native platforms.
//!
//! Resolves the index URL the browser would fetch (e.g. `/search.json`)
//! against the output directory of a site build.
//!
//! # Security
//!
//! Resolved paths must stay inside the site root; anything that would escape
//! it (e.g. `/../../etc/passwd`) is reported as `NotFound`.

use kiji_traits::{IndexError, IndexSource, parse_index};
use kiji_types::PostRecord;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub struct FilesystemIndexSource {
    site_root: PathBuf,
    /// Canonicalized root for containment checks
    canonical_root: Option<PathBuf>,
    index_url: String,
    location: String,
}

impl FilesystemIndexSource {
    /// Creates a source reading `index_url` (a site-relative URL path) below `site_root`.
    pub fn new<P: AsRef<Path>>(site_root: P, index_url: impl Into<String>) -> Self {
        let site_root = site_root.as_ref().to_path_buf();
        let index_url = index_url.into();
        let location = site_root
            .join(index_url.trim_start_matches('/'))
            .display()
            .to_string();
        Self {
            canonical_root: site_root.canonicalize().ok(),
            site_root,
            index_url,
            location,
        }
    }

    /// Maps the index URL to a file below the site root.
    ///
    /// Returns `None` if the path would escape the site root.
    fn resolve_path_safe(&self) -> Option<PathBuf> {
        let relative = Path::new(self.index_url.trim_start_matches('/'));
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.site_root.join(relative);
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref root) = self.canonical_root
            && !canonical.starts_with(root)
        {
            // Symlink pointing out of the site
            return None;
        }
        Some(full_path)
    }
}

impl IndexSource for FilesystemIndexSource {
    async fn fetch_index(&self) -> Result<Vec<PostRecord>, IndexError> {
        let path = self.resolve_path_safe().ok_or_else(|| {
            IndexError::NotFound(format!("{} (outside site root)", self.index_url))
        })?;

        let bytes = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IndexError::NotFound(self.location.clone())
            } else {
                IndexError::LoadFailed {
                    path: self.location.clone(),
                    message: e.to_string(),
                }
            }
        })?;
        log::debug!("Read {} bytes of search index from {}", bytes.len(), self.location);
        parse_index(&bytes)
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn name(&self) -> &'static str {
        "FilesystemIndexSource"
    }
}
