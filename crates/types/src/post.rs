use crate::ids::PostUrl;
use serde::{Deserialize, Serialize};

/// One entry of the static search index produced by the site build.
///
/// The index is a flat JSON array of these records. Extra fields written by
/// the build (dates, tags) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub title: String,
    pub content: String,
    pub url: PostUrl,
}

impl PostRecord {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<PostUrl>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_index_ignores_extra_fields() {
        let json = r#"[
            {"title": "Hello", "content": "Body", "url": "/hello/", "date": "2024-01-01"},
            {"title": "Other", "content": "", "url": "/other/"}
        ]"#;
        let posts: Vec<PostRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], PostRecord::new("Hello", "Body", "/hello/"));
        assert_eq!(posts[1].url.as_str(), "/other/");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"[{"title": "Hello", "url": "/hello/"}]"#;
        assert!(serde_json::from_str::<Vec<PostRecord>>(json).is_err());
    }
}
