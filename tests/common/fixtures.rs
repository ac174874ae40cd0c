use kiji::types::PostRecord;

/// The three-post index used throughout the quick-search tests.
pub fn world_posts() -> Vec<PostRecord> {
    vec![
        PostRecord::new("Hello World", "A first post about nothing much.", "/2024/hello-world/"),
        PostRecord::new("World Cup", "Notes from the final.", "/2024/world-cup/"),
        PostRecord::new("Other", "Unrelated content.", "/2024/other/"),
    ]
}

/// An index with `count` posts that all mention "rust".
pub fn rust_posts(count: usize) -> Vec<PostRecord> {
    (0..count)
        .map(|i| {
            PostRecord::new(
                format!("Rust notes #{i}"),
                format!("Borrowing and lifetimes, part {i}."),
                format!("/rust/{i}/"),
            )
        })
        .collect()
}

pub fn index_json(posts: &[PostRecord]) -> String {
    serde_json::to_string(posts).expect("posts serialize")
}
