//! JS-facing data shapes.

use kiji_core::QuickResults;
use serde::Serialize;

/// One quick-search hit as handed to JavaScript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsQuickResult {
    pub url: String,
    pub title_html: String,
    pub preview_html: String,
}

/// Quick-search results as handed to JavaScript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsQuickResults {
    pub query: String,
    pub results: Vec<JsQuickResult>,
    pub full_search_url: String,
}

impl From<&QuickResults> for JsQuickResults {
    fn from(results: &QuickResults) -> Self {
        Self {
            query: results.query.clone(),
            results: results
                .items
                .iter()
                .map(|item| JsQuickResult {
                    url: item.url.to_string(),
                    title_html: item.title.to_html(),
                    preview_html: item.preview.to_html(),
                })
                .collect(),
            full_search_url: results.full_search_url.clone(),
        }
    }
}
