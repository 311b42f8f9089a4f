//! # Book Record
//!
//! The one data unit the app deals in. Records are generated once and never
//! mutated; screens clone them out of the store when they need to own one.

use serde::{Deserialize, Serialize};

/// Number of description characters shown in a list row before the ellipsis.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    /// ISO date (`YYYY-MM-DD`), displayed verbatim.
    pub publish_date: String,
}

impl Book {
    /// Row preview of the description: the first 100 characters followed by
    /// `...`, or a placeholder when the description is missing or empty.
    pub fn description_preview(&self) -> String {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => {
                let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
                format!("{head}...")
            }
            _ => "No description available".to_string(),
        }
    }
}
