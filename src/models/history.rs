use serde::{Deserialize, Serialize};

/// One row of the backend's generation history.
///
/// Only `image_data` is guaranteed; the remaining columns are whatever the
/// backend chooses to include per row, so they all tolerate absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub image_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    pub fn new(image_data: impl Into<String>) -> Self {
        HistoryEntry {
            image_data: image_data.into(),
            id: None,
            prompt: None,
            style: None,
            aspect_ratio: None,
            created_at: None,
        }
    }
}
