//! Documents and blog drafts.
//!
//! The remote API owns both schemas; records pass through this tier as opaque
//! JSON. Only the requests we build on a user's behalf are typed.

use serde::Serialize;
use serde_json::Value;

/// A document or draft exactly as the remote API returned it.
pub type Record = Value;

pub const DRAFT_STATUS_PUBLISHED: &str = "published";

/// A file received from the browser, forwarded as multipart `file`.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateDraft {
    pub document_ids: Vec<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update; absent fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl DraftUpdate {
    pub fn publish() -> Self {
        Self {
            status: Some(DRAFT_STATUS_PUBLISHED.to_string()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefineDraft {
    pub feedback: String,
}
