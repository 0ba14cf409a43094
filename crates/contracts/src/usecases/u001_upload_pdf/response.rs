use crate::usecases::common::truthy;
use serde::{Deserialize, Serialize};

/// Fallback shown when the server rejects an upload without saying why.
pub const UPLOAD_FAILED: &str = "Upload failed";

/// Ответ `POST /upload`
///
/// Error responses (HTTP 400) carry only `error`, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the page does with an upload response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Accepted { message: String, filename: String },
    Rejected { error: String },
}

impl UploadResponse {
    pub fn into_outcome(self) -> UploadOutcome {
        if self.success {
            UploadOutcome::Accepted {
                message: self.message.unwrap_or_default(),
                filename: self.filename.unwrap_or_default(),
            }
        } else {
            UploadOutcome::Rejected {
                error: non_empty(self.error).unwrap_or_else(|| UPLOAD_FAILED.to_string()),
            }
        }
    }
}

/// An empty server error string is as good as none.
pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
