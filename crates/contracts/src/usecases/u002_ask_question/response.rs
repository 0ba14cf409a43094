use crate::usecases::u001_upload_pdf::response::non_empty;
use crate::usecases::common::truthy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fallback shown when the server fails a question without saying why.
pub const ANSWER_FAILED: &str = "Error getting answer";

/// Ответ `POST /ask`
///
/// `context` and `sources` are opaque to the page: they are carried along
/// with the answer but their shape is owned by the retrieval pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default, deserialize_with = "truthy")]
    pub success: bool,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub context: Option<Value>,
    #[serde(default)]
    pub sources: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AskOutcome {
    Answered {
        answer: String,
        context: Option<Value>,
        sources: Option<Value>,
    },
    Failed {
        error: String,
    },
}

impl AskResponse {
    pub fn into_outcome(self) -> AskOutcome {
        if self.success {
            AskOutcome::Answered {
                answer: self.answer.unwrap_or_default(),
                context: self.context.filter(|v| !v.is_null()),
                sources: self.sources.filter(|v| !v.is_null()),
            }
        } else {
            AskOutcome::Failed {
                error: non_empty(self.error).unwrap_or_else(|| ANSWER_FAILED.to_string()),
            }
        }
    }
}
