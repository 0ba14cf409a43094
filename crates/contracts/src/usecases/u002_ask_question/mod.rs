pub mod request;
pub mod response;

pub use request::AskRequest;
pub use response::{AskOutcome, AskResponse};

use crate::usecases::common::UseCaseMetadata;

pub struct AskQuestion;

impl UseCaseMetadata for AskQuestion {
    fn usecase_index() -> &'static str {
        "u002"
    }

    fn usecase_name() -> &'static str {
        "ask_question"
    }

    fn endpoint() -> &'static str {
        "/ask"
    }
}
