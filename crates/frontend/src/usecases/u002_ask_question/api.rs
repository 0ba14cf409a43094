use crate::shared::api_utils::{api_url, fetch_json};
use crate::shared::error::ApiError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u002_ask_question::{AskOutcome, AskQuestion, AskRequest, AskResponse};
use wasm_bindgen::JsValue;
use web_sys::{Request, RequestCredentials, RequestInit};

/// Задать вопрос по загруженному документу
pub async fn ask_question(question: &str) -> Result<AskOutcome, ApiError> {
    let body = serde_json::to_string(&AskRequest::new(question))
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // the server keeps the current document in its session cookie
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(&JsValue::from_str(&body));

    let url = api_url(AskQuestion::endpoint());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::request)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ApiError::request)?;

    log::debug!("{}: POST {}", AskQuestion::full_name(), url);
    let response: AskResponse = fetch_json(&request).await?;
    Ok(response.into_outcome())
}
