use crate::shared::api_utils::{api_url, fetch_json};
use crate::shared::error::ApiError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_upload_pdf::{UploadOutcome, UploadPdf, UploadResponse, UPLOAD_FIELD};
use web_sys::{FormData, Request, RequestCredentials, RequestInit};

/// Загрузить PDF на сервер
///
/// Sends the file as multipart form data; the browser sets the boundary.
pub async fn upload_pdf(file: web_sys::File) -> Result<UploadOutcome, ApiError> {
    let form_data = FormData::new().map_err(ApiError::request)?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, &file, &file.name())
        .map_err(ApiError::request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // the server keeps the current document in its session cookie
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(&form_data);

    let url = api_url(UploadPdf::endpoint());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::request)?;

    log::debug!("{}: POST {} ({} bytes)", UploadPdf::full_name(), url, file.size());
    let response: UploadResponse = fetch_json(&request).await?;
    Ok(response.into_outcome())
}
