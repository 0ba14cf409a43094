pub mod response;

pub use response::{UploadOutcome, UploadResponse};

use crate::usecases::common::UseCaseMetadata;

/// Multipart field carrying the PDF bytes.
pub const UPLOAD_FIELD: &str = "file";

/// The only MIME type accepted from a drop.
pub const PDF_MIME: &str = "application/pdf";

pub struct UploadPdf;

impl UseCaseMetadata for UploadPdf {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "upload_pdf"
    }

    fn endpoint() -> &'static str {
        "/upload"
    }
}

/// True when a dropped file's declared MIME type marks it as a PDF.
///
/// A drop that carried no file at all is treated like a non-PDF.
pub fn is_pdf(mime: Option<&str>) -> bool {
    mime == Some(PDF_MIME)
}
