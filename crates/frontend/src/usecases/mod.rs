pub mod u001_upload_pdf;
pub mod u002_ask_question;
