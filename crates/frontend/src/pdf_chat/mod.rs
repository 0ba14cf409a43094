//! PDF Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: PageState, the whole page as plain data
//! - input.rs: question box helpers (Enter to send, auto-grow)
//! - view_model.rs: PdfChatVm with RwSignals and the upload/ask flows
//! - view.rs: Main component PdfChatPage
//! - upload_card.rs: file picker, drag-and-drop target, status line
//! - chat_panel.rs: transcript and question box

mod chat_panel;
pub mod input;
pub mod state;
mod upload_card;
mod view;
mod view_model;

pub use view::PdfChatPage;
pub use view_model::PdfChatVm;
