//! PDF Chat - page state
//!
//! Everything the page shows lives in [`PageState`]. Event handlers call its
//! methods; the view only reads it. Nothing here touches the DOM, so the whole
//! upload/ask flow is testable without a browser.

use crate::shared::error::ApiError;
use contracts::usecases::u001_upload_pdf::{is_pdf, UploadOutcome};
use contracts::usecases::u002_ask_question::AskOutcome;
use serde_json::Value;
use uuid::Uuid;

pub const UPLOADING: &str = "Uploading and processing PDF...";
pub const NOT_A_PDF: &str = "Please upload a PDF file";
pub const UPLOAD_TRANSPORT_ERROR: &str = "Error uploading file. Please try again.";
pub const ASK_TRANSPORT_ERROR: &str = "Error: Could not get answer. Please try again.";

/// Severity of the upload status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Loading,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Loading => "loading",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    /// CSS class of the status region
    pub fn class(&self) -> String {
        format!("upload-status {}", self.severity.as_str())
    }
}

/// Key of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }

    pub fn class(&self) -> String {
        format!("message message-{}", self.as_str())
    }
}

/// Retrieval data that came with an answer
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerExtras {
    pub context: Option<Value>,
    pub sources: Option<Value>,
}

impl AnswerExtras {
    /// Context as display text: strings as-is, anything else pretty-printed.
    pub fn context_text(&self) -> Option<String> {
        match self.context.as_ref()? {
            Value::String(s) => Some(s.clone()),
            other => serde_json::to_string_pretty(other).ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub extras: Option<AnswerExtras>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            extras: None,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            extras: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Message(ChatMessage),
    /// Placeholder shown while a question is in flight
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: EntryId,
    pub kind: EntryKind,
}

/// A question accepted by [`PageState::begin_ask`], to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsk {
    pub question: String,
    pub loading_id: EntryId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Sending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub status: Option<StatusMessage>,
    /// "📄 <filename>" once an upload succeeded
    pub file_label: Option<String>,
    pub chat_visible: bool,
    /// Upload card highlight while a file is dragged over it
    pub drag_over: bool,
    pub welcome_visible: bool,
    pub transcript: Vec<TranscriptEntry>,
    phase: ChatPhase,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            status: None,
            file_label: None,
            chat_visible: false,
            drag_over: false,
            welcome_visible: true,
            transcript: Vec::new(),
            phase: ChatPhase::Idle,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Upload
    // ------------------------------------------------------------------

    /// Replace the status line. Last call wins.
    pub fn show_status(&mut self, text: impl Into<String>, severity: Severity) {
        self.status = Some(StatusMessage {
            text: text.into(),
            severity,
        });
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.drag_over = over;
    }

    /// Only PDFs are accepted from a drop; the file picker path is not checked.
    pub fn accepts_drop(mime: Option<&str>) -> bool {
        is_pdf(mime)
    }

    /// Handle a drop on the upload card. Returns whether the file should be uploaded.
    pub fn handle_drop(&mut self, mime: Option<&str>) -> bool {
        self.drag_over = false;
        if Self::accepts_drop(mime) {
            true
        } else {
            self.reject_drop();
            false
        }
    }

    pub fn reject_drop(&mut self) {
        self.show_status(NOT_A_PDF, Severity::Error);
    }

    pub fn begin_upload(&mut self) {
        self.show_status(UPLOADING, Severity::Loading);
    }

    pub fn finish_upload(&mut self, result: Result<UploadOutcome, ApiError>) {
        match result {
            Ok(UploadOutcome::Accepted { message, filename }) => {
                log::info!("Uploaded {filename}: {message}");
                self.show_status(message, Severity::Success);
                self.file_label = Some(format!("📄 {filename}"));
                self.chat_visible = true;
            }
            Ok(UploadOutcome::Rejected { error }) => {
                log::warn!("Upload rejected: {error}");
                self.show_status(error, Severity::Error);
            }
            Err(e) => {
                log::error!("Upload error: {e}");
                self.show_status(UPLOAD_TRANSPORT_ERROR, Severity::Error);
            }
        }
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    pub fn phase(&self) -> ChatPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == ChatPhase::Sending
    }

    /// Idle -> Sending.
    ///
    /// Returns `None` and leaves the state untouched for blank input, and
    /// while another question is in flight.
    pub fn begin_ask(&mut self, raw: &str) -> Option<PendingAsk> {
        let question = raw.trim();
        if question.is_empty() || self.is_sending() {
            return None;
        }

        self.push_message(ChatMessage::user(question));
        let loading_id = self.push_loading();
        self.phase = ChatPhase::Sending;

        Some(PendingAsk {
            question: question.to_string(),
            loading_id,
        })
    }

    /// Replace the placeholder with the answer or an error message.
    ///
    /// The Sending phase is left by [`PageState::end_ask`], not here.
    pub fn finish_ask(&mut self, loading_id: EntryId, result: Result<AskOutcome, ApiError>) {
        self.remove_entry(loading_id);

        let message = match result {
            Ok(AskOutcome::Answered {
                answer,
                context,
                sources,
            }) => ChatMessage {
                role: Role::Bot,
                text: answer,
                extras: Some(AnswerExtras { context, sources }),
            },
            Ok(AskOutcome::Failed { error }) => ChatMessage::bot(error),
            Err(e) => {
                log::error!("Ask error: {e}");
                ChatMessage::bot(ASK_TRANSPORT_ERROR)
            }
        };
        self.push_message(message);
    }

    /// Sending -> Idle
    pub fn end_ask(&mut self) {
        self.phase = ChatPhase::Idle;
    }

    // ------------------------------------------------------------------
    // Transcript
    // ------------------------------------------------------------------

    pub fn push_message(&mut self, message: ChatMessage) -> EntryId {
        self.welcome_visible = false;
        self.push_entry(EntryKind::Message(message))
    }

    pub fn push_loading(&mut self) -> EntryId {
        self.push_entry(EntryKind::Loading)
    }

    /// Returns false when no entry has this id.
    pub fn remove_entry(&mut self, id: EntryId) -> bool {
        let before = self.transcript.len();
        self.transcript.retain(|e| e.id != id);
        self.transcript.len() != before
    }

    pub fn loading_count(&self) -> usize {
        self.transcript
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::Loading))
            .count()
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript.iter().filter_map(|e| match &e.kind {
            EntryKind::Message(m) => Some(m),
            EntryKind::Loading => None,
        })
    }

    fn push_entry(&mut self, kind: EntryKind) -> EntryId {
        let id = EntryId::new_v4();
        self.transcript.push(TranscriptEntry { id, kind });
        id
    }
}

/// "Send in progress" held for the lifetime of one question request.
///
/// Dropping it runs `release` exactly once, however the request ended.
pub struct SendPermit<F: FnOnce()> {
    release: Option<F>,
}

impl<F: FnOnce()> SendPermit<F> {
    pub fn new(release: F) -> Self {
        Self {
            release: Some(release),
        }
    }
}

impl<F: FnOnce()> Drop for SendPermit<F> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Permit for one question request.
///
/// On drop it hands [`PageState::end_ask`] to `update` (which applies it to
/// wherever the state lives), then runs `after`.
pub fn ask_permit<U, A>(update: U, after: A) -> SendPermit<impl FnOnce()>
where
    U: FnOnce(fn(&mut PageState)),
    A: FnOnce(),
{
    SendPermit::new(move || {
        update(PageState::end_ask);
        after();
    })
}

/// Show/hide state of a retrieved-context panel under an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextPanel {
    pub visible: bool,
}

impl ContextPanel {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn label(&self) -> &'static str {
        if self.visible {
            "📄 Hide Retrieved Context"
        } else {
            "📄 View Retrieved Context"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn texts(state: &PageState) -> Vec<(Role, String)> {
        state.messages().map(|m| (m.role, m.text.clone())).collect()
    }

    #[test]
    fn test_drop_non_pdf_is_rejected() {
        let mut state = PageState::new();
        state.set_drag_over(true);

        assert!(!state.handle_drop(Some("text/plain")));
        assert!(!state.drag_over);
        assert_eq!(
            state.status,
            Some(StatusMessage {
                text: "Please upload a PDF file".to_string(),
                severity: Severity::Error,
            })
        );
        assert_eq!(state.status.as_ref().unwrap().class(), "upload-status error");
    }

    #[test]
    fn test_drop_without_file_is_rejected() {
        let mut state = PageState::new();
        assert!(!state.handle_drop(None));
        assert_eq!(state.status.unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_drop_pdf_is_accepted() {
        let mut state = PageState::new();
        assert!(state.handle_drop(Some("application/pdf")));
        assert_eq!(state.status, None);
    }

    #[test]
    fn test_upload_success() {
        let mut state = PageState::new();
        state.begin_upload();
        assert_eq!(state.status.as_ref().unwrap().severity, Severity::Loading);
        assert_eq!(state.status.as_ref().unwrap().text, UPLOADING);

        state.finish_upload(Ok(UploadOutcome::Accepted {
            message: "Processed".to_string(),
            filename: "report.pdf".to_string(),
        }));

        assert_eq!(
            state.status,
            Some(StatusMessage {
                text: "Processed".to_string(),
                severity: Severity::Success,
            })
        );
        assert_eq!(state.file_label.as_deref(), Some("📄 report.pdf"));
        assert!(state.chat_visible);
    }

    #[test]
    fn test_upload_rejected_keeps_chat_hidden() {
        let mut state = PageState::new();
        state.begin_upload();
        state.finish_upload(Ok(UploadOutcome::Rejected {
            error: "Invalid file type. Please upload a PDF".to_string(),
        }));

        let status = state.status.unwrap();
        assert_eq!(status.severity, Severity::Error);
        assert_eq!(status.text, "Invalid file type. Please upload a PDF");
        assert!(!state.chat_visible);
        assert_eq!(state.file_label, None);
    }

    #[test]
    fn test_upload_transport_error() {
        let mut state = PageState::new();
        state.begin_upload();
        state.finish_upload(Err(ApiError::Network("Failed to fetch".into())));

        let status = state.status.unwrap();
        assert_eq!(status.severity, Severity::Error);
        assert_eq!(status.text, "Error uploading file. Please try again.");
    }

    #[test]
    fn test_later_status_wins() {
        let mut state = PageState::new();
        state.begin_upload();
        state.reject_drop();
        assert_eq!(state.status.as_ref().unwrap().text, NOT_A_PDF);
        state.show_status("Processed", Severity::Success);
        assert_eq!(state.status.unwrap().class(), "upload-status success");
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut state = PageState::new();
        for raw in ["", "   ", "\n\t "] {
            assert_eq!(state.begin_ask(raw), None);
        }
        assert!(state.transcript.is_empty());
        assert!(state.welcome_visible);
        assert_eq!(state.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_ask_answered() {
        let mut state = PageState::new();
        let pending = state.begin_ask("What is the total?").unwrap();

        assert_eq!(pending.question, "What is the total?");
        assert!(state.is_sending());
        assert!(!state.welcome_visible);
        assert_eq!(state.loading_count(), 1);

        state.finish_ask(
            pending.loading_id,
            Ok(AskOutcome::Answered {
                answer: "42".to_string(),
                context: Some(json!("[Passage 1]: total 42")),
                sources: None,
            }),
        );
        state.end_ask();

        assert_eq!(state.loading_count(), 0);
        assert_eq!(
            texts(&state),
            vec![
                (Role::User, "What is the total?".to_string()),
                (Role::Bot, "42".to_string()),
            ]
        );
        let bot = state.messages().last().unwrap();
        assert_eq!(
            bot.extras.as_ref().unwrap().context_text().as_deref(),
            Some("[Passage 1]: total 42")
        );
        assert_eq!(state.phase(), ChatPhase::Idle);
    }

    #[test]
    fn test_question_is_trimmed() {
        let mut state = PageState::new();
        let pending = state.begin_ask("  hello \n").unwrap();
        assert_eq!(pending.question, "hello");
        assert_eq!(texts(&state), vec![(Role::User, "hello".to_string())]);
    }

    #[test]
    fn test_ask_failed_uses_server_error() {
        let mut state = PageState::new();
        let pending = state.begin_ask("q").unwrap();
        state.finish_ask(
            pending.loading_id,
            Ok(AskOutcome::Failed {
                error: "Please upload a PDF first".to_string(),
            }),
        );

        assert_eq!(state.loading_count(), 0);
        let bot = state.messages().last().unwrap();
        assert_eq!(bot.role, Role::Bot);
        assert_eq!(bot.text, "Please upload a PDF first");
        assert_eq!(bot.extras, None);
    }

    #[test]
    fn test_ask_transport_error() {
        let mut state = PageState::new();
        let pending = state.begin_ask("q").unwrap();
        state.finish_ask(pending.loading_id, Err(ApiError::Network("offline".into())));

        assert_eq!(state.loading_count(), 0);
        assert_eq!(
            state.messages().last().unwrap().text,
            "Error: Could not get answer. Please try again."
        );
    }

    #[test]
    fn test_second_question_refused_while_sending() {
        let mut state = PageState::new();
        let first = state.begin_ask("first").unwrap();
        let snapshot = state.clone();

        assert_eq!(state.begin_ask("second"), None);
        assert_eq!(state, snapshot);
        assert_eq!(state.loading_count(), 1);

        state.finish_ask(first.loading_id, Ok(AskOutcome::Failed { error: "x".into() }));
        state.end_ask();
        assert!(state.begin_ask("second").is_some());
    }

    #[test]
    fn test_markup_is_kept_as_text() {
        let mut state = PageState::new();
        state.begin_ask("<script>alert(1)</script>").unwrap();
        assert_eq!(
            state.messages().next().unwrap().text,
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn test_remove_unknown_entry() {
        let mut state = PageState::new();
        state.push_message(ChatMessage::bot("hi"));
        assert!(!state.remove_entry(EntryId::new_v4()));
        assert_eq!(state.transcript.len(), 1);
    }

    #[test]
    fn test_send_permit_releases_once() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _permit = SendPermit::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_send_permit_releases_on_early_return() {
        fn run(released: Rc<Cell<bool>>, fail: bool) -> Result<(), ()> {
            let _permit = SendPermit::new(move || released.set(true));
            if fail {
                return Err(());
            }
            Ok(())
        }

        let released = Rc::new(Cell::new(false));
        assert!(run(released.clone(), true).is_err());
        assert!(released.get());
    }

    fn ask_under_permit(result: Result<AskOutcome, ApiError>) {
        let state = Rc::new(RefCell::new(PageState::new()));
        let focused = Rc::new(Cell::new(false));

        let pending = state.borrow_mut().begin_ask("q").unwrap();
        let permit = {
            let state = state.clone();
            let focused = focused.clone();
            ask_permit(
                move |end| end(&mut state.borrow_mut()),
                move || focused.set(true),
            )
        };

        state.borrow_mut().finish_ask(pending.loading_id, result);
        assert!(state.borrow().is_sending());
        assert!(!focused.get());

        drop(permit);
        assert!(!state.borrow().is_sending());
        assert!(focused.get());
        assert_eq!(state.borrow().loading_count(), 0);
        assert!(state.borrow_mut().begin_ask("next").is_some());
    }

    #[test]
    fn test_ask_permit_returns_to_idle_after_answer() {
        ask_under_permit(Ok(AskOutcome::Answered {
            answer: "42".to_string(),
            context: None,
            sources: None,
        }));
    }

    #[test]
    fn test_ask_permit_returns_to_idle_after_failure() {
        ask_under_permit(Ok(AskOutcome::Failed {
            error: "Please upload a PDF first".to_string(),
        }));
    }

    #[test]
    fn test_ask_permit_returns_to_idle_after_transport_error() {
        ask_under_permit(Err(ApiError::Network("offline".into())));
    }

    #[test]
    fn test_context_panel_toggle() {
        let mut panel = ContextPanel::default();
        assert_eq!(panel.label(), "📄 View Retrieved Context");
        panel.toggle();
        assert!(panel.visible);
        assert_eq!(panel.label(), "📄 Hide Retrieved Context");
        panel.toggle();
        assert!(!panel.visible);
    }

    #[test]
    fn test_context_text_pretty_prints_structures() {
        let extras = AnswerExtras {
            context: Some(json!(["a", "b"])),
            sources: None,
        };
        assert_eq!(extras.context_text().unwrap(), "[\n  \"a\",\n  \"b\"\n]");
        assert_eq!(AnswerExtras::default().context_text(), None);
    }
}
