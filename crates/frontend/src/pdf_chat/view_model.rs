//! PDF Chat - View Model
//!
//! Owns the page state signal and runs the upload/ask flows against it.

use super::input::textarea_height;
use super::state::{ask_permit, PageState};
use crate::shared::config::PageConfig;
use crate::usecases::u001_upload_pdf::api::upload_pdf;
use crate::usecases::u002_ask_question::api::ask_question;
use contracts::usecases::u001_upload_pdf::UploadOutcome;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

#[derive(Clone, Copy)]
pub struct PdfChatVm {
    pub state: RwSignal<PageState>,
    /// Current text of the question box
    pub question: RwSignal<String>,
    pub config: StoredValue<PageConfig>,
    pub chat_section_ref: NodeRef<leptos::html::Div>,
    pub question_ref: NodeRef<leptos::html::Textarea>,
}

impl PdfChatVm {
    pub fn new(config: PageConfig) -> Self {
        Self {
            state: RwSignal::new(PageState::new()),
            question: RwSignal::new(String::new()),
            config: StoredValue::new(config),
            chat_section_ref: NodeRef::new(),
            question_ref: NodeRef::new(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.state.with(|s| s.is_sending())
    }

    /// File picked through the input control: uploaded without a type check.
    pub fn select_file(self, file: Option<web_sys::File>) {
        if let Some(file) = file {
            self.upload(file);
        }
    }

    /// File dropped on the upload card: only PDFs go out.
    pub fn drop_file(self, file: Option<web_sys::File>) {
        let mime = file.as_ref().map(|f| f.type_());
        let mut accepted = false;
        self.state
            .update(|s| accepted = s.handle_drop(mime.as_deref()));
        if !accepted {
            log::debug!("Drop rejected: {:?}", mime);
            return;
        }
        if let Some(file) = file {
            self.upload(file);
        }
    }

    pub fn upload(self, file: web_sys::File) {
        self.state.update(PageState::begin_upload);
        let delay = self.config.with_value(|c| c.chat_scroll_delay_ms);

        spawn_local(async move {
            let result = upload_pdf(file).await;
            let accepted = matches!(result, Ok(UploadOutcome::Accepted { .. }));
            self.state.update(|s| s.finish_upload(result));

            if accepted {
                TimeoutFuture::new(delay).await;
                if let Some(section) = self.chat_section_ref.get_untracked() {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
        });
    }

    /// Submit the question box. No-op for blank text or while a question is in flight.
    pub fn ask(self) {
        let raw = self.question.get_untracked();
        let mut pending = None;
        self.state.update(|s| pending = s.begin_ask(&raw));
        let Some(pending) = pending else {
            return;
        };
        self.question.set(String::new());

        let permit = ask_permit(
            move |end| {
                let _ = self.state.try_update(end);
            },
            move || {
                if let Some(input) = self.question_ref.get_untracked() {
                    let _ = input.focus();
                }
            },
        );

        spawn_local(async move {
            let _permit = permit;
            let result = ask_question(&pending.question).await;
            self.state
                .update(|s| s.finish_ask(pending.loading_id, result));
        });
    }

    /// Grow the question box with its content, up to the configured maximum.
    pub fn resize_question_box(&self) {
        let Some(input) = self.question_ref.get_untracked() else {
            return;
        };
        let max = self.config.with_value(|c| c.textarea_max_height);
        // ElementExt::style from the leptos prelude shadows the web-sys getter
        let style = web_sys::HtmlElement::style(&input);
        let _ = style.set_property("height", "auto");
        let height = textarea_height(input.scroll_height(), max);
        let _ = style.set_property("height", &format!("{height}px"));
    }
}
