//! PDF Chat - transcript and question box

use super::input::should_submit;
use super::state::{AnswerExtras, ChatMessage, ContextPanel, EntryKind, TranscriptEntry};
use super::view_model::PdfChatVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel(vm: PdfChatVm) -> impl IntoView {
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let show_context = vm.config.with_value(|c| c.show_context);

    // Pin the transcript to the bottom after every append/removal
    Effect::new(move |_| {
        vm.state.track();
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="file-info">
            {icon("document")}
            <span id="fileName">{move || vm.state.with(|s| s.file_label.clone()).unwrap_or_default()}</span>
        </div>

        <div class="chat-messages" node_ref=messages_container_ref>
            <Show when=move || vm.state.with(|s| s.welcome_visible)>
                <div class="welcome-message">
                    <p>"👋 Your document is ready. Ask anything about it."</p>
                </div>
            </Show>
            <For
                each=move || vm.state.with(|s| s.transcript.clone())
                key=|entry| entry.id
                let:entry
            >
                {transcript_entry(entry, show_context)}
            </For>
        </div>

        <div class="chat-input-container">
            <textarea
                id="questionInput"
                rows="1"
                placeholder="Ask a question about your PDF..."
                node_ref=vm.question_ref
                prop:value=move || vm.question.get()
                on:input=move |ev| {
                    vm.question.set(event_target_value(&ev));
                    vm.resize_question_box();
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if should_submit(&ev.key(), ev.shift_key()) {
                        ev.prevent_default();
                        vm.ask();
                    }
                }
            ></textarea>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || vm.is_sending())
                on_click=move |_| vm.ask()
            >
                {icon("send")}
                " Send"
            </Button>
        </div>
    }
}

fn transcript_entry(entry: TranscriptEntry, show_context: bool) -> AnyView {
    match entry.kind {
        // Static markup only: the placeholder carries no user text
        EntryKind::Loading => view! {
            <div class="message message-bot" id=format!("loading-{}", entry.id)>
                <div class="message-content">
                    <div class="loading-dots">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        EntryKind::Message(message) => chat_message(message, show_context),
    }
}

fn chat_message(message: ChatMessage, show_context: bool) -> AnyView {
    let context = if show_context {
        message.extras.as_ref().and_then(AnswerExtras::context_text)
    } else {
        None
    };

    view! {
        <div class=message.role.class()>
            <div class="message-content">{message.text}</div>
            {context.map(|text| view! { <RetrievedContext text=text /> })}
        </div>
    }
    .into_any()
}

#[component]
#[allow(non_snake_case)]
fn RetrievedContext(text: String) -> impl IntoView {
    let panel = RwSignal::new(ContextPanel::default());

    view! {
        <div class="context-toggle" on:click=move |_| panel.update(ContextPanel::toggle)>
            {move || panel.get().label()}
        </div>
        <div
            class="context-content"
            style:display=move || if panel.get().visible { "block" } else { "none" }
        >
            {text}
        </div>
    }
}
