//! PDF Chat - View Component

use super::chat_panel::ChatPanel;
use super::upload_card::UploadCard;
use super::view_model::PdfChatVm;
use crate::shared::config::PageConfig;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn PdfChatPage(#[prop(optional)] config: Option<PageConfig>) -> impl IntoView {
    let vm = PdfChatVm::new(config.unwrap_or_default());

    view! {
        <div class="container">
            <header class="header">
                <h1>"📄 PDF Q&A"</h1>
                <p>"Upload a PDF and ask questions about its content"</p>
            </header>

            <UploadCard vm=vm />

            <div
                class="chat-section"
                node_ref=vm.chat_section_ref
                style:display=move || if vm.state.with(|s| s.chat_visible) { "block" } else { "none" }
            >
                <ChatPanel vm=vm />
            </div>
        </div>
    }
}
