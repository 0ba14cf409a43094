use crate::pdf_chat::PdfChatPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PdfChatPage />
    }
}
