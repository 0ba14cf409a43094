//! PDF Chat - upload card
//!
//! Click to browse or drop a file. The status line under the card reports
//! the last upload attempt.

use super::view_model::PdfChatVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn UploadCard(vm: PdfChatVm) -> impl IntoView {
    view! {
        <div
            class="upload-card"
            class:drag-over=move || vm.state.with(|s| s.drag_over)
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                vm.state.update(|s| s.set_drag_over(true));
            }
            on:dragleave=move |_| vm.state.update(|s| s.set_drag_over(false))
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                let file = ev
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .and_then(|files| files.get(0));
                vm.drop_file(file);
            }
        >
            <div class="upload-icon">{icon("upload")}</div>
            <h2>"Upload your PDF"</h2>
            <p>"Drag and drop a PDF here, or"</p>
            <label for="fileInput" class="upload-btn">"Choose File"</label>
            <input
                type="file"
                id="fileInput"
                accept=".pdf"
                style="display: none;"
                on:change=move |ev| {
                    let Some(input) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                    else {
                        return;
                    };
                    vm.select_file(input.files().and_then(|files| files.get(0)));
                    // allow picking the same file again
                    input.set_value("");
                }
            />
        </div>

        {move || {
            vm.state
                .with(|s| s.status.clone())
                .map(|status| {
                    let class = status.class();
                    view! { <div id="uploadStatus" class=class>{status.text}</div> }
                })
        }}
    }
}
