//! Menu Upload Page
//!
//! PDF file picker plus a single multipart upload to the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;

/// Blocking acknowledgment shown once per upload outcome.
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    // web_sys::File is a JS handle, so the signal must be thread-local
    let (file, set_file) = signal_local::<Option<web_sys::File>>(None);
    let (uploading, set_uploading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Submit is a no-op unless a file is selected
        let Some(selected) = file.get_untracked() else {
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_menu_pdf(&selected).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[UPLOAD] Upload successful".into());
                    notify("Menu uploaded successfully!");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[UPLOAD] Upload failed: {}", e).into());
                    notify("Upload failed. Please try again.");
                }
            }
            set_uploading.set(false);
            set_file.set(None);
        });
    };

    let file_label = move || {
        file.get()
            .map(|f| f.name())
            .unwrap_or_else(|| "Choose a file".to_string())
    };

    view! {
        <div class="page upload-page">
            <h1>"Upload Menu"</h1>
            <div class="card">
                <form on:submit=on_submit>
                    <h2>"Upload PDF Menu"</h2>
                    <p class="muted">"Drag and drop your menu PDF or click to browse"</p>

                    <div class="file-drop">
                        <input
                            type="file"
                            accept=".pdf"
                            id="menu-upload"
                            on:change=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_file.set(input.files().and_then(|list| list.get(0)));
                            }
                        />
                        <label for="menu-upload">{file_label}</label>
                    </div>

                    <button
                        type="submit"
                        class="primary-btn"
                        prop:disabled=move || file.read().is_none() || uploading.get()
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload Menu" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
