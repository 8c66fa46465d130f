//! Upload Bet Page
//!
//! Drag-and-drop or browse for a bet slip, check it locally, then upload.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use clutch::api::{validate_file, UploadError, UploadStatus};

use crate::api;
use crate::app::PageHeader;
use crate::components::AmbientCanvas;

/// Upload page component
#[component]
pub fn UploadBet() -> impl IntoView {
    let selected = create_rw_signal(None::<File>);
    let status = create_rw_signal(None::<UploadStatus>);
    let dragging = create_rw_signal(false);
    let uploading = create_rw_signal(false);
    let input_ref = create_node_ref::<html::Input>();

    let choose = move |file: File| match validate_file(&file.type_(), file.size() as u64) {
        Ok(()) => {
            status.set(Some(UploadStatus::selected(&file.name())));
            selected.set(Some(file));
        }
        Err(e) => {
            status.set(Some(UploadStatus::rejected(e)));
            selected.set(None);
        }
    };

    let on_file_change = move |ev: ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            choose(file);
        }
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            choose(file);
        }
    };

    let browse = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let submit = move |_| {
        let Some(file) = selected.get_untracked() else {
            status.set(Some(UploadStatus::rejected(UploadError::NoFile)));
            return;
        };

        uploading.set(true);
        status.set(Some(UploadStatus::uploading()));

        spawn_local(async move {
            match api::upload_bet_slip(&file).await {
                Ok(response) => {
                    web_sys::console::log_1(&format!("Bet slip uploaded: {}", response.bet_id).into());
                    status.set(Some(UploadStatus::uploaded()));
                    selected.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Upload error: {}", e).into());
                    status.set(Some(UploadStatus::failed(&e)));
                }
            }
            uploading.set(false);
        });
    };

    view! {
        <AmbientCanvas />

        <div class="relative z-10 max-w-2xl mx-auto">
            <PageHeader title="Upload Your Bet" subtitle="Share your winning strategy" />

            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                <h2 class="text-xl font-semibold mb-4 flex items-center">
                    "Bet Slip Upload"
                    <span class="ml-2 w-2 h-2 bg-cyan-400 rounded-full pulse" />
                </h2>

                <div
                    class=move || format!(
                        "border-2 border-dashed rounded-xl p-10 text-center transition-colors {}",
                        if dragging.get() { "border-purple-400 bg-purple-900/30" } else { "border-purple-700/50" }
                    )
                    on:dragover=move |ev: ev::DragEvent| {
                        ev.prevent_default();
                        dragging.set(true);
                    }
                    on:dragleave=move |_| dragging.set(false)
                    on:drop=on_drop
                >
                    <input
                        type="file"
                        node_ref=input_ref
                        class="hidden"
                        accept=".jpg,.jpeg,.png,.pdf"
                        on:change=on_file_change
                    />

                    <div class="text-5xl">"📤"</div>

                    <p class="mt-4 text-lg text-indigo-200">
                        {move || match selected.get() {
                            Some(file) => format!("Selected: {}", file.name()),
                            None => "Drag and drop your bet slip here, or click to browse".to_string(),
                        }}
                    </p>

                    {move || status.get().map(|s| view! {
                        <div class=format!("mt-3 text-sm {}", s.kind.css_class())>{s.message}</div>
                    })}

                    <div class="mt-6 flex justify-center space-x-4">
                        {move || if selected.with(Option::is_some) {
                            view! {
                                <button
                                    class="px-6 py-2 bg-purple-600 hover:bg-purple-700 rounded-lg font-medium disabled:opacity-50"
                                    on:click=submit
                                    disabled=move || uploading.get()
                                >
                                    {move || if uploading.get() { "Uploading..." } else { "Submit Bet" }}
                                </button>
                            }.into_view()
                        } else {
                            view! {
                                <button
                                    class="px-6 py-2 bg-purple-600 hover:bg-purple-700 rounded-lg font-medium"
                                    on:click=browse
                                >
                                    "Upload Image"
                                </button>
                            }.into_view()
                        }}
                    </div>

                    <p class="text-sm text-indigo-300 mt-4">
                        "Supported formats: JPG, PNG, PDF • Max size: 10MB"
                    </p>
                </div>
            </section>
        </div>
    }
}
