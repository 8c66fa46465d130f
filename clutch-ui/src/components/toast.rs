//! Toast Notification Component
//!
//! Shows the queued toasts, newest at the bottom.

use leptos::*;

use crate::state::global::{GlobalState, ToastItem, ToastVariant};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            <For
                each=move || state.toasts.get().items().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastMessage toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(toast: ToastItem) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, bg_class) = match toast.variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
        ToastVariant::Info => ("ℹ", "bg-blue-600"),
    };
    let id = toast.id;

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in max-w-sm",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div class="flex-1">
                <p class="text-sm font-semibold">{toast.title}</p>
                <p class="text-sm">{toast.description}</p>
            </div>
            <button
                class="text-white/70 hover:text-white"
                on:click=move |_| state.dismiss_toast(id)
            >
                "✕"
            </button>
        </div>
    }
}
