//! Loading Component
//!
//! Loading spinner, list skeleton and the page-level error state.

use leptos::*;

/// Full-page loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(into, default = "Loading...".into())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24">
            <div class="animate-spin rounded-full h-16 w-16 border-t-2 border-b-2 border-purple-500" />
            <p class="mt-4 text-lg text-gray-200">{message}</p>
        </div>
    }
}

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-700/60 rounded h-12" />
            }).collect_view()}
        </div>
    }
}

/// Page-level failure with a reload button
#[component]
pub fn ErrorState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    let reload = move |_| {
        let _ = window().location().reload();
    };

    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <div class="text-red-500 text-6xl mb-4">"⚠"</div>
            <p class="text-lg text-gray-200">{message}</p>
            <button
                class="mt-4 px-4 py-2 bg-purple-600 rounded-md hover:bg-purple-700 transition-colors"
                on:click=reload
            >
                "Retry"
            </button>
        </div>
    }
}
