//! Navigation Components
//!
//! Sidebar with the page menu, and the top header bar.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Menu entries: icon, label, path
const MENU: [(&str, &str, &str); 7] = [
    ("📊", "Dashboard", "/"),
    ("📤", "Upload Bet", "/upload"),
    ("🛍", "Marketplace", "/marketplace"),
    ("💰", "Bankroll", "/bankroll"),
    ("🏆", "Leaderboard", "/leaderboard"),
    ("👤", "Profile", "/profile"),
    ("❓", "Help", "/help"),
];

/// Sidebar navigation; always visible on large screens, a drawer otherwise
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open = state.sidebar_open;

    view! {
        // Backdrop on small screens
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 bg-black/50 z-40 lg:hidden"
                on:click=move |_| open.set(false)
            />
        </Show>

        <aside class=move || format!(
            "fixed inset-y-0 left-0 z-50 w-64 bg-gray-900/90 backdrop-blur-lg border-r border-purple-900/40 \
             transform transition-transform duration-300 lg:translate-x-0 {}",
            if open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="flex items-center justify-between h-16 px-4">
                <A href="/" class="flex items-center space-x-3">
                    <span class="text-2xl">"⚡"</span>
                    <span class="text-xl font-bold text-white">"Clutch It"</span>
                </A>
                <button
                    class="lg:hidden text-white hover:text-purple-300 transition-colors"
                    on:click=move |_| open.set(false)
                >
                    "✕"
                </button>
            </div>

            <nav class="mt-4 px-2 space-y-1" on:click=move |_| open.set(false)>
                {MENU
                    .into_iter()
                    .map(|(icon, label, href)| view! { <NavLink href=href icon=icon label=label /> })
                    .collect_view()}
            </nav>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center space-x-3 px-4 py-3 rounded-lg text-gray-300 hover:text-white hover:bg-purple-900/30 transition-colors"
            active_class="bg-purple-900/50 text-white"
        >
            <span class="text-lg">{icon}</span>
            <span>{label}</span>
        </A>
    }
}

/// Top bar with the menu toggle and the user's name
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open = state.sidebar_open;

    view! {
        <header class="fixed top-0 right-0 left-0 lg:left-64 h-16 bg-gray-900/70 backdrop-blur-md z-30">
            <div class="flex items-center justify-between h-full px-4">
                <button
                    class="lg:hidden text-white hover:text-purple-300 transition-colors text-2xl"
                    on:click=move |_| open.set(true)
                >
                    "☰"
                </button>
                <div class="flex-1" />
                <div class="flex items-center space-x-4">
                    {move || state.loading.get().then(|| view! {
                        <div class="loading-spinner w-4 h-4" />
                    })}
                    <span class="text-sm text-white">{move || state.display_name()}</span>
                    <div class="w-8 h-8 bg-purple-600/30 rounded-full border border-purple-500/50" />
                </div>
            </div>
        </header>
    }
}
