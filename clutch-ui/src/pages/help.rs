//! Help Page
//!
//! Help center: search, FAQ categories, popular questions, contact.

use leptos::*;
use leptos_router::*;

use clutch::api::{help_search_path, HelpCategory, PopularQuestion, MIN_SEARCH_LEN};

use crate::api;
use crate::app::PageHeader;
use crate::components::{AmbientCanvas, ListSkeleton};

/// Glyph for a category icon name
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "credit-card" => "💳",
        "shopping-bag" => "🛍",
        "zap" => "⚡",
        "file-question" => "📄",
        "book" => "📖",
        "upload" => "📤",
        "message-circle" => "💬",
        _ => "❔",
    }
}

/// Fetch state of one panel
#[derive(Clone, PartialEq)]
enum Panel<T> {
    Loading,
    Failed,
    Ready(Vec<T>),
}

/// Help page component
#[component]
pub fn Help() -> impl IntoView {
    let navigate = use_navigate();

    let categories = create_rw_signal(Panel::<HelpCategory>::Loading);
    let questions = create_rw_signal(Panel::<PopularQuestion>::Loading);
    let query = create_rw_signal(String::new());

    // The two panels load independently
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_help_categories().await {
                Ok(list) => categories.set(Panel::Ready(list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching FAQ categories: {}", e).into());
                    categories.set(Panel::Failed);
                }
            }
        });
        spawn_local(async move {
            match api::fetch_popular_questions().await {
                Ok(list) => questions.set(Panel::Ready(list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching popular questions: {}", e).into());
                    questions.set(Panel::Failed);
                }
            }
        });
    });

    let go = Callback::new(move |path: String| navigate(&path, Default::default()));

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = help_search_path(&query.get_untracked()) {
            go.call(path);
        }
    };

    let too_short = move || query.with(|q| q.trim().chars().count() < MIN_SEARCH_LEN);

    view! {
        <AmbientCanvas />

        <div class="relative z-10">
            <PageHeader title="Help Center" subtitle="Find answers to all your questions" />

            <div class="space-y-6 max-w-3xl mx-auto">
                <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                    <h2 class="text-2xl font-bold text-center mb-6">"How can we help you?"</h2>
                    <form class="relative" on:submit=on_search>
                        <input
                            type="text"
                            placeholder="Search for answers..."
                            class="w-full p-3 pl-10 bg-purple-900/30 border border-purple-500/30 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-purple-300">"🔍"</span>
                        <button
                            type="submit"
                            class="absolute right-3 top-1/2 -translate-y-1/2 bg-indigo-600 px-3 py-1 rounded-md text-sm hover:bg-indigo-500 disabled:opacity-50"
                            disabled=too_short
                        >
                            "Search"
                        </button>
                    </form>
                </section>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                        <h2 class="text-xl font-semibold mb-4">"FAQ Categories"</h2>
                        {move || match categories.get() {
                            Panel::Loading => view! { <ListSkeleton count=4 /> }.into_view(),
                            Panel::Failed => view! {
                                <p class="text-center py-8 text-red-400">"Unable to load categories. Please try again later."</p>
                            }.into_view(),
                            Panel::Ready(list) if list.is_empty() => view! {
                                <p class="text-center py-4 text-purple-300">"No categories available"</p>
                            }.into_view(),
                            Panel::Ready(list) => list.into_iter().map(|category| {
                                let path = category.path();
                                view! {
                                    <button
                                        class="w-full flex items-center justify-between p-3 hover:bg-purple-800/20 rounded-lg transition-all duration-300"
                                        on:click=move |_| go.call(path.clone())
                                    >
                                        <span class="flex items-center">
                                            <span class="text-lg">{icon_glyph(category.icon())}</span>
                                            <span class="ml-3 text-purple-100">{category.title.clone()}</span>
                                        </span>
                                        <span class="text-sm text-purple-300">{format!("{} articles", category.count)}</span>
                                    </button>
                                }
                            }).collect_view(),
                        }}
                    </section>

                    <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                        <h2 class="text-xl font-semibold mb-4">"Popular Questions"</h2>
                        {move || match questions.get() {
                            Panel::Loading => view! { <ListSkeleton count=4 /> }.into_view(),
                            Panel::Failed => view! {
                                <p class="text-center py-8 text-red-400">"Unable to load popular questions. Please try again later."</p>
                            }.into_view(),
                            Panel::Ready(list) => view! {
                                <div class="space-y-3">
                                    {if list.is_empty() {
                                        view! { <p class="text-center py-4 text-purple-300">"No popular questions available"</p> }.into_view()
                                    } else {
                                        list.into_iter().map(|question| {
                                            let path = question.path();
                                            view! {
                                                <button
                                                    class="w-full text-left flex items-center p-3 hover:bg-purple-800/20 rounded-lg transition-all duration-300"
                                                    on:click=move |_| go.call(path.clone())
                                                >
                                                    <span class="w-2 h-2 rounded-full bg-indigo-400 mr-3" />
                                                    <span class="text-sm text-purple-100">{question.title}</span>
                                                </button>
                                            }
                                        }).collect_view()
                                    }}
                                    <button
                                        class="w-full flex items-center justify-center p-3 text-indigo-400 hover:bg-purple-800/20 rounded-lg mt-4"
                                        on:click=move |_| go.call("/help/all-faqs".to_string())
                                    >
                                        "View all FAQs ↗"
                                    </button>
                                </div>
                            }.into_view(),
                        }}
                    </section>
                </div>

                <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                    <h2 class="text-xl font-semibold mb-4">"Contact Support"</h2>
                    <div class="flex flex-col md:flex-row items-center space-y-4 md:space-y-0 md:space-x-6">
                        <div class="w-16 h-16 bg-indigo-900/50 rounded-full flex items-center justify-center text-3xl">"💬"</div>
                        <div>
                            <h3 class="text-lg font-medium">"Need more help?"</h3>
                            <p class="text-purple-300 mb-4">"Our support team is ready to assist you with any questions or issues."</p>
                            <button
                                class="px-4 py-2 bg-gradient-to-r from-indigo-600 to-purple-600 rounded-lg hover:from-indigo-500 hover:to-purple-500"
                                on:click=move |_| go.call("/help/contact".to_string())
                            >
                                "Contact Support"
                            </button>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}
