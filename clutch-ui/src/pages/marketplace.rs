//! Marketplace Page
//!
//! Featured bundles, trending categories and individual clutch picks. When
//! the server cannot be reached the page keeps working on built-in samples.

use leptos::*;

use clutch::api::{trending_names, ApiError, ApiResult, Pick, RecordId};
use clutch::format::format_price;

use crate::api;
use crate::app::PageHeader;
use crate::components::{AmbientCanvas, Loading};
use crate::state::global::GlobalState;

#[derive(Clone)]
struct MarketData {
    featured: Vec<Pick>,
    clutch: Vec<Pick>,
    trending: Vec<String>,
}

impl MarketData {
    fn samples() -> Self {
        Self {
            featured: Pick::featured_samples(),
            clutch: Pick::clutch_samples(),
            trending: trending_names(&[]),
        }
    }
}

async fn load_market() -> ApiResult<MarketData> {
    Ok(MarketData {
        featured: api::fetch_featured_picks().await?,
        clutch: api::fetch_clutch_picks().await?,
        trending: api::fetch_trending_categories().await?,
    })
}

/// Marketplace page component
#[component]
pub fn Marketplace() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = create_rw_signal(MarketData::samples());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            match load_market().await {
                Ok(loaded) => data.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching marketplace data: {}", e).into());
                    error.set(Some("Failed to load marketplace data. Showing sample picks.".to_string()));
                    data.set(MarketData::samples());
                }
            }
            loading.set(false);
        });
    });

    let purchase = Callback::new(move |pick_id: Option<RecordId>| {
        if api::get_token().is_none() {
            state.show_error("Please log in to purchase picks");
            return;
        }
        let Some(pick_id) = pick_id else {
            state.show_error("Purchase failed. Please try again.");
            return;
        };

        spawn_local(async move {
            match api::purchase_pick(pick_id).await {
                Ok(_) => state.show_success("Pick purchased successfully!"),
                Err(ApiError::Rejected(message)) => state.show_error(&message),
                Err(e) => {
                    web_sys::console::error_1(&format!("Purchase error: {}", e).into());
                    state.show_error("Error processing your purchase. Please try again later.");
                }
            }
        });
    });

    view! {
        <AmbientCanvas />

        <div class="relative z-10 space-y-8">
            <PageHeader title="Clutch Picks Marketplace" subtitle="Premium Picks from Elite Bettors" />

            {move || {
                if loading.get() {
                    return view! { <Loading message="Loading marketplace..." /> }.into_view();
                }

                let MarketData { featured, clutch, trending } = data.get();

                view! {
                    {error.get().map(|message| view! {
                        <div class="bg-red-900/40 border border-red-500/40 text-red-200 rounded-lg px-4 py-3">
                            {message}
                        </div>
                    })}

                    // Featured Picks
                    <section>
                        <h2 class="text-xl font-bold mb-4">"🏅 Featured Picks"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {featured.into_iter()
                                .map(|pick| view! { <FeaturedCard pick=pick on_purchase=purchase /> })
                                .collect_view()}
                        </div>
                    </section>

                    // Trending Categories
                    <section>
                        <h2 class="text-xl font-bold mb-4">"📈 Trending Categories"</h2>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            {trending.into_iter().map(|category| view! {
                                <div class="flex items-center justify-between bg-purple-900/30 border border-purple-500/30 rounded-lg px-4 py-3">
                                    <span>{category}</span>
                                    <span class="text-purple-300">"›"</span>
                                </div>
                            }).collect_view()}
                        </div>
                    </section>

                    // Clutch Picks
                    <section>
                        <h2 class="text-xl font-bold mb-4">"👥 Premium Picks"</h2>
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                            {clutch.into_iter()
                                .map(|pick| view! { <PickCard pick=pick on_purchase=purchase /> })
                                .collect_view()}
                        </div>
                    </section>
                }.into_view()
            }}
        </div>
    }
}

/// Five stars, the first `full` filled
#[component]
fn Stars(full: usize) -> impl IntoView {
    view! {
        <span class="flex">
            {(0..5).map(|i| {
                if i < full {
                    view! { <span class="text-yellow-400">"★"</span> }
                } else {
                    view! { <span class="text-gray-600">"☆"</span> }
                }
            }).collect_view()}
        </span>
    }
}

/// Large card for a featured bundle
#[component]
fn FeaturedCard(pick: Pick, on_purchase: Callback<Option<RecordId>>) -> impl IntoView {
    let full = pick.full_stars();
    let id = pick.id.clone();

    view! {
        <div class="relative overflow-hidden bg-gray-900/60 backdrop-blur rounded-xl border border-purple-900/40">
            {pick.image.clone().map(|src| view! {
                <img src=src alt=pick.title.clone() class="w-full h-48 object-cover" />
            })}
            <div class="relative p-6">
                <div class="absolute -top-4 right-4 bg-gradient-to-r from-purple-600 to-blue-600 px-3 py-1 rounded-full text-sm font-medium">
                    "Premium"
                </div>
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="font-bold text-lg">{pick.title.clone()}</h3>
                        <p class="text-sm text-purple-300">"by " {pick.author.clone()}</p>
                    </div>
                    <span class="text-xl font-bold">{format_price(pick.price)}</span>
                </div>
                <p class="mt-2 text-sm text-gray-300">{pick.description.clone()}</p>
                <div class="mt-4 flex justify-between items-center">
                    <div class="flex items-center">
                        <Stars full=full />
                        <span class="ml-1 text-sm text-gray-300">{pick.rating}</span>
                        <span class="ml-2 text-sm text-gray-400">{format!("({} sales)", pick.sales)}</span>
                    </div>
                    <button
                        class="px-4 py-2 bg-purple-600 hover:bg-purple-700 rounded-lg text-sm font-medium"
                        on:click=move |_| on_purchase.call(id.clone())
                    >
                        "Purchase 🛒"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Compact card for a single pick
#[component]
fn PickCard(pick: Pick, on_purchase: Callback<Option<RecordId>>) -> impl IntoView {
    let full = pick.full_stars();
    let badge = pick.badge().map(str::to_string);
    let id = pick.id.clone();

    view! {
        <div class="bg-gray-900/60 backdrop-blur rounded-xl p-5 border border-purple-900/40">
            {badge.map(|tag| view! {
                <div class="inline-flex items-center mb-2 px-2 py-0.5 bg-cyan-900/40 text-cyan-300 rounded-full text-xs">
                    <span>{tag}</span>
                    <span class="ml-1 w-1.5 h-1.5 bg-cyan-400 rounded-full pulse" />
                </div>
            })}
            <div class="flex justify-between items-start">
                <div>
                    <h3 class="font-semibold">{pick.title}</h3>
                    <p class="text-sm text-gray-400">"by " {pick.author}</p>
                </div>
                <span class="text-lg font-bold">{format_price(pick.price)}</span>
            </div>
            <p class="mt-2 text-sm text-gray-400">{pick.description}</p>
            <div class="mt-4 flex justify-between items-center">
                <div class="flex items-center text-xs">
                    <Stars full=full />
                    <span class="ml-1 text-gray-300">{pick.rating}</span>
                    <span class="ml-2 text-gray-500">{format!("({})", pick.sales)}</span>
                </div>
                <button
                    class="px-3 py-1 bg-purple-700/60 hover:bg-purple-600 rounded text-xs"
                    on:click=move |_| on_purchase.call(id.clone())
                >
                    "Purchase"
                </button>
            </div>
        </div>
    }
}
