//! Leaderboard Page
//!
//! Top performers and the signed-in user's own standing.

use leptos::*;

use clutch::api::{ApiResult, LeaderboardEntry};

use crate::api;
use crate::app::PageHeader;
use crate::components::{AmbientCanvas, ErrorState, Loading};

async fn load_leaderboard() -> ApiResult<(Vec<LeaderboardEntry>, LeaderboardEntry)> {
    let top = api::fetch_top_performers().await?;
    let current = api::fetch_current_standing().await?;
    Ok((top, current))
}

/// Leaderboard page component
#[component]
pub fn Leaderboard() -> impl IntoView {
    let leaders = create_rw_signal(Vec::<LeaderboardEntry>::new());
    let current = create_rw_signal(None::<LeaderboardEntry>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    create_effect(move |_| {
        spawn_local(async move {
            match load_leaderboard().await {
                Ok((top, me)) => {
                    leaders.set(top);
                    current.set(Some(me));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching leaderboard data: {}", e).into());
                    error.set(Some("Failed to load leaderboard data. Please try again later.".to_string()));
                }
            }
            loading.set(false);
        });
    });

    view! {
        <AmbientCanvas />

        <div class="relative z-10">
            {move || {
                if loading.get() {
                    return view! { <Loading message="Loading leaderboard..." /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorState message=message /> }.into_view();
                }

                view! {
                    <PageHeader title="Leaderboard Rankings" subtitle="Top Performers & Stats" />

                    <div class="max-w-4xl mx-auto space-y-6">
                        <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                            <h2 class="text-xl font-semibold mb-4">"🏆 Top Performers"</h2>
                            <div class="space-y-4">
                                {leaders.get().into_iter()
                                    .map(|entry| view! { <LeaderRow entry=entry /> })
                                    .collect_view()}
                            </div>
                        </section>

                        {current.get().map(|me| view! { <CurrentStanding entry=me /> })}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Rank marker: crown and stars for the podium, the number otherwise
fn rank_badge(rank: u32) -> View {
    match rank {
        1 => view! { <span class="text-2xl">"👑"</span> }.into_view(),
        2 => view! { <span class="text-2xl text-gray-300">"★"</span> }.into_view(),
        3 => view! { <span class="text-2xl text-orange-400">"★"</span> }.into_view(),
        n => view! { <span class="text-lg font-bold text-gray-300">{format!("#{}", n)}</span> }.into_view(),
    }
}

#[component]
fn LeaderRow(entry: LeaderboardEntry) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 hover:bg-white/5 rounded-lg">
            <div class="flex items-center space-x-4">
                <div class="flex items-center justify-center w-8 h-8">{rank_badge(entry.rank)}</div>
                <div>
                    <p class="font-medium">{entry.username.clone()}</p>
                    <div class="flex items-center space-x-2 text-sm text-gray-300">
                        <span>"Win rate: " {entry.win_rate.to_string()}</span>
                        <span>"•"</span>
                        <span>"🔥 " {entry.streak} " wins"</span>
                    </div>
                </div>
            </div>
            <div class="text-right">
                <p class="font-bold text-green-400">"↗ " {entry.profit_label()}</p>
                <button class="mt-1 text-sm text-purple-300 hover:text-purple-200 transition-colors">
                    "View Profile"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CurrentStanding(entry: LeaderboardEntry) -> impl IntoView {
    view! {
        <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
            <h2 class="text-xl font-semibold mb-4">"📈 Your Rankings"</h2>
            <div class="p-4 rounded-lg bg-blue-900/20 border border-blue-500/20 flex items-center justify-between">
                <div class="flex items-center space-x-4">
                    <span class="text-lg font-bold text-blue-300">{format!("#{}", entry.rank)}</span>
                    <div>
                        <p class="font-medium">{format!("You ({})", entry.username)}</p>
                        <div class="flex items-center space-x-2 text-sm text-gray-300">
                            <span>"Win rate: " {entry.win_rate.to_string()}</span>
                            <span>"•"</span>
                            <span>"🔥 " {entry.streak} " wins"</span>
                        </div>
                    </div>
                </div>
                <div class="text-right">
                    <p class="font-bold text-green-400">{entry.profit_label()}</p>
                    {entry.percentile.clone().map(|p| view! {
                        <p class="text-sm text-blue-300">{p}</p>
                    })}
                </div>
            </div>
        </section>
    }
}
