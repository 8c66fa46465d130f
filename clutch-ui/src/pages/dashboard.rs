//! Dashboard Page
//!
//! Headline metrics, profit history and recent activity.

use leptos::*;

use clutch::api::{Activity, ApiResult, MetricCard as Metric, PerformancePoint};

use crate::api;
use crate::app::PageHeader;
use crate::components::{AmbientCanvas, ErrorState, Loading, MetricCard, ProfitChart};
use crate::state::global::GlobalState;

/// Icons for the four headline cards, in display order
const CARD_ICONS: [&str; 4] = ["📈", "💵", "🏅", "👥"];

#[derive(Clone, Default)]
struct DashboardData {
    cards: Vec<Metric>,
    performance: Vec<PerformancePoint>,
    activity: Vec<Activity>,
}

async fn load_dashboard() -> ApiResult<DashboardData> {
    let metrics = api::fetch_user_metrics().await?;
    let performance = api::fetch_performance().await?;
    let activity = api::fetch_activity().await?;

    Ok(DashboardData {
        cards: metrics.cards(),
        performance,
        activity,
    })
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = create_rw_signal(DashboardData::default());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);

    // Fetch everything once on mount
    create_effect(move |_| {
        spawn_local(async move {
            state.loading.set(true);
            match load_dashboard().await {
                Ok(loaded) => data.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching dashboard data: {}", e).into());
                    error.set(Some("Failed to load dashboard data. Please try again.".to_string()));
                }
            }
            loading.set(false);
            state.loading.set(false);
        });
    });

    let performance = Signal::derive(move || data.with(|d| d.performance.clone()));

    view! {
        <AmbientCanvas />

        <div class="relative z-10 space-y-6">
            {move || {
                if loading.get() {
                    return view! { <Loading message="Loading your dashboard data..." /> }.into_view();
                }
                if let Some(message) = error.get() {
                    return view! { <ErrorState message=message /> }.into_view();
                }

                view! {
                    <PageHeader title="Performance Dashboard" subtitle="We Process, You Win" />

                    // Metrics Grid
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                        {data.with(|d| d.cards.clone())
                            .into_iter()
                            .zip(CARD_ICONS)
                            .map(|(metric, icon)| view! { <MetricCard metric=metric icon=icon /> })
                            .collect_view()}
                    </div>

                    // Performance Chart
                    <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                        <h2 class="text-xl font-semibold mb-4 flex items-center">
                            "Performance Overview"
                            <span class="ml-2 w-2 h-2 bg-cyan-400 rounded-full pulse" />
                        </h2>
                        <ProfitChart points=performance />
                    </section>

                    // Recent Activity
                    <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                        <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>
                        <ActivityList items=data.with(|d| d.activity.clone()) />
                    </section>
                }.into_view()
            }}
        </div>
    }
}

/// Recent activity rows
#[component]
fn ActivityList(items: Vec<Activity>) -> impl IntoView {
    if items.is_empty() {
        return view! {
            <div class="text-center py-6 text-gray-400">
                <p>"No recent activity to display"</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="space-y-4">
            {items.into_iter().map(|activity| view! {
                <div class="flex items-center justify-between p-3 hover:bg-white/10 rounded-lg transition-all duration-300">
                    <div class="flex items-center space-x-3">
                        <div class=format!("w-3 h-3 rounded-full {}", activity.kind.css_class()) />
                        <p class="text-sm text-gray-100">{activity.description}</p>
                    </div>
                    <span class="text-xs text-gray-400">{activity.time}</span>
                </div>
            }).collect_view()}
        </div>
    }
    .into_view()
}
