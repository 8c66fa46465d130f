//! Metric Card Component
//!
//! Displays a single headline figure with its trend.

use leptos::*;

use clutch::api::MetricCard as Metric;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Title, formatted value and trend
    metric: Metric,
    /// Icon shown on the right
    #[prop(default = "📈")]
    icon: &'static str,
) -> impl IntoView {
    let (arrow, color) = if metric.is_up() {
        ("↑", "text-green-400")
    } else {
        ("↓", "text-red-400")
    };
    let trend = metric.trend_label();

    view! {
        <div class="bg-gray-900/60 backdrop-blur rounded-lg p-6 border border-purple-900/40 hover:border-purple-500/50 transition">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-300">{metric.title}</p>
                    <p class="text-2xl font-bold mt-1 text-white">{metric.value}</p>
                    <div class=format!("flex items-center mt-1 {}", color)>
                        <span>{arrow}</span>
                        <span class="text-sm ml-1">{trend}</span>
                    </div>
                </div>
                <div class="text-3xl">{icon}</div>
            </div>
        </div>
    }
}
