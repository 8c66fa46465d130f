//! Bankroll Page
//!
//! Bankroll snapshot, recommended stake and transaction history.

use leptos::*;

use clutch::api::{BankrollStats, Transaction};

use crate::app::PageHeader;
use crate::components::{AmbientCanvas, MetricCard};

const CARD_ICONS: [&str; 4] = ["👛", "📈", "💵", "💵"];

/// Bankroll page component
#[component]
pub fn Bankroll() -> impl IntoView {
    let stats = BankrollStats::sample();
    let transactions = Transaction::samples();

    view! {
        <AmbientCanvas />

        <div class="relative z-10 space-y-6">
            <PageHeader title="Bankroll Management" subtitle="Smart Money, Better Decisions" />

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {stats.cards()
                    .into_iter()
                    .zip(CARD_ICONS)
                    .map(|(metric, icon)| view! { <MetricCard metric=metric icon=icon /> })
                    .collect_view()}
            </div>

            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                <h2 class="text-xl font-semibold mb-4 flex items-center">
                    "Recommended Bet Size"
                    <span class="ml-2 w-2 h-2 bg-cyan-400 rounded-full pulse" />
                </h2>
                <div class="text-center">
                    <p class="text-4xl font-bold text-indigo-400">{format!("${}", stats.recommended_bet)}</p>
                    <p class="mt-2 text-sm text-gray-300">"Based on your bankroll and risk profile"</p>
                </div>
            </section>

            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40">
                <h2 class="text-xl font-semibold mb-4">"Transaction History"</h2>
                <div class="space-y-4">
                    {transactions.into_iter().map(|tx| view! { <TransactionRow tx=tx /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

#[component]
fn TransactionRow(tx: Transaction) -> impl IntoView {
    let (dot, amount_class) = if tx.kind.is_credit() {
        ("activity-win", "text-green-400")
    } else {
        ("activity-bet", "text-red-400")
    };

    view! {
        <div class="flex items-center justify-between p-3">
            <div class="flex items-center space-x-3">
                <div class=format!("w-3 h-3 rounded-full {}", dot) />
                <div>
                    <p class="text-sm text-gray-100">{tx.kind.label()}</p>
                    <p class="text-xs text-gray-400">{tx.date.format("%Y-%m-%d").to_string()}</p>
                </div>
            </div>
            <span class=format!("text-sm font-medium {}", amount_class)>{tx.amount_label()}</span>
        </div>
    }
}
