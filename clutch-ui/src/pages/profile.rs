//! Profile Page
//!
//! View and edit the signed-in user's profile, notification switches,
//! subscription plans, the API connection and sign-out.

use leptos::*;

use clutch::api::{Plan, Profile as UserProfile, Stat};

use crate::api;
use crate::app::PageHeader;
use crate::components::{AmbientCanvas, Loading};
use crate::state::global::GlobalState;

/// Sections of the settings panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileView {
    General,
    Notifications,
    Billing,
}

/// Up to two initials from a display name
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

fn plan_blurb(plan: Plan) -> &'static str {
    match plan {
        Plan::Free => "Basic predictions and general statistics",
        Plan::Pro => "Advanced predictions and detailed analytics",
        Plan::Elite => "Premium predictions with edge insights and early picks",
    }
}

fn stat_label(stat: &Option<Stat>) -> String {
    stat.as_ref()
        .map(|s| s.to_string())
        .unwrap_or_else(|| "—".to_string())
}

fn go_to_login() {
    let _ = window().location().set_href("/login");
}

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let profile = create_rw_signal(UserProfile::default());
    let edited = create_rw_signal(UserProfile::default());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let edit_mode = create_rw_signal(false);
    let current_view = create_rw_signal(ProfileView::General);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_profile().await {
                Ok(loaded) => {
                    state.user_name.set(Some(loaded.name.clone()));
                    edited.set(loaded.clone());
                    profile.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching profile: {}", e).into());
                    error.set(Some("Failed to load profile data".to_string()));
                    state.show_error("Failed to load profile data. Please try again.");
                    if e.is_unauthorized() {
                        go_to_login();
                    }
                }
            }
            loading.set(false);
        });
    });

    let save = move |_| {
        let draft = edited.get_untracked();
        spawn_local(async move {
            match api::update_profile(&draft).await {
                Ok(()) => {
                    state.user_name.set(Some(draft.name.clone()));
                    profile.set(draft);
                    edit_mode.set(false);
                    state.show_success("Profile updated successfully");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating profile: {}", e).into());
                    state.show_error("Failed to update profile. Please try again.");
                    if e.is_unauthorized() {
                        go_to_login();
                    }
                }
            }
        });
    };

    let cancel = move |_| {
        edited.set(profile.get_untracked());
        edit_mode.set(false);
    };

    let logout = move |_| {
        api::clear_token();
        state.user_name.set(None);
        go_to_login();
    };

    view! {
        <AmbientCanvas />

        <div class="relative z-10">
            <PageHeader title="Your Profile" subtitle="Manage your account" />

            {move || {
                if loading.get() {
                    return view! { <Loading message="Loading profile..." /> }.into_view();
                }

                let user = profile.get();
                view! {
                    {error.get().map(|message| view! {
                        <div class="max-w-5xl mx-auto mb-6 bg-red-900/40 border border-red-500/40 text-red-200 rounded-lg px-4 py-3">
                            {message}
                        </div>
                    })}

                    <div class="max-w-5xl mx-auto grid grid-cols-1 lg:grid-cols-3 gap-6">
                        // Summary column
                        <div class="space-y-6">
                            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40 text-center">
                                <div class="w-24 h-24 mx-auto rounded-full bg-purple-700/40 border border-purple-500/50 flex items-center justify-center">
                                    <span class="text-3xl font-bold">{initials(&user.name)}</span>
                                </div>
                                <h2 class="text-2xl font-bold mt-4">{user.name.clone()}</h2>
                                <p class="text-gray-300">{format!("@{}", user.username)}</p>
                                {user.join_date.clone().map(|d| view! {
                                    <p class="text-sm text-gray-300 mt-1">{format!("Member since {}", d)}</p>
                                })}
                                <span class="inline-block mt-3 px-3 py-1 bg-purple-900/30 text-purple-300 rounded-full text-sm font-medium border border-purple-500/20">
                                    {user.subscription_label().to_string()}
                                </span>
                            </section>

                            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-4 border border-purple-900/40 space-y-1">
                                <MenuButton label="General Settings" icon="⚙" on_click=move || current_view.set(ProfileView::General) />
                                <MenuButton label="Notifications" icon="🔔" on_click=move || current_view.set(ProfileView::Notifications) />
                                <MenuButton label="Subscription & Billing" icon="💳" on_click=move || current_view.set(ProfileView::Billing) />
                                <button
                                    class="w-full flex items-center justify-between p-2 hover:bg-white/5 rounded text-red-300"
                                    on:click=logout
                                >
                                    <span>"⏻ Sign Out"</span>
                                    <span>"→"</span>
                                </button>
                            </section>

                            <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40 space-y-2">
                                <h3 class="font-medium mb-2">"Betting Stats"</h3>
                                <StatRow label="Win Rate" value=stat_label(&user.win_rate) />
                                <StatRow label="Average Odds" value=stat_label(&user.avg_odds) />
                                <StatRow label="Total Bets" value=stat_label(&user.total_bets) />
                            </section>
                        </div>

                        // Settings panel
                        <div class="lg:col-span-2">
                            {move || match current_view.get() {
                                ProfileView::General => view! {
                                    <GeneralSettings
                                        profile=profile
                                        edited=edited
                                        edit_mode=edit_mode
                                        on_save=save
                                        on_cancel=cancel
                                    />
                                }.into_view(),
                                ProfileView::Notifications => view! { <NotificationSettings /> }.into_view(),
                                ProfileView::Billing => view! { <BillingSettings profile=profile /> }.into_view(),
                            }}
                        </div>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn MenuButton(
    label: &'static str,
    icon: &'static str,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            class="w-full flex items-center justify-between p-2 hover:bg-white/5 rounded transition-all duration-300"
            on:click=move |_| on_click()
        >
            <span class="text-gray-300">{icon} " " {label}</span>
            <span class="text-gray-400">"→"</span>
        </button>
    }
}

#[component]
fn StatRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between">
            <span class="text-gray-300">{label}</span>
            <span class="font-medium">{value}</span>
        </div>
    }
}

/// Name, username, email; editable in place
#[component]
fn GeneralSettings<S, C>(
    profile: RwSignal<UserProfile>,
    edited: RwSignal<UserProfile>,
    edit_mode: RwSignal<bool>,
    on_save: S,
    on_cancel: C,
) -> impl IntoView
where
    S: Fn(ev::MouseEvent) + Copy + 'static,
    C: Fn(ev::MouseEvent) + Copy + 'static,
{
    view! {
        <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40 space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">"General Settings"</h2>
                {move || (!edit_mode.get()).then(|| view! {
                    <button
                        class="px-3 py-1 bg-purple-700/60 hover:bg-purple-600 rounded text-sm"
                        on:click=move |_| edit_mode.set(true)
                    >
                        "✎ Edit"
                    </button>
                })}
            </div>

            {move || if edit_mode.get() {
                view! {
                    <div class="space-y-4">
                        <label class="block">
                            <span class="text-gray-300 block">"Full Name"</span>
                            <input
                                class="w-full mt-1 p-2 bg-purple-900/30 border border-purple-500/30 rounded"
                                prop:value=move || edited.with(|p| p.name.clone())
                                on:input=move |ev| edited.update(|p| p.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="block">
                            <span class="text-gray-300 block">"Username"</span>
                            <input
                                class="w-full mt-1 p-2 bg-purple-900/30 border border-purple-500/30 rounded"
                                prop:value=move || edited.with(|p| p.username.clone())
                                on:input=move |ev| edited.update(|p| p.username = event_target_value(&ev))
                            />
                        </label>
                        <label class="block">
                            <span class="text-gray-300 block">"Email"</span>
                            <input
                                type="email"
                                class="w-full mt-1 p-2 bg-purple-900/30 border border-purple-500/30 rounded"
                                prop:value=move || edited.with(|p| p.email.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edited.update(|p| p.email = (!value.is_empty()).then_some(value));
                                }
                            />
                        </label>
                        <div class="flex space-x-3">
                            <button class="px-4 py-2 bg-purple-600 hover:bg-purple-700 rounded" on:click=on_save>
                                "💾 Save"
                            </button>
                            <button class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded" on:click=on_cancel>
                                "✕ Cancel"
                            </button>
                        </div>
                    </div>
                }.into_view()
            } else {
                let user = profile.get();
                view! {
                    <div class="space-y-3">
                        <StatRow label="Full Name" value=user.name.clone() />
                        <StatRow label="Username" value=format!("@{}", user.username) />
                        <StatRow
                            label="Email"
                            value=user.email.clone().unwrap_or_else(|| "Not set".to_string())
                        />
                        <StatRow
                            label="Member Since"
                            value=user.join_date.clone().unwrap_or_else(|| "—".to_string())
                        />
                    </div>
                }.into_view()
            }}

            <ConnectionSettings />
        </section>
    }
}

/// API base URL override, kept in local storage
#[component]
fn ConnectionSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api_url = create_rw_signal(api::get_api_base());

    let save = move |_| {
        api::set_api_base(&api_url.get_untracked());
        api_url.set(api::get_api_base());
        state.show_success("API URL saved");
    };

    view! {
        <div class="pt-4 border-t border-purple-900/40">
            <h3 class="font-medium mb-2">"Connection"</h3>
            <label class="block">
                <span class="text-gray-300 block text-sm">"API URL"</span>
                <div class="flex space-x-2 mt-1">
                    <input
                        class="flex-1 p-2 bg-purple-900/30 border border-purple-500/30 rounded"
                        prop:value=move || api_url.get()
                        on:input=move |ev| api_url.set(event_target_value(&ev))
                    />
                    <button class="px-4 py-2 bg-purple-700/60 hover:bg-purple-600 rounded" on:click=save>
                        "Save"
                    </button>
                </div>
            </label>
        </div>
    }
}

/// Local notification switches
#[component]
fn NotificationSettings() -> impl IntoView {
    const SWITCHES: [(&str, &str); 4] = [
        ("Betting Notifications", "Receive alerts about odds changes and bet results"),
        ("Email Notifications", "Receive our newsletter and important updates"),
        ("Picks Marketplace", "Notifications when your picks are purchased"),
        ("Game Start Reminders", "Get notifications when games with your bets start"),
    ];

    view! {
        <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40 space-y-4">
            <h2 class="text-xl font-semibold">"Notifications"</h2>
            {SWITCHES.into_iter().map(|(title, detail)| {
                let enabled = create_rw_signal(true);
                view! {
                    <div class="flex items-center justify-between">
                        <div>
                            <span class="block">{title}</span>
                            <span class="text-gray-400 text-sm">{detail}</span>
                        </div>
                        <input
                            type="checkbox"
                            prop:checked=move || enabled.get()
                            on:change=move |_| enabled.update(|on| *on = !*on)
                        />
                    </div>
                }
            }).collect_view()}
        </section>
    }
}

/// Current plan and the available tiers
#[component]
fn BillingSettings(profile: RwSignal<UserProfile>) -> impl IntoView {
    let current = move || profile.with(|p| p.plan());

    view! {
        <section class="bg-gray-900/60 backdrop-blur rounded-xl p-6 border border-purple-900/40 space-y-6">
            <h2 class="text-xl font-semibold">"Subscription & Billing"</h2>

            <div>
                <h3 class="font-medium">"Current Plan"</h3>
                <div class="flex items-center justify-between mt-2">
                    <span class="text-gray-300">{move || profile.with(|p| p.subscription_label().to_string())}</span>
                    <span class="text-purple-400 font-medium">
                        {move || current().map(Plan::monthly_price).unwrap_or("")}
                    </span>
                </div>
            </div>

            <div>
                <h3 class="font-medium mb-2">"Available Plans"</h3>
                <div class="space-y-3">
                    {Plan::ALL.into_iter().map(|plan| view! {
                        <div class=move || format!(
                            "p-4 rounded-lg border flex items-center justify-between {}",
                            if current() == Some(plan) { "border-purple-400 bg-purple-900/30" } else { "border-purple-900/40" }
                        )>
                            <div>
                                <span class="font-medium">{plan.label()}</span>
                                <p class="text-gray-400 text-sm">{plan_blurb(plan)}</p>
                            </div>
                            <span class="font-medium">{plan.monthly_price()}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("John Doe"), "JD");
        assert_eq!(initials("cher"), "C");
        assert_eq!(initials("Ana Maria Lopez"), "AM");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label(&Some(Stat::Text("68.5%".to_string()))), "68.5%");
        assert_eq!(stat_label(&None), "—");
    }
}
