//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{AmbientCanvas, Header, Sidebar, Toast};
use crate::pages::{Bankroll, Dashboard, Help, Leaderboard, Marketplace, Profile, UploadBet};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-white">
                <Sidebar />

                <div class="lg:pl-64 relative z-10">
                    <Header />

                    // Main content area
                    <main class="pt-20 p-4 relative z-10">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/upload" view=UploadBet />
                            <Route path="/marketplace" view=Marketplace />
                            <Route path="/bankroll" view=Bankroll />
                            <Route path="/leaderboard" view=Leaderboard />
                            <Route path="/profile" view=Profile />
                            <Route path="/help" view=Help />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </main>
                </div>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Page title block shared by every page
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-8 relative z-10">
            <h1 class="text-4xl font-bold bg-gradient-to-r from-purple-400 to-indigo-400 bg-clip-text text-transparent">
                {title}
            </h1>
            {subtitle.map(|s| view! { <p class="text-gray-300 mt-2">{s}</p> })}
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <AmbientCanvas />
        <div class="relative z-10 flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-purple-600 hover:bg-purple-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
