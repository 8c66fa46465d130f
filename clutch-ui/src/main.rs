//! Clutch It Dashboard
//!
//! Sports-betting companion dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Performance dashboard with profit chart and recent activity
//! - Bet slip upload, picks marketplace, bankroll overview
//! - Leaderboard, profile and help center
//! - Animated ambient background behind every page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Clutch REST API over HTTP and draws the
//! ambient background with the `clutch` crate's engine onto a page canvas.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
