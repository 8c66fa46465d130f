//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod ambient;
pub mod chart;
pub mod loading;
pub mod metric_card;
pub mod nav;
pub mod toast;

pub use ambient::AmbientCanvas;
pub use chart::ProfitChart;
pub use loading::{ErrorState, ListSkeleton, Loading};
pub use metric_card::MetricCard;
pub use nav::{Header, Sidebar};
pub use toast::Toast;
