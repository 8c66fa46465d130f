//! Clutch REST API contracts
//!
//! Shapes and paths of the backend the dashboard talks to. The backend itself
//! lives elsewhere; this module only describes what goes over the wire.
//!
//! # Endpoints
//!
//! ## Dashboard
//! - `GET /user/metrics` - Headline metrics with trends
//! - `GET /user/performance` - Profit history for the chart
//! - `GET /user/activity` - Recent activity feed
//!
//! ## Marketplace
//! - `GET /marketplace/featured` - Featured bundles
//! - `GET /marketplace/clutch-picks` - Individual picks
//! - `GET /marketplace/trending-categories` - Category chips
//! - `POST /marketplace/purchase` - Buy a pick (auth)
//!
//! ## Leaderboard
//! - `GET /leaderboard/top?limit=5` - Top performers (auth)
//! - `GET /leaderboard/user/current` - The signed-in user's standing (auth)
//!
//! ## Profile
//! - `GET /profile/` - Current profile (auth)
//! - `PUT /profile/` - Save profile (auth)
//!
//! ## Help
//! - `GET /help/categories` - FAQ categories
//! - `GET /help/popular-questions` - Popular questions
//!
//! ## Bets
//! - `POST /bets/upload` - Multipart bet slip upload (auth)
//!
//! Paths are relative to the configured base URL (see
//! [`ApiConfig::endpoint`](crate::config::ApiConfig::endpoint)).

pub mod dto;
pub mod error;
pub mod upload;

pub use dto::*;
pub use error::{ApiError, ApiResult, ErrorBody};
pub use upload::{validate_file, StatusKind, UploadError, UploadStatus, MAX_UPLOAD_BYTES};

/// Endpoint paths, relative to the API base URL
pub mod paths {
    pub const USER_METRICS: &str = "/user/metrics";
    pub const USER_PERFORMANCE: &str = "/user/performance";
    pub const USER_ACTIVITY: &str = "/user/activity";

    pub const MARKETPLACE_FEATURED: &str = "/marketplace/featured";
    pub const MARKETPLACE_CLUTCH_PICKS: &str = "/marketplace/clutch-picks";
    pub const MARKETPLACE_TRENDING: &str = "/marketplace/trending-categories";
    pub const MARKETPLACE_PURCHASE: &str = "/marketplace/purchase";

    pub const LEADERBOARD_TOP: &str = "/leaderboard/top?limit=5";
    pub const LEADERBOARD_CURRENT: &str = "/leaderboard/user/current";

    pub const PROFILE: &str = "/profile/";

    pub const HELP_CATEGORIES: &str = "/help/categories";
    pub const HELP_POPULAR: &str = "/help/popular-questions";

    pub const BETS_UPLOAD: &str = "/bets/upload";
}
