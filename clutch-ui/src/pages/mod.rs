//! Pages
//!
//! Top-level page components for each route.

pub mod bankroll;
pub mod dashboard;
pub mod help;
pub mod leaderboard;
pub mod marketplace;
pub mod profile;
pub mod upload_bet;

pub use bankroll::Bankroll;
pub use dashboard::Dashboard;
pub use help::Help;
pub use leaderboard::Leaderboard;
pub use marketplace::Marketplace;
pub use profile::Profile;
pub use upload_bet::UploadBet;
