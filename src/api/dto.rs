//! Data Transfer Objects
//!
//! Request and response types for the backend REST API.
//! Field names follow the JSON the server sends (camelCase unless noted).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{ApiError, ApiResult};
use crate::format::{format_currency, format_trend};

// ============================================
// SHARED
// ============================================

/// `{success, data, message}` wrapper used by the marketplace and leaderboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload; `success: false` or a missing payload is an error
    pub fn into_result(self) -> ApiResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Decode("response has no data".to_string())),
            (false, _) => Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| "Request failed".to_string()),
            )),
        }
    }

    /// Check the flag only, for calls whose payload is optional
    pub fn ensure_success(self, fallback: &str) -> ApiResult<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| fallback.to_string()),
            ))
        }
    }
}

/// Identifier the server may send as a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Statistic rendered verbatim: `68.5` and `"68.5%"` are both accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stat {
    Number(f64),
    Text(String),
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Number(n) => write!(f, "{}", n),
            Stat::Text(s) => f.write_str(s),
        }
    }
}

/// One card in a dashboard metric row
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    /// Signed percentage change
    pub trend: f64,
}

impl MetricCard {
    pub fn is_up(&self) -> bool {
        self.trend > 0.0
    }

    pub fn trend_label(&self) -> String {
        format_trend(self.trend)
    }
}

// ============================================
// DASHBOARD DTOs
// ============================================

/// `GET /user/metrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMetrics {
    pub win_rate: f64,
    pub win_rate_trend: f64,
    pub total_profit: f64,
    pub profit_trend: f64,
    pub clutch_picks: f64,
    pub clutch_picks_trend: f64,
    pub followers: f64,
    pub followers_trend: f64,
}

impl UserMetrics {
    /// The four headline cards, in display order
    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard {
                title: "Win Rate",
                value: format!("{}%", self.win_rate),
                trend: self.win_rate_trend,
            },
            MetricCard {
                title: "Total Profit",
                value: format_currency(self.total_profit),
                trend: self.profit_trend,
            },
            MetricCard {
                title: "Clutch Picks",
                value: self.clutch_picks.to_string(),
                trend: self.clutch_picks_trend,
            },
            MetricCard {
                title: "Following",
                value: self.followers.to_string(),
                trend: self.followers_trend,
            },
        ]
    }
}

/// One point on the profit chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    /// Axis label as sent by the server
    pub date: String,
    pub profit: f64,
}

/// `GET /user/performance`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceResponse {
    #[serde(default)]
    pub performance_history: Vec<PerformancePoint>,
}

/// Kind of a recent-activity row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Win,
    Bet,
    #[serde(other)]
    Purchase,
}

impl ActivityKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ActivityKind::Win => "activity-win",
            ActivityKind::Bet => "activity-bet",
            ActivityKind::Purchase => "activity-purchase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    /// Relative time as sent by the server ("2 hours ago")
    pub time: String,
}

/// `GET /user/activity`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    #[serde(default)]
    pub recent_activity: Vec<Activity>,
}

// ============================================
// MARKETPLACE DTOs
// ============================================

/// Trending categories shown until the server supplies its own
pub const DEFAULT_TRENDING: [&str; 4] = ["NBA", "NFL", "MLB", "UFC"];

/// A pick listed for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub rating: f64,
    #[serde(default)]
    pub sales: u32,
    #[serde(default)]
    pub trending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Pick {
    /// Filled stars out of five
    pub fn full_stars(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }

    /// Badge text, only for trending picks
    pub fn badge(&self) -> Option<&str> {
        if self.trending {
            self.popular_tag.as_deref()
        } else {
            None
        }
    }

    fn sample(
        title: &str,
        author: &str,
        description: &str,
        price: f64,
        rating: f64,
        sales: u32,
    ) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            price,
            rating,
            sales,
            trending: false,
            popular_tag: None,
            image: None,
        }
    }

    fn tagged(mut self, trending: bool, tag: &str) -> Self {
        self.trending = trending;
        self.popular_tag = Some(tag.to_string());
        self
    }

    /// Featured bundles shown when the marketplace cannot be loaded
    pub fn featured_samples() -> Vec<Pick> {
        let image = Some("/api/placeholder/400/200".to_string());
        vec![
            Pick {
                image: image.clone(),
                ..Pick::sample(
                    "Ultimate Parlay Bundle",
                    "ProBettingTeam",
                    "Get access to our top 5 parlays across all major sports with detailed analysis",
                    49.99,
                    4.9,
                    287,
                )
            },
            Pick {
                image,
                ..Pick::sample(
                    "Weekend Special",
                    "ElitePicksDaily",
                    "Full weekend coverage with our best picks across NFL, NBA, and UFC events",
                    34.99,
                    4.8,
                    176,
                )
            },
        ]
    }

    /// Clutch picks shown when the marketplace cannot be loaded
    pub fn clutch_samples() -> Vec<Pick> {
        vec![
            Pick::sample(
                "NBA Parlay Special",
                "TopBettor",
                "3-team parlay with detailed analysis",
                29.99,
                4.8,
                156,
            )
            .tagged(true, "Top Seller"),
            Pick::sample(
                "MLB Daily Picks",
                "BettingPro",
                "Top baseball picks for today",
                19.99,
                4.6,
                89,
            )
            .tagged(false, "Hot Pick"),
            Pick::sample(
                "NFL Week 5 Locks",
                "ClutchMaster",
                "Best football picks of the week",
                24.99,
                4.7,
                112,
            )
            .tagged(true, "Featured"),
            Pick::sample(
                "NHL Special",
                "OddsExpert",
                "Expert hockey analysis and picks",
                17.99,
                4.5,
                76,
            )
            .tagged(false, "Value Pick"),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCategory {
    pub name: String,
}

/// Category names to show; the defaults when the server sent none
pub fn trending_names(categories: &[TrendingCategory]) -> Vec<String> {
    if categories.is_empty() {
        DEFAULT_TRENDING.iter().map(|s| s.to_string()).collect()
    } else {
        categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// `POST /marketplace/purchase` body (snake_case on the wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub pick_id: RecordId,
}

// ============================================
// LEADERBOARD DTOs
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    pub win_rate: Stat,
    #[serde(default)]
    pub streak: u32,
    pub profit: f64,
    /// "Top 15%" style label, sent for the current user only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<String>,
}

impl LeaderboardEntry {
    /// Profit as shown on the board: `"+$12,450"`
    pub fn profit_label(&self) -> String {
        format!("+{}", format_currency(self.profit))
    }

    /// The top three get a trophy instead of a number
    pub fn is_podium(&self) -> bool {
        (1..=3).contains(&self.rank)
    }
}

// ============================================
// PROFILE DTOs
// ============================================

/// Subscription tiers with known prices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Free,
    Pro,
    Elite,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Free, Plan::Pro, Plan::Elite];

    pub fn from_label(label: &str) -> Option<Plan> {
        match label {
            "Free" => Some(Plan::Free),
            "Pro" => Some(Plan::Pro),
            "Elite" => Some(Plan::Elite),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
            Plan::Elite => "Elite",
        }
    }

    pub fn monthly_price(self) -> &'static str {
        match self {
            Plan::Free => "$0/month",
            Plan::Pro => "$19.99/month",
            Plan::Elite => "$49.99/month",
        }
    }
}

/// `GET /profile/` and `PUT /profile/`. Fields this client does not know
/// are kept so a save sends them back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bets: Option<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub win_rate: Option<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_odds: Option<Stat>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    /// Subscription label, "Free" when the server sent none
    pub fn subscription_label(&self) -> &str {
        self.subscription.as_deref().unwrap_or("Free")
    }

    pub fn plan(&self) -> Option<Plan> {
        Plan::from_label(self.subscription_label())
    }
}

// ============================================
// HELP DTOs
// ============================================

/// Shortest query the help search accepts
pub const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub count: u32,
}

impl HelpCategory {
    /// Icon name for the category; unknown slugs get the generic help icon
    pub fn icon(&self) -> &'static str {
        match self.slug.as_str() {
            "billing" => "credit-card",
            "bets" => "shopping-bag",
            "predictions" => "zap",
            "technical" => "file-question",
            "general" => "book",
            "uploads" => "upload",
            "support" => "message-circle",
            _ => "help-circle",
        }
    }

    pub fn path(&self) -> String {
        format!("/help/category/{}", self.slug)
    }
}

/// `GET /help/categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpCategoriesResponse {
    #[serde(default)]
    pub categories: Vec<HelpCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularQuestion {
    pub id: RecordId,
    pub title: String,
}

impl PopularQuestion {
    pub fn path(&self) -> String {
        format!("/help/faq/{}", self.id)
    }
}

/// `GET /help/popular-questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularQuestionsResponse {
    #[serde(default)]
    pub questions: Vec<PopularQuestion>,
}

/// Route for a help search, or `None` while the trimmed query is too short
pub fn help_search_path(query: &str) -> Option<String> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_LEN {
        return None;
    }
    Some(format!("/help/search?q={}", urlencoding::encode(query)))
}

// ============================================
// BANKROLL DTOs
// ============================================

/// Bankroll figures for the summary cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankrollStats {
    pub total_bankroll: f64,
    pub today_profit: f64,
    pub weekly_profit: f64,
    pub monthly_profit: f64,
    pub recommended_bet: f64,
}

impl BankrollStats {
    /// Fixed figures shown until bankroll tracking has a backend
    pub fn sample() -> Self {
        Self {
            total_bankroll: 5000.0,
            today_profit: 250.0,
            weekly_profit: 850.0,
            monthly_profit: 2300.0,
            recommended_bet: 125.0,
        }
    }

    /// Summary cards with their sample trends
    pub fn cards(&self) -> Vec<MetricCard> {
        vec![
            MetricCard {
                title: "Total Bankroll",
                value: format!("${}", self.total_bankroll),
                trend: 12.5,
            },
            MetricCard {
                title: "Today's Profit",
                value: format!("${}", self.today_profit),
                trend: 8.3,
            },
            MetricCard {
                title: "Weekly Profit",
                value: format!("${}", self.weekly_profit),
                trend: 15.2,
            },
            MetricCard {
                title: "Monthly Profit",
                value: format!("${}", self.monthly_profit),
                trend: 22.8,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Win,
    Loss,
}

impl TransactionKind {
    /// Money coming into the bankroll
    pub fn is_credit(self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::Win)
    }

    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Win => "Win",
            TransactionKind::Loss => "Loss",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: String,
}

impl Transaction {
    /// Signed amount as displayed: `"+$1000"` / `"-$500"`
    pub fn amount_label(&self) -> String {
        let sign = if self.kind.is_credit() { '+' } else { '-' };
        format!("{}${}", sign, self.amount)
    }

    /// Fixed history shown until bankroll tracking has a backend
    pub fn samples() -> Vec<Transaction> {
        [
            (TransactionKind::Deposit, 1000.0, (2023, 2, 15)),
            (TransactionKind::Withdrawal, 500.0, (2023, 2, 10)),
            (TransactionKind::Win, 350.0, (2023, 2, 8)),
            (TransactionKind::Loss, 200.0, (2023, 2, 5)),
        ]
        .into_iter()
        .filter_map(|(kind, amount, (y, m, d))| {
            Some(Transaction {
                kind,
                amount,
                date: NaiveDate::from_ymd_opt(y, m, d)?,
                status: "completed".to_string(),
            })
        })
        .collect()
    }
}

// ============================================
// UPLOAD DTOs
// ============================================

/// `POST /bets/upload` success body (snake_case on the wire)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub bet_id: RecordId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let env: Envelope<Vec<TrendingCategory>> =
            serde_json::from_str(r#"{"success":true,"data":[{"name":"NHL"}]}"#).unwrap();
        let data = env.into_result().unwrap();
        assert_eq!(trending_names(&data), vec!["NHL".to_string()]);
    }

    #[test]
    fn test_envelope_failure_keeps_message() {
        let env: Envelope<Vec<Pick>> =
            serde_json::from_str(r#"{"success":false,"message":"Out of stock"}"#).unwrap();
        assert_eq!(
            env.into_result().unwrap_err(),
            ApiError::Rejected("Out of stock".to_string())
        );
    }

    #[test]
    fn test_envelope_ensure_success_fallback() {
        let env: Envelope<serde_json::Value> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        let err = env
            .ensure_success("Purchase failed. Please try again.")
            .unwrap_err();
        assert_eq!(err.user_message(), "Purchase failed. Please try again.");
    }

    #[test]
    fn test_empty_trending_uses_defaults() {
        assert_eq!(trending_names(&[]), vec!["NBA", "NFL", "MLB", "UFC"]);
    }

    #[test]
    fn test_user_metrics_cards() {
        let metrics: UserMetrics = serde_json::from_str(
            r#"{"winRate":68.5,"winRateTrend":2.1,"totalProfit":12450,"profitTrend":-3.2,
                "clutchPicks":24,"clutchPicksTrend":5,"followers":1200,"followersTrend":0}"#,
        )
        .unwrap();

        let cards = metrics.cards();
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["68.5%", "$12,450", "24", "1200"]);
        assert!(cards[0].is_up());
        assert!(!cards[1].is_up());
        assert_eq!(cards[1].trend_label(), "3.2%");
        assert!(!cards[3].is_up());
    }

    #[test]
    fn test_activity_kinds() {
        let resp: ActivityResponse = serde_json::from_str(
            r#"{"recentActivity":[
                {"type":"win","description":"Lakers ML","time":"2h ago"},
                {"type":"bet","description":"Over 210.5","time":"3h ago"},
                {"type":"follow","description":"New follower","time":"1d ago"}]}"#,
        )
        .unwrap();

        let classes: Vec<&str> = resp
            .recent_activity
            .iter()
            .map(|a| a.kind.css_class())
            .collect();
        assert_eq!(classes, vec!["activity-win", "activity-bet", "activity-purchase"]);
    }

    #[test]
    fn test_performance_missing_history() {
        let resp: PerformanceResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.performance_history.is_empty());
    }

    #[test]
    fn test_pick_samples() {
        let featured = Pick::featured_samples();
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].title, "Ultimate Parlay Bundle");
        assert_eq!(featured[0].full_stars(), 4);

        let clutch = Pick::clutch_samples();
        let badges: Vec<Option<&str>> = clutch.iter().map(|p| p.badge()).collect();
        assert_eq!(badges, vec![Some("Top Seller"), None, Some("Featured"), None]);
    }

    #[test]
    fn test_pick_accepts_numeric_or_string_id() {
        let pick: Pick = serde_json::from_str(
            r#"{"id":7,"title":"T","author":"A","price":9.5,"rating":4.2,"popularTag":"Hot"}"#,
        )
        .unwrap();
        assert_eq!(pick.id, Some(RecordId::Number(7)));
        assert_eq!(pick.popular_tag.as_deref(), Some("Hot"));

        let body = serde_json::to_string(&PurchaseRequest {
            pick_id: RecordId::Text("abc".to_string()),
        })
        .unwrap();
        assert_eq!(body, r#"{"pick_id":"abc"}"#);
    }

    #[test]
    fn test_leaderboard_entry() {
        let entry: LeaderboardEntry = serde_json::from_str(
            r#"{"rank":2,"username":"sharp","winRate":"71%","streak":5,"profit":12450.5}"#,
        )
        .unwrap();
        assert_eq!(entry.win_rate.to_string(), "71%");
        assert_eq!(entry.profit_label(), "+$12,450.5");
        assert!(entry.is_podium());
        assert!(entry.percentile.is_none());
    }

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let json = r#"{"name":"Sam","username":"sam","subscription":"Pro","avatarUrl":"/a.png"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        assert_eq!(profile.plan(), Some(Plan::Pro));
        assert_eq!(profile.plan().unwrap().monthly_price(), "$19.99/month");

        let out = serde_json::to_value(&profile).unwrap();
        assert_eq!(out["avatarUrl"], "/a.png");
    }

    #[test]
    fn test_profile_defaults_to_free() {
        let profile = Profile::default();
        assert_eq!(profile.subscription_label(), "Free");
        assert_eq!(profile.plan(), Some(Plan::Free));
    }

    #[test]
    fn test_help_category_icon() {
        let cat: HelpCategory =
            serde_json::from_str(r#"{"id":1,"slug":"billing","title":"Billing","count":4}"#).unwrap();
        assert_eq!(cat.icon(), "credit-card");
        assert_eq!(cat.path(), "/help/category/billing");

        let unknown = HelpCategory {
            slug: "misc".to_string(),
            ..cat
        };
        assert_eq!(unknown.icon(), "help-circle");
    }

    #[test]
    fn test_help_search_path() {
        assert_eq!(help_search_path("  ab "), None);
        assert_eq!(
            help_search_path(" parlay odds "),
            Some("/help/search?q=parlay%20odds".to_string())
        );
    }

    #[test]
    fn test_bankroll_samples() {
        let cards = BankrollStats::sample().cards();
        assert_eq!(cards[0].value, "$5000");
        assert_eq!(cards[3].trend, 22.8);

        let history = Transaction::samples();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].amount_label(), "+$1000");
        assert_eq!(history[1].amount_label(), "-$500");
        assert!(history[2].kind.is_credit());
        assert_eq!(history[3].date.to_string(), "2023-02-05");
    }
}
