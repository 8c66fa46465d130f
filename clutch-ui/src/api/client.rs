//! HTTP API Client
//!
//! Functions for communicating with the Clutch REST API.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{AbortController, AbortSignal, File, FormData};

use clutch::api::{
    paths, trending_names, Activity, ActivityResponse, ApiError, ApiResult, Envelope,
    HelpCategoriesResponse, HelpCategory, LeaderboardEntry, PerformancePoint,
    PerformanceResponse, Pick, PopularQuestion, PopularQuestionsResponse, Profile,
    PurchaseRequest, RecordId, TrendingCategory, UploadResponse, UserMetrics,
};
use clutch::api::upload::UPLOAD_FIELD;
use clutch::config::ApiConfig;

/// Local storage key overriding the API base URL
pub const API_URL_KEY: &str = "clutch_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Get the API base URL from local storage or use the default
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| ApiConfig::default().base_url);
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage; an empty value restores the default
pub fn set_api_base(url: &str) {
    if let Some(storage) = local_storage() {
        let _ = if url.trim().is_empty() {
            storage.remove_item(API_URL_KEY)
        } else {
            storage.set_item(API_URL_KEY, url.trim())
        };
    }
}

/// API settings for the current page load
pub fn api_config() -> ApiConfig {
    ApiConfig {
        base_url: get_api_base(),
        ..ApiConfig::default()
    }
}

/// Bearer token saved by the sign-in flow, if any
pub fn get_token() -> Option<String> {
    let key = ApiConfig::default().token_storage_key;
    local_storage()
        .and_then(|storage| storage.get_item(&key).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Forget the bearer token (logout)
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(&ApiConfig::default().token_storage_key);
    }
}

fn require_token() -> ApiResult<String> {
    get_token().ok_or(ApiError::Unauthenticated)
}

// ============ Request plumbing ============

/// Aborts the request when the timer fires; dropping it disarms the timer
struct Deadline {
    controller: AbortController,
    _timer: Timeout,
}

impl Deadline {
    fn new(secs: u64) -> Option<Self> {
        let controller = AbortController::new().ok()?;
        let abort = controller.clone();
        let millis = secs.saturating_mul(1000).min(u32::MAX as u64) as u32;
        let timer = Timeout::new(millis, move || abort.abort());
        Some(Self {
            controller,
            _timer: timer,
        })
    }

    fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }
}

fn prepare(builder: RequestBuilder, token: Option<&str>, signal: Option<&AbortSignal>) -> RequestBuilder {
    let builder = match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    };
    builder.abort_signal(signal)
}

async fn dispatch(request: Request) -> ApiResult<Response> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !ok {
        return Err(ApiError::from_status(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> ApiResult<T> {
    let config = api_config();
    let deadline = Deadline::new(config.request_timeout_secs);
    let signal = deadline.as_ref().map(Deadline::signal);

    let request = prepare(Request::get(&config.endpoint(path)), token, signal.as_ref())
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(dispatch(request).await?).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: fn(&str) -> RequestBuilder,
    path: &str,
    body: &B,
    token: &str,
) -> ApiResult<T> {
    let config = api_config();
    let deadline = Deadline::new(config.request_timeout_secs);
    let signal = deadline.as_ref().map(Deadline::signal);

    let request = prepare(builder(&config.endpoint(path)), Some(token), signal.as_ref())
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(dispatch(request).await?).await
}

// ============ Dashboard ============

/// Headline metrics
pub async fn fetch_user_metrics() -> ApiResult<UserMetrics> {
    get_json(paths::USER_METRICS, None).await
}

/// Profit history for the chart
pub async fn fetch_performance() -> ApiResult<Vec<PerformancePoint>> {
    let response: PerformanceResponse = get_json(paths::USER_PERFORMANCE, None).await?;
    Ok(response.performance_history)
}

/// Recent activity feed
pub async fn fetch_activity() -> ApiResult<Vec<Activity>> {
    let response: ActivityResponse = get_json(paths::USER_ACTIVITY, None).await?;
    Ok(response.recent_activity)
}

// ============ Marketplace ============

/// Featured bundles
pub async fn fetch_featured_picks() -> ApiResult<Vec<Pick>> {
    get_json::<Envelope<Vec<Pick>>>(paths::MARKETPLACE_FEATURED, None)
        .await?
        .into_result()
}

/// Individual clutch picks
pub async fn fetch_clutch_picks() -> ApiResult<Vec<Pick>> {
    get_json::<Envelope<Vec<Pick>>>(paths::MARKETPLACE_CLUTCH_PICKS, None)
        .await?
        .into_result()
}

/// Trending category names, falling back to the defaults
pub async fn fetch_trending_categories() -> ApiResult<Vec<String>> {
    let categories = get_json::<Envelope<Vec<TrendingCategory>>>(paths::MARKETPLACE_TRENDING, None)
        .await?
        .ensure_success("Failed to load trending categories")?
        .unwrap_or_default();
    Ok(trending_names(&categories))
}

/// Buy a pick; returns the server's message, if any
pub async fn purchase_pick(pick_id: RecordId) -> ApiResult<Option<String>> {
    let token = require_token()?;
    let envelope: Envelope<serde_json::Value> = send_json(
        Request::post,
        paths::MARKETPLACE_PURCHASE,
        &PurchaseRequest { pick_id },
        &token,
    )
    .await?;

    let message = envelope.message.clone();
    envelope.ensure_success("Purchase failed. Please try again.")?;
    Ok(message)
}

// ============ Leaderboard ============

/// Top five performers
pub async fn fetch_top_performers() -> ApiResult<Vec<LeaderboardEntry>> {
    let token = require_token()?;
    get_json::<Envelope<Vec<LeaderboardEntry>>>(paths::LEADERBOARD_TOP, Some(&token))
        .await?
        .into_result()
}

/// The signed-in user's standing
pub async fn fetch_current_standing() -> ApiResult<LeaderboardEntry> {
    let token = require_token()?;
    get_json::<Envelope<LeaderboardEntry>>(paths::LEADERBOARD_CURRENT, Some(&token))
        .await?
        .into_result()
}

// ============ Profile ============

/// Current user's profile
pub async fn fetch_profile() -> ApiResult<Profile> {
    let token = require_token()?;
    get_json(paths::PROFILE, Some(&token)).await
}

/// Save the profile; unknown fields go back as received
pub async fn update_profile(profile: &Profile) -> ApiResult<()> {
    let token = require_token()?;
    let _: serde_json::Value = send_json(Request::put, paths::PROFILE, profile, &token).await?;
    Ok(())
}

// ============ Help ============

/// FAQ categories
pub async fn fetch_help_categories() -> ApiResult<Vec<HelpCategory>> {
    let response: HelpCategoriesResponse = get_json(paths::HELP_CATEGORIES, None).await?;
    Ok(response.categories)
}

/// Popular questions
pub async fn fetch_popular_questions() -> ApiResult<Vec<PopularQuestion>> {
    let response: PopularQuestionsResponse = get_json(paths::HELP_POPULAR, None).await?;
    Ok(response.questions)
}

// ============ Bets ============

/// Upload a bet slip as multipart form data
pub async fn upload_bet_slip(file: &File) -> ApiResult<UploadResponse> {
    let token = require_token()?;
    let config = api_config();

    let form = FormData::new().map_err(|_| ApiError::Network("FormData unavailable".to_string()))?;
    form.append_with_blob(UPLOAD_FIELD, file)
        .map_err(|_| ApiError::Network("Could not attach file".to_string()))?;

    let deadline = Deadline::new(config.request_timeout_secs);
    let signal = deadline.as_ref().map(Deadline::signal);

    let request = prepare(
        Request::post(&config.endpoint(paths::BETS_UPLOAD)),
        Some(&token),
        signal.as_ref(),
    )
    .body(form)
    .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(dispatch(request).await?).await
}
