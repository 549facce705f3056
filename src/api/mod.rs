//! HTTP API handlers and the application router

use crate::app::api::{AppStatus, TokenInfo};
use crate::app::embedded_assets::APP_CSS;
use crate::app::profile::DEFAULT_SETTINGS_PATH;
use crate::app::session::{SessionResponse, SessionUser};
use crate::app::theme::{palette_css, ColorToken, UnknownColorToken};
use crate::ui;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Signed-in user; `None` after logout
    pub session: Arc<RwLock<Option<SessionUser>>>,
    /// Target of the account-settings link
    pub settings_path: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(user: Option<SessionUser>, settings_path: String) -> Self {
        Self {
            session: Arc::new(RwLock::new(user)),
            settings_path,
            started_at: Utc::now(),
        }
    }

    pub async fn current_user(&self) -> Option<SessionUser> {
        self.session.read().await.clone()
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Errors surfaced by API handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    UnknownToken(#[from] UnknownColorToken),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownToken(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Paths served by the router itself; `/` is covered by the empty check
const RESERVED_PATHS: &[&str] = &["/status", "/theme.css"];

/// Prefixes owned by the JSON API and static assets
const RESERVED_PREFIXES: &[&str] = &["/api", "/assets"];

/// Why a configured settings path cannot be mounted
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsPathError {
    #[error("settings path {0:?} must start with '/'")]
    NotAbsolute(String),
    #[error("settings path {0:?} must be a literal path without '{{', '*' or ':'")]
    Pattern(String),
    #[error("settings path {0:?} collides with a built-in route")]
    Reserved(String),
}

/// Check that `path` can be mounted as the account-settings page.
pub fn validate_settings_path(path: &str) -> Result<(), SettingsPathError> {
    if !path.starts_with('/') {
        return Err(SettingsPathError::NotAbsolute(path.to_string()));
    }
    if path.contains(['{', '}', '*', ':']) {
        return Err(SettingsPathError::Pattern(path.to_string()));
    }

    let bare = path.trim_end_matches('/');
    let under_prefix = RESERVED_PREFIXES
        .iter()
        .any(|prefix| bare == *prefix || bare.starts_with(&format!("{}/", prefix)));
    if bare.is_empty() || RESERVED_PATHS.contains(&bare) || under_prefix {
        return Err(SettingsPathError::Reserved(path.to_string()));
    }
    Ok(())
}

/// Build the router: pages, JSON API, and stylesheets.
///
/// The account-settings page is mounted at `state.settings_path`. A path
/// that fails [`validate_settings_path`] is replaced by the default, so the
/// links and the route always agree.
pub fn router(mut state: AppState) -> Router {
    if let Err(e) = validate_settings_path(&state.settings_path) {
        tracing::warn!("{}; using {}", e, DEFAULT_SETTINGS_PATH);
        state.settings_path = DEFAULT_SETTINGS_PATH.to_string();
    }
    let settings_path = state.settings_path.clone();

    let mut router = Router::new()
        // Status
        .route("/status", get(status_handler))
        // Session routes
        .route("/api/session", get(session_handler))
        .route("/api/logout", post(logout_handler))
        // Theme routes
        .route("/api/theme", get(theme_handler))
        .route("/api/theme/{token}", get(theme_token_handler))
        .route("/theme.css", get(theme_css_handler))
        // Static assets
        .route("/assets/app.css", get(app_css_handler))
        // Web UI routes
        .route("/", get(ui::dashboard_page))
        .route(&settings_path, get(ui::account_settings_page));

    // Legacy redirect, unless the settings page lives there
    if settings_path != "/settings" {
        router = router.route("/settings", get(ui::settings_redirect));
    }

    router
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Status handlers
// =============================================================================

/// GET /status - Service status
pub async fn status_handler(State(state): State<AppState>) -> Json<AppStatus> {
    let uptime = Utc::now().signed_duration_since(state.started_at);

    Json(AppStatus {
        service: "admin-dashboard".to_string(),
        version: env!("ADMIN_VERSION").to_string(),
        git_sha: env!("ADMIN_GIT_SHA").to_string(),
        started_at: state.started_at.to_rfc3339(),
        uptime_secs: u64::try_from(uptime.num_seconds()).unwrap_or(0),
        signed_in: state.session.read().await.is_some(),
    })
}

// =============================================================================
// Session handlers
// =============================================================================

/// GET /api/session - Current user and settings link
pub async fn session_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: state.current_user().await,
        settings_path: state.settings_path.clone(),
    })
}

/// POST /api/logout - Forget the signed-in user
pub async fn logout_handler(State(state): State<AppState>) -> StatusCode {
    let previous = state.session.write().await.take();
    match previous {
        Some(user) => tracing::info!(
            "Signed out {}",
            user.display_name().unwrap_or("anonymous user")
        ),
        None => tracing::debug!("Logout requested with no active session"),
    }
    StatusCode::NO_CONTENT
}

// =============================================================================
// Theme handlers
// =============================================================================

/// GET /api/theme - Every color token
pub async fn theme_handler() -> Json<Vec<TokenInfo>> {
    Json(ColorToken::ALL.into_iter().map(TokenInfo::from).collect())
}

/// GET /api/theme/{token} - One color token by name
pub async fn theme_token_handler(Path(token): Path<String>) -> Result<Json<TokenInfo>, ApiError> {
    let token: ColorToken = token.parse()?;
    Ok(Json(TokenInfo::from(token)))
}

/// GET /theme.css - Palette as CSS custom properties
pub async fn theme_css_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], palette_css())
}

/// GET /assets/app.css - Embedded stylesheet
pub async fn app_css_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        APP_CSS,
    )
}
