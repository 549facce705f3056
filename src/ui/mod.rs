//! Web UI handlers - server-rendered pages
//!
//! Each handler renders an app page through Dioxus SSR inside [`Shell`],
//! seeded with the session user held in [`AppState`].

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::app::pages::{AccountSettings, Dashboard};
use crate::app::Shell;

/// Wrap rendered head/body markup in a complete document.
fn html_document(body: String) -> Html<String> {
    Html(format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", body))
}

/// GET / - Dashboard (HTML page)
pub async fn dashboard_page(State(state): State<AppState>) -> impl IntoResponse {
    let user = state.current_user().await;
    let settings_path = state.settings_path.clone();
    html_document(dioxus::ssr::render_element(rsx! {
        Shell { user, settings_path, Dashboard {} }
    }))
}

/// GET {settings_path} - Account settings (HTML page)
pub async fn account_settings_page(State(state): State<AppState>) -> impl IntoResponse {
    let user = state.current_user().await;
    let settings_path = state.settings_path.clone();
    html_document(dioxus::ssr::render_element(rsx! {
        Shell { user, settings_path, AccountSettings {} }
    }))
}

/// GET /settings - Redirect to the configured account settings page
pub async fn settings_redirect(State(state): State<AppState>) -> impl IntoResponse {
    Redirect::to(&state.settings_path)
}
