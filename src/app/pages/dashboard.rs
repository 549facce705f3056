//! Dashboard page component.
//!
//! Greets the signed-in user, shows service status, and lays out the
//! color palette.

use dioxus::prelude::*;

use crate::app::api::AppStatus;
use crate::app::components::Layout;
use crate::app::profile::PLACEHOLDER_LABEL;
use crate::app::session::use_session;
use crate::app::theme::ColorToken;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    // Resolves in the browser; SSR renders the loading state
    let status = use_resource(|| async {
        crate::app::api::fetch_json::<AppStatus>("/status")
            .await
            .ok()
    });

    let greeting = session
        .user()
        .and_then(|user| user.display_name().map(str::to_string))
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());

    let swatches: Vec<(&'static str, String, &'static str)> = ColorToken::ALL
        .iter()
        .map(|token| (token.name(), token.css_var(), token.hex()))
        .collect();

    let status_content = match status.read().clone().flatten() {
        None => rsx! {
            p { class: "muted", aria_busy: "true", "Loading status..." }
        },
        Some(app_status) => rsx! {
            dl { class: "detail-list",
                dt { "Version" }
                dd { "{app_status.version} ({app_status.git_sha})" }
                dt { "Uptime" }
                dd { "{app_status.uptime_secs}s" }
                dt { "Started" }
                dd { "{app_status.started_at}" }
            }
        },
    };

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            h1 { "Dashboard" }

            section { class: "card", id: "welcome",
                h2 { "Welcome, {greeting}" }
                p { class: "muted", "Manage your account from the menu in the top right." }
            }

            section { class: "card", id: "status",
                h2 { "Service Status" }
                {status_content}
            }

            section { class: "card", id: "palette",
                h2 { "Palette" }
                div { class: "swatch-grid",
                    for (name, css_var, hex) in swatches {
                        div { key: "{name}", class: "swatch",
                            span {
                                class: "swatch-chip",
                                style: "background: var({css_var})",
                            }
                            span { class: "swatch-label",
                                strong { "{name}" }
                                small { class: "muted", "{hex}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
