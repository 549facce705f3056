//! Session context: the signed-in user and the sign-out action.
//!
//! Pages read the user from here and hand it to the profile dropdown. The
//! server seeds the context during SSR; the browser refreshes it from
//! `/api/session`.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::app::profile::{self, DEFAULT_SETTINGS_PATH, PLACEHOLDER_LABEL};

/// Profile data for the current user. Either field may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Trimmed name, `None` if absent or blank
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Email as given, `None` if absent or empty
    pub fn full_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    pub fn initials(&self) -> String {
        self.display_name().map(profile::initials).unwrap_or_default()
    }

    /// Initials, or the placeholder label when there are none
    pub fn label(&self) -> String {
        let initials = self.initials();
        if initials.is_empty() {
            PLACEHOLDER_LABEL.to_string()
        } else {
            initials
        }
    }

    pub fn short_email(&self) -> String {
        self.full_email()
            .map(profile::truncate_email)
            .unwrap_or_default()
    }

    pub fn avatar_letter(&self) -> Option<String> {
        self.display_name().and_then(profile::avatar_letter)
    }
}

/// Body of `GET /api/session`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    pub settings_path: String,
}

/// Session state shared via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    user: Signal<Option<SessionUser>>,
    /// Target of the account-settings link
    settings_path: Signal<String>,
}

impl SessionContext {
    pub fn user(&self) -> Option<SessionUser> {
        (self.user)()
    }

    pub fn settings_path(&self) -> String {
        (self.settings_path)()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some()
    }

    pub fn update(&self, response: SessionResponse) {
        let mut user = self.user;
        let mut settings_path = self.settings_path;
        user.set(response.user);
        settings_path.set(response.settings_path);
    }

    /// Forget the user locally and tell the server.
    ///
    /// The server call is fire-and-forget; a failure is only logged.
    pub fn sign_out(&self) {
        let mut user = self.user;
        user.set(None);
        tracing::info!("Signed out");

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            if let Err(e) = crate::app::api::post_json_no_response("/api/logout", &()).await {
                tracing::warn!("Logout request failed: {}", e);
            }
        });
    }
}

/// Initialize session context provider - call once at app root
pub fn use_session_provider(initial: Option<SessionUser>, settings_path: String) -> SessionContext {
    let user = use_signal(|| initial);
    let settings_path = use_signal(|| {
        if settings_path.is_empty() {
            DEFAULT_SETTINGS_PATH.to_string()
        } else {
            settings_path
        }
    });

    let ctx = use_context_provider(|| SessionContext {
        user,
        settings_path,
    });

    // Client-side only: refresh from the server once mounted
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            spawn(async move {
                match crate::app::api::fetch_json::<SessionResponse>("/api/session").await {
                    Ok(response) => ctx.update(response),
                    Err(e) => tracing::warn!("Failed to load session: {}", e),
                }
            });
        });
    }

    ctx
}

/// Get session context - use in any component
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
