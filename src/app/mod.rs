//! Dioxus application: components, pages, and the contexts they share.
//!
//! The same components render on the server (SSR through axum) and in the
//! browser. [`Shell`] installs the contexts every page expects.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod embedded_assets;
pub mod icons;
pub mod pages;
pub mod palette;
pub mod pointer;
pub mod profile;
pub mod session;
pub mod theme;

use pages::{AccountSettings, Dashboard};
use pointer::use_pointer_provider;
use profile::DEFAULT_SETTINGS_PATH;
use session::{use_session_provider, SessionUser};

/// Context root: session and pointer hub
#[component]
pub fn Shell(
    /// User known at render time
    #[props(!optional)]
    user: Option<SessionUser>,
    /// Target of the account-settings link
    #[props(default = DEFAULT_SETTINGS_PATH.to_string())]
    settings_path: String,
    children: Element,
) -> Element {
    // Initialize session context at app root (user + sign-out)
    use_session_provider(user, settings_path);

    // Initialize pointer hub at app root (single document listener)
    use_pointer_provider();

    rsx! {
        {children}
    }
}

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        Shell { user: None,
            Router::<Route> {}
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/admin/settings")]
    AccountSettings {},
}
