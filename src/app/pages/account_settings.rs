//! Account settings page component.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::icons::{Icon, MAIL, USER};
use crate::app::session::use_session;

const NOT_PROVIDED: &str = "Not provided";

/// Account settings page: the profile fields the session knows about.
#[component]
pub fn AccountSettings() -> Element {
    let session = use_session();
    let user = session.user();

    let name = user
        .as_ref()
        .and_then(|u| u.display_name().map(str::to_string))
        .unwrap_or_else(|| NOT_PROVIDED.to_string());
    let email = user
        .as_ref()
        .and_then(|u| u.full_email().map(str::to_string))
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    rsx! {
        Layout {
            title: "Account settings".to_string(),
            nav_active: "settings".to_string(),

            h1 { "Account settings" }

            section { class: "card", id: "profile",
                h2 { "Profile" }
                if session.is_signed_in() {
                    dl { class: "detail-list",
                        dt {
                            Icon { icon: USER, size: 16 }
                            " Name"
                        }
                        dd { "{name}" }
                        dt {
                            Icon { icon: MAIL, size: 16 }
                            " Email"
                        }
                        dd { "{email}" }
                    }
                } else {
                    p { class: "muted", "You are signed out." }
                }
            }
        }
    }
}
