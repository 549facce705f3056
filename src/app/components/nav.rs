//! Top navigation bar with the profile dropdown.

use dioxus::prelude::*;

use super::profile_dropdown::ProfileDropdown;
use crate::app::icons::{Icon, IconData, LAYOUT_DASHBOARD, SETTINGS};
use crate::app::session::use_session;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "settings")
    pub active: String,
}

#[component]
fn NavLink(id: &'static str, active: String, href: String, label: &'static str, icon: IconData) -> Element {
    rsx! {
        li {
            if active == id {
                a { href: "{href}", "aria-current": "page",
                    Icon { icon, size: 16 }
                    strong { "{label}" }
                }
            } else {
                a { href: "{href}",
                    Icon { icon, size: 16 }
                    "{label}"
                }
            }
        }
    }
}

/// Navigation bar: brand, page links, and the signed-in user's menu.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let session = use_session();
    let user = session.user().unwrap_or_default();
    let settings_path = session.settings_path();

    rsx! {
        header { class: "topbar",
            nav {
                ul {
                    li {
                        strong { class: "brand", "Admin" }
                    }
                }
                ul {
                    NavLink {
                        id: "dashboard",
                        active: props.active.clone(),
                        href: "/".to_string(),
                        label: "Dashboard",
                        icon: LAYOUT_DASHBOARD,
                    }
                    NavLink {
                        id: "settings",
                        active: props.active.clone(),
                        href: settings_path.clone(),
                        label: "Settings",
                        icon: SETTINGS,
                    }
                }
            }
            ProfileDropdown {
                user,
                logout: move |_| session.sign_out(),
                settings_path,
            }
        }
    }
}
