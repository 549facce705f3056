//! Page layout: document head, top bar, content, footer.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::embedded_assets::PROFILE_MENU_JS;
use crate::app::theme::palette_css;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Server-rendered pages carry no client app, so the menu script is inlined
const INLINE_MENU_SCRIPT: bool = cfg!(not(target_arch = "wasm32"));

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("ADMIN_VERSION");
    let palette = palette_css();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - Admin Dashboard" }
            // Palette first so the stylesheet's var() references resolve
            style { {palette} }
            link { rel: "stylesheet", href: "/assets/app.css" }
        }
        body {
            Nav { active: props.nav_active.clone() }
            main { class: "page",
                {props.children}
            }
            footer { class: "page-footer",
                small { class: "muted", "Admin Dashboard v{version}" }
            }
            if INLINE_MENU_SCRIPT {
                script { dangerous_inner_html: PROFILE_MENU_JS }
            }
        }
    }
}
