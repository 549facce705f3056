//! Embedded static assets for single-binary distribution.
//!
//! Compiled into the binary with include_str!. The stylesheet is served from
//! `/assets/app.css`; the menu script is inlined into server-rendered pages.

/// Dashboard stylesheet (layout, header, profile dropdown)
pub const APP_CSS: &str = include_str!("../../public/app.css");

/// Profile dropdown behavior for pages rendered without the client app
pub const PROFILE_MENU_JS: &str = include_str!("../../public/profile-menu.js");
