//! User profile dropdown for the top bar.

use dioxus::prelude::*;

use crate::app::icons::{Icon, CHEVRON_DOWN, CHEVRON_UP, LOG_OUT, SETTINGS, USER};
use crate::app::pointer::{use_outside_click, PointerScope};
use crate::app::profile::{MenuEffect, MenuEvent, MenuState, DEFAULT_SETTINGS_PATH, PLACEHOLDER_LABEL};
use crate::app::session::SessionUser;

/// Apply one event to the menu and run its effect.
fn transition(mut state: Signal<MenuState>, logout: EventHandler<()>, event: MenuEvent) {
    let current = *state.peek();
    let (next, effect) = current.apply(event);
    if next != current {
        state.set(next);
    }

    match effect {
        MenuEffect::None => {}
        // The link's default action performs the navigation
        MenuEffect::Navigate => tracing::debug!("Profile menu: opening account settings"),
        MenuEffect::SignOut => logout.call(()),
    }
}

/// Handle to one dropdown's state and actions
#[derive(Clone, Copy, PartialEq)]
pub struct ProfileMenu {
    state: Signal<MenuState>,
    scope: PointerScope,
    logout: EventHandler<()>,
}

impl ProfileMenu {
    pub fn is_open(&self) -> bool {
        (self.state)().is_open()
    }

    pub fn toggle(&self) {
        transition(self.state, self.logout, MenuEvent::TriggerClicked);
    }

    pub fn select_settings(&self) {
        transition(self.state, self.logout, MenuEvent::SettingsSelected);
    }

    pub fn sign_out(&self) {
        transition(self.state, self.logout, MenuEvent::SignOutSelected);
    }

    /// Pointer-down within the widget; keeps it from counting as outside
    pub fn pointer_down_inside(&self) {
        self.scope.mark_inside();
    }
}

/// Menu state plus outside-click dismissal for the calling component.
pub fn use_profile_menu(logout: EventHandler<()>) -> ProfileMenu {
    let state = use_signal(MenuState::default);

    let scope = use_outside_click(move || {
        if state.peek().is_open() {
            transition(state, logout, MenuEvent::OutsidePointerDown);
        }
    });

    ProfileMenu {
        state,
        scope,
        logout,
    }
}

/// Markup for a dropdown driven by `menu`.
///
/// The panel is always rendered and hidden by class while closed, so the
/// server-rendered page can be opened by the inline script as well.
#[component]
pub fn ProfileMenuView(
    menu: ProfileMenu,
    user: SessionUser,
    #[props(default = DEFAULT_SETTINGS_PATH.to_string())]
    settings_path: String,
) -> Element {
    let is_open = menu.is_open();
    let label = user.label();
    let short_email = user.short_email();
    let avatar = user.avatar_letter();
    let full_name = user.display_name().unwrap_or(PLACEHOLDER_LABEL).to_string();
    let full_email = user.full_email().map(str::to_string);
    let caret = if is_open { CHEVRON_UP } else { CHEVRON_DOWN };
    let panel_hidden = !is_open;

    rsx! {
        div {
            class: if is_open { "profile-dropdown open" } else { "profile-dropdown" },
            onpointerdown: move |_| menu.pointer_down_inside(),
            button {
                r#type: "button",
                class: "profile-trigger",
                "aria-haspopup": "menu",
                "aria-expanded": "{is_open}",
                onclick: move |_| menu.toggle(),
                span { class: "profile-avatar",
                    if let Some(letter) = avatar {
                        "{letter}"
                    } else {
                        Icon { icon: USER, size: 16 }
                    }
                }
                span { class: "profile-summary",
                    span { class: "profile-initials", "{label}" }
                    if !short_email.is_empty() {
                        span { class: "profile-email desktop-only", "{short_email}" }
                    }
                }
                Icon { icon: caret, size: 14, class: "profile-caret".to_string() }
            }
            div {
                class: if is_open { "profile-panel open" } else { "profile-panel" },
                role: "menu",
                "aria-hidden": "{panel_hidden}",
                div { class: "profile-panel-header",
                    p { class: "profile-name", "{full_name}" }
                    if let Some(email) = full_email {
                        p { class: "profile-full-email", "{email}" }
                    }
                }
                a {
                    class: "profile-menu-item",
                    role: "menuitem",
                    "data-action": "settings",
                    href: "{settings_path}",
                    onclick: move |_| menu.select_settings(),
                    Icon { icon: SETTINGS, size: 16 }
                    span { "Account settings" }
                }
                button {
                    r#type: "button",
                    class: "profile-menu-item danger",
                    role: "menuitem",
                    "data-action": "sign-out",
                    onclick: move |_| menu.sign_out(),
                    Icon { icon: LOG_OUT, size: 16 }
                    span { "Sign out" }
                }
            }
        }
    }
}

/// Avatar button with a panel for account settings and sign-out.
///
/// Closes on a pointer-down outside its own subtree, and after either
/// action. Missing user fields fall back to a placeholder label and glyph.
#[component]
pub fn ProfileDropdown(
    /// Current user; either field may be missing
    user: SessionUser,
    /// Called once per sign-out
    logout: EventHandler<()>,
    /// Target of the account-settings link
    #[props(default = DEFAULT_SETTINGS_PATH.to_string())]
    settings_path: String,
) -> Element {
    let menu = use_profile_menu(logout);

    rsx! {
        ProfileMenuView { menu, user, settings_path }
    }
}
