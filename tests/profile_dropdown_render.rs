#![cfg(feature = "server")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Profile dropdown rendering, dismissal and listener lifetime tests
//!
//! Mounts the real dropdown components in a `VirtualDom` with an app-level
//! pointer hub in root context. State changes go through the same
//! [`ProfileMenu`] methods the rendered handlers call, and the markup is
//! re-rendered with SSR after each step.

use std::cell::Cell;
use std::rc::Rc;

use admin_dashboard::app::components::{use_profile_menu, ProfileDropdown, ProfileMenu, ProfileMenuView};
use admin_dashboard::app::pointer::{ClientPoint, PointerListeners};
use admin_dashboard::app::session::SessionUser;
use dioxus::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app).with_root_context(PointerListeners::default());
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}

fn full_user() -> Element {
    rsx! {
        ProfileDropdown {
            user: SessionUser::new("Jane Doe", "johndoe@example.com"),
            logout: move |_| {},
        }
    }
}

fn anonymous_user() -> Element {
    rsx! {
        ProfileDropdown { user: SessionUser::default(), logout: move |_| {} }
    }
}

fn three_dropdowns() -> Element {
    rsx! {
        for i in 0..3 {
            ProfileDropdown {
                key: "{i}",
                user: SessionUser::new(format!("User {i}"), "u@example.com"),
                logout: move |_| {},
            }
        }
    }
}

/// Shared between a test and the mounted menu
#[derive(Clone, Default)]
struct MenuHandle {
    logouts: Rc<Cell<usize>>,
    menu: Rc<Cell<Option<ProfileMenu>>>,
}

impl MenuHandle {
    fn menu(&self) -> ProfileMenu {
        self.menu.get().expect("menu is mounted")
    }
}

/// The dropdown's own hook and view, with the menu handed back to the test
fn counted_dropdown() -> Element {
    let handle = use_context::<MenuHandle>();
    let logouts = handle.logouts.clone();
    let menu = use_profile_menu(EventHandler::new(move |_| logouts.set(logouts.get() + 1)));
    handle.menu.set(Some(menu));

    rsx! {
        ProfileMenuView {
            menu,
            user: SessionUser::new("Jane Doe", "johndoe@example.com"),
        }
    }
}

struct Mounted {
    dom: VirtualDom,
    hub: PointerListeners,
    handle: MenuHandle,
}

impl Mounted {
    fn new() -> Self {
        let hub = PointerListeners::default();
        let handle = MenuHandle::default();
        let mut dom = VirtualDom::new(counted_dropdown)
            .with_root_context(hub.clone())
            .with_root_context(handle.clone());
        dom.rebuild_in_place();
        Self { dom, hub, handle }
    }

    fn act(&mut self, f: impl FnOnce(ProfileMenu, &PointerListeners)) -> String {
        let menu = self.handle.menu();
        let hub = self.hub.clone();
        self.dom.in_runtime(|| f(menu, &hub));
        let _ = self.dom.render_immediate_to_vec();
        dioxus::ssr::render(&self.dom)
    }

    fn is_open(&self) -> bool {
        let menu = self.handle.menu();
        self.dom.in_runtime(|| menu.is_open())
    }
}

fn outside() -> ClientPoint {
    ClientPoint::new(400.0, 300.0)
}

#[test]
fn closed_dropdown_shows_initials_and_short_email() {
    let html = render(full_user);

    assert!(html.contains("J.D."));
    assert!(html.contains("joh..@example.com"));
    assert!(html.contains("aria-expanded=\"false\""));
    // Avatar letter instead of the user glyph
    assert!(!html.contains("icon-user"));
    // Panel is in the markup but hidden until opened
    assert!(html.contains("class=\"profile-panel\""));
    assert!(!html.contains("profile-panel open"));
    assert!(html.contains("aria-hidden=\"true\""));
}

#[test]
fn missing_user_fields_fall_back_to_placeholder() {
    let html = render(anonymous_user);

    assert!(html.contains("Admin"));
    assert!(html.contains("icon-user"));
    assert!(!html.contains("profile-email"));
    assert!(!html.contains("undefined"));
}

#[test]
fn trigger_opens_and_closes_panel() {
    let mut mounted = Mounted::new();

    let html = mounted.act(|menu, _| menu.toggle());
    assert!(mounted.is_open());
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("profile-panel open"));
    assert!(html.contains("aria-hidden=\"false\""));

    let html = mounted.act(|menu, _| menu.toggle());
    assert!(!mounted.is_open());
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("profile-panel open"));
}

#[test]
fn pointer_down_outside_closes_open_menu() {
    let mut mounted = Mounted::new();
    mounted.act(|menu, _| menu.toggle());
    assert!(mounted.is_open());

    let html = mounted.act(|_, hub| hub.dispatch(outside()));
    assert!(!mounted.is_open());
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("profile-panel open"));
    assert_eq!(mounted.handle.logouts.get(), 0);
}

#[test]
fn pointer_down_inside_keeps_menu_open() {
    let mut mounted = Mounted::new();
    mounted.act(|menu, _| menu.toggle());

    // Root handler marks the scope before the document listener fires
    let html = mounted.act(|menu, hub| {
        menu.pointer_down_inside();
        hub.dispatch(ClientPoint::new(10.0, 10.0));
    });
    assert!(mounted.is_open());
    assert!(html.contains("profile-panel open"));

    // The mark is consumed; the next unmarked pointer-down is outside
    mounted.act(|_, hub| hub.dispatch(ClientPoint::new(10.0, 10.0)));
    assert!(!mounted.is_open());
}

#[test]
fn pointer_down_outside_while_closed_is_ignored() {
    let mut mounted = Mounted::new();

    mounted.act(|_, hub| hub.dispatch(outside()));
    assert!(!mounted.is_open());
    assert_eq!(mounted.handle.logouts.get(), 0);
}

#[test]
fn sign_out_closes_and_calls_logout_once() {
    let mut mounted = Mounted::new();
    mounted.act(|menu, _| menu.toggle());

    let html = mounted.act(|menu, _| menu.sign_out());
    assert_eq!(mounted.handle.logouts.get(), 1);
    assert!(!mounted.is_open());
    assert!(!html.contains("profile-panel open"));

    // A later outside pointer-down does not sign out again
    mounted.act(|_, hub| hub.dispatch(outside()));
    assert_eq!(mounted.handle.logouts.get(), 1);
}

#[test]
fn selecting_settings_closes_menu() {
    let mut mounted = Mounted::new();
    mounted.act(|menu, _| menu.toggle());

    let html = mounted.act(|menu, _| menu.select_settings());
    assert!(!mounted.is_open());
    assert!(html.contains("href=\"/admin/settings\""));
    assert_eq!(mounted.handle.logouts.get(), 0);
}

#[test]
fn no_dispatch_reaches_unmounted_menu() {
    let mut mounted = Mounted::new();
    mounted.act(|menu, _| menu.toggle());
    assert_eq!(mounted.hub.listener_count(), 1);

    let Mounted { dom, hub, handle } = mounted;
    drop(dom);
    assert_eq!(hub.listener_count(), 0);

    hub.dispatch(outside());
    assert_eq!(handle.logouts.get(), 0);
}

#[test]
fn listener_registered_while_mounted_and_removed_on_drop() {
    let hub = PointerListeners::default();
    let mut dom = VirtualDom::new(full_user).with_root_context(hub.clone());
    dom.rebuild_in_place();

    assert_eq!(hub.listener_count(), 1);

    drop(dom);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn each_instance_registers_its_own_listener() {
    let hub = PointerListeners::default();
    let mut dom = VirtualDom::new(three_dropdowns).with_root_context(hub.clone());
    dom.rebuild_in_place();

    assert_eq!(hub.listener_count(), 3);

    drop(dom);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn render_without_hub_registers_nothing() {
    let mut dom = VirtualDom::new(full_user);
    dom.rebuild_in_place();
    let html = dioxus::ssr::render(&dom);
    assert!(html.contains("J.D."));
}
