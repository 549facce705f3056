//! Icon registry.
//!
//! Components import icons from here, never from the icon set directly:
//!
//! ```ignore
//! use crate::app::icons::{Icon, CHEVRON_DOWN};
//!
//! rsx! { Icon { icon: CHEVRON_DOWN, size: 14 } }
//! ```
//!
//! Icons are grouped below by purpose. The groups are documentation only;
//! a new family is added as another `pub use` block. Referring to an icon
//! that is not re-exported here is a compile error.

use dioxus::prelude::*;

mod lucide;

/// One stroke primitive on the 24x24 icon grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
    Polygon(&'static str),
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

/// Outline data for one named icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconData {
    pub name: &'static str,
    pub shapes: &'static [Shape],
}

// Navigation
pub use lucide::{
    ARROW_LEFT, ARROW_RIGHT, CHEVRON_DOWN, CHEVRON_LEFT, CHEVRON_RIGHT, CHEVRON_UP, HOUSE,
    LAYOUT_DASHBOARD, MENU,
};

// Actions
pub use lucide::{DOWNLOAD, FILTER, PENCIL, PLUS, SEARCH, TRASH, UPLOAD, X};

// Status
pub use lucide::{CHECK, CIRCLE_ALERT, CIRCLE_CHECK, INFO, LOADER_CIRCLE, TRIANGLE_ALERT};

// User / account
pub use lucide::{LOG_IN, LOG_OUT, SHIELD, USER, USERS};

// Business
pub use lucide::{CHART_COLUMN, CREDIT_CARD, DOLLAR_SIGN, PACKAGE, SHOPPING_BAG, TRENDING_UP};

// Date / time
pub use lucide::{CALENDAR, CLOCK};

// Files / media
pub use lucide::{FILE_TEXT, FOLDER, IMAGE};

// Communication
pub use lucide::{BELL, MAIL, MESSAGE_SQUARE, PHONE};

// Settings
pub use lucide::{SETTINGS, SLIDERS_HORIZONTAL};

// Misc
pub use lucide::{ELLIPSIS, EXTERNAL_LINK, EYE, HEART, STAR};

fn render_shape(shape: Shape) -> Element {
    match shape {
        Shape::Path(d) => rsx! { path { d: "{d}" } },
        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
        Shape::Polyline(points) => rsx! { polyline { points: "{points}" } },
        Shape::Polygon(points) => rsx! { polygon { points: "{points}" } },
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", rx: "{rx}" }
        },
    }
}

/// Inline SVG for an icon. Decorative: hidden from assistive technology.
#[component]
pub fn Icon(
    /// Icon to draw
    icon: IconData,
    /// Width and height in pixels
    #[props(default = 16)]
    size: u32,
    /// Extra CSS classes
    #[props(default)]
    class: String,
) -> Element {
    rsx! {
        svg {
            "xmlns": "http://www.w3.org/2000/svg",
            class: "icon icon-{icon.name} {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in icon.shapes.iter().copied() {
                {render_shape(shape)}
            }
        }
    }
}
