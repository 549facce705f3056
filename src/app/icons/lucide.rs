//! Lucide icon outlines (ISC licensed), 24x24 grid, stroke-only.

use super::{IconData, Shape};

const fn icon(name: &'static str, shapes: &'static [Shape]) -> IconData {
    IconData { name, shapes }
}

// Navigation

pub const HOUSE: IconData = icon(
    "house",
    &[
        Shape::Path("M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"),
        Shape::Path("M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
    ],
);

pub const LAYOUT_DASHBOARD: IconData = icon(
    "layout-dashboard",
    &[
        Shape::Rect { x: 3.0, y: 3.0, width: 7.0, height: 9.0, rx: 1.0 },
        Shape::Rect { x: 14.0, y: 3.0, width: 7.0, height: 5.0, rx: 1.0 },
        Shape::Rect { x: 14.0, y: 12.0, width: 7.0, height: 9.0, rx: 1.0 },
        Shape::Rect { x: 3.0, y: 16.0, width: 7.0, height: 5.0, rx: 1.0 },
    ],
);

pub const MENU: IconData = icon(
    "menu",
    &[
        Shape::Line { x1: 4.0, y1: 12.0, x2: 20.0, y2: 12.0 },
        Shape::Line { x1: 4.0, y1: 6.0, x2: 20.0, y2: 6.0 },
        Shape::Line { x1: 4.0, y1: 18.0, x2: 20.0, y2: 18.0 },
    ],
);

pub const CHEVRON_DOWN: IconData = icon("chevron-down", &[Shape::Path("m6 9 6 6 6-6")]);
pub const CHEVRON_UP: IconData = icon("chevron-up", &[Shape::Path("m18 15-6-6-6 6")]);
pub const CHEVRON_LEFT: IconData = icon("chevron-left", &[Shape::Path("m15 18-6-6 6-6")]);
pub const CHEVRON_RIGHT: IconData = icon("chevron-right", &[Shape::Path("m9 18 6-6-6-6")]);

pub const ARROW_LEFT: IconData = icon("arrow-left", &[Shape::Path("m12 19-7-7 7-7"), Shape::Path("M19 12H5")]);
pub const ARROW_RIGHT: IconData = icon("arrow-right", &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")]);

// Actions

pub const PLUS: IconData = icon("plus", &[Shape::Path("M5 12h14"), Shape::Path("M12 5v14")]);
pub const X: IconData = icon("x", &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")]);

pub const PENCIL: IconData = icon(
    "pencil",
    &[
        Shape::Path("M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z"),
        Shape::Path("m15 5 4 4"),
    ],
);

pub const TRASH: IconData = icon(
    "trash",
    &[
        Shape::Path("M3 6h18"),
        Shape::Path("M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"),
        Shape::Path("M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"),
    ],
);

pub const SEARCH: IconData = icon("search", &[Shape::Circle { cx: 11.0, cy: 11.0, r: 8.0 }, Shape::Path("m21 21-4.3-4.3")]);

pub const DOWNLOAD: IconData = icon(
    "download",
    &[
        Shape::Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
        Shape::Polyline("7 10 12 15 17 10"),
        Shape::Line { x1: 12.0, y1: 15.0, x2: 12.0, y2: 3.0 },
    ],
);

pub const UPLOAD: IconData = icon(
    "upload",
    &[
        Shape::Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
        Shape::Polyline("17 8 12 3 7 8"),
        Shape::Line { x1: 12.0, y1: 3.0, x2: 12.0, y2: 15.0 },
    ],
);

pub const FILTER: IconData = icon(
    "filter",
    &[Shape::Polygon("22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3")],
);

// Status

pub const CHECK: IconData = icon("check", &[Shape::Path("M20 6 9 17l-5-5")]);

pub const CIRCLE_CHECK: IconData = icon(
    "circle-check",
    &[Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 }, Shape::Path("m9 12 2 2 4-4")],
);

pub const CIRCLE_ALERT: IconData = icon(
    "circle-alert",
    &[
        Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
        Shape::Line { x1: 12.0, y1: 8.0, x2: 12.0, y2: 12.0 },
        Shape::Line { x1: 12.0, y1: 16.0, x2: 12.01, y2: 16.0 },
    ],
);

pub const TRIANGLE_ALERT: IconData = icon(
    "triangle-alert",
    &[
        Shape::Path("m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"),
        Shape::Path("M12 9v4"),
        Shape::Path("M12 17h.01"),
    ],
);

pub const INFO: IconData = icon(
    "info",
    &[Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 }, Shape::Path("M12 16v-4"), Shape::Path("M12 8h.01")],
);

pub const LOADER_CIRCLE: IconData = icon("loader-circle", &[Shape::Path("M21 12a9 9 0 1 1-6.219-8.56")]);

// User / account

pub const USER: IconData = icon(
    "user",
    &[
        Shape::Path("M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"),
        Shape::Circle { cx: 12.0, cy: 7.0, r: 4.0 },
    ],
);

pub const USERS: IconData = icon(
    "users",
    &[
        Shape::Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
        Shape::Circle { cx: 9.0, cy: 7.0, r: 4.0 },
        Shape::Path("M22 21v-2a4 4 0 0 0-3-3.87"),
        Shape::Path("M16 3.13a4 4 0 0 1 0 7.75"),
    ],
);

pub const LOG_IN: IconData = icon(
    "log-in",
    &[
        Shape::Path("M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4"),
        Shape::Polyline("10 17 15 12 10 7"),
        Shape::Line { x1: 15.0, y1: 12.0, x2: 3.0, y2: 12.0 },
    ],
);

pub const LOG_OUT: IconData = icon(
    "log-out",
    &[
        Shape::Path("M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"),
        Shape::Polyline("16 17 21 12 16 7"),
        Shape::Line { x1: 21.0, y1: 12.0, x2: 9.0, y2: 12.0 },
    ],
);

pub const SHIELD: IconData = icon(
    "shield",
    &[Shape::Path("M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z")],
);

// Business

pub const SHOPPING_BAG: IconData = icon(
    "shopping-bag",
    &[
        Shape::Path("M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"),
        Shape::Path("M3 6h18"),
        Shape::Path("M16 10a4 4 0 0 1-8 0"),
    ],
);

pub const PACKAGE: IconData = icon(
    "package",
    &[
        Shape::Path("M11 21.73a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73z"),
        Shape::Path("M12 22V12"),
        Shape::Path("m3.3 7 8.7 5 8.7-5"),
        Shape::Path("m7.5 4.27 9 5.15"),
    ],
);

pub const DOLLAR_SIGN: IconData = icon(
    "dollar-sign",
    &[
        Shape::Line { x1: 12.0, y1: 2.0, x2: 12.0, y2: 22.0 },
        Shape::Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
    ],
);

pub const CREDIT_CARD: IconData = icon(
    "credit-card",
    &[Shape::Rect { x: 2.0, y: 5.0, width: 20.0, height: 14.0, rx: 2.0 }, Shape::Line { x1: 2.0, y1: 10.0, x2: 22.0, y2: 10.0 }],
);

pub const TRENDING_UP: IconData = icon(
    "trending-up",
    &[
        Shape::Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
        Shape::Polyline("16 7 22 7 22 13"),
    ],
);

pub const CHART_COLUMN: IconData = icon(
    "chart-column",
    &[
        Shape::Path("M3 3v16a2 2 0 0 0 2 2h16"),
        Shape::Path("M18 17V9"),
        Shape::Path("M13 17V5"),
        Shape::Path("M8 17v-3"),
    ],
);

// Date / time

pub const CALENDAR: IconData = icon(
    "calendar",
    &[
        Shape::Path("M8 2v4"),
        Shape::Path("M16 2v4"),
        Shape::Rect { x: 3.0, y: 4.0, width: 18.0, height: 18.0, rx: 2.0 },
        Shape::Path("M3 10h18"),
    ],
);

pub const CLOCK: IconData = icon(
    "clock",
    &[Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 }, Shape::Polyline("12 6 12 12 16 14")],
);

// Files / media

pub const FILE_TEXT: IconData = icon(
    "file-text",
    &[
        Shape::Path("M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"),
        Shape::Path("M14 2v4a2 2 0 0 0 2 2h4"),
        Shape::Path("M10 9H8"),
        Shape::Path("M16 13H8"),
        Shape::Path("M16 17H8"),
    ],
);

pub const IMAGE: IconData = icon(
    "image",
    &[
        Shape::Rect { x: 3.0, y: 3.0, width: 18.0, height: 18.0, rx: 2.0 },
        Shape::Circle { cx: 9.0, cy: 9.0, r: 2.0 },
        Shape::Path("m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"),
    ],
);

pub const FOLDER: IconData = icon(
    "folder",
    &[Shape::Path("M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z")],
);

// Communication

pub const MAIL: IconData = icon(
    "mail",
    &[
        Shape::Rect { x: 2.0, y: 4.0, width: 20.0, height: 16.0, rx: 2.0 },
        Shape::Path("m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"),
    ],
);

pub const BELL: IconData = icon(
    "bell",
    &[
        Shape::Path("M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"),
        Shape::Path("M10.3 21a1.94 1.94 0 0 0 3.4 0"),
    ],
);

pub const MESSAGE_SQUARE: IconData = icon(
    "message-square",
    &[Shape::Path("M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z")],
);

pub const PHONE: IconData = icon(
    "phone",
    &[Shape::Path("M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z")],
);

// Settings

pub const SETTINGS: IconData = icon(
    "settings",
    &[
        Shape::Path("M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"),
        Shape::Circle { cx: 12.0, cy: 12.0, r: 3.0 },
    ],
);

pub const SLIDERS_HORIZONTAL: IconData = icon(
    "sliders-horizontal",
    &[
        Shape::Line { x1: 21.0, y1: 4.0, x2: 14.0, y2: 4.0 },
        Shape::Line { x1: 10.0, y1: 4.0, x2: 3.0, y2: 4.0 },
        Shape::Line { x1: 21.0, y1: 12.0, x2: 12.0, y2: 12.0 },
        Shape::Line { x1: 8.0, y1: 12.0, x2: 3.0, y2: 12.0 },
        Shape::Line { x1: 21.0, y1: 20.0, x2: 16.0, y2: 20.0 },
        Shape::Line { x1: 12.0, y1: 20.0, x2: 3.0, y2: 20.0 },
        Shape::Line { x1: 14.0, y1: 2.0, x2: 14.0, y2: 6.0 },
        Shape::Line { x1: 8.0, y1: 10.0, x2: 8.0, y2: 14.0 },
        Shape::Line { x1: 16.0, y1: 18.0, x2: 16.0, y2: 22.0 },
    ],
);

// Misc

pub const STAR: IconData = icon(
    "star",
    &[Shape::Polygon("12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2")],
);

pub const HEART: IconData = icon(
    "heart",
    &[Shape::Path("M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z")],
);

pub const EYE: IconData = icon(
    "eye",
    &[
        Shape::Path("M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0"),
        Shape::Circle { cx: 12.0, cy: 12.0, r: 3.0 },
    ],
);

pub const EXTERNAL_LINK: IconData = icon(
    "external-link",
    &[
        Shape::Path("M15 3h6v6"),
        Shape::Path("M10 14 21 3"),
        Shape::Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
    ],
);

pub const ELLIPSIS: IconData = icon(
    "ellipsis",
    &[
        Shape::Circle { cx: 12.0, cy: 12.0, r: 1.0 },
        Shape::Circle { cx: 19.0, cy: 12.0, r: 1.0 },
        Shape::Circle { cx: 5.0, cy: 12.0, r: 1.0 },
    ],
);
