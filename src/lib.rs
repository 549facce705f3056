//! Admin Dashboard - Dioxus web frontend
//!
//! This library provides:
//! - An icon registry with named, grouped SVG icons
//! - A profile dropdown with outside-click dismissal
//! - Semantic color tokens for the stylesheet
//! - Server-rendered pages and a small JSON API (server feature)

pub mod app;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;
