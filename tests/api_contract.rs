#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! HTTP route contract tests
//!
//! The route list in `api::router` must match the golden file at
//! tests/fixtures/api_routes.txt. Browser code and bookmarks depend on these
//! paths, so a change here has to be deliberate.
//!
//! If this test fails, review the route change and update api_routes.txt
//! when it is intended.
//!
//! Run with: cargo test --test api_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN_FILE: &str = "tests/fixtures/api_routes.txt";
const ROUTER_SOURCE: &str = "src/api/mod.rs";

/// Non-comment, non-blank lines of the golden file, in file order
fn golden_lines() -> Vec<String> {
    fs::read_to_string(GOLDEN_FILE)
        .expect("Failed to read api_routes.txt")
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Path of a `.route(..)` call: the literal, or `<name>` for a variable
fn route_path(line: &str) -> Option<String> {
    let start = line.find(".route(")? + 7;
    let rest = &line[start..];

    if let Some(literal) = rest.strip_prefix('"') {
        let end = literal.find('"')?;
        return Some(literal[..end].to_string());
    }

    let name = rest.trim_start_matches('&');
    let end = name.find(',')?;
    Some(format!("<{}>", name[..end].trim()))
}

/// `METHOD /path` for every `.route("/path", method(handler))` line
fn extract_routes_from_source() -> BTreeSet<String> {
    let content = fs::read_to_string(ROUTER_SOURCE).expect("Failed to read src/api/mod.rs");

    let mut routes = BTreeSet::new();

    for line in content.lines().map(str::trim) {
        if line.starts_with("//") {
            continue;
        }

        let Some(path) = route_path(line) else {
            continue;
        };

        let method = if line.contains(" get(") {
            "GET"
        } else if line.contains(" post(") {
            "POST"
        } else if line.contains(" put(") {
            "PUT"
        } else if line.contains(" delete(") {
            "DELETE"
        } else {
            continue;
        };

        routes.insert(format!("{} {}", method, path));
    }

    routes
}

#[test]
fn api_routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let actual = extract_routes_from_source();

    assert!(!actual.is_empty(), "no routes found in {}", ROUTER_SOURCE);

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    if !added.is_empty() || !removed.is_empty() {
        let mut msg = String::from("\n\nROUTE CONTRACT VIOLATION!\n\n");

        if !added.is_empty() {
            msg.push_str("Routes ADDED (not in contract):\n");
            for route in &added {
                msg.push_str(&format!("  + {}\n", route));
            }
            msg.push('\n');
        }

        if !removed.is_empty() {
            msg.push_str("Routes REMOVED (missing from router):\n");
            for route in &removed {
                msg.push_str(&format!("  - {}\n", route));
            }
            msg.push('\n');
        }

        msg.push_str(&format!("If intentional, update {}\n", GOLDEN_FILE));
        panic!("{}", msg);
    }
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();

    let mut sorted = routes.clone();
    sorted.sort();

    assert_eq!(
        routes, sorted,
        "api_routes.txt is not sorted! Please sort alphabetically."
    );
}

#[test]
fn configurable_route_is_recorded_by_name() {
    assert_eq!(
        route_path(".route(&settings_path, get(ui::account_settings_page));").as_deref(),
        Some("<settings_path>")
    );
    assert_eq!(
        route_path(".route(\"/status\", get(status_handler))").as_deref(),
        Some("/status")
    );
    assert_eq!(route_path("let x = 1;"), None);
}

#[test]
fn path_params_use_braces() {
    // axum 0.8 rejects the old `:param` syntax at startup
    for route in golden_lines() {
        assert!(
            !route.contains("/:"),
            "{} uses `:param`; write `{{param}}` instead",
            route
        );
    }
}
