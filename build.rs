//! Build script for the admin dashboard.
//!
//! - Fails the build when `public/app.css` uses a `var(--color-*)` token
//!   that the palette does not define.
//! - Stamps `ADMIN_VERSION` and `ADMIN_GIT_SHA` into the binary for the
//!   page footer and `/status`. CI can set either variable; otherwise the
//!   package version and `git rev-parse` are used.

use std::process::Command;

#[allow(dead_code)]
#[path = "src/app/palette.rs"]
mod palette;

const STYLESHEET: &str = "public/app.css";

fn main() {
    check_stylesheet_tokens();

    let version = std::env::var("ADMIN_VERSION")
        .or_else(|_| std::env::var("CARGO_PKG_VERSION"))
        .unwrap_or_else(|_| "unknown".into());
    println!("cargo:rustc-env=ADMIN_VERSION={}", version);

    // CI checkouts expose the full SHA; keep the short form
    let git_sha = std::env::var("ADMIN_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|sha| sha.chars().take(7).collect()))
        .ok()
        .or_else(short_head_sha)
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=ADMIN_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-changed={}", STYLESHEET);
    println!("cargo:rerun-if-changed=src/app/palette.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=ADMIN_VERSION");
    println!("cargo:rerun-if-env-changed=ADMIN_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn check_stylesheet_tokens() {
    let css = match std::fs::read_to_string(STYLESHEET) {
        Ok(css) => css,
        Err(e) => panic!("cannot read {}: {}", STYLESHEET, e),
    };

    let undefined = palette::undefined_tokens(&css);
    if !undefined.is_empty() {
        panic!(
            "{} references undefined color tokens: {}",
            STYLESHEET,
            undefined.join(", ")
        );
    }
}

fn short_head_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|sha| sha.trim().to_string())
}
