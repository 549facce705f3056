//! Palette table and stylesheet token scan.
//!
//! Plain std code with no crate paths: `build.rs` compiles this file too, so
//! a stylesheet that names an undefined token fails the build.

/// `(name, hex)` for every color token, in palette order
pub const PALETTE: &[(&str, &str)] = &[
    ("gold", "#D4AF37"),
    ("gold-light", "#E5C048"),
    ("gold-dark", "#B3902E"),
    ("sage", "#B2C2B2"),
    ("sage-light", "#C3D3C3"),
    ("sage-dark", "#91A191"),
    ("brown", "#4A3728"),
    ("brown-light", "#5D4634"),
    ("brown-dark", "#35251C"),
    ("cream", "#F5F5DC"),
    ("beige", "#D8C3A5"),
];

const VAR_PREFIX: &str = "var(--color-";

/// Token names used as `var(--color-NAME)` in `css`, in order of appearance
pub fn referenced_tokens(css: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = css;
    while let Some(pos) = rest.find(VAR_PREFIX) {
        let after = &rest[pos + VAR_PREFIX.len()..];
        let end = after
            .find(|c: char| c == ')' || c == ',' || c.is_whitespace())
            .unwrap_or(after.len());
        names.push(&after[..end]);
        rest = &after[end..];
    }
    names
}

/// Referenced token names that are not in [`PALETTE`]
pub fn undefined_tokens(css: &str) -> Vec<&str> {
    referenced_tokens(css)
        .into_iter()
        .filter(|name| !PALETTE.iter().any(|(known, _)| known == name))
        .collect()
}
