//! Color tokens for the dashboard palette.
//!
//! Every visual component resolves colors through these tokens, either as
//! CSS custom properties (`var(--color-gold)`) or by name through
//! [`ColorToken::from_str`]. The table is static; a token that is not listed
//! here does not exist.

use std::fmt;
use std::str::FromStr;

use super::palette::PALETTE;

/// Semantic color token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Gold,
    GoldLight,
    GoldDark,
    Sage,
    SageLight,
    SageDark,
    Brown,
    BrownLight,
    BrownDark,
    Cream,
    Beige,
}

impl ColorToken {
    /// All tokens in palette order
    pub const ALL: [ColorToken; 11] = [
        ColorToken::Gold,
        ColorToken::GoldLight,
        ColorToken::GoldDark,
        ColorToken::Sage,
        ColorToken::SageLight,
        ColorToken::SageDark,
        ColorToken::Brown,
        ColorToken::BrownLight,
        ColorToken::BrownDark,
        ColorToken::Cream,
        ColorToken::Beige,
    ];

    fn entry(&self) -> (&'static str, &'static str) {
        // Variants are declared in palette order
        PALETTE[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.entry().0
    }

    pub fn hex(&self) -> &'static str {
        self.entry().1
    }

    /// CSS custom property name, e.g. `--color-gold-light`
    pub fn css_var(&self) -> String {
        format!("--color-{}", self.name())
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup of a token name that is not in the palette
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color token `{0}`")]
pub struct UnknownColorToken(pub String);

impl FromStr for ColorToken {
    type Err = UnknownColorToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches("--color-");
        ColorToken::ALL
            .into_iter()
            .find(|token| token.name() == name)
            .ok_or_else(|| UnknownColorToken(s.to_string()))
    }
}

/// `:root` block declaring one custom property per token.
pub fn palette_css() -> String {
    let mut css = String::from(":root {\n");
    for token in ColorToken::ALL {
        css.push_str(&format!("    {}: {};\n", token.css_var(), token.hex()));
    }
    css.push_str("}\n");
    css
}
