//! Theme configuration for the desktop app

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Color palette interpolated into component styles
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
}

const LIGHT: Palette = Palette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f5f4",
    border: "#d6d3d1",
    text_primary: "#1c1917",
    text_muted: "#78716c",
    accent: "#2563eb",
    accent_text: "#ffffff",
};

const DARK: Palette = Palette {
    bg_primary: "#1c1917",
    bg_secondary: "#292524",
    border: "#44403c",
    text_primary: "#fafaf9",
    text_muted: "#a8a29e",
    accent: "#3b82f6",
    accent_text: "#fafaf9",
};

impl ResolvedTheme {
    /// Check if the theme is dark
    #[must_use]
    #[allow(dead_code)] // Will be used for CSS class names
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Palette for this theme
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }
}

/// Resolve the theme from the `WARES_THEME` environment variable.
///
/// Any value other than `dark` (case-insensitive) resolves to light.
#[must_use]
pub fn resolve_theme_from_env() -> ResolvedTheme {
    match std::env::var("WARES_THEME") {
        Ok(value) if value.eq_ignore_ascii_case("dark") => ResolvedTheme::Dark,
        _ => ResolvedTheme::Light,
    }
}
