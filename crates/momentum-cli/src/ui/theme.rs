//! Palette, symbols, and status badges.

use owo_colors::Style;

/// A glyph with an ASCII fallback.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    unicode: &'static str,
    ascii: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { unicode, ascii }
    }

    /// The symbol for the active charset.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Bullet for list rows.
pub const BULLET: SymbolPair = SymbolPair::new("*", "\u{2022}");

/// Status badge shown in front of result lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Info,
}

impl Badge {
    /// Bracketed tag for this badge in the active charset.
    pub fn display(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Info, true) => "[\u{2139}]",
            (Self::Info, false) => "[INFO]",
        }
    }

    /// Style used for this badge when color is enabled.
    pub fn style(self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Warn => styles::warn(),
            Self::Info => styles::info(),
        }
    }
}

/// Apply a style to text, honoring the color setting.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        style.style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Style builders for the palette.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    pub fn warn() -> Style {
        Style::new().yellow()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}
