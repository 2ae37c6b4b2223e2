//! Module for managing the colors of colstat's stderr messages.
//!
//! The report on stdout is never styled; only diagnostics and errors are,
//! and only when stderr is a terminal.

use owo_colors::AnsiColors;
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// Recoverable problems with individual rows.
    Warn,
    /// Conditions that prevented a report.
    Error,
}

/// Style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThemeStyle {
    pub fg: Option<AnsiColors>,
}

impl ThemeStyle {
    fn foreground(color: AnsiColors) -> Self {
        ThemeStyle { fg: Some(color) }
    }

    /// Returns the default theme map.
    pub fn default_theme_map() -> ThemeMap {
        let mut theme = HashMap::new();
        theme.insert(ThemeEntry::Warn, ThemeStyle::foreground(AnsiColors::Yellow));
        theme.insert(ThemeEntry::Error, ThemeStyle::foreground(AnsiColors::Red));
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_colors() {
        let theme = ThemeStyle::default_theme_map();
        assert_eq!(theme[&ThemeEntry::Warn].fg, Some(AnsiColors::Yellow));
        assert_eq!(theme[&ThemeEntry::Error].fg, Some(AnsiColors::Red));
    }
}
