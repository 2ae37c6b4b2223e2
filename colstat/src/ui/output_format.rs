//! Formatting of diagnostics written to stderr.

use colstat_core::Diagnostic;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes `msg` on its own line, colored with the theme entry when `supports_color`.
pub fn print_message<W: Write>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let color = theme_map.get(&entry).and_then(|style| style.fg);
    match color {
        Some(color) if supports_color => writeln!(writer, "{}", msg.color(color)),
        _ => writeln!(writer, "{}", msg),
    }
}

/// Writes one diagnostic, styled by its severity.
pub fn print_diagnostic<W: Write>(
    writer: &mut W,
    diagnostic: &Diagnostic,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let entry = match diagnostic {
        Diagnostic::NoValidNumbers { .. } => ThemeEntry::Error,
        _ => ThemeEntry::Warn,
    };
    print_message(writer, &diagnostic.to_string(), entry, theme_map, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_without_color() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        let diagnostic = Diagnostic::UnparsableValue {
            index: 4,
            raw: "n/a".to_string(),
        };
        print_diagnostic(&mut out, &diagnostic, &theme, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Skipping line number 4 : could not convert string to float: n/a\n"
        );
    }

    #[test]
    fn colored_output_keeps_text() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_message(&mut out, "careful", ThemeEntry::Warn, &theme, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("careful"));
    }
}
