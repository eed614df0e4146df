use unicode_width::UnicodeWidthStr;

use crate::config::DisplayConfig;

/// Box-drawing characters for headers and separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: &'static str,
    pub double_horizontal: &'static str,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─",
            double_horizontal: "═",
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-",
            double_horizontal: "=",
        }
    }

    pub fn from_use_unicode(use_unicode: bool) -> Self {
        if use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and an underline matching the text length.
/// `double_line` selects the double-line separator.
pub fn format_header(text: &str, double_line: bool, display: &DisplayConfig) -> String {
    let box_chars = display.box_chars();
    let separator_char = if double_line {
        box_chars.double_horizontal
    } else {
        box_chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.width()))
}

/// Left-pad `text` into a cell of display width `width`. Text wider than
/// the cell is kept whole rather than truncated.
pub fn pad(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - text_width))
    }
}
