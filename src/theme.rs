//! Presentation channel: four named global style variables.
//!
//! The selection store publishes the active palette here; rendering code
//! reads it back as terminal colors. Nothing else writes these variables.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crossterm::style::{Color, Stylize};

use crate::selection::PalettePublisher;

fn style_vars() -> &'static RwLock<HashMap<&'static str, String>> {
    static VARS: OnceLock<RwLock<HashMap<&'static str, String>>> = OnceLock::new();
    VARS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Set a style variable on the global channel.
pub fn set_var(name: &'static str, value: &str) {
    style_vars()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name, value.to_string());
}

/// Read a style variable from the global channel.
pub fn var(name: &str) -> Option<String> {
    style_vars()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// Publisher wired to the global channel; the CLI session mounts the
/// selection store with one of these.
#[derive(Debug, Default)]
pub struct GlobalStylePublisher;

impl PalettePublisher for GlobalStylePublisher {
    fn set_var(&mut self, name: &'static str, value: &str) {
        set_var(name, value);
    }
}

/// Parse a `#RRGGBB` or `#RGB` hex string into a terminal color.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb { r, g, b })
        }
        _ => None,
    }
}

/// The channel's current color for `name`, if set and parseable.
pub fn channel_color(name: &str) -> Option<Color> {
    var(name).and_then(|v| parse_hex_color(&v))
}

/// Style `text` with the color published on `channel`, falling back to the
/// plain string when the channel is unset.
pub fn paint(text: &str, channel: &str) -> String {
    match channel_color(channel) {
        Some(color) => text.with(color).to_string(),
        None => text.to_string(),
    }
}
