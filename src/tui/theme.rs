//! # Theme
//!
//! Colors resolved once from config and passed by reference to every component.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::ThemeColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Color,
    pub detail_title: Color,
    pub item_title: Color,
    pub item_desc: Color,
    pub dimmed_title: Color,
    pub dimmed_desc: Color,
    pub error: Color,
    pub text: Color,
    pub prompt_border: Color,
}

impl Theme {
    /// Parse configured colors. Unparseable values fall back to the default color.
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let defaults = ThemeColors::default();
        Self {
            title: parse_color("title", &colors.title, &defaults.title),
            detail_title: parse_color("detail_title", &colors.detail_title, &defaults.detail_title),
            item_title: parse_color("item_title", &colors.item_title, &defaults.item_title),
            item_desc: parse_color("item_desc", &colors.item_desc, &defaults.item_desc),
            dimmed_title: parse_color("dimmed_title", &colors.dimmed_title, &defaults.dimmed_title),
            dimmed_desc: parse_color("dimmed_desc", &colors.dimmed_desc, &defaults.dimmed_desc),
            error: parse_color("error", &colors.error, &defaults.error),
            text: parse_color("text", &colors.text, &defaults.text),
            prompt_border: parse_color(
                "prompt_border",
                &colors.prompt_border,
                &defaults.prompt_border,
            ),
        }
    }

    /// Light text on a colored background, for section headers.
    pub fn header(&self, background: Color) -> Style {
        Style::default()
            .fg(self.text)
            .bg(background)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_colors(&ThemeColors::default())
    }
}

fn parse_color(field: &str, value: &str, default: &str) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        warn!("Invalid theme color {field} = \"{value}\", using {default}");
        Color::from_str(default).unwrap_or(Color::Reset)
    })
}
