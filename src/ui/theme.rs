//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

use crate::core::props::{DEFAULT_FULFILLED_CLASS, DEFAULT_LOADING_CLASS, DEFAULT_REJECTED_CLASS};

/// Central theme. Change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── button ─────────────────────────────────────────────────
    pub fn button_style() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn disabled_style() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .remove_modifier(Modifier::BOLD)
    }

    /// Style patch for a single class name.  Phase classes are recognised by
    /// their `--loading` / `--fulfilled` / `--rejected` suffix so custom
    /// prefixes keep their colours.
    pub fn class_style(class: &str) -> Style {
        if class == DEFAULT_LOADING_CLASS || class.ends_with("--loading") {
            Style::default().fg(Color::Yellow)
        } else if class == DEFAULT_FULFILLED_CLASS || class.ends_with("--fulfilled") {
            Style::default().fg(Color::Green)
        } else if class == DEFAULT_REJECTED_CLASS || class.ends_with("--rejected") {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        }
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn border_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
