// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::core::NoticeLevel;
use crate::pages::ButtonColor;

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    // === Buttons ===

    pub fn button(color: ButtonColor) -> Style {
        match color {
            ButtonColor::Primary => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            ButtonColor::Secondary => Style::default()
                .fg(Color::Gray)
                .bg(Color::Rgb(48, 48, 48)),
        }
    }

    // === List Items ===

    pub fn list_selected() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn list_normal() -> Style {
        Style::default()
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn user_name() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::Rgb(128, 128, 128))
    }

    pub fn pending() -> Style {
        Style::default()
            .fg(Color::Rgb(150, 150, 150))
            .add_modifier(Modifier::ITALIC)
    }

    pub fn delete_action() -> Style {
        Style::default().fg(Color::Red)
    }

    // === Forms ===

    pub fn field_focused() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn inline_error() -> Style {
        Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    // === Banner ===

    pub fn banner(level: NoticeLevel) -> Style {
        match level {
            NoticeLevel::Info => Style::default().fg(Color::Black).bg(Color::Green),
            NoticeLevel::Error => Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        }
    }

    // === Border Styles ===

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_unfocused() -> Style {
        Style::default().fg(Color::Rgb(102, 102, 102))
    }

    pub fn title_focused() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_unfocused() -> Style {
        Style::default().fg(Color::Gray)
    }
}
