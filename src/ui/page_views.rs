// Page Views
// Rendering for the home, login, user form, badges and not-found pages

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Styles;
use crate::pages::login::LoginField;
use crate::pages::user_form::FormField;
use crate::pages::{BadgesPage, HomePage, LoginPage, ProfileImagePreview, UserFormPage};

/// Width of one badge including its border
const BADGE_WIDTH: u16 = 22;

pub fn render_home(f: &mut Frame, page: &HomePage, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("Welcome to User Desk", Styles::header())),
        Line::from(""),
        Line::from("Manage the users of the user service from your terminal."),
        Line::from("Press u for users, b for badges, l to log in."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Counter: "),
            Span::styled(page.counter.value().to_string(), Styles::user_name()),
            Span::styled("   (+/- to change)", Styles::muted()),
        ]),
    ];
    if let Some(error) = page.counter.error() {
        lines.push(Line::from(Span::styled(error.to_string(), Styles::inline_error())));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// One labelled single-line input
fn field_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let style = if focused { Styles::field_focused() } else { Styles::list_normal() };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Styles::muted()),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}

pub fn render_login(f: &mut Frame, page: &LoginPage, area: Rect) {
    let password = page.masked_password();
    let mut lines = vec![
        Line::from(Span::styled("Login", Styles::header())),
        Line::from(""),
        field_line("User", &page.username, page.focus() == LoginField::Username),
        field_line("Password", &password, page.focus() == LoginField::Password),
        Line::from(""),
    ];
    if let Some(error) = page.error() {
        lines.push(Line::from(Span::styled(error.to_string(), Styles::inline_error())));
    }

    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_user_form(f: &mut Frame, page: &UserFormPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(page.title(), Styles::header())),
        Line::from(""),
        field_line("Name", &page.name, page.focus() == FormField::Name),
        field_line("Image", &page.image, page.focus() == FormField::Image),
        Line::from(""),
    ];
    if page.is_loading() {
        lines.push(Line::from(Span::styled("Loading user...", Styles::pending())));
    }
    if page.is_saving() {
        lines.push(Line::from(Span::styled("Saving...", Styles::pending())));
    }
    if let Some(error) = page.error() {
        lines.push(Line::from(Span::styled(error.to_string(), Styles::inline_error())));
    }
    f.render_widget(Paragraph::new(lines), chunks[0]);

    render_profile_image(f, &ProfileImagePreview::new(page), chunks[1]);
}

fn render_profile_image(f: &mut Frame, preview: &ProfileImagePreview<'_>, area: Rect) {
    let body = match preview.image() {
        Some(image) => Line::from(Span::raw(image.to_string())),
        None => Line::from(Span::styled("(no image)", Styles::muted())),
    };

    let panel = Paragraph::new(body).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_unfocused())
            .title(Span::styled(" Profile Picture Preview ", Styles::title_unfocused())),
    );
    f.render_widget(panel, area);
}

pub fn render_badges(f: &mut Frame, page: &BadgesPage, area: Rect) {
    if page.users().is_empty() {
        let text = if page.is_loading() { "Loading badges..." } else { "No badges" };
        f.render_widget(Paragraph::new(text).style(Styles::muted()), area);
        return;
    }

    let columns = usize::from((area.width / BADGE_WIDTH).max(1));
    let visible_rows = usize::from(area.height / 3);
    for (idx, user) in page.users().iter().enumerate() {
        let (row, col) = (idx / columns, idx % columns);
        if row >= visible_rows {
            break;
        }
        let badge_area = Rect {
            x: area.x + (col as u16) * BADGE_WIDTH,
            y: area.y + (row as u16) * 3,
            width: BADGE_WIDTH.min(area.width),
            height: 3,
        };

        let badge = Paragraph::new(Span::styled(user.name.clone(), Styles::user_name())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_focused())
                .title(Span::styled(format!(" #{} ", user.id), Styles::title_focused())),
        );
        f.render_widget(badge, badge_area);
    }
}

pub fn render_not_found(f: &mut Frame, path: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Page not found", Styles::inline_error())),
        Line::from(""),
        Line::from(format!("Nothing lives at {}", path)),
        Line::from(Span::styled("Press Esc to go back or h for home.", Styles::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
