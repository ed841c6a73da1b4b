// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::page_views::{render_badges, render_home, render_login, render_not_found, render_user_form};
use super::user_list::render_users_page;
use super::Styles;
use crate::core::App;
use crate::pages::Page;
use crate::routing::NavSection;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(0),    // Page
            Constraint::Length(1), // Banner
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_navbar(f, app, chunks[0]);
    render_page(f, app, chunks[1]);
    render_banner(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);
}

/// Render the navigation bar
fn render_navbar(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = NavSection::ALL.iter().map(|s| s.title()).collect();
    let selected = app.route().section().map(NavSection::index);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Styles::nav_active())
        .divider("|")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_unfocused())
                .title(Span::styled(format!(" {} ", app.config.ui.title), Styles::header()))
                .title_top(Line::from(Span::styled(format!(" {} ", app.route()), Styles::muted())).right_aligned()),
        );
    f.render_widget(tabs, area);
}

/// Render the mounted page
fn render_page(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_unfocused());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    match app.page() {
        Page::Home(page) => render_home(f, page, inner),
        Page::Login(page) => render_login(f, page, inner),
        Page::Users(page) => render_users_page(f, page, inner),
        Page::UserForm(page) => render_user_form(f, page, inner),
        Page::Badges(page) => render_badges(f, page, inner),
        Page::NotFound(path) => render_not_found(f, path, inner),
    }
}

/// Render the transient banner, if any
fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    if let Some(banner) = &app.banner {
        let line = Paragraph::new(format!(" {} ", banner.notice.text)).style(Styles::banner(banner.notice.level));
        f.render_widget(line, area);
    }
}

/// Render the footer bar
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.page() {
        Page::Users(_) => "q: Quit | ↑/↓: Select | Enter: Open | d: Delete | n: Create | c/t: Card/Table | r: Refresh",
        Page::UserForm(_) => "Tab: Next field | Enter: Save | Esc: Cancel | Ctrl-C: Quit",
        Page::Login(_) => "Tab: Next field | Enter: Sign in | Esc: Back | Ctrl-C: Quit",
        Page::Home(_) => "q: Quit | h/u/b/l: Home/Users/Badges/Login | +/-: Counter",
        Page::Badges(_) => "q: Quit | r: Refresh | Esc: Back",
        Page::NotFound(_) => "q: Quit | h: Home | Esc: Back",
    };

    let operator = match &app.operator {
        Some(name) => format!(" signed in as {} ", name),
        None => " not signed in ".to_string(),
    };

    let footer = Paragraph::new(help_text).style(Styles::footer()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_unfocused())
            .title_bottom(Line::from(Span::styled(operator, Styles::muted())).right_aligned()),
    );
    f.render_widget(footer, area);
}
