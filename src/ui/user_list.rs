// User List Component
// Card grid and table renderings of the same user collection

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::Styles;
use crate::models::UserRecord;
use crate::pages::{ModeControls, UsersPage, ViewMode};

/// Width of one card including its border
const CARD_WIDTH: u16 = 26;

/// Height of one card including its border
const CARD_HEIGHT: u16 = 5;

/// Render the users page: mode controls on top, the active layout below
pub fn render_users_page(f: &mut Frame, page: &UsersPage, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode controls
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Users
        ])
        .split(area);

    render_mode_controls(f, page.mode_controls(), page.is_loading(), chunks[0]);

    if page.users().is_empty() {
        let text = if page.is_loading() { "Loading users..." } else { "No users" };
        f.render_widget(Paragraph::new(text).style(Styles::muted()), chunks[2]);
        return;
    }

    match page.view_mode() {
        ViewMode::Card => render_cards(f, page, chunks[2]),
        ViewMode::Table => render_table(f, page, chunks[2]),
    }
}

fn render_mode_controls(f: &mut Frame, controls: ModeControls, loading: bool, area: Rect) {
    let mut spans = vec![
        Span::styled(format!(" [c] {} ", ViewMode::Card.label()), Styles::button(controls.card)),
        Span::raw(" "),
        Span::styled(format!(" [t] {} ", ViewMode::Table.label()), Styles::button(controls.table)),
        Span::raw("   "),
        Span::styled(" [n] Create User ", Styles::header()),
    ];
    if loading {
        spans.push(Span::styled("  refreshing...", Styles::pending()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Number of card columns that fit in `width`
pub fn card_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

fn render_cards(f: &mut Frame, page: &UsersPage, area: Rect) {
    let users = page.users();
    let columns = card_columns(area.width);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

    // Scroll so the selected card's row is visible
    let selected_row = page.selected_index() / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (idx, user) in users.iter().enumerate().skip(first_row * columns) {
        let row = idx / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = idx % columns;

        let card_area = Rect {
            x: area.x + (col as u16) * CARD_WIDTH,
            y: area.y + (row as u16) * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT.min(area.height),
        };
        render_card(f, user, idx == page.selected_index(), page.is_delete_pending(&user.id), card_area);
    }
}

fn render_card(f: &mut Frame, user: &UserRecord, selected: bool, pending: bool, area: Rect) {
    let (border_style, title_style) = if selected {
        (Styles::border_focused(), Styles::title_focused())
    } else {
        (Styles::border_unfocused(), Styles::title_unfocused())
    };

    let action = if pending {
        Span::styled("deleting...", Styles::pending())
    } else {
        Span::styled("[d] delete", Styles::delete_action())
    };

    let lines = vec![
        Line::from(Span::styled(user.name.clone(), Styles::user_name())),
        Line::from(Span::styled(user.image.clone(), Styles::muted())),
        Line::from(action),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(format!(" user #{} ", user.id), title_style)),
    );
    f.render_widget(card, area);
}

/// Cell values of one table row: id, picture, name
pub fn table_row(user: &UserRecord) -> [String; 3] {
    [user.id.to_string(), user.image.clone(), user.name.clone()]
}

fn render_table(f: &mut Frame, page: &UsersPage, area: Rect) {
    let header = Row::new(["ID", "Picture", "Name", "Delete"]).style(Styles::table_header());

    let rows: Vec<Row> = page
        .users()
        .iter()
        .map(|user| {
            let [id, image, name] = table_row(user);
            let action = if page.is_delete_pending(&user.id) {
                Cell::from(Span::styled("...", Styles::pending()))
            } else {
                Cell::from(Span::styled("[d]", Styles::delete_action()))
            };
            Row::new(vec![Cell::from(id), Cell::from(image), Cell::from(name), action])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(45),
        Constraint::Min(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::list_selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_unfocused()),
        );

    let mut state = TableState::default().with_selected(Some(page.selected_index()));
    f.render_stateful_widget(table, area, &mut state);
}
