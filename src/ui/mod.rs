pub mod chat;
pub mod confirm;
pub mod footer;
pub mod header;

use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(size);

    header::draw_header(f, chunks[0], app);
    chat::draw_chat(f, app, chunks[1]);
    footer::draw_footer(f, chunks[2], app);

    match app.screen {
        AppScreen::ConfirmClear => confirm::draw_clear_confirm(f, centered_rect(size)),
        AppScreen::ConfirmQuit => confirm::draw_quit_confirm(f, centered_rect(size)),
        _ => {}
    }
}

/// A small centered rect for confirm modals.
fn centered_rect(area: Rect) -> Rect {
    let width = (area.width / 2).clamp(20, 50).min(area.width);
    let height = 6.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
