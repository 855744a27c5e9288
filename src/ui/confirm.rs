use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_clear_confirm(f: &mut Frame, area: Rect) {
    draw_confirm(
        f,
        area,
        "Clear Chat",
        "Are you sure you want to clear all messages?\n\nPress 'y' to confirm or 'n' to cancel.",
    );
}

pub fn draw_quit_confirm(f: &mut Frame, area: Rect) {
    draw_confirm(
        f,
        area,
        "Confirm Quit",
        "Are you sure you want to quit?\n\nPress 'y' to confirm or 'n' to cancel.",
    );
}

fn draw_confirm(f: &mut Frame, area: Rect, title: &str, text: &str) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::LightYellow).bg(Color::Black));

    f.render_widget(block, area);

    let paragraph = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    f.render_widget(paragraph, inner);
}
