use crate::app::{App, ConnectionStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " confab",
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" — terminal chat", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let (dot_color, status_label) = match app.connection {
        ConnectionStatus::Online => (Color::Green, "Online"),
        ConnectionStatus::Offline => (Color::Red, "Offline"),
        ConnectionStatus::Unknown => (Color::DarkGray, "Checking..."),
    };

    let count = app.message_count();
    let badge = format!("{} message{}", count, if count != 1 { "s" } else { "" });

    let status = Paragraph::new(Line::from(vec![
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(status_label, Style::default().fg(Color::White)),
        Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Span::styled(badge, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(status, chunks[1]);
}
