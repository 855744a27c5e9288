use crate::app::{App, AppScreen};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the footer with dynamic instructions, preempted by an active toast.
pub fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    if let Some(toast) = &app.toast {
        let toast_para = Paragraph::new(toast.text.as_str())
            .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(toast_para, area);
        return;
    }

    let instructions = match app.screen {
        AppScreen::Chat => {
            "Enter send · Shift+Enter newline · F2-F4 quick queries · Ctrl+L clear · Ctrl+Y copy · PgUp/PgDn scroll · Esc quit"
        }
        AppScreen::ConfirmClear => "Press 'y' to clear all messages or 'n' to cancel.",
        AppScreen::ConfirmQuit => "Press 'y' to confirm quit or 'n' to cancel.",
        _ => "",
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
