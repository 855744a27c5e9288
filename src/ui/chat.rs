use crate::app::{App, CounterLevel};
use crate::constants::MAX_MESSAGE_CHARS;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .margin(1)
        .split(area);

    let chat_vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(4),
            ]
            .as_ref(),
        )
        .split(horizontal_chunks[0]);

    draw_messages(f, app, chat_vertical_chunks[0]);

    app.status_indicator.render(f, chat_vertical_chunks[1]);

    draw_input(f, app, chat_vertical_chunks[2]);
    draw_logs(f, app, horizontal_chunks[1]);
}

fn draw_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for message in app.messages.iter() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(message.render(area));
    }

    let total_lines = lines.len() as u16;
    let available_height = area.height;
    let max_scroll = total_lines.saturating_sub(available_height);
    // chat_scroll counts up from the bottom; 0 pins to the newest message
    let chat_scroll = max_scroll.saturating_sub(app.chat_scroll.min(max_scroll));

    let msgs_para = Paragraph::new(lines)
        .style(Style::default())
        .block(Block::default())
        .wrap(Wrap { trim: true });
    f.render_widget(msgs_para.scroll((chat_scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 1,
        },
    );

    // The prompt goes dim while a send is in flight: the input is locked.
    let (prefix, prefix_style, text_style) = if app.is_waiting_for_response {
        (
            "… ",
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "→ ",
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    let mut input_lines: Vec<Line> = Vec::new();
    for (i, text_line) in app.input.split('\n').enumerate() {
        let lead = if i == 0 { prefix } else { "  " };
        input_lines.push(Line::from(vec![
            Span::styled(lead, prefix_style),
            Span::styled(text_line.to_string(), text_style),
        ]));
    }

    let visible_lines = area.height.saturating_sub(2);
    let line_count = input_lines.len() as u16;
    let vertical_scroll = line_count.saturating_sub(visible_lines);

    f.render_widget(
        Paragraph::new(input_lines).scroll((vertical_scroll, 0)),
        Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: visible_lines,
        },
    );

    draw_counter_separator(f, app, area);

    if app.input_focused && !app.is_waiting_for_response {
        let last_line = app.input.split('\n').next_back().unwrap_or("");
        let cursor_x = area.x
            + (2 + last_line.width() as u16).min(area.width.saturating_sub(1));
        let cursor_y = area.y + 1 + (line_count - 1).min(visible_lines.saturating_sub(1));
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Bottom separator with the character counter embedded at its right edge.
fn draw_counter_separator(f: &mut Frame, app: &App, area: Rect) {
    let counter_text = format!(" {}/{} ", app.char_count(), MAX_MESSAGE_CHARS);
    let counter_style = match app.counter_level() {
        CounterLevel::Normal => Style::default().fg(Color::DarkGray),
        CounterLevel::Warning => Style::default().fg(Color::Yellow),
        CounterLevel::Error => Style::default().fg(Color::Red),
    };

    let fill = (area.width as usize).saturating_sub(counter_text.width());
    let line = Line::from(vec![
        Span::styled("─".repeat(fill), Style::default().fg(Color::DarkGray)),
        Span::styled(counter_text, counter_style),
    ]);

    f.render_widget(
        Paragraph::new(line),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );
}

fn draw_logs(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 2 {
        return;
    }

    let log_lines: Vec<Line> = app
        .logs
        .entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry.as_str()),
            ])
        })
        .collect();

    let total_log_lines = log_lines.len() as u16;
    let max_log_scroll = total_log_lines.saturating_sub(area.height);
    // Pinned to the newest entries
    let logs_scroll = max_log_scroll.saturating_sub(app.logs.scroll_offset);

    let logs_para = Paragraph::new(log_lines)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(logs_para.scroll((logs_scroll, 0)), area);
}
