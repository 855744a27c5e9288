use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    content: String,
    author: Author,
    timestamp: DateTime<Local>,
    quick_actions: bool,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, author: Author) -> Self {
        Self {
            content: content.into(),
            author,
            timestamp: Local::now(),
            quick_actions: false,
        }
    }

    /// Marks this message as carrying the quick-query affordances, which
    /// exempts it from `clear`.
    pub fn with_quick_actions(mut self) -> Self {
        self.quick_actions = true;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn has_quick_actions(&self) -> bool {
        self.quick_actions
    }

    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn render(&self, area: Rect) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.get_base_style();

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, area, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    fn get_base_style(&self) -> Style {
        Style::default().fg(match self.author {
            Author::User => Color::Rgb(255, 223, 128),
            Author::Bot => Color::Rgb(144, 238, 144),
        })
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let label = match self.author {
            Author::User => "you",
            Author::Bot => "bot",
        };
        let indent = self.indent();

        let header_line = Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(self.display_time(), style.add_modifier(Modifier::DIM)),
            Span::styled(" ".to_string(), style),
            Span::styled(label.to_string(), style.add_modifier(Modifier::DIM)),
        ]);

        lines.push(header_line);
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, area: Rect, style: Style) {
        let indent = self.indent();
        let mut in_code_block = false;
        let mut code_buffer = String::new();
        let mut text_buffer = String::new();

        for line in self.content.lines() {
            if line.trim().starts_with("```") {
                self.flush_text_buffer(lines, &text_buffer, area, style, indent);
                self.flush_code_buffer(lines, &code_buffer, style, indent);
                text_buffer.clear();
                code_buffer.clear();
                in_code_block = !in_code_block;
                continue;
            }

            if in_code_block {
                code_buffer.push_str(line);
                code_buffer.push('\n');
            } else {
                text_buffer.push_str(line);
                text_buffer.push('\n');
            }
        }

        self.flush_text_buffer(lines, &text_buffer, area, style, indent);
        self.flush_code_buffer(lines, &code_buffer, style, indent);
    }

    fn flush_text_buffer(
        &self,
        lines: &mut Vec<Line<'static>>,
        buffer: &str,
        area: Rect,
        style: Style,
        indent: &str,
    ) {
        if buffer.is_empty() {
            return;
        }

        let wrap_width = (area.width as usize).saturating_sub(4).max(1);
        let wrapped = wrap(buffer, wrap_width);

        for wrapped_line in wrapped {
            let line = Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]);
            lines.push(line);
        }
    }

    fn flush_code_buffer(
        &self,
        lines: &mut Vec<Line<'static>>,
        buffer: &str,
        style: Style,
        indent: &str,
    ) {
        if buffer.is_empty() {
            return;
        }

        let code_style = Style::default()
            .fg(Color::Rgb(209, 154, 102))
            .add_modifier(Modifier::BOLD);

        for code_line in buffer.lines() {
            let line = Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled("▎".to_string(), Style::default().fg(Color::DarkGray)),
                Span::styled(format!(" {}", code_line), code_style),
            ]);
            lines.push(line);
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }

    fn indent(&self) -> &'static str {
        match self.author {
            Author::User => "  ",
            Author::Bot => "",
        }
    }
}
