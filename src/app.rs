use crate::chat_message::{Author, ChatMessage};
use crate::constants::{
    COUNTER_WARNING_RATIO, FALLBACK_REPLY, MAX_MESSAGE_CHARS, QUICK_QUERIES, TOAST_DURATION_MS,
};
use crate::errors::ConfabResult;
use crate::log_view::LogView;
use crate::status_indicator::StatusIndicator;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Chat,
    ConfirmClear,
    ConfirmQuit,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Unknown,
    Online,
    Offline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Error,
}

#[derive(Debug)]
pub struct Toast {
    pub text: String,
    shown_at: Instant,
}

pub struct App {
    pub screen: AppScreen,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub is_waiting_for_response: bool,
    pub input_focused: bool,
    pub connection: ConnectionStatus,
    /// Lines scrolled up from the bottom of the transcript; 0 follows the
    /// newest message.
    pub chat_scroll: u16,
    pub status_indicator: StatusIndicator,
    pub logs: LogView,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new() -> App {
        let mut app = App {
            screen: AppScreen::Chat,
            messages: Vec::new(),
            input: String::new(),
            is_waiting_for_response: false,
            input_focused: true,
            connection: ConnectionStatus::Unknown,
            chat_scroll: 0,
            status_indicator: StatusIndicator::new(),
            logs: LogView::new(),
            toast: None,
        };

        app.messages.push(welcome_message());
        app
    }

    /// Derived, never stored: the badge recomputes from the log.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn counter_level(&self) -> CounterLevel {
        let len = self.char_count();
        let warning_at = (MAX_MESSAGE_CHARS as f32 * COUNTER_WARNING_RATIO) as usize;

        if len >= MAX_MESSAGE_CHARS {
            CounterLevel::Error
        } else if len > warning_at {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        }
    }

    /// Appends to the input buffer, capped at the message limit. Edits are
    /// ignored while a send is in flight.
    pub fn push_input_char(&mut self, c: char) {
        if self.is_waiting_for_response {
            return;
        }
        if self.char_count() < MAX_MESSAGE_CHARS {
            self.input.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        if !self.is_waiting_for_response {
            self.input.pop();
        }
    }

    /// Validates and enters the Sending state. Returns the trimmed text to
    /// dispatch, or None when the input is blank or a send is already in
    /// flight (both are no-ops).
    pub fn begin_send(&mut self) -> Option<String> {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_waiting_for_response {
            return None;
        }

        self.is_waiting_for_response = true;
        self.push_message(ChatMessage::new(text.clone(), Author::User));
        self.input.clear();
        self.status_indicator.set_thinking(true);
        self.status_indicator.set_status("Thinking...");

        Some(text)
    }

    /// Routes a preset query through the same send path. Ignored while a
    /// send is in flight.
    pub fn begin_quick_query(&mut self, index: usize) -> Option<String> {
        if self.is_waiting_for_response {
            return None;
        }

        let (_, query) = QUICK_QUERIES.get(index)?;
        self.input = query.to_string();
        self.begin_send()
    }

    /// Leaves the Sending state. Both arms release the lock and return
    /// focus to the input; a failure becomes the fixed fallback reply.
    pub fn complete_send(&mut self, result: ConfabResult<String>) {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                self.logs.add(format!("Send failed: {}", e));
                FALLBACK_REPLY.to_string()
            }
        };

        self.push_message(ChatMessage::new(reply, Author::Bot));
        self.is_waiting_for_response = false;
        self.input_focused = true;
        self.status_indicator.set_thinking(false);
        self.status_indicator.clear_status();
    }

    /// Drops every message except the pinned quick-query card.
    pub fn clear_messages(&mut self) {
        self.messages.retain(|m| m.has_quick_actions());
        self.chat_scroll = 0;
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn scroll_up(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.chat_scroll = 0;
    }

    pub fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some(Toast {
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    /// Per-tick upkeep: spinner frame and toast expiry.
    pub fn tick(&mut self) {
        if self.is_waiting_for_response {
            self.status_indicator.update_spinner();
        }

        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= Duration::from_millis(TOAST_DURATION_MS) {
                self.toast = None;
            }
        }
    }

    /// The most recent message body, used by the clipboard shortcut.
    pub fn last_message_content(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content())
    }
}

fn welcome_message() -> ChatMessage {
    let mut text = String::from("Hello! Ask me anything, or fire a preset query:\n");
    for (key, query) in QUICK_QUERIES {
        text.push_str(&format!("  {} · {}\n", key, query));
    }
    ChatMessage::new(text, Author::Bot).with_quick_actions()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConfabError;

    #[test]
    fn test_send_empty_input_is_noop() {
        let mut app = App::new();
        let before = app.message_count();

        assert!(app.begin_send().is_none());
        assert_eq!(app.message_count(), before);
        assert!(!app.is_waiting_for_response);
    }

    #[test]
    fn test_send_whitespace_input_is_noop() {
        let mut app = App::new();
        app.input = "   \n\t  ".to_string();
        let before = app.message_count();

        assert!(app.begin_send().is_none());
        assert_eq!(app.message_count(), before);
    }

    #[test]
    fn test_send_while_in_flight_is_noop() {
        let mut app = App::new();
        app.input = "first".to_string();
        assert!(app.begin_send().is_some());

        app.input = "second".to_string();
        let before = app.message_count();
        assert!(app.begin_send().is_none());
        assert_eq!(app.message_count(), before);
        // The second message is still sitting in the input buffer
        assert_eq!(app.input, "second");
    }

    #[test]
    fn test_send_locks_and_appends_user_message() {
        let mut app = App::new();
        app.input = "  hello there  ".to_string();

        let dispatched = app.begin_send().unwrap();

        assert_eq!(dispatched, "hello there");
        assert!(app.is_waiting_for_response);
        assert!(app.input.is_empty());
        assert_eq!(app.messages.last().unwrap().author(), Author::User);
        assert_eq!(app.messages.last().unwrap().content(), "hello there");
    }

    #[test]
    fn test_success_appends_user_then_bot() {
        let mut app = App::new();
        let base = app.message_count();
        app.input = "Hi".to_string();

        app.begin_send().unwrap();
        app.complete_send(Ok("Hello".to_string()));

        assert_eq!(app.message_count(), base + 2);
        let user = &app.messages[base];
        let bot = &app.messages[base + 1];
        assert_eq!(user.author(), Author::User);
        assert_eq!(bot.author(), Author::Bot);
        assert_eq!(bot.content(), "Hello");
    }

    #[test]
    fn test_lock_released_after_success() {
        let mut app = App::new();
        app.input = "Hi".to_string();
        app.input_focused = false;

        app.begin_send().unwrap();
        app.complete_send(Ok("Hello".to_string()));

        assert!(!app.is_waiting_for_response);
        assert!(app.input_focused);
    }

    #[test]
    fn test_failure_appends_fallback_and_releases_lock() {
        let mut app = App::new();
        app.input = "Hi".to_string();

        app.begin_send().unwrap();
        app.complete_send(Err(ConfabError::api_error("boom")));

        assert_eq!(app.messages.last().unwrap().content(), FALLBACK_REPLY);
        assert_eq!(app.messages.last().unwrap().author(), Author::Bot);
        assert!(!app.is_waiting_for_response);
        assert!(app.input_focused);
    }

    #[test]
    fn test_clear_retains_only_quick_action_messages() {
        let mut app = App::new();
        app.input = "one".to_string();
        app.begin_send().unwrap();
        app.complete_send(Ok("reply".to_string()));

        app.clear_messages();

        assert_eq!(app.message_count(), 1);
        assert!(app.messages[0].has_quick_actions());
    }

    #[test]
    fn test_quick_query_dispatches_preset_text() {
        let mut app = App::new();

        let dispatched = app.begin_quick_query(0).unwrap();

        assert_eq!(dispatched, QUICK_QUERIES[0].1);
        assert!(app.is_waiting_for_response);
    }

    #[test]
    fn test_quick_query_ignored_while_in_flight() {
        let mut app = App::new();
        app.input = "typed".to_string();
        app.begin_send().unwrap();

        assert!(app.begin_quick_query(0).is_none());
    }

    #[test]
    fn test_quick_query_out_of_range() {
        let mut app = App::new();
        assert!(app.begin_quick_query(QUICK_QUERIES.len()).is_none());
    }

    #[test]
    fn test_counter_levels() {
        let mut app = App::new();

        app.input = "a".repeat(400);
        assert_eq!(app.counter_level(), CounterLevel::Normal);

        app.input = "a".repeat(401);
        assert_eq!(app.counter_level(), CounterLevel::Warning);

        app.input = "a".repeat(500);
        assert_eq!(app.counter_level(), CounterLevel::Error);
    }

    #[test]
    fn test_input_capped_at_limit() {
        let mut app = App::new();
        app.input = "a".repeat(MAX_MESSAGE_CHARS);

        app.push_input_char('x');

        assert_eq!(app.char_count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_input_edits_ignored_while_in_flight() {
        let mut app = App::new();
        app.input = "Hi".to_string();
        app.begin_send().unwrap();

        app.push_input_char('x');
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_message_count_is_derived() {
        let mut app = App::new();
        let base = app.message_count();

        app.push_message(ChatMessage::new("one", Author::User));
        app.push_message(ChatMessage::new("two", Author::Bot));
        assert_eq!(app.message_count(), base + 2);

        app.clear_messages();
        assert_eq!(app.message_count(), 1);
    }
}
