use crate::app::{App, AppScreen};
use crate::clipboard::copy_to_clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;

/// Follow-up work the event loop must perform after a key has been applied.
/// Network dispatch happens there, not here, so these handlers stay
/// synchronous and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(String),
    Quit,
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) -> Option<InputAction> {
    match key.code {
        KeyCode::Esc => {
            app.screen = AppScreen::ConfirmQuit;
            app.input_focused = false;
        }
        KeyCode::Enter => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.push_input_char('\n');
            } else if let Some(text) = app.begin_send() {
                return Some(InputAction::Dispatch(text));
            }
        }
        KeyCode::F(n) if n >= 2 => {
            if let Some(text) = app.begin_quick_query((n - 2) as usize) {
                return Some(InputAction::Dispatch(text));
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => {
                        app.screen = AppScreen::ConfirmQuit;
                        app.input_focused = false;
                    }
                    'l' => {
                        app.screen = AppScreen::ConfirmClear;
                        app.input_focused = false;
                    }
                    'y' => copy_last_message(app),
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.push_input_char(c);
            }
        }
        _ => {}
    }
    None
}

pub fn handle_confirm_clear_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.clear_messages();
            app.logs.add("Chat cleared".to_string());
            app.screen = AppScreen::Chat;
            app.input_focused = true;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
            app.input_focused = true;
        }
        _ => {}
    }
}

pub fn handle_confirm_quit_input(key: KeyEvent, app: &mut App) -> Option<InputAction> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.screen = AppScreen::Quit;
            return Some(InputAction::Quit);
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.screen = AppScreen::Chat;
            app.input_focused = true;
        }
        _ => {}
    }
    None
}

fn copy_last_message(app: &mut App) {
    let Some(content) = app.last_message_content().map(str::to_string) else {
        return;
    };

    match copy_to_clipboard(&content) {
        Ok(()) => app.show_toast("Copied to clipboard"),
        Err(e) => {
            warn!("{}", e);
            app.logs.add(format!("{}", e));
            app.show_toast("Copy failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::QUICK_QUERIES;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_enter_dispatches_trimmed_input() {
        let mut app = App::new();
        app.input = " hello ".to_string();

        let action = handle_chat_input(key(KeyCode::Enter), &mut app);

        assert_eq!(action, Some(InputAction::Dispatch("hello".to_string())));
    }

    #[test]
    fn test_enter_on_empty_input_is_noop() {
        let mut app = App::new();

        let action = handle_chat_input(key(KeyCode::Enter), &mut app);

        assert_eq!(action, None);
        assert!(!app.is_waiting_for_response);
    }

    #[test]
    fn test_shift_enter_inserts_newline() {
        let mut app = App::new();
        app.input = "line one".to_string();

        let action = handle_chat_input(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT),
            &mut app,
        );

        assert_eq!(action, None);
        assert_eq!(app.input, "line one\n");
    }

    #[test]
    fn test_typed_chars_accumulate() {
        let mut app = App::new();

        handle_chat_input(key(KeyCode::Char('h')), &mut app);
        handle_chat_input(key(KeyCode::Char('i')), &mut app);
        handle_chat_input(key(KeyCode::Backspace), &mut app);

        assert_eq!(app.input, "h");
    }

    #[test]
    fn test_quick_query_key_dispatches_preset() {
        let mut app = App::new();

        let action = handle_chat_input(key(KeyCode::F(2)), &mut app);

        assert_eq!(
            action,
            Some(InputAction::Dispatch(QUICK_QUERIES[0].1.to_string()))
        );
    }

    #[test]
    fn test_quick_query_key_ignored_while_in_flight() {
        let mut app = App::new();
        app.input = "typed".to_string();
        handle_chat_input(key(KeyCode::Enter), &mut app);

        let action = handle_chat_input(key(KeyCode::F(2)), &mut app);

        assert_eq!(action, None);
    }

    #[test]
    fn test_ctrl_l_opens_clear_confirm() {
        let mut app = App::new();

        handle_chat_input(ctrl('l'), &mut app);

        assert_eq!(app.screen, AppScreen::ConfirmClear);
    }

    #[test]
    fn test_clear_confirm_yes_clears_and_returns() {
        let mut app = App::new();
        app.input = "one".to_string();
        handle_chat_input(key(KeyCode::Enter), &mut app);
        app.complete_send(Ok("reply".to_string()));
        app.screen = AppScreen::ConfirmClear;

        handle_confirm_clear_input(key(KeyCode::Char('y')), &mut app);

        assert_eq!(app.screen, AppScreen::Chat);
        assert_eq!(app.message_count(), 1);
        assert!(app.input_focused);
    }

    #[test]
    fn test_clear_confirm_no_keeps_messages() {
        let mut app = App::new();
        app.input = "one".to_string();
        handle_chat_input(key(KeyCode::Enter), &mut app);
        app.complete_send(Ok("reply".to_string()));
        let count = app.message_count();
        app.screen = AppScreen::ConfirmClear;

        handle_confirm_clear_input(key(KeyCode::Char('n')), &mut app);

        assert_eq!(app.screen, AppScreen::Chat);
        assert_eq!(app.message_count(), count);
    }

    #[test]
    fn test_quit_confirm_yes_quits() {
        let mut app = App::new();
        app.screen = AppScreen::ConfirmQuit;

        let action = handle_confirm_quit_input(key(KeyCode::Char('y')), &mut app);

        assert_eq!(action, Some(InputAction::Quit));
        assert_eq!(app.screen, AppScreen::Quit);
    }

    #[test]
    fn test_quit_confirm_no_returns_to_chat() {
        let mut app = App::new();
        app.screen = AppScreen::ConfirmQuit;

        let action = handle_confirm_quit_input(key(KeyCode::Esc), &mut app);

        assert_eq!(action, None);
        assert_eq!(app.screen, AppScreen::Chat);
    }
}
