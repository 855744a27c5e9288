use anyhow::{Context, Result};
use confab::app::{App, AppScreen};
use confab::key_handlers::{
    handle_chat_input, handle_confirm_clear_input, handle_confirm_quit_input, InputAction,
};
use confab::{api::ApiClient, config, health, send, ui};
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    config::initialize_config()?;
    let cfg = config::get_config();

    // The terminal belongs to the TUI, so logs go to a file
    let _logger = init_logging(&cfg.log_level)?;
    log::info!("starting confab against {}", cfg.base_url);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new()));
    let api = ApiClient::new(cfg.base_url.clone());

    let health_handle = health::watch(app.clone(), api.clone(), cfg.health_check_interval_secs);

    let res = run_app(&mut terminal, app, api).await;

    health_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn init_logging(log_level: &str) -> Result<LoggerHandle> {
    let log_dir = dirs::home_dir()
        .context("Could not determine home directory")?
        .join(".config")
        .join("confab")
        .join("logs");

    let handle = Logger::try_with_str(log_level)?
        .log_to_file(FileSpec::default().directory(log_dir).basename("confab"))
        .start()?;

    Ok(handle)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
    api: ApiClient,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Input reader + tick source feeding the main loop
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let guard = app.lock().await;
            terminal.draw(|f| ui::draw(f, &guard))?;
        }

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            Event::Tick => {
                app.lock().await.tick();
            }
            Event::Input(CEvent::Key(key)) => {
                let action = {
                    let mut guard = app.lock().await;
                    match guard.screen {
                        AppScreen::Chat => handle_chat_input(key, &mut guard),
                        AppScreen::ConfirmClear => {
                            handle_confirm_clear_input(key, &mut guard);
                            None
                        }
                        AppScreen::ConfirmQuit => handle_confirm_quit_input(key, &mut guard),
                        AppScreen::Quit => Some(InputAction::Quit),
                    }
                };

                match action {
                    Some(InputAction::Dispatch(text)) => {
                        tokio::spawn(send::deliver(app.clone(), api.clone(), text));
                    }
                    Some(InputAction::Quit) => break,
                    None => {}
                }
            }
            Event::Input(_) => {}
        }
    }

    Ok(())
}
