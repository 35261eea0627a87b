use bloom_tui::{App, AppConfig, ui};
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::Stdout;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // 2. Configuration
    let config = AppConfig::from_env();
    tracing::info!(store_url = %config.store.base_url, "starting bloom-tui");

    let client = config.store.build_client()?;
    let (mut app, events_rx) = App::new(client);

    // 3. Terminal session; raw mode is restored on every exit path
    let mut terminal = setup_terminal()?;
    app.hydrate();
    let result = run(&mut terminal, app, events_rx).await;
    restore_terminal(&mut terminal)?;

    result
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run(
    terminal: &mut Tui,
    mut app: App,
    mut events_rx: UnboundedReceiver<bloom_tui::AppEvent>,
) -> anyhow::Result<()> {
    let mut input = EventStream::new();

    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = input.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {} // resize etc. picked up by the next draw
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(app_event) = events_rx.recv() => {
                app.on_event(app_event);
            }
        }
    }

    Ok(())
}
