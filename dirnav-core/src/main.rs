//! src/main.rs
//! Terminal directory browser

use std::{
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
};

use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{
        self as crossterm_terminal, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tokio::{signal, sync::Notify};
use tracing::{debug, error, info, warn};

use dirnav_core::{
    AppError, Logger,
    config::Config,
    controller::{
        action_dispatcher::{ActionDispatcher, DispatcherStats},
        actions::Action,
    },
    fs::dir_scanner::OsLister,
    model::app_state::AppState,
    view::{theme, ui::UIRenderer},
};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    setup_panic_handler();

    let loaded = Config::load().await;
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logging is best effort; without it the browser still runs.
    let log_dir = Config::log_dir().ok();
    let _log_guard = Logger::init_or_warn(log_dir.as_deref(), &config.log_level);
    info!("Starting dirnav");

    match &loaded {
        Ok(_) => info!("Configuration loaded: {:?}", config),
        Err(e) => warn!("Failed to load config, using defaults: {:#}", e),
    }

    let app = App::new(config).context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    state: AppState<OsLister>,
    action_dispatcher: ActionDispatcher,
    ui_renderer: UIRenderer,
    shutdown: Arc<Notify>,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        if !theme::colors_supported() {
            let reason = "Colors aren't supported in your terminal";
            return Err(AppError::Terminal(reason.into()).into());
        }

        // One row for the status bar, the rest is the list including its header.
        let (_, rows) = crossterm_terminal::size().context("Failed to read terminal size")?;
        let viewport_height = usize::from(rows.saturating_sub(1));

        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        // The first listing happens before the terminal is touched so a
        // failure leaves the shell as it was.
        let state = AppState::new(
            OsLister::new(),
            cwd.clone(),
            viewport_height,
            config.show_hidden,
        )
        .with_context(|| format!("Failed to list {}", cwd.display()))?;

        let ui_renderer = UIRenderer::from_config(&config);
        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        info!(
            "Application initialized: {} ({} rows)",
            cwd.display(),
            viewport_height
        );

        Ok(Self {
            terminal,
            state,
            action_dispatcher: ActionDispatcher::new(),
            ui_renderer,
            shutdown: Arc::new(Notify::new()),
        })
    }

    async fn run(mut self) -> Result<()> {
        self.setup_shutdown_handler();
        info!("Starting event loop");

        let mut event_stream: EventStream = EventStream::new();
        let shutdown: Arc<Notify> = self.shutdown.clone();
        self.render()?;

        loop {
            tokio::select! {
                _ = shutdown.notified() => {
                    info!("Shutdown signal received");
                    break;
                }

                maybe_event = event_stream.next() => {
                    let terminal_event = match maybe_event {
                        Some(Ok(event)) => event,
                        Some(Err(e)) => {
                            warn!("Terminal event error: {}", e);
                            continue;
                        }
                        None => {
                            info!("Terminal event stream closed");
                            break;
                        }
                    };

                    let Some(action) = Action::from_terminal_event(&terminal_event) else {
                        continue;
                    };

                    debug!("Dispatching action: {:?}", action);
                    if !self.action_dispatcher.handle(&mut self.state, action) {
                        info!("Quit requested");
                        break;
                    }

                    self.render()?;
                }
            }
        }

        self.log_final_metrics();
        info!("Event loop terminated cleanly");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let Self {
            terminal,
            state,
            ui_renderer,
            ..
        } = self;

        terminal
            .draw(|frame: &mut Frame<'_>| ui_renderer.render(frame, state))
            .context("Failed to draw terminal")?;

        Ok(())
    }

    fn log_final_metrics(&self) {
        let stats: DispatcherStats = self.action_dispatcher.get_stats();

        info!("Final metrics:");
        info!("  Actions processed: {}", stats.total_actions);
        info!("  Actions failed: {}", stats.failed_actions);
        info!("  Frames drawn: {}", self.ui_renderer.frames());
    }

    fn setup_shutdown_handler(&self) {
        let shutdown: Arc<Notify> = self.shutdown.clone();

        tokio::spawn(async move {
            #[cfg(unix)]
            {
                use tokio::signal::unix::{SignalKind, signal};

                let (mut sigterm, mut sigint) =
                    match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
                        (Ok(term), Ok(int)) => (term, int),
                        (Err(e), _) | (_, Err(e)) => {
                            warn!("Failed to install signal handlers: {}", e);
                            return;
                        }
                    };

                tokio::select! {
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                    _ = sigint.recv() => info!("Received SIGINT"),
                    _ = signal::ctrl_c() => info!("Received Ctrl+C"),
                }
            }

            #[cfg(not(unix))]
            {
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    return;
                }
                info!("Received Ctrl+C");
            }

            // notify_one stores a permit, so a signal that lands between
            // loop iterations is not lost
            shutdown.notify_one();
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            warn!("Failed to cleanup terminal: {}", e);
        }
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}
