//! Terminal demo for the async button.
//!
//! Shows one button; clicking it (mouse, Enter or Space) runs a fake action
//! that settles after a delay, and the button reflects pending / fulfilled /
//! rejected as it goes.

use std::io::{self, stderr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, widgets::Paragraph, Terminal};
use tokio::sync::mpsc;

use async_button::app::{
    demo::{demo_handler, Outcome},
    event::{spawn_failure_forwarder, spawn_phase_forwarder, spawn_terminal_reader},
    handler,
    state::AppState,
};
use async_button::config::AppConfig;
use async_button::ui::{button_widget::AsyncButtonWidget, layout::AppLayout, theme::Theme};
use async_button::AsyncButton;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Async-feedback button demo")]
struct Cli {
    /// How long the demo action takes, in milliseconds (overrides config).
    #[arg(long)]
    delay_ms: Option<u64>,

    /// What the demo action does on each click.
    #[arg(long, value_enum, default_value_t = Outcome::Alternate)]
    outcome: Outcome,

    /// Start with the button disabled.
    #[arg(long)]
    disabled: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective configuration (file + flags) back to disk and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

/// Button width: widest label plus spinner, padding and borders.
fn button_width(config: &AppConfig) -> u16 {
    let widest = [
        Some(&config.text),
        config.pending_text.as_ref(),
        config.fulfilled_text.as_ref(),
        config.rejected_text.as_ref(),
        config.title.as_ref(),
    ]
    .into_iter()
    .flatten()
    .map(|s| s.chars().count())
    .max()
    .unwrap_or(0);
    u16::try_from(widest + 8).unwrap_or(u16::MAX).max(12)
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only prints when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    // ── build the button ──────────────────────────────────────
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(delay) = cli.delay_ms {
        config.delay_ms = delay;
    }
    config.disabled |= cli.disabled;

    if cli.write_config {
        let path = config.persist(cli.config.as_deref())?;
        println!("wrote {}", path.display());
        return Ok(());
    }
    tracing::debug!(?config, outcome = ?cli.outcome, "starting demo");

    let (failure_tx, failure_rx) = mpsc::unbounded_channel();
    let button = AsyncButton::create(
        config.button_props(),
        Some(demo_handler(cli.outcome, Duration::from_millis(config.delay_ms))),
    )
    .report_failures_to(failure_tx);

    // ── async channels ────────────────────────────────────────
    let (event_tx, mut events) = mpsc::unbounded_channel();
    spawn_phase_forwarder(event_tx.clone(), button.subscribe());
    spawn_failure_forwarder(event_tx.clone(), failure_rx);
    spawn_terminal_reader(event_tx, Duration::from_millis(100));

    let width = button_width(&config);
    let mut state = AppState::new(button);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area(), width);
            state.button_area = layout.button_area;

            let rendered = state.button.render();
            frame.render_widget(
                AsyncButtonWidget::new(&rendered).tick(state.tick),
                layout.button_area,
            );

            let status = Paragraph::new(state.status_line()).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        let Some(event) = events.recv().await else {
            break;
        };
        handler::handle_event(&mut state, event);
        // Batch everything already queued before redrawing.
        while let Ok(event) = events.try_recv() {
            handler::handle_event(&mut state, event);
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    state.button.on_destroy();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
